use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PRODUCT_URL: &str = "https://www.example.com/product/123";

fn cmd() -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("deceptiscan");
    c.env("NO_COLOR", "1");
    c
}

/// Create a command with the `analyze` subcommand pre-added, running in `dir`
/// so no project config leaks in.
fn analyze_cmd(dir: &Path) -> assert_cmd::Command {
    let mut c = cmd();
    c.current_dir(dir).arg("analyze");
    c
}

fn write_reviews(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("reviews.json");
    fs::write(&path, content).unwrap();
    path
}

mod analyze {
    use super::*;

    #[test]
    fn test_terminal_report() {
        let dir = TempDir::new().unwrap();

        analyze_cmd(dir.path())
            .arg(PRODUCT_URL)
            .assert()
            .success()
            .stdout(predicate::str::contains("Smart Home Assistant Pro"))
            .stdout(predicate::str::contains(
                "High number of fake reviews detected!",
            ))
            .stdout(predicate::str::contains(
                "Rating inflated by 0.1 stars due to fake reviews",
            ))
            .stdout(predicate::str::contains("KEY INSIGHTS"));
    }

    #[test]
    fn test_json_report() {
        let dir = TempDir::new().unwrap();

        let output = analyze_cmd(dir.path())
            .args([PRODUCT_URL, "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["summary"]["original_rating"], 3.9);
        assert_eq!(parsed["summary"]["real_rating"], 3.8);
        assert_eq!(parsed["summary"]["fake_review_count"], 4);
        assert_eq!(parsed["fake_percentage"], 50.0);
        assert_eq!(parsed["trust_level"], "suspicious");
    }

    #[test]
    fn test_markdown_report_to_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.md");

        analyze_cmd(dir.path())
            .args([PRODUCT_URL, "--format", "markdown", "--output"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("Output written to"));

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("# Smart Home Assistant Pro"));
    }

    #[test]
    fn test_html_report_with_theme_flag() {
        let dir = TempDir::new().unwrap();

        analyze_cmd(dir.path())
            .args([PRODUCT_URL, "--format", "html", "--theme", "dark"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("<body class=\"dark\">"));
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let dir = TempDir::new().unwrap();

        analyze_cmd(dir.path())
            .arg("")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Please enter a product URL"));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let dir = TempDir::new().unwrap();

        analyze_cmd(dir.path())
            .arg("not a url")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Please enter a valid URL"));
    }

    #[test]
    fn test_strict_mode_fails_on_alert() {
        let dir = TempDir::new().unwrap();

        analyze_cmd(dir.path())
            .args([PRODUCT_URL, "--strict"])
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn test_strict_mode_passes_with_project_threshold() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".deceptiscan.yaml"),
            "analysis:\n  fake_alert_threshold: 60\n",
        )
        .unwrap();

        analyze_cmd(dir.path())
            .args([PRODUCT_URL, "--strict"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Analysis complete"));
    }

    #[test]
    fn test_review_file() {
        let dir = TempDir::new().unwrap();
        let reviews = write_reviews(
            dir.path(),
            r#"{
                "product_name": "Desk Lamp",
                "reviews": [
                    {"id": "a", "text": "Bright and sturdy.", "rating": 5, "author": "Ann",
                     "date": "2024-02-01", "verified": true, "is_fake": false},
                    {"id": "b", "text": "Best ever!!!", "rating": 5, "author": "Bo",
                     "date": "2024-02-02", "is_fake": true, "fake_score": 0.9},
                    {"id": "c", "text": "Flickers after a week.", "rating": 2, "author": "Cy",
                     "date": "2024-02-03", "verified": true, "is_fake": false}
                ]
            }"#,
        );

        let output = analyze_cmd(dir.path())
            .args([PRODUCT_URL, "--format", "json", "--reviews"])
            .arg(&reviews)
            .output()
            .unwrap();
        assert!(output.status.success());

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["product_name"], "Desk Lamp");
        assert_eq!(parsed["summary"]["total_reviews"], 3);
        assert_eq!(parsed["summary"]["fake_review_count"], 1);
        assert_eq!(parsed["summary"]["original_rating"], 4.0);
        assert_eq!(parsed["summary"]["real_rating"], 3.5);
    }

    #[test]
    fn test_empty_review_file() {
        let dir = TempDir::new().unwrap();
        let reviews = write_reviews(dir.path(), "[]");

        let output = analyze_cmd(dir.path())
            .args([PRODUCT_URL, "--format", "json", "--reviews"])
            .arg(&reviews)
            .output()
            .unwrap();
        assert!(output.status.success());

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["summary"]["total_reviews"], 0);
        assert_eq!(parsed["summary"]["original_rating"], 0.0);
        assert_eq!(parsed["fake_percentage"], 0.0);
    }

    #[test]
    fn test_invalid_review_file() {
        let dir = TempDir::new().unwrap();
        let reviews = write_reviews(
            dir.path(),
            r#"[{"id": "a", "text": "x", "rating": 9, "author": "A",
                 "date": "2024-02-01", "is_fake": false}]"#,
        );

        analyze_cmd(dir.path())
            .arg(PRODUCT_URL)
            .arg("--reviews")
            .arg(&reviews)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("expected 1-5"));
    }

    #[test]
    fn test_review_file_missing_field() {
        let dir = TempDir::new().unwrap();
        let reviews = write_reviews(
            dir.path(),
            r#"{"reviews": [{"id": "a", "text": "x", "rating": 4, "author": "A", "is_fake": false}]}"#,
        );

        analyze_cmd(dir.path())
            .arg(PRODUCT_URL)
            .arg("--reviews")
            .arg(&reviews)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("missing field `date`"));
    }

    #[test]
    fn test_config_reviews_file_relative_to_config() {
        let dir = TempDir::new().unwrap();
        let settings = dir.path().join("settings");
        fs::create_dir_all(&settings).unwrap();
        write_reviews(
            &settings,
            r#"[{"id": "a", "text": "Solid.", "rating": 4, "author": "A",
                 "date": "2024-02-01", "is_fake": false}]"#,
        );
        let config = settings.join("deceptiscan.yaml");
        fs::write(&config, "source:\n  reviews_file: reviews.json\n").unwrap();

        let output = analyze_cmd(dir.path())
            .args([PRODUCT_URL, "--format", "json", "--config"])
            .arg(&config)
            .output()
            .unwrap();
        assert!(output.status.success());

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["summary"]["total_reviews"], 1);
    }

    #[test]
    fn test_markdown_badge() {
        let dir = TempDir::new().unwrap();

        analyze_cmd(dir.path())
            .args([PRODUCT_URL, "--format", "markdown", "--badge"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "![deceptiscan](https://img.shields.io/badge/deceptiscan-suspicious-red)",
            ));
    }

    #[test]
    fn test_fake_filter_on_reviews_tab() {
        let dir = TempDir::new().unwrap();

        analyze_cmd(dir.path())
            .args([PRODUCT_URL, "--tab", "reviews", "--filter", "fake"])
            .assert()
            .success()
            .stdout(predicate::str::contains("REVIEWS: FAKE"));
    }
}

mod inspect {
    use super::*;

    #[test]
    fn test_suspicious_text() {
        cmd()
            .args(["inspect", "Best product ever! Amazing! Perfect!!", "--rating", "5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Verdict: SUSPICIOUS"))
            .stdout(predicate::str::contains("Excessive superlatives"));
    }

    #[test]
    fn test_json_output() {
        let output = cmd()
            .args(["inspect", "Terrible, it broke.", "--rating", "5", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["sentiment"]["rating_mismatch"], true);
    }

    #[test]
    fn test_rating_out_of_range() {
        cmd()
            .args(["inspect", "fine", "--rating", "6"])
            .assert()
            .failure();
    }
}

mod init {
    use super::*;

    #[test]
    fn test_init_creates_template() {
        let dir = TempDir::new().unwrap();

        cmd()
            .arg("init")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Created configuration file template"));

        let content = fs::read_to_string(dir.path().join(".deceptiscan.yaml")).unwrap();
        assert!(content.contains("fake_alert_threshold"));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".deceptiscan.yaml"), "existing").unwrap();

        cmd()
            .arg("init")
            .arg(dir.path())
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("already exists"));
    }
}

mod theme {
    use super::*;

    fn theme_cmd(config_home: &Path) -> assert_cmd::Command {
        let mut c = cmd();
        c.env("XDG_CONFIG_HOME", config_home).arg("theme");
        c
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let dir = TempDir::new().unwrap();

        theme_cmd(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Theme: light"));
    }

    #[test]
    fn test_theme_toggle_persists() {
        let dir = TempDir::new().unwrap();

        theme_cmd(dir.path())
            .arg("toggle")
            .assert()
            .success()
            .stdout(predicate::str::contains("Theme: dark"));

        theme_cmd(dir.path())
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("Theme: dark"));
    }

    #[test]
    fn test_stored_theme_applies_to_html() {
        let dir = TempDir::new().unwrap();

        theme_cmd(dir.path()).args(["set", "dark"]).assert().success();

        cmd()
            .env("XDG_CONFIG_HOME", dir.path())
            .current_dir(dir.path())
            .args(["analyze", PRODUCT_URL, "--format", "html"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<body class=\"dark\">"));
    }
}
