//! Configuration loading functions.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Config;

/// Project-level config file names, in lookup order.
pub const PROJECT_CONFIG_FILES: &[&str] = &[
    ".deceptiscan.yaml",
    ".deceptiscan.yml",
    ".deceptiscan.json",
    ".deceptiscan.toml",
];

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let mut config: Config = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                path: path.display().to_string(),
                source: e,
            })?,
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.display().to_string(),
                source: e,
            })?,
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
                path: path.display().to_string(),
                source: e,
            })?,
            _ => {
                return Err(ConfigError::UnsupportedFormat(
                    path.display().to_string(),
                    ext,
                ));
            }
        };

        config.validate()?;
        if let Some(base) = path.parent() {
            config.resolve_relative_paths(base);
        }
        Ok(config)
    }

    /// Anchor relative file paths to `base`, the directory of the config
    /// file they were read from.
    fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(file) = self.source.reviews_file.as_mut() {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }

    /// Load configuration.
    ///
    /// Search order:
    /// 1. `explicit` path (errors are returned)
    /// 2. `.deceptiscan.{yaml,yml,json,toml}` in the project root
    /// 3. `<config_dir>/deceptiscan/config.yaml`
    /// 4. Default configuration
    ///
    /// Discovered files that fail to load are skipped with a warning.
    pub fn load(explicit: Option<&Path>, project_root: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(explicit, project_root, dirs::config_dir())
    }

    pub(crate) fn load_from(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
        config_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "Loading explicit config");
            return Self::from_file(path);
        }

        let project_candidates = project_root
            .into_iter()
            .flat_map(|root| PROJECT_CONFIG_FILES.iter().map(move |name| root.join(name)));
        let global_candidate = config_dir.map(|dir| dir.join("deceptiscan").join("config.yaml"));

        for path in project_candidates.chain(global_candidate) {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config");
                    return Ok(config);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping config file"),
            }
        }

        Ok(Self::default())
    }
}
