//! Configuration layer for deceptiscan.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File discovery and parsing
//! - `template`: Commented YAML template for `init`
//!
//! CLI flags override whatever is loaded here; see `handlers::analyze`.

mod error;
mod loading;
mod template;
mod types;

pub use error::ConfigError;
pub use loading::PROJECT_CONFIG_FILES;
pub use types::{AnalysisConfig, Config, OutputConfig, SourceConfig};
