use std::path::PathBuf;

use gradeforge::{ConfigError, GradeForgeError};
use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported transcript format: {0} (expected .toml, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid TOML transcript")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML transcript")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid transcript")]
    Transcript(#[from] GradeForgeError),

    #[error("invalid curriculum configuration")]
    Config(#[from] ConfigError),

    #[error("cannot write JSON report")]
    Json(#[from] serde_json::Error),
}
