//! Configuration system for GradeForge.
//!
//! Load curriculum requirements from TOML or YAML files to change credit
//! floors without code changes. Every field has a default, so an empty file
//! (or no file at all) yields the standard curriculum.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use gradeforge_config::CurriculumConfig;
//!
//! let config = CurriculumConfig::from_toml_str(r#"
//!     [major]
//!     credits = 24
//!
//!     [minors]
//!     count = 1
//! "#).unwrap();
//!
//! assert_eq!(config.major.credits, 24);
//! assert_eq!(config.minors.count, 1);
//! assert_eq!(config.thesis.credits, 30);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use gradeforge_config::CurriculumConfig;
//!
//! let config = CurriculumConfig::load("curriculum.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use gradeforge_core::GradeScore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main curriculum configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CurriculumConfig {
    /// Average reported for sets without any graded achievement.
    pub ungraded_average: f64,

    /// Pool size above which exhaustive subset search logs a warning.
    pub max_exhaustive_items: usize,

    /// Master's thesis.
    pub thesis: BucketConfig,

    /// Interdisciplinary project and its accompanying lecture.
    pub interdisciplinary_project: ProjectConfig,

    /// Support electives.
    pub support_electives: BucketConfig,

    /// Mandatory practical course.
    pub practical: BucketConfig,

    /// Major subfield.
    pub major: BucketConfig,

    /// Minor subfields.
    pub minors: MinorConfig,

    /// Free-choice electives.
    pub free_choice: BucketConfig,

    /// Theoretical-depth requirement across all buckets.
    pub theory: BucketConfig,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            ungraded_average: GradeScore::UNGRADED.value(),
            max_exhaustive_items: 20,
            thesis: BucketConfig::with_credits(30),
            interdisciplinary_project: ProjectConfig::default(),
            support_electives: BucketConfig::with_credits(6),
            practical: BucketConfig::with_credits(10),
            major: BucketConfig::with_credits(18),
            minors: MinorConfig::default(),
            free_choice: BucketConfig::with_credits(19),
            theory: BucketConfig::with_credits(10),
        }
    }
}

impl CurriculumConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML or YAML file, chosen by extension (`.yaml`/`.yml` is YAML).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Checks values that parse but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ungraded_average.is_finite() || self.ungraded_average < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "ungraded_average must be a non-negative number, got {}",
                self.ungraded_average
            )));
        }
        if self.max_exhaustive_items >= 64 {
            return Err(ConfigError::Invalid(format!(
                "max_exhaustive_items must be below 64, got {}",
                self.max_exhaustive_items
            )));
        }
        Ok(())
    }

    /// Returns the sentinel average as a score.
    pub fn ungraded_score(&self) -> GradeScore {
        GradeScore::of(self.ungraded_average)
    }

    /// Sets the major credit floor.
    pub fn with_major_credits(mut self, credits: u32) -> Self {
        self.major.credits = credits;
        self
    }

    /// Sets the minor credit floor.
    pub fn with_minor_credits(mut self, credits: u32) -> Self {
        self.minors.credits = credits;
        self
    }

    /// Sets the number of minors to allocate.
    pub fn with_minor_count(mut self, count: usize) -> Self {
        self.minors.count = count;
        self
    }

    /// Sets the free-choice credit floor.
    pub fn with_free_choice_credits(mut self, credits: u32) -> Self {
        self.free_choice.credits = credits;
        self
    }

    /// Sets the global theoretical-credit floor.
    pub fn with_theory_credits(mut self, credits: u32) -> Self {
        self.theory.credits = credits;
        self
    }
}

/// Credit floor of a single bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BucketConfig {
    /// Credits required to complete the bucket.
    pub credits: u32,
}

impl BucketConfig {
    /// Creates a bucket configuration with the given floor.
    pub const fn with_credits(credits: u32) -> Self {
        Self { credits }
    }
}

/// Interdisciplinary project configuration.
///
/// The bucket is filled from two areas: the project itself and the lecture
/// that accompanies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ProjectConfig {
    /// Credits required from the project.
    pub project_credits: u32,

    /// Credits required from the accompanying lecture.
    pub lecture_credits: u32,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_credits: 11,
            lecture_credits: 5,
        }
    }
}

impl ProjectConfig {
    /// Credits required for the whole bucket.
    pub fn total_credits(&self) -> u32 {
        self.project_credits + self.lecture_credits
    }
}

/// Minor subfield configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MinorConfig {
    /// Credits required per minor.
    pub credits: u32,

    /// Number of minors, allocated sequentially after the major.
    pub count: usize,
}

impl Default for MinorConfig {
    fn default() -> Self {
        Self {
            credits: 8,
            count: 2,
        }
    }
}
