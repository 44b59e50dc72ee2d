//! Transcript files.
//!
//! A transcript lists achievements under `achievements`:
//!
//! ```toml
//! [[achievements]]
//! id = "EAD"
//! area = "ALG"
//! credits = 8
//! score = 1.3
//! theoretical = true
//! ```

use std::path::Path;

use gradeforge::{validate_pool, Achievement};
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Transcript {
    /// Loads and validates a transcript, picking the format by extension.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            _ => Err(CliError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CliError> {
        let transcript: Self = toml::from_str(s)?;
        transcript.validate()?;
        Ok(transcript)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, CliError> {
        let transcript: Self = serde_yaml::from_str(s)?;
        transcript.validate()?;
        Ok(transcript)
    }

    fn validate(&self) -> Result<(), CliError> {
        validate_pool(&self.achievements)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeforge::Area;
    use std::io::Write;

    #[test]
    fn test_toml_transcript() {
        let transcript = Transcript::from_toml_str(
            r#"
            [[achievements]]
            id = "EAD"
            area = "ALG"
            credits = 8
            score = 1.3
            theoretical = true

            [[achievements]]
            id = "Seminar"
            area = "SUP"
            credits = 3
            "#,
        )
        .unwrap();

        assert_eq!(transcript.achievements.len(), 2);
        assert_eq!(transcript.achievements[0].area, Area::Alg);
        assert!(transcript.achievements[0].theoretical);
        assert!(!transcript.achievements[1].is_graded());
    }

    #[test]
    fn test_yaml_transcript() {
        let transcript = Transcript::from_yaml_str(
            r#"
achievements:
  - id: DDML3
    area: GUIDED_RESEARCH
    credits: 10
    score: 1.1
"#,
        )
        .unwrap();

        assert_eq!(transcript.achievements[0].area, Area::GuidedResearch);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Transcript::from_toml_str(
            r#"
            [[achievements]]
            id = "A"
            area = "ALG"
            credits = 8

            [[achievements]]
            id = "A"
            area = "MLA"
            credits = 6
            "#,
        );

        assert!(matches!(result, Err(CliError::Transcript(_))));
    }

    #[test]
    fn test_unknown_area_is_rejected() {
        let result = Transcript::from_toml_str(
            r#"
            [[achievements]]
            id = "A"
            area = "ASTROLOGY"
            credits = 8
            "#,
        );

        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "achievements: []").unwrap();

        let transcript = Transcript::load(file.path()).unwrap();
        assert!(transcript.achievements.is_empty());

        let other = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        assert!(matches!(
            Transcript::load(other.path()),
            Err(CliError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Transcript::load(Path::new("/nonexistent/transcript.toml"));

        assert!(matches!(result, Err(CliError::Io { .. })));
    }
}
