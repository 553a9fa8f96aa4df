//! Packaging configuration for the hybrid app wrapper

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identity of the packaged app and where its built web assets live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reverse-domain bundle identifier
    pub app_id: String,

    /// Name shown on the home screen
    pub app_name: String,

    /// Directory with the built web assets
    pub web_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: "teacher.impulse.uz".to_string(),
            app_name: "Teachers App".to_string(),
            web_dir: "dist".to_string(),
        }
    }
}

impl AppConfig {
    /// Environment variable prefix, e.g. `TEACHERS_APP_NAME`
    pub const ENV_PREFIX: &'static str = "TEACHERS";

    /// Load configuration from file, with environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read, parsed or
    /// fails validation
    pub fn from_file<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let settings = Self::with_defaults()?
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix(Self::ENV_PREFIX))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables cannot be parsed or the
    /// result fails validation
    pub fn from_env() -> CoreResult<Self> {
        let settings = Self::with_defaults()?
            .add_source(config::Environment::with_prefix(Self::ENV_PREFIX))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn with_defaults() -> CoreResult<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Self::default();
        Ok(config::Config::builder()
            .set_default("app_id", defaults.app_id)?
            .set_default("app_name", defaults.app_name)?
            .set_default("web_dir", defaults.web_dir)?)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field
    pub fn validate(&self) -> CoreResult<()> {
        if !is_bundle_id(&self.app_id) {
            return Err(CoreError::invalid_config(format!(
                "app_id '{}' must be a reverse-domain identifier",
                self.app_id
            )));
        }
        if self.app_name.trim().is_empty() {
            return Err(CoreError::invalid_config("app_name must not be empty"));
        }
        if self.web_dir.trim().is_empty() {
            return Err(CoreError::invalid_config("web_dir must not be empty"));
        }
        Ok(())
    }
}

/// At least two dot-separated segments of `[A-Za-z0-9_]`, none starting with a digit
fn is_bundle_id(id: &str) -> bool {
    let segments: Vec<&str> = id.split('.').collect();
    segments.len() >= 2
        && segments.iter().all(|segment| {
            segment
                .chars()
                .next()
                .is_some_and(|first| !first.is_ascii_digit())
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.app_id, "teacher.impulse.uz");
        config.validate().unwrap();
    }

    #[test]
    fn test_bundled_app_toml_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../app.toml");
        assert_eq!(AppConfig::from_file(path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_bundle_id_rules() {
        assert!(is_bundle_id("teacher.impulse.uz"));
        assert!(is_bundle_id("com.example_app"));
        assert!(!is_bundle_id("teacher"));
        assert!(!is_bundle_id("teacher..uz"));
        assert!(!is_bundle_id("1teacher.uz"));
        assert!(!is_bundle_id("teacher.impulse-app.uz"));
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "app_name = \"Teachers Beta\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.app_name, "Teachers Beta");
        assert_eq!(config.app_id, "teacher.impulse.uz");
        assert_eq!(config.web_dir, "dist");
    }

    #[test]
    fn test_from_file_rejects_invalid_id() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "app_id = \"not-a-bundle\"").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_file_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_file(dir.path().join("absent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let config = AppConfig {
            web_dir: "  ".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
