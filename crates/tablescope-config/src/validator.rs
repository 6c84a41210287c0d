//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Deepest nesting that real documents tend to use.
const DEPTH_WARNING_THRESHOLD: usize = 16;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// First error as a [`ConfigError`], if any.
    pub fn into_error(self) -> Option<ConfigError> {
        self.errors
            .into_iter()
            .next()
            .map(|e| ConfigError::InvalidValue {
                field: e.path,
                message: e.message,
            })
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_extract(config, &mut result);
        Self::validate_logging(config, &mut result);

        Ok(result)
    }

    fn validate_extract(config: &Config, result: &mut ValidationResult) {
        if config.extract.ancestor_limit == 0 {
            result.add_error(ValidationError::new(
                "extract.ancestor_limit",
                "ancestor_limit must be greater than 0",
            ));
        }

        if config.extract.max_depth > DEPTH_WARNING_THRESHOLD {
            result.add_warning(ValidationWarning::new(
                "extract.max_depth",
                format!(
                    "max_depth is very high (>{}), documents rarely nest this deep",
                    DEPTH_WARNING_THRESHOLD
                ),
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, LOG_LEVELS
                ),
            ));
        }

        if let Some(ref dir) = config.logging.file_dir {
            if dir.exists() && !dir.is_dir() {
                result.add_error(ValidationError::new(
                    "logging.file_dir",
                    format!("Log path is not a directory: {:?}", dir),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
