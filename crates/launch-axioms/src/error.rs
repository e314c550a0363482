use thiserror::Error;

use crate::geometry::{Axis, DimensionSubject, SizeQuantity};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Malformed define: {0}")]
    InvalidDefine(String),

    #[error(
        "Ambiguous {subject} dimension: expected exactly one of {}, found {found}",
        .subject.selector_names().join(", ")
    )]
    AmbiguousDimension {
        subject: DimensionSubject,
        found: usize,
    },

    #[error("Conflicting {quantity} specification for axis {axis}")]
    ConflictingSizeSpec { axis: Axis, quantity: SizeQuantity },

    #[error("Axis {axis} derives its group count from the global size, but no global size was given")]
    MissingCompanionGlobalSize { axis: Axis },

    #[error("Invalid value for {flag}: {reason}")]
    InvalidFlagValue { flag: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Violation {
    pub severity: Severity,
    pub rule: String,
    pub message: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
        };
        write!(f, "[{prefix}] {}: {}", self.rule, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display_error() {
        let v = Violation {
            severity: Severity::Error,
            rule: "GEOM-004".to_string(),
            message: "global size not divisible".to_string(),
            location: Some("__GLOBAL_SIZE_0".to_string()),
        };
        let s = v.to_string();
        assert!(s.contains("[ERROR]"));
        assert!(s.contains("GEOM-004"));
        assert!(s.contains("global size not divisible"));
    }

    #[test]
    fn violation_display_warning_and_info() {
        let warn = Violation {
            severity: Severity::Warning,
            rule: "GEOM-001".to_string(),
            message: "unknown flag".to_string(),
            location: None,
        };
        assert!(warn.to_string().starts_with("[WARN]"));

        let info = Violation {
            severity: Severity::Info,
            rule: "GEOM-005".to_string(),
            message: "concrete".to_string(),
            location: None,
        };
        assert!(info.to_string().starts_with("[INFO]"));
    }

    #[test]
    fn ambiguous_dimension_lists_selectors() {
        let err = ConfigError::AmbiguousDimension {
            subject: DimensionSubject::WorkGroup,
            found: 2,
        };
        let s = err.to_string();
        assert!(s.contains("work-group"));
        assert!(s.contains("__1D_WORK_GROUP"));
        assert!(s.contains("found 2"));
    }

    #[test]
    fn conflicting_size_spec_names_axis() {
        let err = ConfigError::ConflictingSizeSpec {
            axis: Axis::Y,
            quantity: SizeQuantity::NumGroups,
        };
        let s = err.to_string();
        assert!(s.contains("axis 1"));
        assert!(s.contains("num-groups"));
    }

    #[test]
    fn missing_companion_names_axis() {
        let err = ConfigError::MissingCompanionGlobalSize { axis: Axis::Z };
        assert!(err.to_string().contains("Axis 2"));
    }

    #[test]
    fn io_error_converts() {
        let err: ConfigError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.to_string().contains("Failed to read"));
    }
}
