use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Cannot write output '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Processing,
    Io,
    Serialization,
    Output,
}

/// Severity drives the process exit code: Low exits 0, High 1, Medium 2,
/// Critical 3. Only the output write path produces Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::CsvError(_) | EtlError::ProcessingError { .. } => ErrorCategory::Processing,
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::SerializationError(_) => ErrorCategory::Serialization,
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Config,
            EtlError::WriteError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Processing | ErrorCategory::Io | ErrorCategory::Serialization => {
                ErrorSeverity::High
            }
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Config => "Check the CLI flags or the TOML configuration file",
            ErrorCategory::Processing => "Check the source CSV files for structural problems",
            ErrorCategory::Io => "Check that the input files are readable",
            ErrorCategory::Serialization => "Report this; the assembled document failed to encode",
            ErrorCategory::Output => {
                "Check that the output directory is writable and has free space"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::WriteError { path, .. } => {
                format!("The roster database could not be written to '{}'", path)
            }
            EtlError::ConfigError { message }
            | EtlError::ProcessingError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_errors_are_critical() {
        let err = EtlError::WriteError {
            path: "backend/database.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Output);
    }

    #[test]
    fn config_errors_are_medium() {
        let err = EtlError::MissingConfigError {
            field: "source.sources".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn severity_ordering_puts_critical_last() {
        assert!(ErrorSeverity::Low < ErrorSeverity::Medium);
        assert!(ErrorSeverity::Medium < ErrorSeverity::High);
        assert!(ErrorSeverity::High < ErrorSeverity::Critical);
    }
}
