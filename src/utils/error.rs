use crate::domain::model::ComponentKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Malformed entry on line {line_number}: '{line}'")]
    MalformedEntry { line_number: usize, line: String },

    #[error("Invalid {kind} name: '{name}'")]
    InvalidName { kind: ComponentKind, name: String },

    #[error("Invalid quantity '{value}': {reason}")]
    InvalidQuantity { value: String, reason: String },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Input,
    System,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StoreError {
    pub fn invalid_quantity(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::MalformedEntry { .. } => ErrorCategory::Data,
            StoreError::InvalidName { .. } | StoreError::InvalidQuantity { .. } => {
                ErrorCategory::Input
            }
            StoreError::InvalidPath { .. } | StoreError::ConfigError { .. } => {
                ErrorCategory::Configuration
            }
            StoreError::IoError(_) | StoreError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Input errors are recoverable at the prompt; a corrupt ledger is not.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StoreError::MalformedEntry { line_number, .. } => format!(
                "Fix line {} of the inventory file so it reads '<name>:<quantity>'",
                line_number
            ),
            StoreError::InvalidName { kind, .. } => {
                format!("Use a valid {} name, e.g. {}", kind, kind.examples())
            }
            StoreError::InvalidQuantity { .. } => {
                "Enter a whole number greater than zero".to_string()
            }
            StoreError::InvalidPath { .. } => {
                "Point --inventory at a file ending in .txt".to_string()
            }
            StoreError::IoError(_) => {
                "Check that the inventory file is readable and its directory is writable"
                    .to_string()
            }
            StoreError::SerializationError(_) => "Retry without --json".to_string(),
            StoreError::ConfigError { .. } => {
                "Check the configuration file for TOML syntax errors".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::MalformedEntry { line_number, line } => format!(
                "The inventory file is damaged: line {} ('{}') has no valid quantity",
                line_number, line
            ),
            StoreError::InvalidName { kind, name } => {
                format!("'{}' is not a recognised {} name", name, kind)
            }
            StoreError::InvalidQuantity { value, reason } => {
                format!("'{}' is not a usable amount: {}", value, reason)
            }
            StoreError::IoError(e) => format!("Could not access the inventory file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
