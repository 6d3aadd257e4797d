use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("Invalid date of birth: {input:?}")]
    DateParseError { input: String },

    #[error("Form validation error: {message}")]
    ValidationError { message: String },

    #[error("Action '{action}' is not allowed in state '{state}'")]
    InvalidTransitionError { state: String, action: String },

    #[error("Notification request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Notification rejected with status {status}: {message}")]
    NotificationError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NumerologyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DateParseError { .. }
            | Self::ValidationError { .. }
            | Self::InvalidTransitionError { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ApiError(_) | Self::NotificationError { .. } => ErrorCategory::Network,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Message shown to the person filling in the form.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DateParseError { .. } => "Invalid DOB. Use DD/MM/YYYY or DDMMYYYY.".to_string(),
            Self::ValidationError { message } => message.clone(),
            Self::InvalidTransitionError { action, .. } => {
                format!("'{}' is not available right now.", action)
            }
            Self::ApiError(_) | Self::NotificationError { .. } => {
                "Your request could not be sent. Please try again later.".to_string()
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => format!("Configuration problem: {}", self),
            Self::IoError(_) | Self::SerializationError(_) => {
                format!("Unexpected system error: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::DateParseError { .. } => {
                "Enter the date as DD/MM/YYYY (e.g. 05/12/1990) or DDMMYYYY (e.g. 05121990)".to_string()
            }
            Self::ValidationError { .. } => "Provide --name, --email, --dob and --sex".to_string(),
            Self::InvalidTransitionError { .. } => {
                "A custom bracelet can only be requested when two or more numbers are missing"
                    .to_string()
            }
            Self::ApiError(_) | Self::NotificationError { .. } => {
                "Check --notify-endpoint or the [notifier] section of the config file".to_string()
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
            Self::IoError(_) | Self::SerializationError(_) => {
                "Check file permissions and available disk space".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
