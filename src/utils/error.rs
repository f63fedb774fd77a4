use thiserror::Error;

#[derive(Error, Debug)]
pub enum FelineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown breed: {id}")]
    UnknownBreed { id: String },

    #[error("Invalid command: {input}")]
    InvalidCommand { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FelineError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfiguration { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::UnknownBreed { .. } | Self::InvalidCommand { .. } => ErrorCategory::Input,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownBreed { .. } | Self::InvalidCommand { .. } => ErrorSeverity::Low,
            Self::SerializationError(_) => ErrorSeverity::Medium,
            Self::InvalidConfigValueError { .. } | Self::TomlError(_) => ErrorSeverity::High,
            Self::InvalidConfiguration { .. } | Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Whether the session can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidConfiguration { .. } => {
                "Check the catalog: it needs at least one fact and unique breed ids".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            Self::TomlError(_) => "Make sure the catalog file is valid TOML".to_string(),
            Self::UnknownBreed { .. } => {
                "Type 'breeds' to list the known breeds, then like one by name or number"
                    .to_string()
            }
            Self::InvalidCommand { .. } => "Type 'help' to see the available commands".to_string(),
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::SerializationError(_) => "This is a bug; please report it".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidConfiguration { message } => {
                format!("The catalog is not usable: {}", message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            Self::TomlError(e) => format!("Could not read the catalog file: {}", e.message()),
            Self::UnknownBreed { id } => format!("There is no breed called '{}'", id),
            Self::InvalidCommand { input } => format!("Unrecognised command '{}'", input),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Could not render the page state: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, FelineError>;
