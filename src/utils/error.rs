use serde_json::error::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl HelloError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HelloError::InvalidConfigValue { .. } => ErrorSeverity::Medium,
            HelloError::Decode(_) => ErrorSeverity::High,
            HelloError::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HelloError::Decode(e) => {
                let kind = match e.classify() {
                    Category::Syntax => "malformed JSON",
                    Category::Eof => "truncated JSON",
                    Category::Data => "JSON of the wrong shape",
                    Category::Io => "unreadable input",
                };
                format!(
                    "Could not decode record ({}) at line {}, column {}",
                    kind,
                    e.line(),
                    e.column()
                )
            }
            HelloError::Io(e) => format!("Could not write greeting: {}", e),
            HelloError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HelloError::Decode(_) => "The record literal must be a JSON object such as {}",
            HelloError::Io(_) => "Check that standard output is writable (closed pipe?)",
            HelloError::InvalidConfigValue { .. } => {
                "Run with --help to see the accepted flag values"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HelloError>;
