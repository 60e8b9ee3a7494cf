use std::path::PathBuf;
use thiserror::Error;

/// Every failure a pattern in this crate can report.
///
/// All variants are local and surface immediately to the caller; nothing is
/// retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("unsupported {kind} selector: '{selector}'")]
    UnsupportedSelector { kind: &'static str, selector: String },

    #[error("{shape} requires the '{option}' option")]
    MissingOption {
        shape: &'static str,
        option: &'static str,
    },

    #[error("amount must be positive, got {amount}")]
    InvalidAmount { amount: f64 },

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("speed cannot be negative, got {speed}")]
    NegativeSpeed { speed: i64 },

    #[error("speed {speed} exceeds the maximum of {max}")]
    SpeedTooHigh { speed: i64, max: u32 },

    #[error("pedalling effort must be between 1 and 10, got {effort}")]
    EffortOutOfRange { effort: u8 },

    #[error("invalid email address: '{email}'")]
    InvalidEmail { email: String },

    #[error("failed to load config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl PatternError {
    pub fn unsupported(kind: &'static str, selector: impl Into<String>) -> Self {
        Self::UnsupportedSelector {
            kind,
            selector: selector.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True when a lookup table did not recognise its key.
    pub fn is_unsupported_selector(&self) -> bool {
        matches!(self, Self::UnsupportedSelector { .. })
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
