//! Error types for form wiring and configuration.
//!
//! User input that fails validation is not an error here: it ends up as a
//! message in a [`crate::SubmitReport`]. These variants cover faults in the
//! page markup or in the configuration handed to the controllers.

use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    UnexpectedElement { id: String, expected: &'static str },

    #[error("{0} is not loaded on this page")]
    MissingCollaborator(&'static str),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("date out of range: {date} + {days} days")]
    DateOutOfRange { date: NaiveDate, days: u32 },
}
