use thiserror::Error;
use serde::Serialize;

use crate::core::features::unit_converter::parsing::ParseError;
use crate::core::features::unit_converter::ConversionError;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Input Error: {0}")]
    Input(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Conversion Error: {0}")]
    Conversion(String),

    #[error("Settings Error: {0}")]
    Settings(String),

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

impl AppError {
    /// Message safe to show to the end user
    ///
    /// Conversion and validation failures collapse into one generic message;
    /// the detailed text only goes to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Conversion(_) | AppError::Validation(_) => "Invalid conversion or input",
            AppError::Settings(_) => "Could not access settings",
            AppError::Input(_) => "Could not read input",
            AppError::Io(_) => "An I/O error occurred",
            AppError::Unknown(_) => "Something went wrong",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Settings(format!("Serialization error: {}", err))
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        AppError::Conversion(err.to_string())
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::Validation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
