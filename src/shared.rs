pub mod types;
pub mod settings;
pub mod error;

#[cfg(test)]
mod types_test;

// Re-export AppError for convenience
pub use error::{AppError, AppResult};
