pub mod api;
pub mod cli;
pub mod core;
pub mod shared;

pub use crate::core::features::unit_converter::{convert, Category, ConversionError};

/// Run the converter with the process arguments and return the exit code
pub async fn run() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::run(args).await
}
