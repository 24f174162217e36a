//! Command modules
//!
//! Commands are organized into feature-specific submodules following
//! modern Rust idioms (no mod.rs pattern).
//!
//! ## Architecture
//!
//! - `converter`: Unit conversion, category and unit listings, quick queries
//! - `settings`: Settings persistence

pub mod converter;
pub mod settings;
