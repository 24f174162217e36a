//! Feature modules
//!
//! Each feature owns its pure logic. Front ends reach it through
//! `api::commands` rather than calling into these modules directly.

pub mod unit_converter;
