//! Core logic, independent of any front end

pub mod features;
