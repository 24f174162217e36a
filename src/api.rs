//! Request/response surface consumed by front ends

pub mod commands;
