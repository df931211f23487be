//! Domain layer for sign formatting.

pub mod color;
pub mod config;
pub mod errors;
pub mod report;
pub mod surface;
