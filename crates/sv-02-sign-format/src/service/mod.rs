//! Application services for sign text.

pub mod formatter;
pub mod lifecycle;
