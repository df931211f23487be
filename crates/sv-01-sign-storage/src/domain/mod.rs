//! Domain layer for sign storage.

pub mod entry;
pub mod errors;
pub mod sign_type;
