//! Domain layer for sign protection.

pub mod attachment;
