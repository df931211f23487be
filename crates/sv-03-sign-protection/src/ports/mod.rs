//! Port definitions for sign protection.

pub mod outbound;
