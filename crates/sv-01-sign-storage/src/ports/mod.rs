//! Port definitions for sign storage.

pub mod outbound;
