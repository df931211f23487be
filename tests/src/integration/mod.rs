//! # Integration Flows
//!
//! The full plugin, driven the way a host would drive it: world events go
//! through the shared bus, the host applies whatever survives dispatch.

pub mod fixtures;

mod lifecycle_flows;
mod protection_flows;
