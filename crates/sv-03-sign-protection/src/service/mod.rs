//! The protection controller and its event-bus wiring.

pub mod controller;
pub mod wiring;
