//! Payload data structures shared by every resource model.

pub mod property;

pub use property::*;
