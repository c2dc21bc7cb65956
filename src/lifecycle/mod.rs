//! Session wiring and process-level setup.

pub mod session;
pub mod tracing;

pub use session::Session;
pub use self::tracing::{setup_tracing, try_setup_tracing};
