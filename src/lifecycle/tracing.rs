//! # Observability & Tracing
//!
//! Structured logging for the model layer, built on the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Dispatch**: every [`Resource::dispatch`](crate::Resource::dispatch) opens a span
//!   carrying the API method and logs the model name and payload size at `debug`
//! - **Payloads**: the full filtered payload is logged at `trace` only
//! - **Sessions**: model construction on a [`Session`](crate::lifecycle::Session)
//! - **Mock client**: received calls and unmet or mismatched expectations
//!
//! ## Usage Examples
//!
//! ```bash
//! # Dispatch summaries
//! RUST_LOG=debug cargo test
//!
//! # Include full payloads
//! RUST_LOG=trace cargo test
//!
//! # Filter to the framework only
//! RUST_LOG=novaposhta_models::framework=debug cargo test
//! ```
//!
//! With `RUST_LOG=debug` a single call looks like:
//!
//! ```text
//! DEBUG dispatch{method="getCities"}: Dispatching resource="Address" keys=2
//! ```

/// Installs the compact `fmt` subscriber configured from `RUST_LOG`.
///
/// Panics if a global subscriber is already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Same as [`setup_tracing`], but reports an already installed subscriber
/// instead of panicking. Handy in tests, where every test may call it.
pub fn try_setup_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_setup_reports_error() {
        let _ = try_setup_tracing();
        assert!(try_setup_tracing().is_err());
    }
}
