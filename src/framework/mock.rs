//! # Mock Client
//!
//! Utilities for testing models in isolation.
//!
//! [`MockClient`] implements [`Client`] without any transport. Script the
//! calls you expect with [`MockClient::expect`], run the model code, then
//! inspect [`MockClient::calls`] and finish with [`MockClient::verify`].
//!
//! # Example
//! ```ignore
//! let client = Arc::new(MockClient::new());
//! client.expect("Address", "getCities").return_ok(json!({ "success": true }));
//!
//! let address = Address::new(client.clone());
//! let response = address.get_cities(Some(1)).await?;
//!
//! assert_eq!(client.calls()[0].method, "getCities");
//! client.verify(); // Ensures all expectations were met
//! ```

use crate::framework::core::Client;
use crate::model::PropertyMap;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced by [`MockClient`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MockError {
    /// A call arrived with no expectation left to answer it.
    #[error("Unexpected call: {resource}.{method}")]
    Unexpected { resource: String, method: String },

    /// A call arrived for a different resource or method than scripted.
    #[error("Expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },

    /// A scripted failure, standing in for an API-side error.
    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// A call as seen by the mock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedCall {
    pub resource: String,
    pub method: String,
    pub props: PropertyMap,
}

struct Expectation {
    resource: String,
    method: String,
    response: Result<Value, MockError>,
}

/// A scripted [`Client`] that records every call.
///
/// Expectations are answered in FIFO order. Share it with models through an
/// `Arc` and keep a clone in the test to inspect it afterwards.
#[derive(Default)]
pub struct MockClient {
    expectations: Mutex<VecDeque<Expectation>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockClient {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a call to `method` on `resource`.
    pub fn expect(
        &self,
        resource: impl Into<String>,
        method: impl Into<String>,
    ) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            mock: self,
            resource: resource.into(),
            method: method.into(),
        }
    }

    /// All calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn push(&self, expectation: Expectation) {
        lock(&self.expectations).push_back(expectation);
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<'a> {
    mock: &'a MockClient,
    resource: String,
    method: String,
}

impl ExpectationBuilder<'_> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, response: Value) {
        self.finish(Ok(response));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: MockError) {
        self.finish(Err(error));
    }

    fn finish(self, response: Result<Value, MockError>) {
        self.mock.push(Expectation {
            resource: self.resource,
            method: self.method,
            response,
        });
    }
}

#[async_trait]
impl Client for MockClient {
    type Response = Value;
    type Error = MockError;

    async fn send(
        &self,
        resource: &str,
        method: &str,
        props: PropertyMap,
    ) -> Result<Value, MockError> {
        debug!(resource, method, "Mock send");
        lock(&self.calls).push(RecordedCall {
            resource: resource.to_string(),
            method: method.to_string(),
            props,
        });

        let expectation = lock(&self.expectations).pop_front();
        match expectation {
            None => {
                warn!(resource, method, "No expectation left");
                Err(MockError::Unexpected {
                    resource: resource.to_string(),
                    method: method.to_string(),
                })
            }
            Some(exp) if exp.resource != resource || exp.method != method => {
                warn!(resource, method, "Expectation mismatch");
                Err(MockError::Mismatch {
                    expected: format!("{}.{}", exp.resource, exp.method),
                    actual: format!("{}.{}", resource, method),
                })
            }
            Some(exp) => exp.response,
        }
    }
}

// Assertions run after a panicking test thread must still see the state.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
