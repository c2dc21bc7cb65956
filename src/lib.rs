//! # Nova Poshta Models
//!
//! > **The resource-model layer of a Nova Poshta API client.**
//!
//! The Nova Poshta API exposes every operation as a `(modelName, calledMethod,
//! methodProperties)` triple. This crate provides the plumbing models are
//! written with, so that a model method only has to describe its parameters.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Models describe, clients deliver
//!
//! - **Models** know their API name and how to turn typed arguments into a
//!   parameter map.
//! - **Clients** know how to reach the API: authentication, HTTP, decoding.
//!
//! The two meet at a single seam, [`Client::send`]. Models never catch,
//! wrap or retry what comes back.
//!
//! ## 🚀 Core Concepts
//!
//! ### Absent is not empty
//! A parameter that was not provided is dropped from the payload, while an
//! empty string or an empty list is sent as-is. [`Property`] keeps the two
//! apart, and [`props!`] builds payloads from plain Rust values
//! (`Option::None` becomes absent).
//!
//! ### Method binding
//! [`api_method!`] declares a model method together with the API method it
//! calls. The body returns the payload; the generated `async fn` dispatches it
//! exactly once and hands back the client's result.
//!
//! ```rust
//! use novaposhta_models::{api_method, props, resource, Client};
//!
//! resource! {
//!     /// Tracking of shipments.
//!     pub struct TrackingDocument => "TrackingDocument";
//! }
//!
//! impl<C: Client> TrackingDocument<C> {
//!     api_method! {
//!         /// Fetches the status of the given shipments.
//!         pub fn get_status_documents(&self, numbers: Vec<String>, phone: Option<String>) => "getStatusDocuments" {
//!             props! { "Documents" => numbers, "Phone" => phone }
//!         }
//!     }
//! }
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The [`Client`] seam, the [`Resource`] trait with its provided
//!   `dispatch`, [`ResourceBase`] and the [`ApiMethod`] binding.
//! - **Testing**: [`framework::mock::MockClient`] scripts and records calls.
//!
//! ### 2. The Payloads ([`model`])
//! - **Role**: [`Property`], [`PropertyMap`] and [`filter_properties`].
//!
//! ### 3. The Wiring ([`lifecycle`])
//! - **Role**: [`Session`](lifecycle::Session) shares one client between
//!   models; [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;

pub use framework::{
    bind_api_method, ApiMethod, Client, ClientError, DispatchResult, Resource, ResourceBase,
};
pub use model::{filter_properties, Property, PropertyMap};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
