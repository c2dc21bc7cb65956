//! Generic framework for API resource models.
//!
//! This module provides the building blocks that every model of the API is
//! made of: the transport seam, the dispatch hook and method binding.
//!
//! # Main Components
//!
//! - [`Client`] - Trait the transport implements; models only ever call `send`
//! - [`Resource`] - Trait models implement, with the provided [`Resource::dispatch`]
//! - [`ResourceBase`] - Name + shared client pair models are built on
//! - [`ApiMethod`] - An API method name bound for dispatch
//!
//! # Testing
//!
//! See [`mock`] module for a scripted client to test models without a transport.

pub mod core;
pub mod method;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
pub use self::method::*;
