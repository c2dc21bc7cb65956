//! # Core Resource Framework
//!
//! This module defines the generic building blocks every API model is made of.
//!
//! ## Key Types
//!
//! - [`Client`]: The transport collaborator that actually talks to the API.
//! - [`Resource`]: The trait all models implement; provides [`Resource::dispatch`].
//! - [`ResourceBase`]: The concrete name + shared client pair models are built on.
//! - [`resource!`](crate::resource): Declares a named model type on top of [`ResourceBase`].

use crate::model::PropertyMap;
use async_trait::async_trait;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

// =============================================================================
// 1. THE COLLABORATOR
// =============================================================================

/// The transport side of the API client.
///
/// Models never build requests themselves. They hand the model name, the API
/// method name and the filtered payload to `send`, and return whatever comes
/// back. Authentication, HTTP, response decoding and retries all live behind
/// this trait.
///
/// Both associated types are opaque to the framework: responses and errors
/// are passed to the caller untouched.
#[async_trait]
pub trait Client: Send + Sync {
    /// Whatever a successful call produces.
    type Response: Send;

    /// Whatever a failed call produces.
    type Error: Send;

    /// Performs one API call.
    async fn send(
        &self,
        resource: &str,
        method: &str,
        props: PropertyMap,
    ) -> Result<Self::Response, Self::Error>;
}

/// Result of dispatching through client `C`.
pub type DispatchResult<C> = Result<<C as Client>::Response, <C as Client>::Error>;

/// Error type of the client behind resource `R`.
pub type ClientError<R> = <<R as Resource>::Client as Client>::Error;

// =============================================================================
// 2. THE RESOURCE ABSTRACTION
// =============================================================================

/// Trait that every API model implements.
///
/// # Architecture Note
/// A model is nothing more than a name plus a handle to the shared client.
/// Implementors only provide the two accessors; [`Resource::dispatch`] is
/// provided and is the single path through which models reach the client.
///
/// Models hold no mutable state, so one instance can be used from many tasks
/// at once as long as the client allows it.
#[async_trait]
pub trait Resource: Send + Sync {
    /// The client this model sends through.
    type Client: Client;

    /// The model name the API expects (e.g. `"Address"`).
    fn name(&self) -> &str;

    /// The shared client.
    fn client(&self) -> &Self::Client;

    /// Forwards one call to [`Client::send`] under this model's name.
    ///
    /// The client's result is returned as-is; errors are neither caught nor
    /// wrapped.
    #[tracing::instrument(skip(self, props))]
    async fn dispatch(&self, method: &str, props: PropertyMap) -> DispatchResult<Self::Client> {
        let resource = self.name();
        debug!(resource, keys = props.len(), "Dispatching");
        trace!(?props, "Payload");
        self.client().send(resource, method, props).await
    }
}

// =============================================================================
// 3. THE BASE MODEL
// =============================================================================

/// A model name bound to a shared client.
///
/// The client is injected by whoever constructs the model and is shared by
/// reference count; the model never opens or closes it.
///
/// # Example
/// ```ignore
/// let address = ResourceBase::new("Address", client.clone());
/// assert_eq!(address.to_string(), "Address");
/// let response = address.dispatch("getCities", props! { "Page" => 1 }).await?;
/// ```
pub struct ResourceBase<C> {
    name: Cow<'static, str>,
    client: Arc<C>,
}

impl<C: Client> ResourceBase<C> {
    /// Binds `name` to an already shared client.
    pub fn new(name: impl Into<Cow<'static, str>>, client: Arc<C>) -> Self {
        Self {
            name: name.into(),
            client,
        }
    }

    /// The model name sent with every call.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The client calls are sent through.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// The reference-counted handle, for handing the same client to other models.
    pub fn shared_client(&self) -> &Arc<C> {
        &self.client
    }
}

#[async_trait]
impl<C: Client> Resource for ResourceBase<C> {
    type Client = C;

    fn name(&self) -> &str {
        &self.name
    }

    fn client(&self) -> &C {
        &self.client
    }
}

impl<C> Clone for ResourceBase<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            client: Arc::clone(&self.client),
        }
    }
}

impl<C> fmt::Display for ResourceBase<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<C> fmt::Debug for ResourceBase<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceBase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Declares a named model type backed by [`ResourceBase`].
///
/// The generated type is generic over the client, implements [`Resource`],
/// `Display` (yielding the model name), `Clone`, `Debug` and
/// `From<Arc<C>>`, and exposes the name as an associated `NAME` constant.
///
/// ```rust
/// use novaposhta_models::resource;
///
/// resource! {
///     /// Address directory lookups.
///     pub struct Address => "Address";
/// }
///
/// assert_eq!(Address::<novaposhta_models::framework::mock::MockClient>::NAME, "Address");
/// ```
#[macro_export]
macro_rules! resource {
    ($(#[$meta:meta])* $vis:vis struct $model:ident => $name:literal;) => {
        $(#[$meta])*
        $vis struct $model<C: $crate::Client> {
            base: $crate::ResourceBase<C>,
        }

        impl<C: $crate::Client> $model<C> {
            /// The model name sent with every call.
            pub const NAME: &'static str = $name;

            pub fn new(client: ::std::sync::Arc<C>) -> Self {
                Self {
                    base: $crate::ResourceBase::new($name, client),
                }
            }
        }

        impl<C: $crate::Client> ::std::convert::From<::std::sync::Arc<C>> for $model<C> {
            fn from(client: ::std::sync::Arc<C>) -> Self {
                Self::new(client)
            }
        }

        impl<C: $crate::Client> $crate::Resource for $model<C> {
            type Client = C;

            fn name(&self) -> &str {
                self.base.name()
            }

            fn client(&self) -> &C {
                self.base.client()
            }
        }

        impl<C: $crate::Client> ::std::clone::Clone for $model<C> {
            fn clone(&self) -> Self {
                Self {
                    base: self.base.clone(),
                }
            }
        }

        impl<C: $crate::Client> ::std::fmt::Display for $model<C> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.base, f)
            }
        }

        impl<C: $crate::Client> ::std::fmt::Debug for $model<C> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($model))
                    .field("name", &$name)
                    .finish_non_exhaustive()
            }
        }
    };
}
