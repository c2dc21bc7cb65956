//! # API Method Binding
//!
//! Model methods only describe *what* to send. Binding a method to an API
//! method name turns "build a payload" into "perform the call":
//!
//! 1. The payload builder runs with the caller's arguments.
//! 2. Its [`PropertyMap`] is dispatched once under the bound method name.
//! 3. The client's result is returned unchanged.
//!
//! [`ApiMethod`] is the plain-value form of the binding. The
//! [`api_method!`](crate::api_method) macro is the declarative form used
//! inside model `impl` blocks.

use crate::framework::core::{ClientError, DispatchResult, Resource};
use crate::model::PropertyMap;
use std::fmt;

/// An API method name bound for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiMethod {
    name: &'static str,
}

/// Binds an API method name, e.g. `bind_api_method("getCities")`.
pub const fn bind_api_method(name: &'static str) -> ApiMethod {
    ApiMethod::new(name)
}

impl ApiMethod {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Dispatches an already built payload.
    pub async fn call<R>(self, resource: &R, props: PropertyMap) -> DispatchResult<R::Client>
    where
        R: Resource,
    {
        resource.dispatch(self.name, props).await
    }

    /// Runs the payload builder, then dispatches its output exactly once.
    pub async fn invoke<R, F>(self, resource: &R, build: F) -> DispatchResult<R::Client>
    where
        R: Resource,
        F: FnOnce(&R) -> PropertyMap,
    {
        let props = build(resource);
        self.call(resource, props).await
    }

    /// Like [`ApiMethod::invoke`] for builders that can fail.
    ///
    /// A builder error is returned as-is and nothing is dispatched.
    pub async fn try_invoke<R, F>(self, resource: &R, build: F) -> DispatchResult<R::Client>
    where
        R: Resource,
        F: FnOnce(&R) -> Result<PropertyMap, ClientError<R>>,
    {
        let props = build(resource)?;
        self.call(resource, props).await
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Declares API-backed methods inside a model `impl` block.
///
/// Each entry `fn name(&self, args..) => "apiMethod" { body }` expands to:
/// - `name_props(&self, args..) -> PropertyMap`, the body itself;
/// - `async fn name(&self, args..)`, which builds the payload with
///   `name_props` and dispatches it under `"apiMethod"`.
///
/// ```rust
/// use novaposhta_models::{api_method, props, resource, Client};
///
/// resource! {
///     pub struct Address => "Address";
/// }
///
/// impl<C: Client> Address<C> {
///     api_method! {
///         /// Searches settlements by name.
///         pub fn search_settlements(&self, city_name: &str, limit: Option<u32>) => "searchSettlements" {
///             props! { "CityName" => city_name, "Limit" => limit }
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! api_method {
    ($(
        $(#[$meta:meta])*
        $vis:vis fn $name:ident(&$self:ident $(, $arg:ident: $ty:ty)* $(,)?) => $method:literal $body:block
    )+) => {
        $crate::__private::paste! {
            $(
                $vis fn [<$name _props>](&$self $(, $arg: $ty)*) -> $crate::PropertyMap $body

                $(#[$meta])*
                $vis async fn $name(
                    &$self $(, $arg: $ty)*
                ) -> $crate::DispatchResult<<Self as $crate::Resource>::Client> {
                    $crate::bind_api_method($method)
                        .invoke($self, |resource| resource.[<$name _props>]($($arg),*))
                        .await
                }
            )+
        }
    };
}
