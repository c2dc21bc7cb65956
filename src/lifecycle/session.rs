use crate::framework::{Client, Resource, ResourceBase};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

/// One client session and the models built on it.
///
/// `Session` is responsible for:
/// - **Client Sharing**: Every model it hands out holds the same `Arc<C>`
/// - **Model Construction**: Builds any [`resource!`](crate::resource)-declared model
///
/// Opening and closing the client is the caller's business; the session only
/// holds a reference.
///
/// # Example
///
/// ```ignore
/// let session = Session::new(client);
///
/// let address: Address<_> = session.resource();
/// let documents: InternetDocument<_> = session.resource();
///
/// let response = address.get_cities(Some(1)).await?;
/// ```
pub struct Session<C> {
    client: Arc<C>,
}

impl<C: Client> Session<C> {
    /// Starts a session owning a fresh reference to `client`.
    pub fn new(client: C) -> Self {
        Self::from_shared(Arc::new(client))
    }

    /// Starts a session on a client that is already shared elsewhere.
    pub fn from_shared(client: Arc<C>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// Builds model `R` on this session's client.
    pub fn resource<R>(&self) -> R
    where
        R: Resource<Client = C> + From<Arc<C>>,
    {
        let resource = R::from(Arc::clone(&self.client));
        debug!(resource = resource.name(), "Resource created");
        resource
    }

    /// Builds an ad-hoc model with a runtime name.
    pub fn base(&self, name: impl Into<Cow<'static, str>>) -> ResourceBase<C> {
        let resource = ResourceBase::new(name, Arc::clone(&self.client));
        debug!(resource = resource.name(), "Resource created");
        resource
    }
}

impl<C> Clone for Session<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}
