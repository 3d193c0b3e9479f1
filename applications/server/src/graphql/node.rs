//! Global-id resolution for the `node` field
//!
//! Each node type registers a fetcher under its declared GraphQL type name.
//! Resolving a global id decodes it, picks the fetcher for its type name and
//! asks it for the local id. The returned `Node` variant already names the
//! concrete type, so no inspection of the value is needed afterwards.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use webcig_core::{GlobalId, Result, UserId, UserStore, WebcigError};

use super::types::{Node, UserObject, USER_TYPE};

/// Loads one node type by its local id
#[async_trait]
pub trait NodeFetcher: Send + Sync {
    async fn fetch(&self, local_id: &str) -> Result<Option<Node>>;
}

/// Fetches `User` nodes from the user store
pub struct UserFetcher {
    store: Arc<dyn UserStore>,
}

impl UserFetcher {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl NodeFetcher for UserFetcher {
    async fn fetch(&self, local_id: &str) -> Result<Option<Node>> {
        let user = self.store.get(&UserId::new(local_id)).await?;
        Ok(user.map(|user| Node::User(UserObject::from(user))))
    }
}

/// Dispatch table from type name to fetcher
#[derive(Default)]
pub struct NodeRegistry {
    fetchers: BTreeMap<&'static str, Box<dyn NodeFetcher>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry every schema starts with
    pub fn with_defaults(store: Arc<dyn UserStore>) -> Self {
        Self::new().register(USER_TYPE, UserFetcher::new(store))
    }

    pub fn register(mut self, type_name: &'static str, fetcher: impl NodeFetcher + 'static) -> Self {
        self.fetchers.insert(type_name, Box::new(fetcher));
        self
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fetchers.keys().copied()
    }

    /// Resolve an encoded global id
    ///
    /// A known type with an unknown local id is `Ok(None)`.
    pub async fn resolve(&self, global_id: &str) -> Result<Option<Node>> {
        let id = GlobalId::decode(global_id)?;
        let fetcher = self
            .fetchers
            .get(id.type_name.as_str())
            .ok_or_else(|| WebcigError::unknown_node_type(&id.type_name))?;

        tracing::debug!(type_name = %id.type_name, local_id = %id.local_id, "Resolving node");
        fetcher.fetch(&id.local_id).await
    }
}
