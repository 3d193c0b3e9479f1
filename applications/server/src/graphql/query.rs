/// Root query type
use async_graphql::{Context, Object, Result, ID};
use webcig_core::{connection_from_slice, ConnectionArgs};

use super::node::NodeRegistry;
use super::types::{Node, UserConnection};
use super::{resolver_error, SharedUserStore};

pub struct Query;

#[Object]
impl Query {
    /// All users, as a relay connection.
    async fn users(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Result<Option<UserConnection>> {
        tracing::debug!("Resolving users on root query");
        let store = ctx.data::<SharedUserStore>()?;
        let users = store.all().await.map_err(resolver_error)?;

        let args = ConnectionArgs {
            first,
            after,
            last,
            before,
        };
        let connection = connection_from_slice(users, &args).map_err(resolver_error)?;
        Ok(Some(connection.into()))
    }

    /// Fetches an object given its ID.
    async fn node(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The ID of an object")] id: ID,
    ) -> Result<Option<Node>> {
        let registry = ctx.data::<NodeRegistry>()?;
        registry.resolve(id.as_str()).await.map_err(resolver_error)
    }
}
