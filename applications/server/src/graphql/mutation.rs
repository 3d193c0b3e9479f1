/// Root mutation type
use async_graphql::{Context, Object, Result};
use webcig_core::CreateUser;

use super::types::UserObject;
use super::{resolver_error, SharedUserStore};

pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a user; the server assigns its ID.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
    ) -> Result<UserObject> {
        let store = ctx.data::<SharedUserStore>()?;
        let user = store
            .create(CreateUser::new(name, email))
            .await
            .map_err(resolver_error)?;

        tracing::info!(user_id = %user.id, "User created via GraphQL");
        Ok(user.into())
    }
}
