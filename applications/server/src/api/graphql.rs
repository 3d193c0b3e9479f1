/// GraphQL endpoint
use crate::state::AppState;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;

/// POST /graphql/ - Execute a GraphQL document
///
/// Resolver failures come back as `errors` entries in a 200 response.
pub async fn graphql(State(app_state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    if let Some(name) = request.operation_name.as_deref() {
        tracing::debug!(operation = name, "Executing GraphQL operation");
    }
    app_state.schema.execute(request).await.into()
}
