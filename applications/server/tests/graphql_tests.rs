/// GraphQL resolver tests
/// Executes documents directly against the schema, no HTTP involved
mod common;

use async_graphql::{Request, Variables};
use common::{create_test_schema, create_test_store};
use serde_json::{json, Value};
use webcig_core::{connection::cursor_for_offset, GlobalId};
use webcig_server::{build_schema, config::GraphQlSettings, WebcigSchema};

/// Execute and return the serialized response (`data` and/or `errors`)
async fn execute(schema: &WebcigSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    serde_json::to_value(&response).unwrap()
}

fn error_code(body: &Value) -> &str {
    body["errors"][0]["extensions"]["code"].as_str().unwrap_or_default()
}

const NODE_QUERY: &str = r#"
    query Node($id: ID!) {
        node(id: $id) {
            __typename
            id
            ... on User { name email }
        }
    }
"#;

const USERS_QUERY: &str = r#"
    query Users($first: Int, $after: String, $last: Int, $before: String) {
        users(first: $first, after: $after, last: $last, before: $before) {
            edges { cursor node { id name } }
            pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
        }
    }
"#;

fn user_names(body: &Value) -> Vec<String> {
    body["data"]["users"]["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|edge| edge["node"]["name"].as_str().unwrap().to_string())
        .collect()
}

/// Test node lookup of the seeded user by global id
#[tokio::test]
async fn test_node_resolves_seeded_user() {
    let schema = create_test_schema(create_test_store(&[]).await);
    let id = GlobalId::new("User", "1").encode();

    let body = execute(&schema, NODE_QUERY, json!({ "id": id })).await;

    assert!(body.get("errors").is_none(), "unexpected errors: {body}");
    assert_eq!(body["data"]["node"]["__typename"], "User");
    assert_eq!(body["data"]["node"]["id"], id);
    assert_eq!(body["data"]["node"]["name"], "Adam");
    assert_eq!(body["data"]["node"]["email"], "_@anh.io");
}

/// Test node lookup with an unknown local id returns null without error
#[tokio::test]
async fn test_node_unknown_user_is_null() {
    let schema = create_test_schema(create_test_store(&[]).await);
    let id = GlobalId::new("User", "404").encode();

    let body = execute(&schema, NODE_QUERY, json!({ "id": id })).await;

    assert!(body.get("errors").is_none());
    assert_eq!(body["data"]["node"], Value::Null);
}

/// Test node lookup with an unregistered type fails with UNKNOWN_NODE_TYPE
#[tokio::test]
async fn test_node_unknown_type_is_error_entry() {
    let schema = create_test_schema(create_test_store(&[]).await);
    let id = GlobalId::new("Bogus", "1").encode();

    let body = execute(&schema, NODE_QUERY, json!({ "id": id })).await;

    assert_eq!(body["data"]["node"], Value::Null);
    assert_eq!(error_code(&body), "UNKNOWN_NODE_TYPE");
    assert_eq!(body["errors"][0]["path"], json!(["node"]));
}

/// Test node lookup with a malformed id fails with INVALID_GLOBAL_ID
#[tokio::test]
async fn test_node_malformed_id_is_error_entry() {
    let schema = create_test_schema(create_test_store(&[]).await);

    let body = execute(&schema, NODE_QUERY, json!({ "id": "not-a-global-id!" })).await;

    assert_eq!(error_code(&body), "INVALID_GLOBAL_ID");
}

/// Test users(first: 1) with a single user
#[tokio::test]
async fn test_users_first_one_single_user() {
    let schema = create_test_schema(create_test_store(&[]).await);

    let body = execute(&schema, USERS_QUERY, json!({ "first": 1 })).await;

    assert_eq!(user_names(&body), vec!["Adam"]);
    assert_eq!(body["data"]["users"]["pageInfo"]["hasNextPage"], false);
}

/// Test users(first: 1) flags a next page once a second user exists
#[tokio::test]
async fn test_users_first_one_with_more_users() {
    let schema = create_test_schema(create_test_store(&["Bea"]).await);

    let body = execute(&schema, USERS_QUERY, json!({ "first": 1 })).await;

    assert_eq!(user_names(&body), vec!["Adam"]);
    assert_eq!(body["data"]["users"]["pageInfo"]["hasNextPage"], true);
    assert_eq!(
        body["data"]["users"]["pageInfo"]["endCursor"],
        cursor_for_offset(0)
    );
}

/// Test users(after: cursor(1), first: 1) returns user 2
#[tokio::test]
async fn test_users_after_first_user_returns_second() {
    let schema = create_test_schema(create_test_store(&["Bea", "Cy"]).await);

    let first_page = execute(&schema, USERS_QUERY, json!({ "first": 1 })).await;
    let after = first_page["data"]["users"]["pageInfo"]["endCursor"].clone();

    let body = execute(&schema, USERS_QUERY, json!({ "first": 1, "after": after })).await;

    let edges = body["data"]["users"]["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["node"]["id"], GlobalId::new("User", "2").encode());
    assert_eq!(edges[0]["node"]["name"], "Bea");
    assert_eq!(body["data"]["users"]["pageInfo"]["hasNextPage"], true);
}

/// Test users ordering is stable across repeated queries
#[tokio::test]
async fn test_users_order_is_deterministic() {
    let schema = create_test_schema(create_test_store(&["Bea", "Cy", "Dee", "Eve"]).await);

    let first = execute(&schema, USERS_QUERY, json!({})).await;
    for _ in 0..5 {
        let again = execute(&schema, USERS_QUERY, json!({})).await;
        assert_eq!(user_names(&again), user_names(&first));
    }
    assert_eq!(user_names(&first), vec!["Adam", "Bea", "Cy", "Dee", "Eve"]);
}

/// Test backward pagination with last/before
#[tokio::test]
async fn test_users_last_before() {
    let schema = create_test_schema(create_test_store(&["Bea", "Cy"]).await);

    let body = execute(
        &schema,
        USERS_QUERY,
        json!({ "last": 1, "before": cursor_for_offset(2) }),
    )
    .await;

    assert_eq!(user_names(&body), vec!["Bea"]);
    assert_eq!(body["data"]["users"]["pageInfo"]["hasPreviousPage"], true);
    assert_eq!(body["data"]["users"]["pageInfo"]["hasNextPage"], false);
}

/// Test negative first fails with INVALID_CONNECTION_ARGS
#[tokio::test]
async fn test_users_negative_first_is_error_entry() {
    let schema = create_test_schema(create_test_store(&[]).await);

    let body = execute(&schema, USERS_QUERY, json!({ "first": -1 })).await;

    assert_eq!(body["data"]["users"], Value::Null);
    assert_eq!(error_code(&body), "INVALID_CONNECTION_ARGS");
}

/// Test a garbage cursor fails with INVALID_CONNECTION_ARGS
#[tokio::test]
async fn test_users_bad_cursor_is_error_entry() {
    let schema = create_test_schema(create_test_store(&[]).await);

    let body = execute(&schema, USERS_QUERY, json!({ "first": 1, "after": "nope" })).await;

    assert_eq!(error_code(&body), "INVALID_CONNECTION_ARGS");
}

/// Test an `after` cursor at the top of the offset range yields an empty page
#[tokio::test]
async fn test_users_after_huge_cursor_is_empty() {
    let schema = create_test_schema(create_test_store(&["Bea"]).await);

    for offset in [usize::try_from(i64::MAX).unwrap(), usize::MAX - 1, usize::MAX] {
        let after = cursor_for_offset(offset);
        let body = execute(&schema, USERS_QUERY, json!({ "first": 1, "after": after })).await;

        assert!(body.get("errors").is_none(), "unexpected errors: {body}");
        assert!(user_names(&body).is_empty());
        assert_eq!(body["data"]["users"]["pageInfo"]["hasNextPage"], false);
    }
}

/// Test a `before` cursor past the end is clamped to the list length
#[tokio::test]
async fn test_users_before_huge_cursor_returns_everyone() {
    let schema = create_test_schema(create_test_store(&["Bea", "Cy"]).await);

    let body = execute(
        &schema,
        USERS_QUERY,
        json!({ "before": cursor_for_offset(usize::MAX) }),
    )
    .await;

    assert!(body.get("errors").is_none(), "unexpected errors: {body}");
    assert_eq!(user_names(&body), vec!["Adam", "Bea", "Cy"]);
}

/// Test createUser assigns ids from the counter and the user becomes listable
#[tokio::test]
async fn test_create_user_mutation() {
    let schema = create_test_schema(create_test_store(&[]).await);

    let body = execute(
        &schema,
        r#"mutation { createUser(name: "Bea", email: "bea@example.com") { id name email createdAt } }"#,
        json!({}),
    )
    .await;

    assert!(body.get("errors").is_none(), "unexpected errors: {body}");
    assert_eq!(
        body["data"]["createUser"]["id"],
        GlobalId::new("User", "2").encode()
    );
    assert!(body["data"]["createUser"]["createdAt"].is_string());

    let listed = execute(&schema, USERS_QUERY, json!({})).await;
    assert_eq!(user_names(&listed), vec!["Adam", "Bea"]);
}

/// Test createUser rejects a blank name with INVALID_INPUT
#[tokio::test]
async fn test_create_user_blank_name() {
    let schema = create_test_schema(create_test_store(&[]).await);

    let body = execute(
        &schema,
        r#"mutation { createUser(name: "  ", email: "x@example.com") { id } }"#,
        json!({}),
    )
    .await;

    assert_eq!(error_code(&body), "INVALID_INPUT");
}

/// Test the depth limit rejects overly nested documents
#[tokio::test]
async fn test_depth_limit_rejects_deep_query() {
    let store = create_test_store(&[]).await;
    let schema = build_schema(
        store,
        &GraphQlSettings {
            depth_limit: 2,
            complexity_limit: 1000,
        },
    )
    .unwrap();

    let body = execute(&schema, USERS_QUERY, json!({})).await;

    assert!(body["errors"].is_array());
    assert!(body.get("data").map_or(true, Value::is_null));
}
