//! GraphQL schema
//!
//! The schema is built once at startup by [`build_schema`] and handed to the
//! HTTP layer. Construction checks the generated SDL against the node
//! registry, so a schema that would answer `node` queries for types it does
//! not expose never serves traffic.

pub mod mutation;
pub mod node;
pub mod query;
pub mod types;

use async_graphql::{extensions::Tracing, EmptySubscription, ErrorExtensions, Schema};
use async_graphql_parser::types::{TypeKind, TypeSystemDefinition};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use webcig_core::{UserStore, WebcigError};

use crate::config::GraphQlSettings;
use crate::error::{Result, ServerError};

pub use mutation::Mutation;
pub use node::{NodeFetcher, NodeRegistry, UserFetcher};
pub use query::Query;
pub use types::{Node, PageInfoObject, UserConnection, UserEdge, UserObject, USER_TYPE};

pub type WebcigSchema = Schema<Query, Mutation, EmptySubscription>;

/// Store handle resolvers read from the schema data
pub type SharedUserStore = Arc<dyn UserStore>;

const NODE_INTERFACE: &str = "Node";

/// Turn a core error into a GraphQL error entry with an `extensions.code`.
pub fn resolver_error(err: WebcigError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}

/// Build the schema over `store`
pub fn build_schema(store: SharedUserStore, settings: &GraphQlSettings) -> Result<WebcigSchema> {
    let registry = NodeRegistry::with_defaults(Arc::clone(&store));
    let node_types: Vec<&'static str> = registry.type_names().collect();

    let schema = Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .data(registry)
        .limit_depth(settings.depth_limit)
        .limit_complexity(settings.complexity_limit)
        .extension(Tracing)
        .finish();

    verify_sdl(&schema.sdl(), &node_types)?;
    tracing::debug!("GraphQL schema built with node types {:?}", node_types);

    Ok(schema)
}

/// Check that the SDL exposes what the resolvers depend on
fn verify_sdl(sdl: &str, node_types: &[&str]) -> Result<()> {
    let document = async_graphql_parser::parse_schema(sdl)
        .map_err(|e| ServerError::SchemaConstruction(format!("generated SDL does not parse: {e}")))?;

    let mut interfaces = HashSet::new();
    let mut implements: HashMap<String, Vec<String>> = HashMap::new();
    let mut query_fields = Vec::new();

    for definition in &document.definitions {
        let TypeSystemDefinition::Type(ty) = definition else {
            continue;
        };
        let name = ty.node.name.node.to_string();
        match &ty.node.kind {
            TypeKind::Interface(_) => {
                interfaces.insert(name);
            }
            TypeKind::Object(object) => {
                if name == "Query" {
                    query_fields = object
                        .fields
                        .iter()
                        .map(|field| field.node.name.node.to_string())
                        .collect();
                }
                implements.insert(
                    name,
                    object.implements.iter().map(|i| i.node.to_string()).collect(),
                );
            }
            _ => {}
        }
    }

    if !interfaces.contains(NODE_INTERFACE) {
        return Err(ServerError::SchemaConstruction(
            "interface Node is missing".to_string(),
        ));
    }

    for field in ["users", "node"] {
        if !query_fields.iter().any(|f| f == field) {
            return Err(ServerError::SchemaConstruction(format!(
                "Query.{field} is missing"
            )));
        }
    }

    for type_name in node_types {
        let implemented = implements
            .get(*type_name)
            .is_some_and(|list| list.iter().any(|i| i == NODE_INTERFACE));
        if !implemented {
            return Err(ServerError::SchemaConstruction(format!(
                "node type {type_name} is registered but does not implement Node"
            )));
        }
    }

    Ok(())
}
