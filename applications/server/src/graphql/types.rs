/// GraphQL object types
use async_graphql::{Interface, Object, SimpleObject, ID};
use chrono::{DateTime, Utc};
use webcig_core::{Connection, GlobalId, User};

/// Type name `User` objects are registered under for `node` lookups
pub const USER_TYPE: &str = "User";

/// An object with a globally unique ID.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID", desc = "The global ID of the object."))]
pub enum Node {
    User(UserObject),
}

/// A webcig user.
#[derive(Debug, Clone)]
pub struct UserObject(User);

impl UserObject {
    pub fn global_id(&self) -> GlobalId {
        GlobalId::new(USER_TYPE, self.0.id.as_str())
    }

    pub fn record(&self) -> &User {
        &self.0
    }
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self(user)
    }
}

#[Object(name = "User")]
impl UserObject {
    /// The global ID of the user.
    async fn id(&self) -> ID {
        ID(self.global_id().encode())
    }

    /// The name of the user.
    async fn name(&self) -> Option<&str> {
        Some(&self.0.name)
    }

    /// The contact address of the user.
    async fn email(&self) -> Option<&str> {
        Some(&self.0.email)
    }

    /// When the user was created.
    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }
}

/// Information about pagination in a connection.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "PageInfo")]
pub struct PageInfoObject {
    /// When paginating forwards, are there more items?
    pub has_next_page: bool,
    /// When paginating backwards, are there more items?
    pub has_previous_page: bool,
    /// When paginating backwards, the cursor to continue.
    pub start_cursor: Option<String>,
    /// When paginating forwards, the cursor to continue.
    pub end_cursor: Option<String>,
}

impl From<webcig_core::PageInfo> for PageInfoObject {
    fn from(info: webcig_core::PageInfo) -> Self {
        Self {
            has_next_page: info.has_next_page,
            has_previous_page: info.has_previous_page,
            start_cursor: info.start_cursor,
            end_cursor: info.end_cursor,
        }
    }
}

/// An edge in a connection.
#[derive(Debug, Clone, SimpleObject)]
pub struct UserEdge {
    /// The item at the end of the edge
    pub node: UserObject,
    /// A cursor for use in pagination
    pub cursor: String,
}

/// A connection to a list of users.
#[derive(Debug, Clone, SimpleObject)]
pub struct UserConnection {
    /// A list of edges.
    pub edges: Vec<UserEdge>,
    /// Information to aid in pagination.
    pub page_info: PageInfoObject,
}

impl From<Connection<User>> for UserConnection {
    fn from(connection: Connection<User>) -> Self {
        Self {
            edges: connection
                .edges
                .into_iter()
                .map(|edge| UserEdge {
                    node: edge.node.into(),
                    cursor: edge.cursor,
                })
                .collect(),
            page_info: connection.page_info.into(),
        }
    }
}
