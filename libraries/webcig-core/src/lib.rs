//! webcig Core
//!
//! Transport-agnostic building blocks for the webcig GraphQL server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserId`, `CreateUser`
//! - **User Store**: the `UserStore` trait and its in-memory implementation
//! - **Relay Helpers**: global node identifiers and array-connection slicing
//! - **Error Handling**: Unified `WebcigError` and `Result` types
//!
//! Nothing here knows about HTTP or a particular GraphQL library; the server
//! crate maps these types onto its schema.
//!
//! # Example
//!
//! ```rust
//! use webcig_core::{GlobalId, InMemoryUserStore, UserId, UserStore};
//!
//! # async fn example() -> webcig_core::Result<()> {
//! let store = InMemoryUserStore::seeded();
//! let user = store.get(&UserId::new("1")).await?.expect("seeded user");
//!
//! let id = GlobalId::new("User", user.id.as_str()).encode();
//! assert_eq!(GlobalId::decode(&id)?.local_id, "1");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod connection;
pub mod error;
pub mod global_id;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use connection::{connection_from_slice, Connection, ConnectionArgs, Edge, PageInfo};
pub use error::{Result, WebcigError};
pub use global_id::GlobalId;
pub use store::{InMemoryUserStore, UserStore};
pub use types::{CreateUser, User, UserId};
