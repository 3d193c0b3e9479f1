//! User store
//!
//! The store is the only source of `User` records. Reads never block each
//! other; writes serialize behind a reader-writer lock.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::{Result, WebcigError};
use crate::types::{CreateUser, User, UserId};

/// First id handed out by `create`; `"1"` belongs to the seed record.
const FIRST_ASSIGNED_ID: u64 = 2;

/// Access to user records
///
/// Implementations must return `all()` in a stable order so cursor offsets
/// computed from it stay valid across requests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user; unknown ids are `Ok(None)`
    async fn get(&self, id: &UserId) -> Result<Option<User>>;

    /// Every user, in insertion order
    async fn all(&self) -> Result<Vec<User>>;

    /// Insert a new user and return it with its assigned id
    async fn create(&self, user: CreateUser) -> Result<User>;

    /// Number of stored users
    async fn len(&self) -> Result<usize> {
        Ok(self.all().await?.len())
    }

    /// Whether the store holds no users
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    index: HashMap<UserId, usize>,
    next_user_id: u64,
}

impl Inner {
    fn insert(&mut self, user: User) -> Result<()> {
        if self.index.contains_key(&user.id) {
            return Err(WebcigError::storage(format!("duplicate user id {}", user.id)));
        }
        self.index.insert(user.id.clone(), self.users.len());
        self.users.push(user);
        Ok(())
    }
}

/// Process-local `UserStore`
#[derive(Debug)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    /// A store with no users
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: Vec::new(),
                index: HashMap::new(),
                next_user_id: FIRST_ASSIGNED_ID,
            }),
        }
    }

    /// A store holding the seed user
    pub fn seeded() -> Self {
        let seed = User::seed();
        let index = HashMap::from([(seed.id.clone(), 0)]);

        Self {
            inner: RwLock::new(Inner {
                users: vec![seed],
                index,
                next_user_id: FIRST_ASSIGNED_ID,
            }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, id: &UserId) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.index.get(id).map(|&pos| inner.users[pos].clone()))
    }

    async fn all(&self) -> Result<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn create(&self, user: CreateUser) -> Result<User> {
        let name = user.name.trim();
        if name.is_empty() {
            return Err(WebcigError::invalid_input("name must not be empty"));
        }

        let mut inner = self.inner.write().await;

        let created = User {
            id: UserId::from(inner.next_user_id),
            name: name.to_string(),
            email: user.email,
            created_at: Utc::now(),
        };
        inner.insert(created.clone())?;
        inner.next_user_id += 1;

        tracing::debug!(user_id = %created.id, "Created user");
        Ok(created)
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.inner.read().await.users.len())
    }
}
