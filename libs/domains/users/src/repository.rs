use async_trait::async_trait;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{Role, User};

/// Repository trait for User persistence
///
/// This trait defines the data access interface for users.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    async fn insert(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by email
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// List every user, no pagination
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Set a user's role wholesale, returning the matched count
    async fn set_role(&self, id: Uuid, role: Role) -> UserResult<u64>;

    /// Delete a user by ID, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> UserResult<bool>;
}
