//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{RegisterResult, RegisterUser, Role, User};
use crate::repository::UserRepository;

/// User service providing business logic operations
///
/// The service layer handles validation, the idempotent-registration rule,
/// and orchestrates repository operations.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a user, idempotent by email.
    ///
    /// An existing email short-circuits with the null-insert sentinel; the
    /// store is left untouched.
    #[instrument(skip(self, input), fields(user_email = %input.email))]
    pub async fn register(&self, input: RegisterUser) -> UserResult<RegisterResult> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        if self.repository.get_by_email(&input.email).await?.is_some() {
            return Ok(RegisterResult::already_exists());
        }

        let user = self.repository.insert(User::new(input)).await?;
        Ok(RegisterResult::inserted(user.id))
    }

    /// List every user
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Assign a role wholesale, replacing any previous one
    #[instrument(skip(self))]
    pub async fn set_role(&self, id: Uuid, role: Role) -> UserResult<()> {
        let matched = self.repository.set_role(id, role).await?;
        if matched == 0 {
            return Err(UserError::NotFound(id));
        }
        Ok(())
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id));
        }
        Ok(())
    }

    /// Look up the stored role for an email, `None` when the user is absent
    #[instrument(skip(self))]
    pub async fn role_of(&self, email: &str) -> UserResult<Option<Role>> {
        let user = self.repository.get_by_email(email).await?;
        Ok(user.and_then(|u| u.role))
    }

    /// Whether the given email belongs to an admin (false when absent)
    #[instrument(skip(self))]
    pub async fn admin_flag(&self, email: &str) -> UserResult<bool> {
        Ok(self.role_of(email).await? == Some(Role::Admin))
    }

    /// Whether the given email belongs to a seller (false when absent)
    #[instrument(skip(self))]
    pub async fn seller_flag(&self, email: &str) -> UserResult<bool> {
        Ok(self.role_of(email).await? == Some(Role::Seller))
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
