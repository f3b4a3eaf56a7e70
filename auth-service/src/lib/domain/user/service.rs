use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with an injected repository.
/// The admin allow-list comes from configuration; an email on the list is
/// granted the admin role at registration time.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    password_hasher: auth::PasswordHasher,
    admin_emails: HashSet<String>,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `admin_emails` - Emails granted the admin role at registration
    pub fn new(repository: Arc<R>, admin_emails: HashSet<String>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
            admin_emails,
        }
    }
}

#[async_trait]
impl<R> UserServicePort for UserService<R>
where
    R: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        let role = if self.admin_emails.contains(command.email.as_str()) {
            Role::Admin
        } else {
            Role::User
        };

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            role,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            role = %created_user.role,
            "User registered"
        );

        Ok(created_user)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn delete_non_admins(&self) -> Result<u64, UserError> {
        let removed = self.repository.delete_non_admins().await?;

        tracing::info!(removed, "Non-admin users deleted");

        Ok(removed)
    }
}
