use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::password,
    errors::{AppError, AppResult},
    models::domain::User,
    models::dto::request::{CreateUserRequest, LoginRequest, RegisterRequest, UpdateUserRequest},
    repositories::{NewUser, UserRepository},
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        request.validate()?;

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(
                "This telegram account already registered".to_string(),
            ));
        }

        // Accounts created without a password cannot log in; the empty hash
        // never verifies.
        let hashed_password = match &request.password {
            Some(plain) => password::hash_password(plain)?,
            None => String::new(),
        };

        self.repository
            .create(NewUser {
                telegram_id: request.telegram_id,
                name: request.name,
                surname: request.surname,
                username: request.username,
                email: request.email,
                hashed_password,
                role: request.role,
                course_id: request.course_id,
                is_active: true,
                is_superuser: false,
                is_verified: false,
            })
            .await
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request.validate()?;

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "Username '{}' is already registered",
                request.username
            )));
        }
        if self
            .repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "Email '{}' is already registered",
                request.email
            )));
        }

        let hashed_password = password::hash_password(&request.password)?;

        let user = self
            .repository
            .create(NewUser {
                telegram_id: request.telegram_id,
                name: request.name,
                surname: request.surname,
                username: request.username,
                email: request.email,
                hashed_password,
                role: request.role,
                course_id: request.course_id,
                is_active: true,
                is_superuser: false,
                is_verified: false,
            })
            .await?;

        log::info!("User {} (id {}) has registered", user.email, user.id);
        Ok(user)
    }

    /// Credential check for login. Every failure mode answers with the same
    /// error; the cause is only logged server-side.
    pub async fn authenticate(&self, request: &LoginRequest) -> AppResult<User> {
        let user = match self.repository.find_by_email(&request.email).await? {
            Some(user) => Some(user),
            None => self.repository.find_by_username(&request.email).await?,
        };

        let Some(user) = user else {
            log::warn!("Login failed: no user for identifier {}", request.email);
            return Err(AppError::InvalidCredentials);
        };

        let verification = password::verify_and_update(&request.password, &user.hashed_password)?;
        if !verification.valid {
            log::warn!("Login failed: wrong password for {}", request.email);
            return Err(AppError::InvalidCredentials);
        }

        if !user.is_active {
            log::warn!("Login failed: inactive account {}", request.email);
            return Err(AppError::InvalidCredentials);
        }

        if let Some(updated_hash) = verification.updated_hash {
            // An outdated hash is upgraded opportunistically; a failed write
            // must not block the login.
            if let Err(e) = self
                .repository
                .update_password_hash(user.id, &updated_hash)
                .await
            {
                log::warn!("Failed to persist upgraded password hash for {}: {}", user.id, e);
            }
        }

        Ok(user)
    }

    pub async fn get_user_by_id(&self, id: i32) -> AppResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    pub async fn get_user_by_telegram_id(&self, telegram_id: i64) -> AppResult<User> {
        self.repository
            .find_by_telegram_id(telegram_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn list_users(&self, skip: i64, limit: i64) -> AppResult<Vec<User>> {
        self.repository.list(skip, limit).await
    }

    pub async fn update_user_by_telegram_id(
        &self,
        telegram_id: i64,
        request: UpdateUserRequest,
    ) -> AppResult<User> {
        request.validate()?;

        let mut user = self.get_user_by_telegram_id(telegram_id).await?;
        request.apply_to(&mut user);
        if let Some(plain) = &request.password {
            user.hashed_password = password::hash_password(plain)?;
        }

        self.repository.update(&user).await?;
        Ok(user)
    }

    /// Self-service profile update used by the auth routes.
    pub async fn update_profile(
        &self,
        mut user: User,
        request: UpdateUserRequest,
    ) -> AppResult<User> {
        request.validate()?;

        request.apply_to(&mut user);
        if let Some(plain) = &request.password {
            user.hashed_password = password::hash_password(plain)?;
        }

        self.repository.update(&user).await?;
        Ok(user)
    }

    pub async fn delete_user_by_telegram_id(&self, telegram_id: i64) -> AppResult<String> {
        let deleted = self.repository.delete_by_telegram_id(telegram_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(format!("User with id: {}, deleted", telegram_id))
    }
}
