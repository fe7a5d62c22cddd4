use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    errors::AppResult,
    models::domain::{User, UserRole},
};

/// User fields for insertion; the id is assigned by the database.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub telegram_id: i64,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub role: UserRole,
    pub course_id: Option<i32>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
}

const USER_COLUMNS: &str =
    "id, telegram_id, name, surname, username, email, hashed_password, role, \
     course_id, is_active, is_superuser, is_verified";

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> AppResult<User>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;
    async fn find_by_telegram_id(&self, telegram_id: i64) -> AppResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<User>>;
    async fn update(&self, user: &User) -> AppResult<()>;
    async fn update_password_hash(&self, id: i32, hashed_password: &str) -> AppResult<()>;
    async fn delete_by_telegram_id(&self, telegram_id: i64) -> AppResult<u64>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> AppResult<User> {
        let query = format!(
            "INSERT INTO \"user\" (telegram_id, name, surname, username, email, \
             hashed_password, role, course_id, is_active, is_superuser, is_verified) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {USER_COLUMNS}"
        );

        let created = sqlx::query_as::<_, User>(&query)
            .bind(user.telegram_id)
            .bind(&user.name)
            .bind(&user.surname)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.hashed_password)
            .bind(user.role)
            .bind(user.course_id)
            .bind(user.is_active)
            .bind(user.is_superuser)
            .bind(user.is_verified)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM \"user\" WHERE id = $1");
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_by_telegram_id(&self, telegram_id: i64) -> AppResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM \"user\" WHERE telegram_id = $1");
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(telegram_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM \"user\" WHERE username = $1");
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM \"user\" WHERE email = $1");
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<User>> {
        let query =
            format!("SELECT {USER_COLUMNS} FROM \"user\" ORDER BY id OFFSET $1 LIMIT $2");
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(skip)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        sqlx::query(
            "UPDATE \"user\" SET telegram_id = $1, name = $2, surname = $3, username = $4, \
             email = $5, hashed_password = $6, role = $7, course_id = $8, is_active = $9, \
             is_superuser = $10, is_verified = $11 WHERE id = $12",
        )
        .bind(user.telegram_id)
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .bind(user.role)
        .bind(user.course_id)
        .bind(user.is_active)
        .bind(user.is_superuser)
        .bind(user.is_verified)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_password_hash(&self, id: i32, hashed_password: &str) -> AppResult<()> {
        sqlx::query("UPDATE \"user\" SET hashed_password = $1 WHERE id = $2")
            .bind(hashed_password)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_by_telegram_id(&self, telegram_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM \"user\" WHERE telegram_id = $1")
            .bind(telegram_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
