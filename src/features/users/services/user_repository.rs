use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::users::models::UserRecord;

/// Batch lookup of users by id
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Unknown ids are omitted from the result
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<UserRecord>>;
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
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<UserRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, name, email, avatar
            FROM users
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
