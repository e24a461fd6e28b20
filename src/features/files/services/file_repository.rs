use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::files::models::{AppFileRecord, ResourceRef};

/// Read access to stored file metadata.
///
/// Soft-deleted rows are never returned.
#[async_trait]
pub trait AppFileRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AppFileRecord>>;

    /// Fetch many files at once; order of the result is unspecified
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AppFileRecord>>;

    /// Files attached to a resource, newest first
    async fn list_by_resource(&self, resource: &ResourceRef) -> Result<Vec<AppFileRecord>>;
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, path, size, mime_type, thumbs, resource_type, resource_id,
           uploaded_by_id, created_at, updated_at
    FROM app_files
"#;

/// Postgres-backed repository over the `app_files` table
pub struct PgAppFileRepository {
    pool: PgPool,
}

impl PgAppFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppFileRepository for PgAppFileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AppFileRecord>> {
        let query = format!("{} WHERE id = $1 AND is_active = TRUE", SELECT_COLUMNS);

        let file = sqlx::query_as::<_, AppFileRecord>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(file)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AppFileRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("{} WHERE id = ANY($1) AND is_active = TRUE", SELECT_COLUMNS);

        let files = sqlx::query_as::<_, AppFileRecord>(&query)
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(files)
    }

    async fn list_by_resource(&self, resource: &ResourceRef) -> Result<Vec<AppFileRecord>> {
        let query = format!(
            "{} WHERE resource_type = $1 AND resource_id = $2 AND is_active = TRUE \
             ORDER BY created_at DESC, id",
            SELECT_COLUMNS
        );

        let files = sqlx::query_as::<_, AppFileRecord>(&query)
            .bind(&resource.resource_type)
            .bind(&resource.resource_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(files)
    }
}
