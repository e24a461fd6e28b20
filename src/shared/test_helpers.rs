use async_trait::async_trait;
use chrono::Utc;
use fake::faker::filesystem::en::{FileName, MimeType};
use fake::faker::internet::en::{SafeEmail, Username};
use fake::faker::name::en::Name;
use fake::Fake;
use sqlx::types::Json;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::config::StorageConfig;
use crate::core::error::Result;
use crate::features::files::models::{AppFileRecord, ResourceRef, StoredThumb};
use crate::features::files::{AppFileRepository, FileService};
use crate::features::users::models::UserRecord;
use crate::features::users::UserRepository;
use crate::modules::storage::StorageUrls;

/// Storage URLs pointing at a fake public endpoint; signing happens locally
pub fn test_storage_urls() -> StorageUrls {
    StorageUrls::new(StorageConfig {
        endpoint: "http://minio:9000".to_string(),
        public_endpoint: "https://files.example.com".to_string(),
        access_key: "minioadmin".to_string(),
        secret_key: "minioadmin".to_string(),
        bucket: "app-files".to_string(),
        region: "us-east-1".to_string(),
        public_prefix: "public".to_string(),
        presigned_url_expiry_secs: 600,
    })
    .unwrap()
}

pub fn test_file_service(files: Vec<AppFileRecord>) -> Arc<FileService> {
    Arc::new(FileService::new(
        Arc::new(InMemoryAppFileRepository::new(files)),
        Arc::new(test_storage_urls()),
    ))
}

/// A public file with "small" and "medium" thumbnails and no resource or uploader
pub fn fake_file() -> AppFileRecord {
    let id = Uuid::new_v4();
    let now = Utc::now();

    AppFileRecord {
        id,
        name: Some(FileName().fake()),
        path: format!("public/uploads/{}.bin", id),
        size: (1..50_000_000).fake(),
        mime_type: MimeType().fake(),
        thumbs: Json(vec![
            StoredThumb {
                id: "small".to_string(),
                path: format!("public/thumbs/{}/small.webp", id),
            },
            StoredThumb {
                id: "medium".to_string(),
                path: format!("public/thumbs/{}/medium.webp", id),
            },
        ]),
        resource_type: None,
        resource_id: None,
        uploaded_by_id: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn fake_user() -> UserRecord {
    UserRecord {
        id: Uuid::new_v4().to_string(),
        username: Some(Username().fake()),
        name: Some(Name().fake()),
        email: Some(SafeEmail().fake()),
        avatar: None,
    }
}

pub struct InMemoryAppFileRepository {
    files: Vec<AppFileRecord>,
}

impl InMemoryAppFileRepository {
    pub fn new(files: Vec<AppFileRecord>) -> Self {
        Self { files }
    }
}

#[async_trait]
impl AppFileRepository for InMemoryAppFileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AppFileRecord>> {
        Ok(self.files.iter().find(|file| file.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AppFileRecord>> {
        Ok(self
            .files
            .iter()
            .filter(|file| ids.contains(&file.id))
            .cloned()
            .collect())
    }

    async fn list_by_resource(&self, resource: &ResourceRef) -> Result<Vec<AppFileRecord>> {
        let mut files: Vec<_> = self
            .files
            .iter()
            .filter(|file| {
                file.resource_type.as_deref() == Some(resource.resource_type.as_str())
                    && file.resource_id.as_deref() == Some(resource.resource_id.as_str())
            })
            .cloned()
            .collect();
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(files)
    }
}

pub struct InMemoryUserRepository {
    users: Vec<UserRecord>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<UserRecord>> {
        Ok(self
            .users
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect())
    }
}
