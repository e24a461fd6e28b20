use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::files::dtos::{AppFileResponseDto, AppFileThumbDto, ResourceRefDto};
use crate::features::files::models::{AppFileRecord, ResourceRef, StoredThumb};
use crate::features::files::services::AppFileRepository;
use crate::modules::storage::StorageUrls;

/// Read-side service for file metadata and download URLs
pub struct FileService {
    repository: Arc<dyn AppFileRepository>,
    storage: Arc<StorageUrls>,
}

impl FileService {
    pub fn new(repository: Arc<dyn AppFileRepository>, storage: Arc<StorageUrls>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    /// Look up a file, `None` when absent or soft-deleted
    pub async fn find_file(&self, id: Uuid) -> Result<Option<AppFileRecord>> {
        debug!("Looking up file: id={}", id);
        self.repository.find_by_id(id).await
    }

    /// Look up a file, failing with `NotFound` when absent
    pub async fn get_file(&self, id: Uuid) -> Result<AppFileRecord> {
        self.find_file(id)
            .await?
            .ok_or_else(|| AppError::NotFound("File not found".to_string()))
    }

    /// Batch lookup; the result has one slot per requested id, in request order
    pub async fn get_files(&self, ids: &[Uuid]) -> Result<Vec<Option<AppFileRecord>>> {
        let mut unique = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        debug!("Looking up {} files ({} unique)", ids.len(), unique.len());

        let found: HashMap<Uuid, AppFileRecord> = self
            .repository
            .find_by_ids(&unique)
            .await?
            .into_iter()
            .map(|file| (file.id, file))
            .collect();

        Ok(ids.iter().map(|id| found.get(id).cloned()).collect())
    }

    /// Files attached to the given resource, newest first
    pub async fn list_for_resource(&self, resource: &ResourceRef) -> Result<Vec<AppFileRecord>> {
        let files = self.repository.list_by_resource(resource).await?;

        debug!(
            "Found {} files for resource {}:{}",
            files.len(),
            resource.resource_type,
            resource.resource_id
        );

        Ok(files)
    }

    /// Fully-resolved URL for the file itself
    pub async fn download_url(&self, file: &AppFileRecord) -> Result<String> {
        self.storage.download_url(&file.path).await
    }

    /// Resolve `thumbs(ids)` for a file, attaching download URLs.
    ///
    /// See [`AppFileRecord::select_thumbs`] for slot semantics.
    pub async fn resolve_thumbs(
        &self,
        file: &AppFileRecord,
        ids: Option<&[Option<String>]>,
    ) -> Result<Vec<Option<AppFileThumbDto>>> {
        let mut resolved = Vec::new();

        for thumb in file.select_thumbs(ids) {
            let dto = match thumb {
                Some(thumb) => Some(self.thumb_dto(thumb).await?),
                None => None,
            };
            resolved.push(dto);
        }

        Ok(resolved)
    }

    async fn thumb_dto(&self, thumb: &StoredThumb) -> Result<AppFileThumbDto> {
        Ok(AppFileThumbDto {
            id: thumb.id.clone(),
            path: thumb.path.clone(),
            download_url: self.storage.download_url(&thumb.path).await?,
        })
    }

    /// Build the REST representation, with every thumbnail resolved
    pub async fn to_response_dto(&self, file: AppFileRecord) -> Result<AppFileResponseDto> {
        let download_url = self.download_url(&file).await?;
        let thumbs = self
            .resolve_thumbs(&file, None)
            .await?
            .into_iter()
            .flatten()
            .collect();
        let resource = file.resource().map(ResourceRefDto::from);

        Ok(AppFileResponseDto {
            id: file.id,
            name: file.name,
            path: file.path,
            download_url,
            size: file.size,
            mime_type: file.mime_type,
            thumbs,
            resource_type: file.resource_type,
            resource_id: file.resource_id,
            resource,
            uploaded_by_id: file.uploaded_by_id,
            created_at: file.created_at,
            updated_at: file.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{fake_file, test_storage_urls, InMemoryAppFileRepository};

    fn service_with(files: Vec<AppFileRecord>) -> FileService {
        FileService::new(
            Arc::new(InMemoryAppFileRepository::new(files)),
            Arc::new(test_storage_urls()),
        )
    }

    #[tokio::test]
    async fn test_get_file_not_found() {
        let service = service_with(vec![]);

        let result = service.get_file(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_files_preserves_request_order() {
        let first = fake_file();
        let second = fake_file();
        let missing = Uuid::new_v4();
        let service = service_with(vec![first.clone(), second.clone()]);

        let files = service
            .get_files(&[second.id, missing, first.id, second.id])
            .await
            .unwrap();

        let ids: Vec<_> = files.iter().map(|f| f.as_ref().map(|f| f.id)).collect();
        assert_eq!(
            ids,
            vec![Some(second.id), None, Some(first.id), Some(second.id)]
        );
    }

    #[tokio::test]
    async fn test_resolve_thumbs_attaches_download_urls() {
        let file = fake_file();
        let service = service_with(vec![file.clone()]);
        let requested = vec![Some("small".to_string()), Some("nope".to_string())];

        let thumbs = service
            .resolve_thumbs(&file, Some(requested.as_slice()))
            .await
            .unwrap();

        assert_eq!(thumbs.len(), 2);
        let small = thumbs[0].as_ref().unwrap();
        assert_eq!(small.id, "small");
        assert_eq!(
            small.download_url,
            format!("https://files.example.com/app-files/{}", small.path)
        );
        assert!(thumbs[1].is_none());
    }

    #[tokio::test]
    async fn test_list_for_resource_filters() {
        let mut attached = fake_file();
        attached.resource_type = Some("report".to_string());
        attached.resource_id = Some("r-1".to_string());
        let other = fake_file();
        let service = service_with(vec![attached.clone(), other]);

        let files = service
            .list_for_resource(&ResourceRef::parse("report", "r-1").unwrap())
            .await
            .unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].id, attached.id);
    }

    #[tokio::test]
    async fn test_to_response_dto() {
        let mut file = fake_file();
        file.resource_type = Some("report".to_string());
        file.resource_id = Some("r-9".to_string());
        let service = service_with(vec![file.clone()]);

        let dto = service.to_response_dto(file.clone()).await.unwrap();

        assert_eq!(dto.id, file.id);
        assert_eq!(dto.thumbs.len(), file.thumbs.len());
        assert_eq!(
            dto.download_url,
            format!("https://files.example.com/app-files/{}", file.path)
        );
        let resource = dto.resource.unwrap();
        assert_eq!(resource.resource_type, "report");
        assert_eq!(resource.resource_id, "r-9");
    }
}
