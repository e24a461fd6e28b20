use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use std::sync::Arc;

use crate::features::files::dtos::AppFileThumbDto;
use crate::features::files::models::AppFileRecord;
use crate::features::files::FileService;
use crate::features::graphql::loaders::UserLoader;
use crate::features::graphql::scalars::Date;
use crate::features::users::dtos::UserDto;

/// GraphQL `AppFile`: metadata of an uploaded file
pub struct AppFile(pub AppFileRecord);

impl From<AppFileRecord> for AppFile {
    fn from(record: AppFileRecord) -> Self {
        Self(record)
    }
}

#[Object(name = "AppFile")]
impl AppFile {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    async fn path(&self) -> &str {
        &self.0.path
    }

    async fn download_url(&self, ctx: &Context<'_>) -> Result<String> {
        let service = ctx.data::<Arc<FileService>>()?;
        service.download_url(&self.0).await.map_err(|e| e.extend())
    }

    async fn size(&self) -> Result<i32> {
        self.0.size_as_int().map_err(|e| e.extend())
    }

    async fn mime_type(&self) -> &str {
        &self.0.mime_type
    }

    /// Thumbnails by variant id. Without `ids`, every thumbnail; with `ids`,
    /// one entry per id in request order, `null` where no variant matches.
    async fn thumbs(
        &self,
        ctx: &Context<'_>,
        ids: Option<Vec<Option<String>>>,
    ) -> Result<Vec<Option<AppFileThumbDto>>> {
        let service = ctx.data::<Arc<FileService>>()?;
        service
            .resolve_thumbs(&self.0, ids.as_deref())
            .await
            .map_err(|e| e.extend())
    }

    async fn resource_type(&self) -> Option<&str> {
        self.0.resource_type.as_deref()
    }

    async fn resource_id(&self) -> Option<&str> {
        self.0.resource_id.as_deref()
    }

    async fn uploaded_by_id(&self) -> Option<&str> {
        self.0.uploaded_by_id.as_deref()
    }

    async fn uploaded_by(&self, ctx: &Context<'_>) -> Result<Option<UserDto>> {
        let Some(user_id) = self.0.uploaded_by_id.clone() else {
            return Ok(None);
        };

        let loader = ctx.data::<DataLoader<UserLoader>>()?;
        loader.load_one(user_id).await.map_err(|e| e.extend())
    }

    async fn created_at(&self) -> Option<Date> {
        Some(Date(self.0.created_at))
    }

    async fn updated_at(&self) -> Option<Date> {
        Some(Date(self.0.updated_at))
    }
}
