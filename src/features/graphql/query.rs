use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::features::files::models::ResourceRef;
use crate::features::files::FileService;
use crate::features::graphql::types::AppFile;

fn parse_file_id(id: &ID) -> std::result::Result<Uuid, AppError> {
    Uuid::parse_str(id.as_str())
        .map_err(|_| AppError::BadRequest(format!("Invalid file id '{}'", id.as_str())))
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single file, `null` when it does not exist
    async fn app_file(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "_id")] id: ID,
    ) -> Result<Option<AppFile>> {
        let service = ctx.data::<Arc<FileService>>()?;
        let id = parse_file_id(&id).map_err(|e| e.extend())?;

        let file = service.find_file(id).await.map_err(|e| e.extend())?;
        Ok(file.map(AppFile::from))
    }

    /// Several files at once, one entry per id in request order
    async fn app_files(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "_ids")] ids: Vec<ID>,
    ) -> Result<Vec<Option<AppFile>>> {
        let service = ctx.data::<Arc<FileService>>()?;
        let ids = ids
            .iter()
            .map(parse_file_id)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| e.extend())?;

        let files = service.get_files(&ids).await.map_err(|e| e.extend())?;
        Ok(files
            .into_iter()
            .map(|file| file.map(AppFile::from))
            .collect())
    }

    /// Files attached to a resource, newest first
    async fn app_files_by_resource(
        &self,
        ctx: &Context<'_>,
        resource_type: String,
        resource_id: String,
    ) -> Result<Vec<AppFile>> {
        let service = ctx.data::<Arc<FileService>>()?;
        let resource = ResourceRef::parse(&resource_type, &resource_id).map_err(|e| e.extend())?;

        let files = service
            .list_for_resource(&resource)
            .await
            .map_err(|e| e.extend())?;
        Ok(files.into_iter().map(AppFile::from).collect())
    }
}
