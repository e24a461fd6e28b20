use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::files::dtos::{AppFileResponseDto, ListFilesQuery};
use crate::features::files::models::ResourceRef;
use crate::features::files::services::FileService;
use crate::shared::types::{ApiResponse, Meta};

/// Get file metadata by id
#[utoipa::path(
    get,
    path = "/api/files/{id}",
    tag = "files",
    params(
        ("id" = Uuid, Path, description = "File id")
    ),
    responses(
        (status = 200, description = "File metadata", body = ApiResponse<AppFileResponseDto>),
        (status = 400, description = "Invalid file id"),
        (status = 404, description = "File not found")
    )
)]
pub async fn get_file(
    State(service): State<Arc<FileService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AppFileResponseDto>>, AppError> {
    let file = service.get_file(id).await?;
    let response = service.to_response_dto(file).await?;

    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// List the files attached to a resource
#[utoipa::path(
    get,
    path = "/api/files",
    tag = "files",
    params(ListFilesQuery),
    responses(
        (status = 200, description = "Files attached to the resource", body = ApiResponse<Vec<AppFileResponseDto>>),
        (status = 400, description = "Invalid resource reference")
    )
)]
pub async fn list_files(
    State(service): State<Arc<FileService>>,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<ApiResponse<Vec<AppFileResponseDto>>>, AppError> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let resource = ResourceRef::parse(&query.resource_type, &query.resource_id)?;
    let files = service.list_for_resource(&resource).await?;

    let mut responses = Vec::with_capacity(files.len());
    for file in files {
        responses.push(service.to_response_dto(file).await?);
    }

    let total = responses.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(responses),
        None,
        Some(Meta { total }),
    )))
}

#[cfg(test)]
mod tests {
    use crate::features::files::dtos::AppFileResponseDto;
    use crate::features::files::routes;
    use crate::shared::test_helpers::{fake_file, test_file_service};
    use crate::shared::types::ApiResponse;
    use axum_test::TestServer;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_get_file_returns_metadata() {
        let file = fake_file();
        let server = TestServer::new(routes(test_file_service(vec![file.clone()]))).unwrap();

        let response = server.get(&format!("/api/files/{}", file.id)).await;

        response.assert_status_ok();
        let body: ApiResponse<AppFileResponseDto> = response.json();
        assert!(body.success);
        let data = body.data.unwrap();
        assert_eq!(data.id, file.id);
        assert_eq!(data.mime_type, file.mime_type);
        assert_eq!(data.thumbs.len(), file.thumbs.len());
    }

    #[tokio::test]
    async fn test_get_file_uses_camel_case_fields() {
        let file = fake_file();
        let server = TestServer::new(routes(test_file_service(vec![file.clone()]))).unwrap();

        let response = server.get(&format!("/api/files/{}", file.id)).await;

        let body: serde_json::Value = response.json();
        assert!(body["data"]["downloadUrl"].is_string());
        assert!(body["data"]["mimeType"].is_string());
        assert!(body["data"]["thumbs"][0]["downloadUrl"].is_string());
    }

    #[tokio::test]
    async fn test_get_file_not_found() {
        let server = TestServer::new(routes(test_file_service(vec![]))).unwrap();

        let response = server.get(&format!("/api/files/{}", Uuid::new_v4())).await;

        response.assert_status_not_found();
        let body: ApiResponse<()> = response.json();
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("File not found"));
    }

    #[tokio::test]
    async fn test_list_files_by_resource() {
        let mut attached = fake_file();
        attached.resource_type = Some("report".to_string());
        attached.resource_id = Some("r-1".to_string());
        let server = TestServer::new(routes(test_file_service(vec![
            attached.clone(),
            fake_file(),
        ])))
        .unwrap();

        let response = server
            .get("/api/files")
            .add_query_param("resourceType", "report")
            .add_query_param("resourceId", "r-1")
            .await;

        response.assert_status_ok();
        let body: ApiResponse<Vec<AppFileResponseDto>> = response.json();
        assert_eq!(body.meta.unwrap().total, 1);
        let data = body.data.unwrap();
        assert_eq!(data[0].id, attached.id);
        assert_eq!(data[0].resource.as_ref().unwrap().resource_id, "r-1");
    }

    #[tokio::test]
    async fn test_list_files_rejects_bad_resource_type() {
        let server = TestServer::new(routes(test_file_service(vec![]))).unwrap();

        let response = server
            .get("/api/files")
            .add_query_param("resourceType", "Not A Code")
            .add_query_param("resourceId", "r-1")
            .await;

        response.assert_status_bad_request();
        let body: ApiResponse<()> = response.json();
        assert!(body.errors.is_some());
    }

    #[tokio::test]
    async fn test_list_files_rejects_padded_resource_type() {
        let server = TestServer::new(routes(test_file_service(vec![]))).unwrap();

        let response = server
            .get("/api/files")
            .add_query_param("resourceType", " report")
            .add_query_param("resourceId", "r-1")
            .await;

        response.assert_status_bad_request();
    }
}
