use utoipa::{Modify, OpenApi};

use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::features::graphql::handlers as graphql_handlers;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Files
        files_handlers::get_file,
        files_handlers::list_files,
        // GraphQL
        graphql_handlers::get_sdl,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Files
            files_dtos::AppFileThumbDto,
            files_dtos::ResourceRefDto,
            files_dtos::AppFileResponseDto,
            ApiResponse<files_dtos::AppFileResponseDto>,
            ApiResponse<Vec<files_dtos::AppFileResponseDto>>,
        )
    ),
    tags(
        (name = "files", description = "Uploaded file metadata (read-only)"),
        (name = "graphql", description = "GraphQL schema; queries go to POST /graphql"),
    ),
    info(
        title = "App Files API",
        version = "0.1.0",
        description = "Read API for uploaded file metadata",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_read_endpoints() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/files/{id}"));
        assert!(doc.paths.paths.contains_key("/api/files"));
        assert!(doc.paths.paths.contains_key("/graphql/sdl"));
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();

        SwaggerInfoModifier {
            title: "Files".to_string(),
            version: "9.9.9".to_string(),
            description: "custom".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Files");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("custom"));
    }
}
