use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::files::models::ResourceRef;
use crate::shared::validation::RESOURCE_TYPE_REGEX;

/// One generated thumbnail variant of a file.
///
/// Doubles as the GraphQL `AppFileThumb` type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "AppFileThumb")]
pub struct AppFileThumbDto {
    /// Thumbnail variant id (e.g., "small", "256x256")
    pub id: String,
    /// Storage key of the thumbnail
    pub path: String,
    /// URL to fetch the thumbnail
    pub download_url: String,
}

/// Typed resource attachment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRefDto {
    pub resource_type: String,
    pub resource_id: String,
}

impl From<ResourceRef> for ResourceRefDto {
    fn from(resource: ResourceRef) -> Self {
        Self {
            resource_type: resource.resource_type,
            resource_id: resource.resource_id,
        }
    }
}

/// Response DTO for file metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppFileResponseDto {
    /// Unique identifier for the file
    pub id: Uuid,
    /// Display name
    pub name: Option<String>,
    /// Storage key of the file
    pub path: String,
    /// URL to fetch the file (direct for public keys, presigned otherwise)
    pub download_url: String,
    /// Size of the file in bytes
    pub size: i64,
    /// MIME type of the file
    pub mime_type: String,
    /// Every generated thumbnail
    pub thumbs: Vec<AppFileThumbDto>,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    /// Present only when both resource fields are set and well-formed
    pub resource: Option<ResourceRefDto>,
    pub uploaded_by_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for listing the files attached to a resource
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListFilesQuery {
    /// Resource type code (e.g., "report")
    #[validate(regex(
        path = *RESOURCE_TYPE_REGEX,
        message = "resourceType must be a lowercase code like 'report'"
    ))]
    pub resource_type: String,

    /// Resource id
    #[validate(length(
        min = 1,
        max = 128,
        message = "resourceId must be between 1 and 128 characters"
    ))]
    pub resource_id: String,
}
