use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::shared::validation::RESOURCE_TYPE_REGEX;

/// Maximum length accepted for a resource id
pub const MAX_RESOURCE_ID_LEN: usize = 128;

/// Database model for uploaded file metadata
#[derive(Debug, Clone, FromRow)]
pub struct AppFileRecord {
    pub id: Uuid,
    pub name: Option<String>,
    /// Storage key inside the bucket
    pub path: String,
    pub size: i64,
    pub mime_type: String,
    /// Generated thumbnail variants, in generation order
    pub thumbs: Json<Vec<StoredThumb>>,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub uploaded_by_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One thumbnail variant as stored in the `thumbs` JSONB column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredThumb {
    pub id: String,
    pub path: String,
}

/// Typed form of the `resource_type` / `resource_id` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    pub resource_type: String,
    pub resource_id: String,
}

impl ResourceRef {
    /// Validate and build a reference from caller-supplied parts
    pub fn parse(resource_type: &str, resource_id: &str) -> Result<Self, AppError> {
        if !RESOURCE_TYPE_REGEX.is_match(resource_type) {
            return Err(AppError::Validation(format!(
                "Invalid resource type '{}': expected a lowercase code like 'report' or 'chat_thread'",
                resource_type
            )));
        }

        if resource_id.is_empty() || resource_id.len() > MAX_RESOURCE_ID_LEN {
            return Err(AppError::Validation(format!(
                "Resource id must be between 1 and {} characters",
                MAX_RESOURCE_ID_LEN
            )));
        }

        Ok(Self {
            resource_type: resource_type.to_string(),
            resource_id: resource_id.to_string(),
        })
    }
}

impl AppFileRecord {
    /// The attached resource, when both halves are present and well-formed
    pub fn resource(&self) -> Option<ResourceRef> {
        match (self.resource_type.as_deref(), self.resource_id.as_deref()) {
            (Some(resource_type), Some(resource_id)) => {
                ResourceRef::parse(resource_type, resource_id).ok()
            }
            _ => None,
        }
    }

    /// Byte count narrowed to a GraphQL `Int`
    pub fn size_as_int(&self) -> Result<i32, AppError> {
        i32::try_from(self.size).map_err(|_| {
            AppError::Internal(format!(
                "File {} has size {} outside the 32-bit Int range",
                self.id, self.size
            ))
        })
    }

    /// Pick thumbnails by id.
    ///
    /// `None` returns every stored thumb in stored order. Otherwise the result
    /// has one slot per requested id, in request order; unknown or null ids
    /// leave their slot empty.
    pub fn select_thumbs(&self, ids: Option<&[Option<String>]>) -> Vec<Option<&StoredThumb>> {
        match ids {
            None => self.thumbs.iter().map(Some).collect(),
            Some(ids) => ids
                .iter()
                .map(|id| {
                    id.as_deref()
                        .and_then(|id| self.thumbs.iter().find(|thumb| thumb.id == id))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_thumbs(thumbs: Vec<StoredThumb>) -> AppFileRecord {
        AppFileRecord {
            id: Uuid::new_v4(),
            name: Some("photo.png".to_string()),
            path: "public/uploads/photo.png".to_string(),
            size: 2048,
            mime_type: "image/png".to_string(),
            thumbs: Json(thumbs),
            resource_type: None,
            resource_id: None,
            uploaded_by_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn thumb(id: &str) -> StoredThumb {
        StoredThumb {
            id: id.to_string(),
            path: format!("public/thumbs/{}.png", id),
        }
    }

    #[test]
    fn test_select_thumbs_without_ids_returns_all() {
        let record = record_with_thumbs(vec![thumb("small"), thumb("large")]);

        let ids: Vec<_> = record
            .select_thumbs(None)
            .into_iter()
            .map(|t| t.map(|t| t.id.as_str()))
            .collect();

        assert_eq!(ids, vec![Some("small"), Some("large")]);
    }

    #[test]
    fn test_select_thumbs_keeps_request_order_and_gaps() {
        let record = record_with_thumbs(vec![thumb("small"), thumb("large")]);
        let requested = vec![
            Some("large".to_string()),
            Some("missing".to_string()),
            None,
            Some("small".to_string()),
            Some("large".to_string()),
        ];

        let ids: Vec<_> = record
            .select_thumbs(Some(requested.as_slice()))
            .into_iter()
            .map(|t| t.map(|t| t.id.as_str()))
            .collect();

        assert_eq!(
            ids,
            vec![Some("large"), None, None, Some("small"), Some("large")]
        );
    }

    #[test]
    fn test_select_thumbs_empty_request_is_empty() {
        let record = record_with_thumbs(vec![thumb("small")]);

        assert!(record.select_thumbs(Some(&[][..])).is_empty());
    }

    #[test]
    fn test_size_as_int_rejects_overflow() {
        let mut record = record_with_thumbs(vec![]);
        assert_eq!(record.size_as_int().unwrap(), 2048);

        record.size = i64::from(i32::MAX) + 1;
        assert!(matches!(record.size_as_int(), Err(AppError::Internal(_))));
    }

    #[test]
    fn test_resource_ref_parse() {
        let reference = ResourceRef::parse("report", "42").unwrap();
        assert_eq!(reference.resource_type, "report");
        assert_eq!(reference.resource_id, "42");

        assert!(ResourceRef::parse(" report", "42").is_err());
        assert!(ResourceRef::parse("Report", "42").is_err());
        assert!(ResourceRef::parse("report", "").is_err());
        assert!(ResourceRef::parse("report", &"x".repeat(MAX_RESOURCE_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_resource_requires_both_halves() {
        let mut record = record_with_thumbs(vec![]);
        assert_eq!(record.resource(), None);

        record.resource_type = Some("report".to_string());
        assert_eq!(record.resource(), None);

        record.resource_id = Some("r-1".to_string());
        assert_eq!(
            record.resource(),
            Some(ResourceRef {
                resource_type: "report".to_string(),
                resource_id: "r-1".to_string(),
            })
        );
    }
}
