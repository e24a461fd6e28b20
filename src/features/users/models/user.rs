use sqlx::FromRow;

/// Database model for users synced from the identity provider
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    /// Identity provider subject
    pub id: String,
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}
