use async_graphql::{SimpleObject, ID};

use crate::features::users::models::UserRecord;

/// GraphQL `User` type
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User")]
pub struct UserDto {
    #[graphql(name = "_id")]
    pub id: ID,
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl From<UserRecord> for UserDto {
    fn from(user: UserRecord) -> Self {
        Self {
            id: ID(user.id),
            username: user.username,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
        }
    }
}
