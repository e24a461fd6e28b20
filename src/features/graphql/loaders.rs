use async_graphql::dataloader::Loader;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::users::dtos::UserDto;
use crate::features::users::UserRepository;

/// Batches `AppFile.uploadedBy` lookups into one query per tick
pub struct UserLoader {
    repository: Arc<dyn UserRepository>,
}

impl UserLoader {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

impl Loader<String> for UserLoader {
    type Value = UserDto;
    type Error = Arc<AppError>;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        debug!("Batch loading {} users", keys.len());

        let users = self.repository.find_by_ids(keys).await.map_err(Arc::new)?;

        Ok(users
            .into_iter()
            .map(|user| (user.id.clone(), UserDto::from(user)))
            .collect())
    }
}
