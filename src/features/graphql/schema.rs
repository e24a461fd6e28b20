use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::sync::Arc;

use crate::core::config::GraphQLConfig;
use crate::features::files::FileService;
use crate::features::graphql::loaders::UserLoader;
use crate::features::graphql::query::QueryRoot;
use crate::features::users::UserRepository;

/// Executable schema: read-only, no mutations or subscriptions
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Services the resolvers read from
pub struct SchemaDeps {
    pub file_service: Arc<FileService>,
    pub user_repository: Arc<dyn UserRepository>,
}

/// Assemble the schema once at startup
pub fn build_schema(deps: SchemaDeps, config: &GraphQLConfig) -> AppSchema {
    // DataLoader::new has caching disabled, so sharing it across requests only shares batching
    let user_loader = DataLoader::new(UserLoader::new(deps.user_repository), tokio::spawn);

    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(deps.file_service)
        .data(user_loader)
        .limit_depth(config.max_depth)
        .limit_complexity(config.max_complexity)
        .finish()
}

/// SDL text of the schema; needs no services
pub fn export_sdl() -> String {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .finish()
        .sdl()
}
