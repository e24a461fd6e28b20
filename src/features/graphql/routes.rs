use axum::{
    routing::{get, post},
    Router,
};

use crate::features::graphql::handlers::{get_sdl, graphiql, graphql_handler};
use crate::features::graphql::schema::AppSchema;

/// Create routes for the GraphQL endpoint
pub fn routes(schema: AppSchema, playground: bool) -> Router {
    let endpoint = if playground {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route("/graphql", endpoint)
        .route("/graphql/sdl", get(get_sdl))
        .with_state(schema)
}
