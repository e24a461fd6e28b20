use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use tracing::debug;

use crate::features::graphql::schema::AppSchema;

/// Execute a GraphQL request
pub async fn graphql_handler(
    State(schema): State<AppSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    debug!(
        "Executing GraphQL operation: {}",
        request.operation_name.as_deref().unwrap_or("<anonymous>")
    );
    schema.execute(request).await.into()
}

/// GraphiQL IDE
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Schema definition language for the whole API
#[utoipa::path(
    get,
    path = "/graphql/sdl",
    tag = "graphql",
    responses(
        (status = 200, description = "GraphQL SDL", body = String, content_type = "text/plain")
    )
)]
pub async fn get_sdl(State(schema): State<AppSchema>) -> String {
    schema.sdl()
}
