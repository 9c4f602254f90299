//! GraphQL HTTP Routes
//!
//! `POST /graphql` executes a query document; `GET /graphql` serves the
//! GraphiQL IDE for development.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::graphql::YetiSchema;

/// GraphQL routes with the schema as shared state
pub fn graphql_routes(schema: YetiSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphiql_handler).post(graphql_handler))
        .with_state(schema)
}

/// Execute a GraphQL query document
async fn graphql_handler(
    State(schema): State<YetiSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Serve the GraphiQL IDE
async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
