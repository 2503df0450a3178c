//! GraphQL surface: the `health`/`hola` queries and the `seguirCreador`
//! mutation, served over axum with a playground on GET.

use async_graphql::{
    http::{playground_source, GraphQLPlaygroundConfig},
    EmptySubscription, Schema,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    http::HeaderMap,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::{infrastructure::state::AppState, services::follows::FollowService};

pub mod models;
pub mod mutations;
pub mod queries;

pub type PortalSchema = Schema<queries::QueryRoot, mutations::MutationRoot, EmptySubscription>;

pub fn schema(service: FollowService) -> PortalSchema {
    Schema::build(
        queries::QueryRoot,
        mutations::MutationRoot,
        EmptySubscription,
    )
    .data(service)
    .finish()
}

pub fn router(state: &AppState) -> Router {
    let schema = schema(FollowService::from_state(state));
    Router::new()
        .route("/graphql", get(playground).post(handler))
        .layer(Extension(schema))
}

async fn handler(
    Extension(schema): Extension<PortalSchema>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner().data(headers)).await.into()
}

async fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
