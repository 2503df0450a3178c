use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use creators_portal::{
    api,
    infrastructure::{
        config::{AppConfig, AuthConfig, Config, DatabaseConfig},
        state::AppState,
    },
};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

#[path = "test_harness.rs"]
mod test_harness;

use test_harness::run_test;

#[tokio::test]
async fn health_and_hola_answer_without_credentials() -> Result<()> {
    run_test(run_scenario).await
}

async fn run_scenario(pool: PgPool) -> Result<()> {
    let config = Arc::new(Config {
        app: AppConfig::default(),
        database: DatabaseConfig {
            url: "postgres://integration".to_string(),
            max_connections: 5,
        },
        auth: AuthConfig {
            jwt_secret: "integration-secret".to_string(),
            jwt_ttl_seconds: 3_600,
        },
    });
    let state = Arc::new(AppState::new(Arc::clone(&config), pool));
    let app = api::build_router(state);

    let liveness = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .expect("failed to build liveness request"),
        )
        .await
        .expect("service error");
    assert_eq!(liveness.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({
                        "query": "{ hola health { status serverTime } }"
                    })
                    .to_string(),
                ))
                .expect("failed to build graphql request"),
        )
        .await
        .expect("service error");
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), 1024 * 1024).await?;
    let json: Value = serde_json::from_slice(&body)?;

    assert_eq!(json["data"]["hola"], "Mundo");
    assert_eq!(json["data"]["health"]["status"], "OPERATIONAL");
    let server_time = json["data"]["health"]["serverTime"].as_str().unwrap();
    chrono::NaiveDateTime::parse_from_str(server_time, "%Y-%m-%d %H:%M:%S")
        .expect("server time should use the YYYY-MM-DD HH:MM:SS format");

    Ok(())
}
