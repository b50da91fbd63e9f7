use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use serde_json::{json, Value};
use service::car::repo::seaorm::SeaOrmCarRepository;
use tower::ServiceExt;

use server::routes::{self, ServerState};

// SQLite in memory, one connection, schema from the real migrations
async fn build_app() -> anyhow::Result<Router> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    let state = ServerState::new(Arc::new(SeaOrmCarRepository::new(db)));
    Ok(routes::build_router(state, tower_http::cors::CorsLayer::very_permissive()))
}

async fn call(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

fn post_car(payload: Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri("/api/cars")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&payload)?))?)
}

fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().uri(uri).body(Body::empty())?)
}

#[tokio::test]
async fn e2e_car_lifecycle_on_sqlite() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_app().await?;

    let (status, created) = call(&app, post_car(json!({"make": "BMW", "model": "320", "year": 2021, "color": "Black"}))?).await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("id assigned");

    let (status, rejected) = call(&app, post_car(json!({"make": "BMW", "model": "M3", "year": 2021, "color": "Black"}))?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected["message"], "Invalid make and model combination");

    let (status, _) = call(&app, post_car(json!({"make": "audi", "model": "A6", "year": 2023, "color": "green"}))?).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, all) = call(&app, get("/api/cars")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(2));

    let (status, y2021) = call(&app, get("/api/cars/year/2021")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(y2021, json!([created.clone()]));

    let (status, fetched) = call(&app, get(&format!("/api/cars/{id}"))?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let delete = Request::builder().method("DELETE").uri(format!("/api/cars/{id}")).body(Body::empty())?;
    let (status, _) = call(&app, delete).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app, get(&format!("/api/cars/{id}"))?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let delete_again = Request::builder().method("DELETE").uri(format!("/api/cars/{id}")).body(Body::empty())?;
    let (status, _) = call(&app, delete_again).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
