//! # Garden Backend
//!
//! The table service behind the garden journal screens.
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (plant and journal services)
//!     ↓
//! Storage Layer (SQLite through sqlx)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::GardenConfig;
use crate::domain::{JournalService, PlantService};
use crate::storage::{DbConnection, JournalRepository, PlantRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub plant_service: PlantService,
    pub journal_service: JournalService,
}

impl AppState {
    pub fn new(db: DbConnection, max_active_plants: usize) -> Self {
        let plant_service = PlantService::new(
            Arc::new(PlantRepository::new(db.clone())),
            max_active_plants,
        );
        let journal_service = JournalService::new(Arc::new(JournalRepository::new(db)));

        Self {
            plant_service,
            journal_service,
        }
    }
}

/// Open the database and wire up the services
pub async fn initialize_backend(config: &GardenConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!(
        "Setting up domain model (max {} active plants)",
        config.max_active_plants
    );
    Ok(AppState::new(db, config.max_active_plants))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &GardenConfig) -> Result<Router> {
    let origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid frontend origin: {}", config.frontend_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/plants", get(io::list_plants).post(io::create_plant))
        .route("/plants/:id", patch(io::update_plant_state))
        .route("/journals", get(io::list_journals).post(io::create_journal))
        .route("/journals/:id", get(io::get_journal))
        .route("/settings", get(io::get_settings))
        .route("/logs", post(io::log_message));

    let mut app = Router::new().nest("/api", api_routes);
    if let Some(static_dir) = &config.static_dir {
        info!("Serving frontend from {}", static_dir.display());
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    Ok(app
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde::de::DeserializeOwned;
    use serde_json::json;
    use shared::{
        ApiErrorResponse, GardenSettings, JournalEntry, JournalListResponse, Plant,
        PlantListResponse, PlantState,
    };
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        create_router(AppState::new(db, 2), &GardenConfig::default()).expect("Failed to build router")
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
        serde_json::from_slice(bytes).expect("Response was not the expected JSON")
    }

    async fn plant(app: &Router, label: &str) -> Plant {
        let (status, body) = send(app, "POST", "/api/plants", Some(json!({ "label": label }))).await;
        assert_eq!(status, StatusCode::CREATED);
        parse(&body)
    }

    #[tokio::test]
    async fn test_journal_insert_returns_id() {
        let app = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/journals",
            Some(json!({ "content": "Meals feel scary lately\nmore text" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created: JournalEntry = parse(&body);
        assert!(!created.id.is_empty());

        let (status, body) = send(&app, "GET", &format!("/api/journals/{}", created.id), None).await;
        assert_eq!(status, StatusCode::OK);
        let loaded: JournalEntry = parse(&body);
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn test_blank_journal_is_bad_request() {
        let app = test_app().await;

        let (status, body) = send(&app, "POST", "/api/journals", Some(json!({ "content": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiErrorResponse = parse(&body);
        assert_eq!(error.message, "Write anything, even one word");
    }

    #[tokio::test]
    async fn test_missing_journal_is_not_found() {
        let app = test_app().await;

        let (status, body) = send(&app, "GET", "/api/journals/does-not-exist", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ApiErrorResponse = parse(&body);
        assert!(error.message.contains("does-not-exist"));
    }

    #[tokio::test]
    async fn test_recent_journals_limited_to_five() {
        let app = test_app().await;
        for i in 0..6 {
            send(&app, "POST", "/api/journals", Some(json!({ "content": format!("entry {}", i) }))).await;
        }

        let (status, body) = send(&app, "GET", "/api/journals", None).await;
        assert_eq!(status, StatusCode::OK);
        let listed: JournalListResponse = parse(&body);
        assert_eq!(listed.journals.len(), 5);
        assert_eq!(listed.journals[0].content, "entry 5");
    }

    #[tokio::test]
    async fn test_plants_listed_newest_first() {
        let app = test_app().await;
        plant(&app, "first").await;
        plant(&app, "second").await;

        let (status, body) = send(&app, "GET", "/api/plants", None).await;
        assert_eq!(status, StatusCode::OK);
        let listed: PlantListResponse = parse(&body);
        let labels: Vec<&str> = listed.plants.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["second", "first"]);
        assert!(listed.plants.iter().all(|p| p.state == PlantState::Seed));
    }

    #[tokio::test]
    async fn test_activation_cap_over_http() {
        let app = test_app().await;
        let a = plant(&app, "a").await;
        let b = plant(&app, "b").await;
        let c = plant(&app, "c").await;

        for p in [&a, &b] {
            let (status, body) = send(
                &app,
                "PATCH",
                &format!("/api/plants/{}", p.id),
                Some(json!({ "state": "active" })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            let updated: Plant = parse(&body);
            assert_eq!(updated.state, PlantState::Active);
        }

        let (status, body) = send(
            &app,
            "PATCH",
            &format!("/api/plants/{}", c.id),
            Some(json!({ "state": "active" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        let error: ApiErrorResponse = parse(&body);
        assert_eq!(error.message, "Let's focus on 2 plants at a time");

        // Resting always works, and frees a slot
        let (status, _) = send(
            &app,
            "PATCH",
            &format!("/api/plants/{}", a.id),
            Some(json!({ "state": "seed" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            "PATCH",
            &format!("/api/plants/{}", c.id),
            Some(json!({ "state": "active" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_state_is_rejected() {
        let app = test_app().await;
        let a = plant(&app, "a").await;

        let (status, _) = send(
            &app,
            "PATCH",
            &format!("/api/plants/{}", a.id),
            Some(json!({ "state": "resting" })),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_settings_report_cap() {
        let app = test_app().await;
        let (status, body) = send(&app, "GET", "/api/settings", None).await;
        assert_eq!(status, StatusCode::OK);
        let settings: GardenSettings = parse(&body);
        assert_eq!(settings.max_active_plants, 2);
    }

    #[tokio::test]
    async fn test_log_sink_accepts_messages() {
        let app = test_app().await;
        let (status, _) = send(
            &app,
            "POST",
            "/api/logs",
            Some(json!({ "level": "warn", "message": "hello", "component": "garden" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_origin_is_an_error() {
        let db = DbConnection::init_test().await.unwrap();
        let config = GardenConfig {
            frontend_origin: "bad\norigin".to_string(),
            ..GardenConfig::default()
        };
        assert!(create_router(AppState::new(db, 2), &config).is_err());
    }
}
