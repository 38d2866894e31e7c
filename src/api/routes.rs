use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::spa::with_spa;
use crate::dataset::Dataset;
use crate::error::AppError;
use crate::types::{Company, DealWorkspace, Event};

#[derive(Clone)]
pub struct ApiState {
    pub dataset: Arc<Dataset>,
}

impl ApiState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

/// Read-only JSON API under `/api`, everything else served from `dist_dir`.
pub fn router(state: ApiState, dist_dir: &Path) -> Router {
    let api = Router::new()
        .route("/companies", get(get_companies))
        .route("/events", get(get_events))
        .route("/workspaces", get(get_workspaces))
        .fallback(api_not_found);

    with_spa(Router::new().nest("/api", api), dist_dir)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn get_companies(State(state): State<ApiState>) -> Json<Vec<Company>> {
    Json(state.dataset.companies.clone())
}

async fn get_events(State(state): State<ApiState>) -> Json<Vec<Event>> {
    Json(state.dataset.events.clone())
}

async fn get_workspaces(State(state): State<ApiState>) -> Json<Vec<DealWorkspace>> {
    Json(state.dataset.workspaces.clone())
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    debug!(path = %uri.path(), "no API route");
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{scratch_dir, spawn};
    use crate::api::spa::PLACEHOLDER_HTML;
    use reqwest::StatusCode;

    async fn seeded(dist_dir: &Path) -> String {
        spawn(router(ApiState::new(Dataset::seed()), dist_dir)).await
    }

    #[tokio::test]
    async fn companies_are_served_in_seed_order() {
        let base = seeded(Path::new("no-such-dist")).await;
        let resp = reqwest::get(format!("{base}/api/companies")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0]["name"], "TechVision Corp");
        assert_eq!(items[3]["ticker"], "SCNT");
        assert_eq!(items[3]["marketCap"], 0.9);
        assert_eq!(items[3]["dealProbTarget"], 85);
    }

    #[tokio::test]
    async fn events_and_workspaces_use_seed_shapes() {
        let base = seeded(Path::new("no-such-dist")).await;
        let events: serde_json::Value = reqwest::get(format!("{base}/api/events"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(events.as_array().unwrap().len(), 6);
        assert_eq!(events[0]["type"], "Credit Downgrade");
        assert_eq!(events[0]["companyId"], 4);

        let workspaces: serde_json::Value = reqwest::get(format!("{base}/api/workspaces"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(workspaces[0]["buyer"], "CloudScale Inc");
        assert_eq!(workspaces[1]["target"], "DataFlow Systems");
    }

    #[tokio::test]
    async fn unknown_api_paths_are_json_404() {
        let base = seeded(Path::new("no-such-dist")).await;
        for path in ["/api", "/api/", "/api/deals", "/api/companies/1"] {
            let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{path}");
            let body: serde_json::Value = resp.json().await.unwrap();
            assert_eq!(body, serde_json::json!({ "message": "Not found" }), "{path}");
        }
    }

    #[tokio::test]
    async fn missing_build_serves_placeholder() {
        let base = seeded(Path::new("no-such-dist")).await;
        for path in ["/", "/companies/4"] {
            let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK, "{path}");
            assert_eq!(resp.text().await.unwrap(), PLACEHOLDER_HTML);
        }
    }

    #[tokio::test]
    async fn packaged_build_serves_assets_and_entry_document() {
        let dist = scratch_dir("routes-dist");
        std::fs::write(dist.join("index.html"), "<html>spa</html>").unwrap();
        std::fs::write(dist.join("app.js"), "console.log('spa')").unwrap();

        let base = seeded(&dist).await;
        let root = reqwest::get(format!("{base}/")).await.unwrap();
        assert_eq!(root.text().await.unwrap(), "<html>spa</html>");
        let asset = reqwest::get(format!("{base}/app.js")).await.unwrap();
        assert_eq!(asset.text().await.unwrap(), "console.log('spa')");
        let deep_link = reqwest::get(format!("{base}/watchlist")).await.unwrap();
        assert_eq!(deep_link.status(), StatusCode::OK);
        assert_eq!(deep_link.text().await.unwrap(), "<html>spa</html>");

        let api_root = reqwest::get(format!("{base}/api/")).await.unwrap();
        assert_eq!(api_root.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = api_root.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Not found" }));

        let _ = std::fs::remove_dir_all(&dist);
    }
}
