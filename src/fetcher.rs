use serde::de::DeserializeOwned;
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{AppError, Result};
use crate::types::{Company, DealWorkspace, Event};

/// Reads the three collections from the Data Service.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub async fn companies(&self) -> Result<Vec<Company>> {
        self.get_json("/api/companies").await
    }

    pub async fn events(&self) -> Result<Vec<Event>> {
        self.get_json("/api/events").await
    }

    pub async fn workspaces(&self) -> Result<Vec<DealWorkspace>> {
        self.get_json("/api/workspaces").await
    }

    /// Fetches all three collections concurrently. Any single failure fails
    /// the whole load; no partial dataset is ever returned.
    pub async fn load_dataset(&self) -> Result<Dataset> {
        let (companies, events, workspaces) =
            tokio::try_join!(self.companies(), self.events(), self.workspaces())?;
        Ok(Dataset {
            companies,
            events,
            workspaces,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(AppError::Status {
                path: path.to_string(),
                status: resp.status().as_u16(),
            });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            debug!("{path}: undecodable body: {e}");
            AppError::Json(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::spawn;
    use crate::api::{router, ApiState};
    use axum::{http::StatusCode, routing::get, Json, Router};
    use std::path::Path;

    #[tokio::test]
    async fn loads_the_full_seed_dataset() {
        let base = spawn(router(ApiState::new(Dataset::seed()), Path::new("no-such-dist"))).await;
        let dataset = Fetcher::new(base).unwrap().load_dataset().await.unwrap();
        assert_eq!(dataset, Dataset::seed());
    }

    #[tokio::test]
    async fn one_failing_collection_fails_the_load() {
        let seed = Dataset::seed();
        let companies = seed.companies.clone();
        let workspaces = seed.workspaces.clone();
        let app = Router::new()
            .route("/api/companies", get(move || async move { Json(companies) }))
            .route(
                "/api/events",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/api/workspaces", get(move || async move { Json(workspaces) }));
        let base = spawn(app).await;

        let err = Fetcher::new(base).unwrap().load_dataset().await.unwrap_err();
        match err {
            AppError::Status { path, status } => {
                assert_eq!(path, "/api/events");
                assert_eq!(status, 500);
            }
            other => panic!("expected status error, got {other}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_fails_the_load() {
        let app = Router::new()
            .route("/api/companies", get(|| async { "not json" }))
            .route("/api/events", get(|| async { Json(Vec::<Event>::new()) }))
            .route("/api/workspaces", get(|| async { Json(Vec::<DealWorkspace>::new()) }));
        let base = spawn(app).await;
        let err = Fetcher::new(base).unwrap().load_dataset().await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)), "got {err}");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = Fetcher::new(format!("http://{addr}"))
            .unwrap()
            .load_dataset()
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Http(_)), "got {err}");
    }
}
