//! Static serving of the packaged single-page application.

use std::path::{Path, PathBuf};

use axum::extract::Request;
use axum::handler::HandlerWithoutStateExt;
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use tower_http::services::ServeDir;
use tracing::debug;

use crate::error::AppError;

pub const PLACEHOLDER_HTML: &str =
    "<h1>DealMind API</h1><p>Build the frontend with \"npm run build\" to serve the SPA.</p>";

/// Installs the SPA as `router`'s fallback: files from `dist_dir`, the entry
/// document for any other path, or the placeholder when no build is present.
/// Paths under `/api` never reach it.
pub fn with_spa<S>(router: Router<S>, dist_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let index = dist_dir.join("index.html");
    let entry = move || serve_entry(index.clone());
    let spa: Router = Router::new()
        .fallback_service(ServeDir::new(dist_dir).fallback(entry.into_service()))
        .layer(middleware::from_fn(reject_api_paths));
    router.fallback_service(spa)
}

async fn reject_api_paths(req: Request, next: Next) -> Response {
    if is_api_path(req.uri().path()) {
        debug!(path = %req.uri().path(), "no API route");
        return AppError::NotFound.into_response();
    }
    next.run(req).await
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

async fn serve_entry(index: PathBuf) -> Response {
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            debug!(path = %index.display(), "no packaged build: {e}");
            Html(PLACEHOLDER_HTML).into_response()
        }
    }
}

/// True when the packaged entry document exists.
pub fn build_present(dist_dir: &Path) -> bool {
    dist_dir.join("index.html").is_file()
}
