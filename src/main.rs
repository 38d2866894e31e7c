use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use dealmind::api::spa::build_present;
use dealmind::api::{router, ApiState};
use dealmind::config::Config;
use dealmind::dataset::Dataset;
use dealmind::error::Result;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Config error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    let dataset = Dataset::seed();
    info!(
        companies = dataset.companies.len(),
        events = dataset.events.len(),
        workspaces = dataset.workspaces.len(),
        "Dataset seeded"
    );

    if build_present(&cfg.dist_dir) {
        info!("Serving SPA from {}", cfg.dist_dir.display());
    } else {
        warn!(
            "No SPA build in {}; non-API paths get the placeholder page",
            cfg.dist_dir.display()
        );
    }

    let app = router(ApiState::new(dataset), &cfg.dist_dir);
    let bind_addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("DealMind API listening on http://{bind_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
