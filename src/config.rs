use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Directory holding the packaged single-page application build.
pub const DIST_DIR: &str = "dist";

/// Base URL the terminal client talks to when `API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Size of the dashboard rankings and the candidate-buyer list.
pub const TOP_N: usize = 5;

/// Number of events kept by the recent-events view.
pub const RECENT_EVENTS: usize = 6;

/// Of the recent events, how many the dashboard actually shows.
pub const DASHBOARD_EVENTS: usize = 5;

/// Companies with a buyer probability at or below this never appear as candidate buyers.
pub const CANDIDATE_MIN_BUYER_PROB: u8 = 40;

/// Illustrative pro-forma leverage uplift applied to the buyer's current leverage.
pub const PRO_FORMA_LEVERAGE_MULTIPLIER: f64 = 1.4;

/// The scenario simulator opens at a 30% premium to the last traded price.
pub const DEFAULT_OFFER_PREMIUM: f64 = 1.3;

/// Initial cash share of the consideration, in percent.
pub const DEFAULT_CASH_PORTION: u8 = 70;

/// Offer price step for the simulator's +/- keys.
pub const OFFER_PRICE_STEP: f64 = 0.5;

/// Cash portion step for the simulator's [/] keys.
pub const CASH_PORTION_STEP: u8 = 5;

/// Illustrative synergy multiple shown on every workspace.
pub const SYNERGY_MULTIPLE: f64 = 8.5;

/// Companies watchlisted the first time the company collection loads.
pub const DEFAULT_WATCHLIST: &[u32] = &[1, 4];

/// Synthetic candidate scores: `min + (hash % span)`.
pub mod candidate_scores {
    pub const FIT_MIN: u32 = 60;
    pub const FIT_SPAN: u32 = 30;
    pub const SYNERGIES_MIN: u32 = 20;
    pub const SYNERGIES_SPAN: u32 = 50;
}

/// Probability thresholds (strictly greater than) for the colour tiers.
pub mod probability_tiers {
    pub const TARGET_HIGH: u8 = 70;
    pub const TARGET_MEDIUM: u8 = 50;
    pub const BUYER_HIGH: u8 = 60;
    pub const BUYER_MEDIUM: u8 = 40;
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            port,
            dist_dir: PathBuf::from(DIST_DIR),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DIST_DIR),
        }
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| AppError::Config(format!("PORT must be a valid port number, got {raw:?}")))
}

/// Settings for the terminal client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}
