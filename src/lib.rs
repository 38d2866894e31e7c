pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fetcher;
pub mod state;
pub mod types;
pub mod views;
