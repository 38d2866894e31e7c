pub mod session;
pub mod watchlist;

pub use session::{LoadState, Screen, Session, SessionConfig, WorkspaceView, LOAD_FAILED_MESSAGE};
pub use watchlist::Watchlist;
