//! Pure functions turning the loaded dataset into what each screen shows.
//! Nothing here is cached; callers recompute on every state change.

pub mod candidates;
pub mod dashboard;
pub mod economics;
pub mod filter;
pub mod modeling;
pub mod ranking;
pub mod resolve;

pub use candidates::{candidate_buyers, CandidateBuyer};
pub use economics::{deal_economics, DealEconomics, DealInputs, ScenarioError};
pub use filter::{filter_companies, sector_options, SectorFilter};
pub use ranking::{recent_events, top_buyers, top_targets, ProbabilityKey, ProbabilityTier};
pub use resolve::{resolve_workspace, ResolvedWorkspace};
