use crate::config::DASHBOARD_EVENTS;
use crate::dataset::Dataset;
use crate::types::{Company, Event};
use crate::views::ranking::{recent_events, top_buyers, top_targets};

/// A headline tile. Values are fixed illustrative figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub const KPIS: [Kpi; 4] = [
    Kpi { label: "Active Opportunities", value: "24", change: "+3" },
    Kpi { label: "High Probability Targets", value: "12", change: "+2" },
    Kpi { label: "Critical Signals", value: "8", change: "+5" },
    Kpi { label: "Deal Workspaces", value: "6", change: "+1" },
];

/// Everything the dashboard screen shows.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    pub kpis: &'static [Kpi],
    pub top_targets: Vec<&'a Company>,
    pub top_buyers: Vec<&'a Company>,
    pub signals: &'a [Event],
}

pub fn dashboard(dataset: &Dataset) -> Dashboard<'_> {
    let recent = recent_events(&dataset.events);
    Dashboard {
        kpis: &KPIS,
        top_targets: top_targets(&dataset.companies),
        top_buyers: top_buyers(&dataset.companies),
        signals: &recent[..recent.len().min(DASHBOARD_EVENTS)],
    }
}
