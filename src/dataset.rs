//! The static sample dataset served by the API.

use serde::{Deserialize, Serialize};

use crate::types::{Company, DealWorkspace, Event, Impact, Party, WorkspaceStatus};

/// All three collections, in seed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub companies: Vec<Company>,
    pub events: Vec<Event>,
    pub workspaces: Vec<DealWorkspace>,
}

impl Dataset {
    pub fn seed() -> Self {
        Self {
            companies: seed_companies(),
            events: seed_events(),
            workspaces: seed_workspaces(),
        }
    }

    pub fn company(&self, id: u32) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn workspace(&self, id: u32) -> Option<&DealWorkspace> {
        self.workspaces.iter().find(|w| w.id == id)
    }

    /// Replaces name-only workspace parties with the matching company record.
    /// Names that match no company stay as they are.
    pub fn resolve_parties(&mut self) {
        for ws in &mut self.workspaces {
            for party in [&mut ws.buyer, &mut ws.target] {
                let found = match &*party {
                    Party::Name(name) => self.companies.iter().find(|c| c.name == *name),
                    Party::Company(_) => None,
                };
                if let Some(company) = found {
                    *party = Party::from(company);
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn company(
    id: u32,
    name: &str,
    ticker: &str,
    sector: &str,
    region: &str,
    (market_cap, revenue, ebitda, ebitda_margin, leverage): (f64, f64, f64, f64, f64),
    (deal_prob_target, deal_prob_buyer): (u8, u8),
    recent_events: [&str; 2],
    (last_price, change): (f64, f64),
) -> Company {
    Company {
        id,
        name: name.to_string(),
        ticker: ticker.to_string(),
        sector: sector.to_string(),
        region: region.to_string(),
        market_cap,
        revenue,
        ebitda,
        ebitda_margin,
        leverage,
        deal_prob_target,
        deal_prob_buyer,
        recent_events: recent_events.iter().map(|e| e.to_string()).collect(),
        last_price,
        change,
    }
}

fn seed_companies() -> Vec<Company> {
    vec![
        company(
            1,
            "TechVision Corp",
            "TVIS",
            "Software",
            "North America",
            (2.5, 450.0, 135.0, 30.0, 1.2),
            (78, 23),
            ["CEO Change", "Activist Entry"],
            (45.3, 2.3),
        ),
        company(
            2,
            "DataFlow Systems",
            "DFLW",
            "Data Analytics",
            "Europe",
            (1.8, 320.0, 96.0, 30.0, 0.8),
            (65, 45),
            ["Strong Earnings", "Product Launch"],
            (32.15, -1.2),
        ),
        company(
            3,
            "CloudScale Inc",
            "CLSC",
            "Cloud Infrastructure",
            "North America",
            (4.2, 780.0, 156.0, 20.0, 2.1),
            (42, 67),
            ["Acquisition Announced", "Debt Raised"],
            (78.9, 5.1),
        ),
        company(
            4,
            "SecureNet GmbH",
            "SCNT",
            "Cybersecurity",
            "Europe",
            (0.9, 180.0, 45.0, 25.0, 0.5),
            (85, 12),
            ["Credit Downgrade", "CFO Departure"],
            (23.45, -3.8),
        ),
        company(
            5,
            "AIWare Solutions",
            "AIWS",
            "AI/ML",
            "North America",
            (3.1, 520.0, 130.0, 25.0, 1.5),
            (55, 58),
            ["Patent Filing", "Revenue Beat"],
            (61.2, 4.2),
        ),
        company(
            6,
            "FinTech Innovations",
            "FTIN",
            "FinTech",
            "Asia",
            (1.2, 240.0, 60.0, 25.0, 1.8),
            (71, 28),
            ["Regulatory Approval", "Management Change"],
            (28.75, 1.5),
        ),
    ]
}

fn event(
    id: u32,
    company_id: u32,
    company: &str,
    kind: &str,
    date: &str,
    impact: Impact,
    description: &str,
) -> Event {
    Event {
        id,
        company_id,
        company: company.to_string(),
        kind: kind.to_string(),
        date: date.to_string(),
        impact,
        description: description.to_string(),
    }
}

fn seed_events() -> Vec<Event> {
    vec![
        event(
            1,
            4,
            "SecureNet GmbH",
            "Credit Downgrade",
            "2 days ago",
            Impact::High,
            "Moody's downgraded from BBB+ to BBB due to declining margins",
        ),
        event(
            2,
            1,
            "TechVision Corp",
            "CEO Change",
            "5 days ago",
            Impact::High,
            "Former CFO appointed as CEO, strategic review announced",
        ),
        event(
            3,
            1,
            "TechVision Corp",
            "Activist Entry",
            "1 week ago",
            Impact::High,
            "Valor Capital acquired 8.5% stake, pushing for strategic alternatives",
        ),
        event(
            4,
            3,
            "CloudScale Inc",
            "Acquisition",
            "3 days ago",
            Impact::Medium,
            "Acquired EdgeCompute for $450M to expand edge computing capabilities",
        ),
        event(
            5,
            6,
            "FinTech Innovations",
            "Management Change",
            "1 week ago",
            Impact::Medium,
            "New COO hired from payments industry leader",
        ),
        event(
            6,
            5,
            "AIWare Solutions",
            "Patent Filing",
            "4 days ago",
            Impact::Low,
            "Filed 12 new AI-related patents in generative AI space",
        ),
    ]
}

fn seed_workspaces() -> Vec<DealWorkspace> {
    vec![
        DealWorkspace {
            id: 1,
            buyer: Party::Name("CloudScale Inc".to_string()),
            target: Party::Name("SecureNet GmbH".to_string()),
            status: WorkspaceStatus::Active,
            fit_score: 87,
            synergies: 45,
            created_date: "Nov 28, 2024".to_string(),
        },
        DealWorkspace {
            id: 2,
            buyer: Party::Name("AIWare Solutions".to_string()),
            target: Party::Name("DataFlow Systems".to_string()),
            status: WorkspaceStatus::Active,
            fit_score: 72,
            synergies: 38,
            created_date: "Nov 25, 2024".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let ds = Dataset::seed();
        let company_ids: HashSet<u32> = ds.companies.iter().map(|c| c.id).collect();
        let event_ids: HashSet<u32> = ds.events.iter().map(|e| e.id).collect();
        assert_eq!(company_ids.len(), ds.companies.len());
        assert_eq!(event_ids.len(), ds.events.len());
    }

    #[test]
    fn seed_events_reference_known_companies() {
        let ds = Dataset::seed();
        for e in &ds.events {
            let company = ds.company(e.company_id).expect("event company exists");
            assert_eq!(company.name, e.company, "event {} denormalized name", e.id);
        }
    }

    #[test]
    fn seed_workspaces_name_known_companies() {
        let ds = Dataset::seed();
        for w in &ds.workspaces {
            for party in [&w.buyer, &w.target] {
                assert!(ds.companies.iter().any(|c| c.name == party.name()), "workspace {}", w.id);
            }
        }
    }

    #[test]
    fn resolve_parties_attaches_company_records() {
        let mut ds = Dataset::seed();
        ds.workspaces[1].target = Party::Name("Ghost Holdings".to_string());
        ds.resolve_parties();
        assert_eq!(ds.workspaces[0].buyer.id(), Some(3));
        assert_eq!(ds.workspaces[0].target.id(), Some(4));
        assert_eq!(ds.workspaces[1].buyer.id(), Some(5));
        assert_eq!(ds.workspaces[1].target, Party::Name("Ghost Holdings".to_string()));
    }

    #[test]
    fn seeded_workspaces_serialize_parties_as_strings() {
        let json = serde_json::to_value(seed_workspaces()).unwrap();
        assert_eq!(json[0]["buyer"], "CloudScale Inc");
        assert_eq!(json[0]["target"], "SecureNet GmbH");
        assert_eq!(json[0]["fitScore"], 87);
        assert_eq!(json[1]["createdDate"], "Nov 25, 2024");
    }
}
