use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

/// A covered company. Market cap is in billions, revenue and EBITDA in millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: u32,
    pub name: String,
    pub ticker: String,
    pub sector: String,
    pub region: String,
    pub market_cap: f64,
    pub revenue: f64,
    pub ebitda: f64,
    pub ebitda_margin: f64,
    pub leverage: f64,
    /// Likelihood (0–100) of becoming a target within 12 months.
    pub deal_prob_target: u8,
    /// Likelihood (0–100) of launching an acquisition within 12 months.
    pub deal_prob_buyer: u8,
    pub recent_events: Vec<String>,
    pub last_price: f64,
    /// Percent change of the last traded price.
    pub change: f64,
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Impact::High => "High",
            Impact::Medium => "Medium",
            Impact::Low => "Low",
        };
        write!(f, "{s}")
    }
}

/// A market signal attached to a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    pub company_id: u32,
    /// Denormalized company name.
    pub company: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Relative display string such as "2 days ago". Not orderable.
    pub date: String,
    pub impact: Impact,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Deal workspaces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkspaceStatus {
    Active,
    Draft,
}

impl std::fmt::Display for WorkspaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkspaceStatus::Active => write!(f, "Active"),
            WorkspaceStatus::Draft => write!(f, "Draft"),
        }
    }
}

/// One side of a deal. Seeded workspaces name the company; workspaces created
/// in a session carry the full record. On the wire this is either a JSON
/// string or a company object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Party {
    Name(String),
    Company(Box<Company>),
}

impl Party {
    pub fn name(&self) -> &str {
        match self {
            Party::Name(name) => name,
            Party::Company(company) => &company.name,
        }
    }

    pub fn id(&self) -> Option<u32> {
        match self {
            Party::Name(_) => None,
            Party::Company(company) => Some(company.id),
        }
    }
}

impl From<&Company> for Party {
    fn from(company: &Company) -> Self {
        Party::Company(Box::new(company.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealWorkspace {
    pub id: u32,
    pub buyer: Party,
    pub target: Party,
    pub status: WorkspaceStatus,
    pub fit_score: u32,
    /// Estimated synergies in millions.
    pub synergies: u32,
    pub created_date: String,
}

impl DealWorkspace {
    /// "Buyer → Target" headline used by the workspace list.
    pub fn title(&self) -> String {
        format!("{} → {}", self.buyer.name(), self.target.name())
    }
}
