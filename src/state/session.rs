use tracing::{debug, warn};

use crate::config::{CASH_PORTION_STEP, DEFAULT_WATCHLIST, OFFER_PRICE_STEP};
use crate::dataset::Dataset;
use crate::state::watchlist::Watchlist;
use crate::types::{Company, DealWorkspace, Party, WorkspaceStatus};
use crate::views::candidates::{candidate_buyers, CandidateBuyer};
use crate::views::dashboard::{dashboard, Dashboard};
use crate::views::economics::{deal_economics, DealEconomics, DealInputs, ScenarioError};
use crate::views::filter::{filter_companies, next_sector, sector_options, SectorFilter};
use crate::views::modeling::ModelKind;
use crate::views::resolve::{event_company, resolve_workspace, watchlist_companies, ResolvedWorkspace};

/// Shown whenever any of the three collections fails to load.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load data. Please try again.";

// ---------------------------------------------------------------------------
// Screens and load state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Companies,
    Company,
    Workspaces,
    Workspace,
    Radar,
    Modeling,
    Watchlist,
}

impl Screen {
    /// Screens reachable from the navigation bar, in display order.
    pub const NAV: [Screen; 6] = [
        Screen::Dashboard,
        Screen::Companies,
        Screen::Workspaces,
        Screen::Radar,
        Screen::Modeling,
        Screen::Watchlist,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Companies => "Companies",
            Screen::Company => "Company Profile",
            Screen::Workspaces => "Deal Workspaces",
            Screen::Workspace => "Deal Analysis",
            Screen::Radar => "Signal Radar",
            Screen::Modeling => "Modeling Tools",
            Screen::Watchlist => "Watchlist",
        }
    }

    /// The navigation entry highlighted while this screen is open.
    pub fn nav_parent(self) -> Screen {
        match self {
            Screen::Company => Screen::Companies,
            Screen::Workspace => Screen::Workspaces,
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    /// `detail` is the underlying transport error, for diagnostics only.
    Failed { detail: String },
    Ready,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub default_watchlist: Vec<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_watchlist: DEFAULT_WATCHLIST.to_vec(),
        }
    }
}

/// What the workspace detail screen can show for the selected workspace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkspaceView<'a> {
    /// Buyer or target did not match a known company.
    Unavailable(&'a DealWorkspace),
    Ready {
        resolved: ResolvedWorkspace<'a>,
        inputs: DealInputs,
        economics: DealEconomics,
    },
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// All per-session state of the client: load status, the loaded dataset,
/// navigation, selections, filters, watchlist and simulator inputs.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    load: LoadState,
    in_flight: bool,
    dataset: Dataset,
    screen: Screen,
    selected_company: Option<u32>,
    selected_workspace: Option<DealWorkspace>,
    simulator: Option<DealInputs>,
    search: String,
    sector: SectorFilter,
    watchlist: Watchlist,
    model: ModelKind,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            load: LoadState::Loading,
            in_flight: false,
            dataset: Dataset::default(),
            screen: Screen::Dashboard,
            selected_company: None,
            selected_workspace: None,
            simulator: None,
            search: String::new(),
            sector: SectorFilter::All,
            watchlist: Watchlist::new(),
            model: ModelKind::default(),
        }
    }

    // --- loading -----------------------------------------------------------

    /// Marks a load as started. Returns false if one is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.load = LoadState::Loading;
        true
    }

    /// Installs a complete load. Workspace parties are resolved to company
    /// records here so later reads never branch on the name-only shape.
    pub fn load_succeeded(&mut self, mut dataset: Dataset) {
        dataset.resolve_parties();
        debug!(
            companies = dataset.companies.len(),
            events = dataset.events.len(),
            workspaces = dataset.workspaces.len(),
            "dataset loaded"
        );
        self.in_flight = false;
        self.dataset = dataset;
        self.load = LoadState::Ready;
        self.watchlist
            .seed_defaults(&self.dataset.companies, &self.config.default_watchlist);
    }

    /// Discards every collection; no screen renders from a partial load.
    pub fn load_failed(&mut self, detail: impl std::fmt::Display) {
        warn!("dataset load failed: {detail}");
        self.in_flight = false;
        self.dataset = Dataset::default();
        self.load = LoadState::Failed {
            detail: detail.to_string(),
        };
    }

    /// Clears stale selections and starts a new load.
    pub fn retry(&mut self) -> bool {
        self.clear_selections();
        self.begin_load()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_ready(&self) -> bool {
        self.load == LoadState::Ready
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    // --- navigation --------------------------------------------------------

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Switches screens. Leaving the company or workspace screen drops its selection.
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        if screen != Screen::Company {
            self.selected_company = None;
        }
        if screen != Screen::Workspace {
            self.selected_workspace = None;
            self.simulator = None;
        }
    }

    pub fn back(&mut self) {
        match self.screen {
            Screen::Company => self.navigate(Screen::Companies),
            Screen::Workspace => self.navigate(Screen::Workspaces),
            _ => {}
        }
    }

    /// Opens the profile of company `id`. Returns false for unknown ids.
    pub fn view_company(&mut self, id: u32) -> bool {
        if self.dataset.company(id).is_none() {
            return false;
        }
        self.navigate(Screen::Company);
        self.selected_company = Some(id);
        true
    }

    /// Opens the company an event refers to, if it can be found.
    pub fn view_event_company(&mut self, event_id: u32) -> bool {
        let company_id = self
            .dataset
            .events
            .iter()
            .find(|e| e.id == event_id)
            .and_then(|e| event_company(e, &self.dataset.companies))
            .map(|c| c.id);
        match company_id {
            Some(id) => self.view_company(id),
            None => false,
        }
    }

    /// Opens a workspace from the loaded collection.
    pub fn open_workspace(&mut self, id: u32) -> bool {
        let Some(workspace) = self.dataset.workspace(id).cloned() else {
            return false;
        };
        self.select_workspace(workspace);
        true
    }

    /// Starts a draft workspace pairing `buyer_id` with the selected company.
    /// The buyer must be one of that company's candidate buyers; the draft
    /// carries the candidate's scores. Returns the new workspace id.
    pub fn create_workspace(&mut self, buyer_id: u32) -> Option<u32> {
        let target = self.selected_company()?;
        let candidate = candidate_buyers(&self.dataset.companies, target)
            .into_iter()
            .find(|c| c.company.id == buyer_id)?;
        let id = self.next_workspace_id();
        let workspace = DealWorkspace {
            id,
            buyer: Party::from(candidate.company),
            target: Party::from(target),
            status: WorkspaceStatus::Draft,
            fit_score: candidate.fit_score,
            synergies: candidate.synergies,
            created_date: "Today".to_string(),
        };
        debug!(workspace = id, title = %workspace.title(), "draft workspace created");
        self.select_workspace(workspace);
        Some(id)
    }

    fn select_workspace(&mut self, workspace: DealWorkspace) {
        self.navigate(Screen::Workspace);
        self.simulator = resolve_workspace(&workspace, &self.dataset.companies)
            .map(|r| DealInputs::for_target(r.target));
        self.selected_workspace = Some(workspace);
    }

    fn next_workspace_id(&self) -> u32 {
        let loaded = self.dataset.workspaces.iter().map(|w| w.id);
        let selected = self.selected_workspace.iter().map(|w| w.id);
        loaded.chain(selected).max().unwrap_or(0) + 1
    }

    fn clear_selections(&mut self) {
        self.selected_company = None;
        self.selected_workspace = None;
        self.simulator = None;
    }

    pub fn selected_company(&self) -> Option<&Company> {
        self.selected_company.and_then(|id| self.dataset.company(id))
    }

    pub fn selected_workspace(&self) -> Option<&DealWorkspace> {
        self.selected_workspace.as_ref()
    }

    // --- companies screen --------------------------------------------------

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn sector(&self) -> &SectorFilter {
        &self.sector
    }

    pub fn cycle_sector(&mut self) {
        self.sector = next_sector(&self.dataset.companies, &self.sector);
    }

    pub fn sector_options(&self) -> Vec<SectorFilter> {
        sector_options(&self.dataset.companies)
    }

    pub fn filtered_companies(&self) -> Vec<&Company> {
        filter_companies(&self.dataset.companies, &self.search, &self.sector)
    }

    // --- derived views -----------------------------------------------------

    pub fn dashboard(&self) -> Dashboard<'_> {
        dashboard(&self.dataset)
    }

    /// Candidate buyers for the selected company.
    pub fn candidates(&self) -> Vec<CandidateBuyer<'_>> {
        match self.selected_company() {
            Some(target) => candidate_buyers(&self.dataset.companies, target),
            None => Vec::new(),
        }
    }

    pub fn workspace_view(&self) -> Option<WorkspaceView<'_>> {
        let workspace = self.selected_workspace.as_ref()?;
        let view = match (resolve_workspace(workspace, &self.dataset.companies), self.simulator) {
            (Some(resolved), Some(inputs)) => WorkspaceView::Ready {
                resolved,
                inputs,
                economics: deal_economics(&inputs, resolved.target, resolved.buyer),
            },
            _ => WorkspaceView::Unavailable(workspace),
        };
        Some(view)
    }

    // --- watchlist ---------------------------------------------------------

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    /// Toggles the selected company. Returns its new membership.
    pub fn toggle_watchlist(&mut self) -> Option<bool> {
        let id = self.selected_company()?.id;
        Some(self.watchlist.toggle(id))
    }

    pub fn watchlist_companies(&self) -> Vec<&Company> {
        watchlist_companies(&self.dataset.companies, self.watchlist.ids())
    }

    // --- scenario simulator ------------------------------------------------

    pub fn set_offer_price(&mut self, offer_price: f64) -> Result<(), ScenarioError> {
        if let Some(inputs) = self.simulator {
            self.simulator = Some(inputs.with_offer_price(offer_price)?);
        }
        Ok(())
    }

    pub fn set_cash_portion(&mut self, cash_portion: u8) -> Result<(), ScenarioError> {
        if let Some(inputs) = self.simulator {
            self.simulator = Some(inputs.with_cash_portion(cash_portion)?);
        }
        Ok(())
    }

    /// Moves the offer price by `steps` increments of 0.50.
    pub fn step_offer_price(&mut self, steps: i32) -> Result<(), ScenarioError> {
        match self.simulator {
            Some(inputs) => {
                self.set_offer_price(inputs.offer_price() + f64::from(steps) * OFFER_PRICE_STEP)
            }
            None => Ok(()),
        }
    }

    /// Moves the cash portion by `steps` increments of 5, clamped to 0..=100.
    pub fn step_cash_portion(&mut self, steps: i32) -> Result<(), ScenarioError> {
        match self.simulator {
            Some(inputs) => {
                let next = i32::from(inputs.cash_portion()) + steps * i32::from(CASH_PORTION_STEP);
                self.set_cash_portion(next.clamp(0, 100) as u8)
            }
            None => Ok(()),
        }
    }

    // --- modeling tools ----------------------------------------------------

    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub fn set_model(&mut self, model: ModelKind) {
        self.model = model;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> Session {
        let mut session = Session::default();
        assert!(session.begin_load());
        session.load_succeeded(Dataset::seed());
        session
    }

    #[test]
    fn starts_loading_on_dashboard() {
        let session = Session::default();
        assert_eq!(session.load_state(), &LoadState::Loading);
        assert_eq!(session.screen(), Screen::Dashboard);
        assert!(session.watchlist().is_empty());
    }

    #[test]
    fn only_one_load_in_flight() {
        let mut session = Session::default();
        assert!(session.begin_load());
        assert!(!session.begin_load());
        session.load_failed("connection refused");
        assert!(session.begin_load());
    }

    #[test]
    fn first_load_seeds_watchlist() {
        let session = ready();
        assert_eq!(session.watchlist().ids(), &[1, 4]);
        let names: Vec<&str> = session
            .watchlist_companies()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["TechVision Corp", "SecureNet GmbH"]);
    }

    #[test]
    fn reload_does_not_reseed_an_emptied_watchlist() {
        let mut session = ready();
        for id in [1, 4] {
            assert!(session.view_company(id));
            assert_eq!(session.toggle_watchlist(), Some(false));
        }
        assert!(session.watchlist().is_empty());

        assert!(session.begin_load());
        session.load_succeeded(Dataset::seed());
        assert!(session.watchlist().is_empty());
    }

    #[test]
    fn loaded_workspaces_carry_company_records() {
        let session = ready();
        let ws = &session.dataset().workspaces[1];
        assert_eq!(ws.buyer.id(), Some(5));
        assert_eq!(ws.target.id(), Some(2));
        assert_eq!(ws.title(), "AIWare Solutions → DataFlow Systems");
    }

    #[test]
    fn failed_load_discards_everything() {
        let mut session = ready();
        session.begin_load();
        session.load_failed("GET /api/events: 500");
        assert!(matches!(session.load_state(), LoadState::Failed { .. }));
        assert!(session.dataset().companies.is_empty());
        assert!(session.dataset().events.is_empty());
        assert!(session.dataset().workspaces.is_empty());
    }

    #[test]
    fn retry_clears_selections_and_reloads() {
        let mut session = ready();
        session.view_company(4);
        session.begin_load();
        session.load_failed("timeout");
        assert!(session.retry());
        assert_eq!(session.load_state(), &LoadState::Loading);
        assert!(session.selected_company().is_none());
        assert!(session.selected_workspace().is_none());
    }

    #[test]
    fn leaving_company_screen_clears_selection() {
        let mut session = ready();
        assert!(session.view_company(2));
        assert_eq!(session.screen(), Screen::Company);
        assert_eq!(session.selected_company().unwrap().id, 2);

        session.navigate(Screen::Companies);
        assert!(session.selected_company().is_none());

        assert!(session.view_company(5));
        assert_eq!(session.selected_company().unwrap().id, 5);
        assert_eq!(session.candidates().iter().filter(|c| c.company.id == 5).count(), 0);
    }

    #[test]
    fn back_returns_to_list_screens() {
        let mut session = ready();
        session.view_company(1);
        session.back();
        assert_eq!(session.screen(), Screen::Companies);
        assert!(session.selected_company().is_none());

        session.open_workspace(1);
        session.back();
        assert_eq!(session.screen(), Screen::Workspaces);
        assert!(session.selected_workspace().is_none());
    }

    #[test]
    fn unknown_company_is_ignored() {
        let mut session = ready();
        assert!(!session.view_company(99));
        assert_eq!(session.screen(), Screen::Dashboard);
    }

    #[test]
    fn radar_event_opens_its_company() {
        let mut session = ready();
        assert!(session.view_event_company(4));
        assert_eq!(session.selected_company().unwrap().name, "CloudScale Inc");
        assert!(!session.view_event_company(404));
    }

    #[test]
    fn seeded_workspace_runs_simulator_with_defaults() {
        let mut session = ready();
        assert!(session.open_workspace(1));
        match session.workspace_view() {
            Some(WorkspaceView::Ready { resolved, inputs, economics }) => {
                assert_eq!(resolved.buyer.name, "CloudScale Inc");
                assert_eq!(resolved.target.name, "SecureNet GmbH");
                assert_eq!(inputs.cash_portion(), 70);
                assert_eq!(economics.premium, Some(30.0));
            }
            other => panic!("expected ready workspace, got {other:?}"),
        }
    }

    #[test]
    fn simulator_recomputes_on_input_change() {
        let mut session = ready();
        session.open_workspace(1);
        session.set_offer_price(30.49).unwrap();
        session.set_cash_portion(100).unwrap();
        let Some(WorkspaceView::Ready { economics, .. }) = session.workspace_view() else {
            panic!("workspace should resolve");
        };
        assert_eq!(economics.transaction_value, Some(1.17));
        assert_eq!(economics.cash_consideration, Some(1.17));

        session.step_cash_portion(-3).unwrap();
        let Some(WorkspaceView::Ready { inputs, .. }) = session.workspace_view() else {
            panic!("workspace should resolve");
        };
        assert_eq!(inputs.cash_portion(), 85);
    }

    #[test]
    fn invalid_offer_keeps_previous_inputs() {
        let mut session = ready();
        session.open_workspace(2);
        assert!(session.set_offer_price(-5.0).is_err());
        let Some(WorkspaceView::Ready { inputs, .. }) = session.workspace_view() else {
            panic!("workspace should resolve");
        };
        assert!((inputs.offer_price() - 32.15 * 1.3).abs() < 1e-9);
    }

    #[test]
    fn created_workspace_uses_candidate_scores() {
        let mut session = ready();
        session.view_company(4);
        let candidate = session.candidates()[0].clone();
        let (buyer_id, fit, synergies) =
            (candidate.company.id, candidate.fit_score, candidate.synergies);

        let id = session.create_workspace(buyer_id).unwrap();
        assert_eq!(id, 3);
        assert_eq!(session.screen(), Screen::Workspace);
        let ws = session.selected_workspace().unwrap();
        assert_eq!(ws.status, WorkspaceStatus::Draft);
        assert_eq!(ws.fit_score, fit);
        assert_eq!(ws.synergies, synergies);
        assert_eq!(ws.target.id(), Some(4));
        assert!(matches!(session.workspace_view(), Some(WorkspaceView::Ready { .. })));
    }

    #[test]
    fn non_candidate_cannot_start_a_workspace() {
        let mut session = ready();
        session.view_company(4);
        assert_eq!(session.create_workspace(1), None);
        assert_eq!(session.create_workspace(4), None);
        assert_eq!(session.screen(), Screen::Company);
    }

    #[test]
    fn unresolvable_workspace_reports_unavailable() {
        let mut session = Session::default();
        session.begin_load();
        let mut ds = Dataset::seed();
        ds.workspaces[0].buyer = Party::Name("Ghost Holdings".to_string());
        session.load_succeeded(ds);
        session.open_workspace(1);
        assert!(matches!(session.workspace_view(), Some(WorkspaceView::Unavailable(_))));
        assert!(session.set_offer_price(10.0).is_ok());
    }

    #[test]
    fn search_and_sector_filter_the_company_list() {
        let mut session = ready();
        session.set_search("tech");
        assert_eq!(session.filtered_companies().len(), 2);
        session.cycle_sector();
        assert_eq!(session.sector().label(), "Software");
        let ids: Vec<u32> = session.filtered_companies().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(session.sector_options().len(), 7);
    }
}
