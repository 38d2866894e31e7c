use crossterm::event::KeyCode;
use tokio::task::JoinHandle;

use dealmind::dataset::Dataset;
use dealmind::error::AppError;
use dealmind::fetcher::Fetcher;
use dealmind::state::{LoadState, Screen, Session};
use dealmind::views::economics::display;

// ---------------------------------------------------------------------------
// App state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the company search query.
    Search,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    Reload,
    Quit,
}

/// Terminal-only state layered over the session: list cursor, input mode,
/// the last validation notice and the fetch currently in flight.
pub struct App {
    pub session: Session,
    pub fetcher: Fetcher,
    pub cursor: usize,
    pub input: InputMode,
    pub notice: Option<String>,
    pending: Option<JoinHandle<Result<Dataset, AppError>>>,
}

impl App {
    pub fn new(session: Session, fetcher: Fetcher) -> Self {
        Self {
            session,
            fetcher,
            cursor: 0,
            input: InputMode::Normal,
            notice: None,
            pending: None,
        }
    }

    /// Starts fetching all collections in the background. A failed session
    /// retries, which also drops stale selections. Returns false while
    /// another load is pending.
    pub fn start_load(&mut self) -> bool {
        let started = match self.session.load_state() {
            LoadState::Failed { .. } => self.session.retry(),
            _ => self.session.begin_load(),
        };
        if started {
            let fetcher = self.fetcher.clone();
            self.pending = Some(tokio::spawn(async move { fetcher.load_dataset().await }));
        }
        started
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies the pending load once its fetch has finished. Never waits on
    /// an unfinished fetch. Returns true when a result was applied.
    pub async fn poll_load(&mut self) -> bool {
        if !self.pending.as_ref().is_some_and(|h| h.is_finished()) {
            return false;
        }
        let Some(handle) = self.pending.take() else {
            return false;
        };
        match handle.await {
            Ok(Ok(dataset)) => self.session.load_succeeded(dataset),
            Ok(Err(e)) => self.session.load_failed(e),
            Err(e) => self.session.load_failed(e),
        }
        self.clamp_cursor();
        true
    }

    /// Abandons the fetch in flight, if any.
    pub fn cancel_load(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Command {
        if self.input == InputMode::Search {
            self.handle_search_key(code);
            return Command::None;
        }
        self.notice = None;

        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Command::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => return Command::Reload,
            _ => {}
        }
        if !self.session.is_ready() {
            return Command::None;
        }

        match code {
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.go(Screen::NAV[index]);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.row_count().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(max);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Enter => self.activate(),
            KeyCode::Esc | KeyCode::Backspace => {
                let before = self.session.screen();
                self.session.back();
                if self.session.screen() != before {
                    self.cursor = 0;
                }
            }
            KeyCode::Char('/') => {
                self.go(Screen::Companies);
                self.input = InputMode::Search;
            }
            KeyCode::Char('s') if self.session.screen() == Screen::Companies => {
                self.session.cycle_sector();
                self.clamp_cursor();
            }
            KeyCode::Char('w') => {
                self.session.toggle_watchlist();
            }
            KeyCode::Char('c') if self.session.screen() == Screen::Company => {
                self.create_workspace();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let result = self.session.step_offer_price(1);
                self.note(result);
            }
            KeyCode::Char('-') => {
                let result = self.session.step_offer_price(-1);
                self.note(result);
            }
            KeyCode::Char(']') => {
                let result = self.session.step_cash_portion(1);
                self.note(result);
            }
            KeyCode::Char('[') => {
                let result = self.session.step_cash_portion(-1);
                self.note(result);
            }
            KeyCode::Tab if self.session.screen() == Screen::Modeling => {
                let next = self.session.model().next();
                self.session.set_model(next);
            }
            _ => {}
        }
        Command::None
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.input = InputMode::Normal,
            KeyCode::Backspace => {
                let mut query = self.session.search().to_string();
                query.pop();
                self.session.set_search(query);
            }
            KeyCode::Char(c) => {
                let query = format!("{}{c}", self.session.search());
                self.session.set_search(query);
            }
            _ => {}
        }
        self.clamp_cursor();
    }

    fn go(&mut self, screen: Screen) {
        if self.session.screen() != screen {
            self.session.navigate(screen);
            self.cursor = 0;
        }
    }

    fn note<E: std::fmt::Display>(&mut self, result: Result<(), E>) {
        if let Err(e) = result {
            self.notice = Some(e.to_string());
        }
    }

    /// Ids behind the rows of the current screen's list, in display order.
    pub fn row_ids(&self) -> Vec<u32> {
        let s = &self.session;
        match s.screen() {
            Screen::Dashboard => {
                let view = s.dashboard();
                view.top_targets
                    .iter()
                    .chain(view.top_buyers.iter())
                    .map(|c| c.id)
                    .collect()
            }
            Screen::Companies => s.filtered_companies().iter().map(|c| c.id).collect(),
            Screen::Company => s.candidates().iter().map(|c| c.company.id).collect(),
            Screen::Workspaces => s.dataset().workspaces.iter().map(|w| w.id).collect(),
            Screen::Radar => s.dataset().events.iter().map(|e| e.id).collect(),
            Screen::Watchlist => s.watchlist_companies().iter().map(|c| c.id).collect(),
            Screen::Workspace | Screen::Modeling => Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_ids().len()
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.row_count().saturating_sub(1));
    }

    fn activate(&mut self) {
        let Some(&id) = self.row_ids().get(self.cursor) else {
            return;
        };
        let opened = match self.session.screen() {
            Screen::Dashboard | Screen::Companies | Screen::Watchlist => self.session.view_company(id),
            Screen::Company => self.create_workspace(),
            Screen::Workspaces => self.session.open_workspace(id),
            Screen::Radar => self.session.view_event_company(id),
            Screen::Workspace | Screen::Modeling => false,
        };
        if opened {
            self.cursor = 0;
        }
    }

    fn create_workspace(&mut self) -> bool {
        let Some(&buyer_id) = self.row_ids().get(self.cursor) else {
            return false;
        };
        match self.session.create_workspace(buyer_id) {
            Some(_) => {
                self.cursor = 0;
                true
            }
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Market cap style figure in billions.
pub fn format_billions(v: f64) -> String {
    format!("${v}B")
}

/// Revenue / EBITDA style figure in millions.
pub fn format_millions(v: f64) -> String {
    format!("${v}M")
}

pub fn format_change(pct: f64) -> String {
    if pct >= 0.0 {
        format!("▲ {:.1}%", pct.abs())
    } else {
        format!("▼ {:.1}%", pct.abs())
    }
}

/// An optional metric with its unit, or a bare `n/a` when it does not apply.
pub fn format_metric(value: Option<f64>, decimals: usize, prefix: &str, suffix: &str) -> String {
    match value {
        Some(_) => format!("{prefix}{}{suffix}", display(value, decimals)),
        None => display(None, decimals),
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
