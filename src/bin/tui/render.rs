use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs, Wrap},
    Frame,
};

use dealmind::config::SYNERGY_MULTIPLE;
use dealmind::state::{LoadState, Screen, WorkspaceView, LOAD_FAILED_MESSAGE};
use dealmind::types::{Company, Event, Impact};
use dealmind::views::economics::{synergy_split, DealEconomics, DealInputs};
use dealmind::views::ranking::{tier, ProbabilityKey, ProbabilityTier};
use dealmind::views::resolve::ResolvedWorkspace;
use dealmind::views::CandidateBuyer;

use crate::app::{
    format_billions, format_change, format_metric, format_millions, truncate, App, InputMode,
};

const RATIONALE: [&str; 4] = [
    "Complementary product portfolios with minimal overlap",
    "Geographic expansion into key European markets",
    "Significant cost synergies from consolidating operations",
    "Enhanced scale to compete with larger industry players",
];

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    // Outer vertical split: header | nav | body | footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // nav
            Constraint::Min(0),    // body
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_nav(f, app, chunks[1]);
    match app.session.load_state() {
        LoadState::Loading => render_loading(f, chunks[2]),
        LoadState::Failed { detail } => render_failed(f, detail, chunks[2]),
        LoadState::Ready => render_screen(f, app, chunks[2]),
    }
    render_footer(f, app, chunks[3]);
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_color) = match app.session.load_state() {
        LoadState::Ready => ("● loaded".to_string(), Color::Green),
        LoadState::Loading => ("◌ loading".to_string(), Color::Yellow),
        LoadState::Failed { detail } => (format!("✗ {}", truncate(detail, 40)), Color::Red),
    };

    let ds = app.session.dataset();
    let title_spans = vec![
        Span::styled(
            " DealMind  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(status_text, Style::default().fg(status_color)),
        Span::raw("  │  "),
        Span::styled(
            format!("{} companies", ds.companies.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  │  "),
        Span::styled(
            format!("{} signals", ds.events.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  │  "),
        Span::styled(
            format!("{} workspaces", ds.workspaces.len()),
            Style::default().fg(Color::White),
        ),
    ];

    let paragraph = Paragraph::new(Line::from(title_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(paragraph, area);
}

fn render_nav(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Screen::NAV
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            let label = match screen {
                Screen::Watchlist if !app.session.watchlist().is_empty() => {
                    format!("{} ({})", screen.title(), app.session.watchlist().len())
                }
                _ => screen.title().to_string(),
            };
            Line::from(format!("{} {label}", i + 1))
        })
        .collect();
    let parent = app.session.screen().nav_parent();
    let selected = Screen::NAV.iter().position(|s| *s == parent).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(tabs, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let line = match (&app.notice, app.input) {
        (Some(notice), _) => Line::from(Span::styled(
            format!(" {notice}"),
            Style::default().fg(Color::Red),
        )),
        (None, InputMode::Search) => Line::from(Span::styled(
            " type to search  Enter/Esc done  Backspace delete",
            Style::default().fg(Color::Yellow),
        )),
        (None, InputMode::Normal) => Line::from(Span::styled(
            format!(" {}", key_hints(app)),
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn key_hints(app: &App) -> &'static str {
    match app.session.load_state() {
        LoadState::Failed { .. } => "r retry  q quit",
        LoadState::Loading => "q quit",
        LoadState::Ready => match app.session.screen() {
            Screen::Dashboard | Screen::Radar | Screen::Workspaces | Screen::Watchlist => {
                "1-6 screens  ↑↓/jk move  Enter open  / search  r reload  q quit"
            }
            Screen::Companies => {
                "1-6 screens  ↑↓/jk move  Enter open  / search  s sector  r reload  q quit"
            }
            Screen::Company => "↑↓/jk move  c/Enter create workspace  w watchlist  Esc back  q quit",
            Screen::Workspace => "+/- offer price  [/] cash portion  Esc back  q quit",
            Screen::Modeling => "1-6 screens  Tab next model  q quit",
        },
    }
}

fn block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", title.to_uppercase()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
}

fn header_row(cells: &[&'static str]) -> Row<'static> {
    Row::new(
        cells
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))),
    )
    .height(1)
}

fn highlight() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

fn cursor_state(cursor: Option<usize>) -> TableState {
    let mut state = TableState::default();
    state.select(cursor);
    state
}

fn dim(s: impl Into<String>) -> Span<'static> {
    Span::styled(s.into(), Style::default().fg(Color::DarkGray))
}

fn bold(s: impl Into<String>) -> Span<'static> {
    Span::styled(s.into(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
}

fn tier_color(key: ProbabilityKey, probability: u8) -> Color {
    match (key, tier(key, probability)) {
        (ProbabilityKey::Target, ProbabilityTier::High) => Color::Red,
        (ProbabilityKey::Target, ProbabilityTier::Medium) => Color::Yellow,
        (ProbabilityKey::Target, ProbabilityTier::Low) => Color::Green,
        (ProbabilityKey::Buyer, ProbabilityTier::High) => Color::Blue,
        (ProbabilityKey::Buyer, ProbabilityTier::Medium) => Color::Magenta,
        (ProbabilityKey::Buyer, ProbabilityTier::Low) => Color::Gray,
    }
}

fn prob_cell(key: ProbabilityKey, probability: u8) -> Cell<'static> {
    Cell::from(format!("{probability}%")).style(Style::default().fg(tier_color(key, probability)))
}

fn change_span(change: f64) -> Span<'static> {
    let color = if change >= 0.0 { Color::Green } else { Color::Red };
    Span::styled(format_change(change), Style::default().fg(color))
}

fn impact_color(impact: Impact) -> Color {
    match impact {
        Impact::High => Color::Red,
        Impact::Medium => Color::Yellow,
        Impact::Low => Color::Blue,
    }
}

/// A small titled box holding one headline figure.
fn metric(f: &mut Frame, area: Rect, label: &str, value: String, note: Option<Span<'static>>) {
    let mut spans = vec![bold(value)];
    if let Some(note) = note {
        spans.push(Span::raw(" "));
        spans.push(note);
    }
    let paragraph = Paragraph::new(vec![Line::from(spans), Line::from(dim(label.to_string()))])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    f.render_widget(paragraph, area);
}

fn columns(area: Rect, n: u32) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(area)
        .to_vec()
}

fn message(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines).block(block(title)).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Load states
// ---------------------------------------------------------------------------

fn render_loading(f: &mut Frame, area: Rect) {
    message(
        f,
        area,
        "Loading",
        vec![Line::from(Span::styled(
            "Loading companies, signals and workspaces…",
            Style::default().fg(Color::Yellow),
        ))],
    );
}

fn render_failed(f: &mut Frame, detail: &str, area: Rect) {
    message(
        f,
        area,
        "Error",
        vec![
            Line::from(Span::styled(LOAD_FAILED_MESSAGE, Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from(vec![Span::raw("Press "), bold("r"), Span::raw(" to retry.")]),
            Line::from(""),
            Line::from(dim(detail.to_string())),
        ],
    );
}

fn render_screen(f: &mut Frame, app: &App, area: Rect) {
    match app.session.screen() {
        Screen::Dashboard => render_dashboard(f, app, area),
        Screen::Companies => render_companies(f, app, area),
        Screen::Company => render_company(f, app, area),
        Screen::Workspaces => render_workspaces(f, app, area),
        Screen::Workspace => render_workspace(f, app, area),
        Screen::Radar => render_radar(f, app, area),
        Screen::Modeling => render_modeling(f, app, area),
        Screen::Watchlist => render_watchlist(f, app, area),
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

fn render_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let view = app.session.dashboard();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    for (kpi, cell) in view.kpis.iter().zip(columns(rows[0], 4)) {
        metric(
            f,
            cell,
            kpi.label,
            kpi.value.to_string(),
            Some(Span::styled(kpi.change, Style::default().fg(Color::Green))),
        );
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);
    let tables = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(halves[0]);

    let n_targets = view.top_targets.len();
    let target_cursor = (app.cursor < n_targets).then_some(app.cursor);
    let buyer_cursor = app.cursor.checked_sub(n_targets);

    let target_rows: Vec<Row> = view
        .top_targets
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(truncate(&c.name, 24)),
                Cell::from(c.sector.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(format!("{}%", c.ebitda_margin)),
                prob_cell(ProbabilityKey::Target, c.deal_prob_target),
            ])
        })
        .collect();
    let targets = Table::new(
        target_rows,
        [
            Constraint::Min(16),
            Constraint::Length(20),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header_row(&["Company", "Sector", "Margin", "Target"]))
    .block(block("Top Predicted Targets"))
    .row_highlight_style(highlight());
    f.render_stateful_widget(targets, tables[0], &mut cursor_state(target_cursor));

    let buyer_rows: Vec<Row> = view
        .top_buyers
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(truncate(&c.name, 24)),
                Cell::from(c.region.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(format_billions(c.market_cap)),
                prob_cell(ProbabilityKey::Buyer, c.deal_prob_buyer),
            ])
        })
        .collect();
    let buyers = Table::new(
        buyer_rows,
        [
            Constraint::Min(16),
            Constraint::Length(20),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header_row(&["Company", "Region", "Mkt Cap", "Buyer"]))
    .block(block("Most Likely Acquirers"))
    .row_highlight_style(highlight());
    f.render_stateful_widget(buyers, tables[1], &mut cursor_state(buyer_cursor));

    let mut lines = Vec::new();
    for event in view.signals {
        lines.extend(signal_lines(event));
    }
    let signals = Paragraph::new(lines)
        .block(block("Recent Signals"))
        .wrap(Wrap { trim: true });
    f.render_widget(signals, halves[1]);
}

fn signal_lines(event: &Event) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                format!("● {} ", event.impact),
                Style::default().fg(impact_color(event.impact)),
            ),
            bold(event.company.clone()),
            dim(format!("  {}", event.date)),
        ]),
        Line::from(Span::styled(event.kind.clone(), Style::default().fg(Color::Cyan))),
        Line::from(event.description.clone()),
        Line::from(""),
    ]
}

// ---------------------------------------------------------------------------
// Companies
// ---------------------------------------------------------------------------

fn company_table<'a>(companies: &[&Company], app: &App, title: &str) -> Table<'a> {
    let rows: Vec<Row> = companies
        .iter()
        .map(|c| {
            let star = if app.session.watchlist().contains(c.id) { "★" } else { "" };
            Row::new(vec![
                Cell::from(truncate(&c.name, 24)),
                Cell::from(c.ticker.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(truncate(&c.sector, 20)),
                Cell::from(c.region.clone()),
                Cell::from(format_billions(c.market_cap)),
                Cell::from(format_millions(c.revenue)),
                Cell::from(format!("{}%", c.ebitda_margin)),
                prob_cell(ProbabilityKey::Target, c.deal_prob_target),
                prob_cell(ProbabilityKey::Buyer, c.deal_prob_buyer),
                Cell::from(star).style(Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(6),
            Constraint::Length(20),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(2),
        ],
    )
    .header(header_row(&[
        "Company", "Ticker", "Sector", "Region", "Mkt Cap", "Revenue", "Margin", "Target", "Buyer", "",
    ]))
    .block(block(title))
    .row_highlight_style(highlight())
}

fn render_companies(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let companies = app.session.filtered_companies();
    let caret = if app.input == InputMode::Search { "▏" } else { "" };
    let options = app.session.sector_options();
    let position = options
        .iter()
        .position(|o| o == app.session.sector())
        .map_or(String::new(), |i| format!(" ({}/{})", i + 1, options.len()));
    let filter_line = Line::from(vec![
        dim("Search: "),
        bold(format!("{}{caret}", app.session.search())),
        dim("   Sector: "),
        bold(app.session.sector().label().to_string()),
        dim(position),
        dim(format!(
            "   {} of {} companies",
            companies.len(),
            app.session.dataset().companies.len()
        )),
    ]);
    let filter = Paragraph::new(filter_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(filter, chunks[0]);

    if companies.is_empty() {
        message(f, chunks[1], "Companies", vec![Line::from(dim("No companies match the current filters."))]);
        return;
    }
    let table = company_table(&companies, app, "Companies");
    f.render_stateful_widget(table, chunks[1], &mut cursor_state(Some(app.cursor)));
}

fn render_watchlist(f: &mut Frame, app: &App, area: Rect) {
    let companies = app.session.watchlist_companies();
    if companies.is_empty() {
        message(
            f,
            area,
            "Watchlist",
            vec![
                Line::from("Your watchlist is empty."),
                Line::from(dim("Open a company profile and press w to track it.")),
            ],
        );
        return;
    }
    let table = company_table(&companies, app, "Watchlist");
    f.render_stateful_widget(table, area, &mut cursor_state(Some(app.cursor)));
}

// ---------------------------------------------------------------------------
// Company profile
// ---------------------------------------------------------------------------

fn render_company(f: &mut Frame, app: &App, area: Rect) {
    let Some(company) = app.session.selected_company() else {
        message(f, area, "Company Profile", vec![Line::from(dim("Company not found."))]);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let watched = app.session.watchlist().contains(company.id);
    let title = Paragraph::new(vec![
        Line::from(vec![
            bold(company.name.clone()),
            dim(format!("  {} • {} • {}", company.ticker, company.sector, company.region)),
            if watched {
                Span::styled("  ★ Watching", Style::default().fg(Color::Yellow))
            } else {
                dim("  ☆ Watch")
            },
        ]),
        Line::from(vec![
            bold(format!("${:.2}", company.last_price)),
            Span::raw("  "),
            change_span(company.change),
        ]),
    ])
    .block(block("Company Profile"));
    f.render_widget(title, rows[0]);

    let cells = columns(rows[1], 6);
    metric(f, cells[0], "Market Cap", format_billions(company.market_cap), None);
    metric(f, cells[1], "Revenue", format_millions(company.revenue), None);
    metric(f, cells[2], "EBITDA", format_millions(company.ebitda), None);
    metric(f, cells[3], "Net Leverage", format!("{}x", company.leverage), None);
    metric(
        f,
        cells[4],
        "Target Probability",
        format!("{}%", company.deal_prob_target),
        Some(Span::styled(
            format!("{:?}", tier(ProbabilityKey::Target, company.deal_prob_target)),
            Style::default().fg(tier_color(ProbabilityKey::Target, company.deal_prob_target)),
        )),
    );
    metric(
        f,
        cells[5],
        "Buyer Probability",
        format!("{}%", company.deal_prob_buyer),
        Some(Span::styled(
            format!("{:?}", tier(ProbabilityKey::Buyer, company.deal_prob_buyer)),
            Style::default().fg(tier_color(ProbabilityKey::Buyer, company.deal_prob_buyer)),
        )),
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[2]);

    let candidates = app.session.candidates();
    if candidates.is_empty() {
        message(f, body[0], "Potential Buyers", vec![Line::from(dim("No likely acquirers."))]);
    } else {
        let table = candidate_table(&candidates);
        f.render_stateful_widget(table, body[0], &mut cursor_state(Some(app.cursor)));
    }

    let events: Vec<Line> = company
        .recent_events
        .iter()
        .map(|e| Line::from(vec![Span::styled("• ", Style::default().fg(Color::Cyan)), Span::raw(e.clone())]))
        .collect();
    message(f, body[1], "Recent Events", events);
}

fn candidate_table(candidates: &[CandidateBuyer<'_>]) -> Table<'static> {
    let rows: Vec<Row> = candidates
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(truncate(&c.company.name, 24)),
                Cell::from(truncate(&c.company.sector, 20)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(format_billions(c.company.market_cap)),
                Cell::from(format!("{}/100", c.fit_score)).style(Style::default().fg(Color::Green)),
                Cell::from(format!("${}M", c.synergies)),
                prob_cell(ProbabilityKey::Buyer, c.company.deal_prob_buyer),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(20),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(6),
        ],
    )
    .header(header_row(&["Buyer", "Sector", "Mkt Cap", "Fit", "Synergies", "Buyer"]))
    .block(block("Potential Buyers"))
    .row_highlight_style(highlight())
    .highlight_symbol("› ")
}

// ---------------------------------------------------------------------------
// Workspaces
// ---------------------------------------------------------------------------

fn render_workspaces(f: &mut Frame, app: &App, area: Rect) {
    let workspaces = &app.session.dataset().workspaces;
    if workspaces.is_empty() {
        message(f, area, "Deal Workspaces", vec![Line::from(dim("No workspaces yet."))]);
        return;
    }

    let rows: Vec<Row> = workspaces
        .iter()
        .map(|w| {
            Row::new(vec![
                Cell::from(format!("{}", w.id)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(truncate(&w.title(), 48)),
                Cell::from(w.status.to_string()).style(Style::default().fg(Color::Green)),
                Cell::from(format!("{}/100", w.fit_score)),
                Cell::from(format!("${}M", w.synergies)),
                Cell::from(w.created_date.clone()).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(12),
        ],
    )
    .header(header_row(&["#", "Deal", "Status", "Fit", "Synergies", "Created"]))
    .block(block("Deal Workspaces"))
    .row_highlight_style(highlight());
    f.render_stateful_widget(table, area, &mut cursor_state(Some(app.cursor)));
}

fn render_workspace(f: &mut Frame, app: &App, area: Rect) {
    match app.session.workspace_view() {
        None => message(f, area, "Deal Analysis", vec![Line::from(dim("No workspace selected."))]),
        Some(WorkspaceView::Unavailable(workspace)) => message(
            f,
            area,
            "Deal Analysis",
            vec![
                Line::from(bold(workspace.title())),
                Line::from(""),
                Line::from(Span::styled(
                    "Workspace details not available: buyer or target is not a known company.",
                    Style::default().fg(Color::Red),
                )),
            ],
        ),
        Some(WorkspaceView::Ready {
            resolved,
            inputs,
            economics,
        }) => render_deal(f, &resolved, &inputs, &economics, area),
    }
}

fn render_deal(
    f: &mut Frame,
    resolved: &ResolvedWorkspace<'_>,
    inputs: &DealInputs,
    economics: &DealEconomics,
    area: Rect,
) {
    let ResolvedWorkspace {
        workspace,
        buyer,
        target,
    } = *resolved;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let headline = Paragraph::new(Line::from(vec![
        bold(format!("{} acquires {}", buyer.name, target.name)),
        dim(format!("  {} • created {}", workspace.status, workspace.created_date)),
    ]))
    .block(block("Deal Analysis"));
    f.render_widget(headline, rows[0]);

    let split = synergy_split(workspace.synergies);
    let cells = columns(rows[1], 4);
    metric(f, cells[0], "Strategic Fit", format!("{}/100", workspace.fit_score), None);
    metric(f, cells[1], "Revenue Synergies", format!("${}M", split.revenue), None);
    metric(f, cells[2], "Cost Synergies", format!("${}M", split.cost), None);
    metric(f, cells[3], "Synergy Multiple", format!("{SYNERGY_MULTIPLE}x"), None);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let label = |s: &str| dim(format!("{s:<22}"));
    let cash = inputs.cash_portion();
    let simulator = vec![
        Line::from(vec![
            label("Offer price"),
            bold(format!("${:.2}", inputs.offer_price())),
            dim("   (-/+)"),
        ]),
        Line::from(vec![
            label("Cash / stock"),
            bold(format!("{cash}% / {}%", 100 - cash)),
            dim("   ([/])"),
        ]),
        Line::from(""),
        Line::from(vec![label("Offer premium"), bold(format_metric(economics.premium, 1, "", "%"))]),
        Line::from(vec![
            label("Transaction value"),
            bold(format_metric(economics.transaction_value, 2, "$", "B")),
        ]),
        Line::from(vec![
            label("Pro forma leverage"),
            bold(format!("{:.1}x", economics.pro_forma_leverage)),
        ]),
        Line::from(vec![
            label("Cash consideration"),
            bold(format_metric(economics.cash_consideration, 2, "$", "B")),
        ]),
        Line::from(vec![
            label("Stock consideration"),
            bold(format_metric(economics.stock_consideration, 2, "$", "B")),
        ]),
    ];
    message(f, body[0], "Scenario Simulator", simulator);

    let mut summary = vec![
        Line::from(vec![label("Target market cap"), bold(format_billions(target.market_cap))]),
        Line::from(vec![label("Last price"), bold(format!("${:.2}", target.last_price))]),
        Line::from(vec![label("EV / Revenue"), bold(format_metric(economics.ev_to_revenue, 1, "", "x"))]),
        Line::from(vec![label("EV / EBITDA"), bold(format_metric(economics.ev_to_ebitda, 1, "", "x"))]),
        Line::from(""),
        Line::from(Span::styled(
            "Strategic Rationale",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];
    summary.extend(
        RATIONALE
            .iter()
            .map(|r| Line::from(vec![Span::styled("✓ ", Style::default().fg(Color::Green)), Span::raw(*r)])),
    );
    message(f, body[1], "Transaction Summary", summary);
}

// ---------------------------------------------------------------------------
// Signal radar
// ---------------------------------------------------------------------------

fn render_radar(f: &mut Frame, app: &App, area: Rect) {
    let events = &app.session.dataset().events;
    if events.is_empty() {
        message(f, area, "Signal Radar", vec![Line::from(dim("No signals."))]);
        return;
    }

    let rows: Vec<Row> = events
        .iter()
        .map(|e| {
            Row::new(vec![
                Cell::from(format!("● {}", e.impact)).style(Style::default().fg(impact_color(e.impact))),
                Cell::from(truncate(&e.company, 22)),
                Cell::from(truncate(&e.kind, 22)).style(Style::default().fg(Color::Cyan)),
                Cell::from(e.date.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(e.description.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(22),
            Constraint::Length(22),
            Constraint::Length(11),
            Constraint::Min(20),
        ],
    )
    .header(header_row(&["Impact", "Company", "Signal", "When", "Detail"]))
    .block(block("Signal Radar"))
    .row_highlight_style(highlight());
    f.render_stateful_widget(table, area, &mut cursor_state(Some(app.cursor)));
}

// ---------------------------------------------------------------------------
// Modeling tools
// ---------------------------------------------------------------------------

fn render_modeling(f: &mut Frame, app: &App, area: Rect) {
    let current = app.session.model();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let models = dealmind::views::modeling::ModelKind::ALL;
    let tabs = Tabs::new(models.iter().map(|m| Line::from(m.tab_label())))
        .select(models.iter().position(|m| *m == current).unwrap_or(0))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(tabs, chunks[0]);

    let rows: Vec<Row> = current
        .fields()
        .iter()
        .map(|field| {
            Row::new(vec![
                Cell::from(field.label),
                Cell::from(field.default).style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();
    let table = Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
        .header(header_row(&["Input", "Value"]))
        .block(block(current.title()));
    f.render_widget(table, chunks[1]);
}
