//! Modeling tool forms. These are placeholders: labelled inputs with default
//! values and no computation behind them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    #[default]
    Dcf,
    Lbo,
    Merger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelField {
    pub label: &'static str,
    pub default: &'static str,
}

const fn field(label: &'static str, default: &'static str) -> ModelField {
    ModelField { label, default }
}

const DCF_FIELDS: &[ModelField] = &[
    field("Revenue Growth Rate (%)", "8.5"),
    field("Terminal Growth Rate (%)", "2.5"),
    field("WACC (%)", "9.2"),
    field("Forecast Period (years)", "5"),
];

const LBO_FIELDS: &[ModelField] = &[
    field("Purchase Price Multiple (EV/EBITDA)", "10.5"),
    field("Exit Multiple (EV/EBITDA)", "11.0"),
    field("Debt / EBITDA", "5.5"),
    field("Sponsor Equity (%)", "35"),
    field("Entry Leverage (x)", "6.0"),
    field("Exit Year", "2029"),
];

const MERGER_FIELDS: &[ModelField] = &[
    field("Buyer", "CloudScale Inc"),
    field("Target", "SecureNet GmbH"),
    field("Cost Synergies ($M)", "40"),
    field("Revenue Synergies ($M)", "55"),
    field("Consideration Mix (Cash %)", "65"),
    field("Expected Close", "Q3 2025"),
];

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Dcf, ModelKind::Lbo, ModelKind::Merger];

    pub fn title(self) -> &'static str {
        match self {
            ModelKind::Dcf => "DCF Valuation Model",
            ModelKind::Lbo => "LBO Transaction Model",
            ModelKind::Merger => "Merger Model",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            ModelKind::Dcf => "DCF Model",
            ModelKind::Lbo => "LBO Model",
            ModelKind::Merger => "Merger Model",
        }
    }

    pub fn fields(self) -> &'static [ModelField] {
        match self {
            ModelKind::Dcf => DCF_FIELDS,
            ModelKind::Lbo => LBO_FIELDS,
            ModelKind::Merger => MERGER_FIELDS,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ModelKind::Dcf => ModelKind::Lbo,
            ModelKind::Lbo => ModelKind::Merger,
            ModelKind::Merger => ModelKind::Dcf,
        }
    }
}
