//! Scenario simulator arithmetic for a deal workspace.
//!
//! Market cap and transaction value are in billions; revenue and EBITDA in
//! millions, which is why the multiples divide the base by 1000. Every output
//! that could divide by zero is an `Option`, with `None` meaning "not
//! applicable".

use thiserror::Error;

use crate::config::{
    DEFAULT_CASH_PORTION, DEFAULT_OFFER_PREMIUM, PRO_FORMA_LEVERAGE_MULTIPLIER,
};
use crate::types::Company;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("offer price must be a positive number, got {0}")]
    InvalidOfferPrice(f64),

    #[error("cash portion must be between 0 and 100, got {0}")]
    InvalidCashPortion(u8),
}

/// User-adjustable simulator inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealInputs {
    offer_price: f64,
    cash_portion: u8,
}

impl DealInputs {
    pub fn new(offer_price: f64, cash_portion: u8) -> Result<Self, ScenarioError> {
        if !offer_price.is_finite() || offer_price <= 0.0 {
            return Err(ScenarioError::InvalidOfferPrice(offer_price));
        }
        if cash_portion > 100 {
            return Err(ScenarioError::InvalidCashPortion(cash_portion));
        }
        Ok(Self {
            offer_price,
            cash_portion,
        })
    }

    /// Opening inputs: a 30% premium to the last price, 70% cash.
    pub fn for_target(target: &Company) -> Self {
        Self {
            offer_price: (target.last_price * DEFAULT_OFFER_PREMIUM).max(0.0),
            cash_portion: DEFAULT_CASH_PORTION,
        }
    }

    pub fn offer_price(&self) -> f64 {
        self.offer_price
    }

    pub fn cash_portion(&self) -> u8 {
        self.cash_portion
    }

    pub fn with_offer_price(self, offer_price: f64) -> Result<Self, ScenarioError> {
        Self::new(offer_price, self.cash_portion)
    }

    pub fn with_cash_portion(self, cash_portion: u8) -> Result<Self, ScenarioError> {
        Self::new(self.offer_price, cash_portion)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealEconomics {
    /// Percent over the last traded price, one decimal.
    pub premium: Option<f64>,
    /// Billions, two decimals.
    pub transaction_value: Option<f64>,
    /// Times EBITDA, one decimal.
    pub pro_forma_leverage: f64,
    pub ev_to_revenue: Option<f64>,
    pub ev_to_ebitda: Option<f64>,
    /// Billions, two decimals.
    pub cash_consideration: Option<f64>,
    pub stock_consideration: Option<f64>,
}

pub fn deal_economics(inputs: &DealInputs, target: &Company, buyer: &Company) -> DealEconomics {
    let last = target.last_price;
    let priced = last > 0.0;

    let premium = priced.then(|| round_to((inputs.offer_price - last) / last * 100.0, 1));
    let transaction_value =
        priced.then(|| round_to(inputs.offer_price * target.market_cap / last, 2));

    // Multiples use the displayed (rounded) transaction value.
    let ev_to_revenue = transaction_value.and_then(|tv| multiple(tv, target.revenue));
    let ev_to_ebitda = transaction_value.and_then(|tv| multiple(tv, target.ebitda));

    let cash_consideration =
        transaction_value.map(|tv| round_to(tv * f64::from(inputs.cash_portion) / 100.0, 2));
    let stock_consideration = transaction_value
        .zip(cash_consideration)
        .map(|(tv, cash)| round_to(tv - cash, 2));

    DealEconomics {
        premium,
        transaction_value,
        pro_forma_leverage: round_to(buyer.leverage * PRO_FORMA_LEVERAGE_MULTIPLIER, 1),
        ev_to_revenue,
        ev_to_ebitda,
        cash_consideration,
        stock_consideration,
    }
}

fn multiple(transaction_value: f64, base_millions: f64) -> Option<f64> {
    if base_millions == 0.0 {
        return None;
    }
    let m = transaction_value / (base_millions / 1000.0);
    m.is_finite().then(|| round_to(m, 1))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Formats an optional metric, rendering "not applicable" as `n/a`.
pub fn display(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "n/a".to_string(),
    }
}

/// Split of the workspace's synergy estimate, floored to whole millions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynergySplit {
    pub revenue: u32,
    pub cost: u32,
}

pub fn synergy_split(synergies: u32) -> SynergySplit {
    SynergySplit {
        revenue: synergies * 6 / 10,
        cost: synergies * 4 / 10,
    }
}
