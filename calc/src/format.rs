//! Display policy for calculation results: rounding, currency grouping and which values deserve
//! emphasis.

use serde::{Deserialize, Serialize};

use crate::model::{OutputField, RoiResult};

pub const DEFAULT_CURRENCY: &str = "£";

/// Values at or above these percentages are flagged for emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub rental_yield: f64,
    pub cash_on_cash_roi: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            rental_yield: 6.0,
            cash_on_cash_roi: 15.0,
        }
    }
}

/// Formatted output fields, ready to be written to a display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub rental_yield: String,
    pub cash_on_cash_roi: String,
    pub monthly_cash_flow: String,
    pub initial_investment: String,
    pub emphasize_yield: bool,
    pub emphasize_roi: bool,
}

impl Report {
    pub fn new(result: &RoiResult, thresholds: &Thresholds, currency: &str) -> Report {
        Report {
            rental_yield: format_percent(result.rental_yield_percent),
            cash_on_cash_roi: format_percent(result.cash_on_cash_roi_percent),
            monthly_cash_flow: format_currency(result.monthly_cash_flow, currency),
            initial_investment: format_currency(result.deposit_amount, currency),
            emphasize_yield: result.rental_yield_percent >= thresholds.rental_yield,
            emphasize_roi: result.cash_on_cash_roi_percent >= thresholds.cash_on_cash_roi,
        }
    }

    pub fn value(&self, field: OutputField) -> &str {
        match field {
            OutputField::RentalYield => &self.rental_yield,
            OutputField::CashOnCashRoi => &self.cash_on_cash_roi,
            OutputField::MonthlyCashFlow => &self.monthly_cash_flow,
            OutputField::InitialInvestment => &self.initial_investment,
        }
    }

    pub fn is_emphasized(&self, field: OutputField) -> bool {
        match field {
            OutputField::RentalYield => self.emphasize_yield,
            OutputField::CashOnCashRoi => self.emphasize_roi,
            _ => false,
        }
    }
}

/// One decimal place, exact ties rounded away from zero (`12.25` shows as `12.3%`).
pub fn format_percent(value: f64) -> String {
    // x.25 and x.75 are the only one-decimal ties a double holds exactly, and `{:.1}` would
    // send them to even
    let quarters = value * 4.0;
    let value = if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    };

    format!("{:.1}%", value)
}

/// Whole currency units with thousands grouping. The symbol always comes first, so negative
/// amounts read `£-167`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    // f64::round goes half away from zero
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };

    format!(
        "{}{}{}",
        symbol,
        sign,
        group_thousands(&format!("{:.0}", rounded.abs()))
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
