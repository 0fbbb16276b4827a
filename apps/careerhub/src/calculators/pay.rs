//! Take-home pay: gross → federal, state and FICA withholding → net per period.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculators::federal::{self, FilingStatus};
use crate::calculators::state::{find_state, state_income_tax};

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const DEFAULT_HOURS_PER_WEEK: f64 = 40.0;
const MAX_HOURS_PER_WEEK: f64 = 168.0;

#[derive(Debug, Error, PartialEq)]
pub enum CalculatorError {
    #[error("{0} must be a non-negative number")]
    InvalidAmount(&'static str),

    #[error("hours_per_week must be between 0 and 168")]
    InvalidHours,

    #[error("Unknown state code: {0}")]
    UnknownState(String),

    #[error("Provide either hourly_rate or annual_salary")]
    MissingPay,

    #[error("Provide only one of hourly_rate or annual_salary")]
    AmbiguousPay,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TakeHomeRequest {
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub hours_per_week: Option<f64>,
    #[serde(default)]
    pub annual_salary: Option<f64>,
    pub state: String,
    #[serde(default)]
    pub filing_status: FilingStatus,
}

/// Annual figures, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TakeHome {
    pub state: &'static str,
    pub filing_status: FilingStatus,
    pub gross_annual: f64,
    pub taxable_income: f64,
    pub federal_income_tax: f64,
    pub state_income_tax: f64,
    pub social_security: f64,
    pub medicare: f64,
    pub total_tax: f64,
    pub net_annual: f64,
    pub net_monthly: f64,
    pub net_biweekly: f64,
    pub net_weekly: f64,
    /// `total_tax / gross_annual`, 0 when gross is 0.
    pub effective_tax_rate: f64,
}

pub fn annualize(hourly_rate: f64, hours_per_week: f64) -> f64 {
    hourly_rate * hours_per_week * WEEKS_PER_YEAR
}

fn non_negative(value: f64, field: &'static str) -> Result<f64, CalculatorError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalculatorError::InvalidAmount(field))
    }
}

fn gross_from(req: &TakeHomeRequest) -> Result<f64, CalculatorError> {
    match (req.hourly_rate, req.annual_salary) {
        (Some(_), Some(_)) => Err(CalculatorError::AmbiguousPay),
        (None, None) => Err(CalculatorError::MissingPay),
        (None, Some(salary)) => non_negative(salary, "annual_salary"),
        (Some(rate), None) => {
            let rate = non_negative(rate, "hourly_rate")?;
            let hours = req.hours_per_week.unwrap_or(DEFAULT_HOURS_PER_WEEK);
            if !hours.is_finite() || !(0.0..=MAX_HOURS_PER_WEEK).contains(&hours) {
                return Err(CalculatorError::InvalidHours);
            }
            Ok(annualize(rate, hours))
        }
    }
}

fn cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn take_home(req: &TakeHomeRequest) -> Result<TakeHome, CalculatorError> {
    let state = find_state(&req.state)
        .ok_or_else(|| CalculatorError::UnknownState(req.state.clone()))?;
    let gross = gross_from(req)?;
    let status = req.filing_status;

    let taxable = federal::taxable_income(gross, status);
    let federal_tax = federal::income_tax(taxable, status);
    let state_tax = state_income_tax(gross, state);
    let social_security = federal::social_security(gross);
    let medicare = federal::medicare(gross, status);
    let total_tax = federal_tax + state_tax + social_security + medicare;
    let net = gross - total_tax;

    Ok(TakeHome {
        state: state.code,
        filing_status: status,
        gross_annual: cents(gross),
        taxable_income: cents(taxable),
        federal_income_tax: cents(federal_tax),
        state_income_tax: cents(state_tax),
        social_security: cents(social_security),
        medicare: cents(medicare),
        total_tax: cents(total_tax),
        net_annual: cents(net),
        net_monthly: cents(net / 12.0),
        net_biweekly: cents(net / 26.0),
        net_weekly: cents(net / WEEKS_PER_YEAR),
        effective_tax_rate: if gross > 0.0 {
            (total_tax / gross * 10_000.0).round() / 10_000.0
        } else {
            0.0
        },
    })
}
