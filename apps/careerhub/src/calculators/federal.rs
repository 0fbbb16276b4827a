//! 2024 federal income tax and FICA.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    #[default]
    Single,
    MarriedJoint,
}

/// `(upper bound of bracket, marginal rate)`; the last bracket is unbounded.
type Brackets = &'static [(f64, f64)];

const SINGLE_BRACKETS: Brackets = &[
    (11_600.0, 0.10),
    (47_150.0, 0.12),
    (100_525.0, 0.22),
    (191_950.0, 0.24),
    (243_725.0, 0.32),
    (609_350.0, 0.35),
    (f64::INFINITY, 0.37),
];

const MARRIED_JOINT_BRACKETS: Brackets = &[
    (23_200.0, 0.10),
    (94_300.0, 0.12),
    (201_050.0, 0.22),
    (383_900.0, 0.24),
    (487_450.0, 0.32),
    (731_200.0, 0.35),
    (f64::INFINITY, 0.37),
];

pub const SOCIAL_SECURITY_RATE: f64 = 0.062;
pub const SOCIAL_SECURITY_WAGE_BASE: f64 = 168_600.0;
pub const MEDICARE_RATE: f64 = 0.0145;
pub const ADDITIONAL_MEDICARE_RATE: f64 = 0.009;

impl FilingStatus {
    pub fn standard_deduction(&self) -> f64 {
        match self {
            FilingStatus::Single => 14_600.0,
            FilingStatus::MarriedJoint => 29_200.0,
        }
    }

    fn brackets(&self) -> Brackets {
        match self {
            FilingStatus::Single => SINGLE_BRACKETS,
            FilingStatus::MarriedJoint => MARRIED_JOINT_BRACKETS,
        }
    }

    fn additional_medicare_threshold(&self) -> f64 {
        match self {
            FilingStatus::Single => 200_000.0,
            FilingStatus::MarriedJoint => 250_000.0,
        }
    }
}

/// Gross income less the standard deduction, floored at zero.
pub fn taxable_income(gross: f64, status: FilingStatus) -> f64 {
    (gross - status.standard_deduction()).max(0.0)
}

/// Progressive tax on already-deducted income.
pub fn income_tax(taxable: f64, status: FilingStatus) -> f64 {
    let mut tax = 0.0;
    let mut lower = 0.0;
    for &(upper, rate) in status.brackets() {
        if taxable <= lower {
            break;
        }
        tax += (taxable.min(upper) - lower) * rate;
        lower = upper;
    }
    tax
}

pub fn social_security(gross: f64) -> f64 {
    gross.min(SOCIAL_SECURITY_WAGE_BASE) * SOCIAL_SECURITY_RATE
}

pub fn medicare(gross: f64, status: FilingStatus) -> f64 {
    let excess = (gross - status.additional_medicare_threshold()).max(0.0);
    gross * MEDICARE_RATE + excess * ADDITIONAL_MEDICARE_RATE
}
