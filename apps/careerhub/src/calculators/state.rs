//! Approximate state income tax, as one flat rate per state applied to gross pay.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StateTax {
    pub code: &'static str,
    pub name: &'static str,
    /// Fraction of gross income, e.g. `0.0495`.
    pub rate: f64,
}

const fn st(code: &'static str, name: &'static str, rate: f64) -> StateTax {
    StateTax { code, name, rate }
}

pub static STATE_TAXES: &[StateTax] = &[
    st("AL", "Alabama", 0.05),
    st("AK", "Alaska", 0.0),
    st("AZ", "Arizona", 0.025),
    st("AR", "Arkansas", 0.044),
    st("CA", "California", 0.093),
    st("CO", "Colorado", 0.044),
    st("CT", "Connecticut", 0.055),
    st("DE", "Delaware", 0.066),
    st("DC", "District of Columbia", 0.085),
    st("FL", "Florida", 0.0),
    st("GA", "Georgia", 0.0539),
    st("HI", "Hawaii", 0.0825),
    st("ID", "Idaho", 0.058),
    st("IL", "Illinois", 0.0495),
    st("IN", "Indiana", 0.0305),
    st("IA", "Iowa", 0.057),
    st("KS", "Kansas", 0.057),
    st("KY", "Kentucky", 0.04),
    st("LA", "Louisiana", 0.0425),
    st("ME", "Maine", 0.0715),
    st("MD", "Maryland", 0.0475),
    st("MA", "Massachusetts", 0.05),
    st("MI", "Michigan", 0.0425),
    st("MN", "Minnesota", 0.068),
    st("MS", "Mississippi", 0.047),
    st("MO", "Missouri", 0.048),
    st("MT", "Montana", 0.059),
    st("NE", "Nebraska", 0.0584),
    st("NV", "Nevada", 0.0),
    st("NH", "New Hampshire", 0.0),
    st("NJ", "New Jersey", 0.05525),
    st("NM", "New Mexico", 0.049),
    st("NY", "New York", 0.06),
    st("NC", "North Carolina", 0.045),
    st("ND", "North Dakota", 0.0195),
    st("OH", "Ohio", 0.035),
    st("OK", "Oklahoma", 0.0475),
    st("OR", "Oregon", 0.0875),
    st("PA", "Pennsylvania", 0.0307),
    st("RI", "Rhode Island", 0.0475),
    st("SC", "South Carolina", 0.064),
    st("SD", "South Dakota", 0.0),
    st("TN", "Tennessee", 0.0),
    st("TX", "Texas", 0.0),
    st("UT", "Utah", 0.0465),
    st("VT", "Vermont", 0.066),
    st("VA", "Virginia", 0.0575),
    st("WA", "Washington", 0.0),
    st("WV", "West Virginia", 0.0512),
    st("WI", "Wisconsin", 0.053),
    st("WY", "Wyoming", 0.0),
];

/// Case-insensitive lookup by two-letter code.
pub fn find_state(code: &str) -> Option<&'static StateTax> {
    let code = code.trim();
    STATE_TAXES.iter().find(|s| s.code.eq_ignore_ascii_case(code))
}

pub fn state_income_tax(gross: f64, state: &StateTax) -> f64 {
    gross * state.rate
}
