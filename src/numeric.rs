//! Shared numeric helpers used by both engines.

/// Clamps a derived score into the 0..=100 band every output guarantees.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Rounds to two decimal places, the precision all monetary and score
/// outputs are reported at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to one decimal place, used for distribution percentages.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Renders a ratio in 0..=1 as a percentage string for display strings.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Present value of a level annual payment stream at a fixed discount rate.
pub fn annuity_present_value(annual_payment: f64, rate: f64, years: u32) -> f64 {
    if rate <= 0.0 {
        return annual_payment * f64::from(years);
    }
    annual_payment * (1.0 - (1.0 + rate).powi(-(years as i32))) / rate
}
