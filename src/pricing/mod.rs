//! Pricing engine for electricity cost calculation
//!
//! Audits use a flat rate per kWh: either the one supplied with the
//! request or the configured default.

use crate::core::PricingConfig;

/// Days used to annualize daily consumption
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Pricing engine that calculates electricity costs
#[derive(Debug, Clone)]
pub struct PricingEngine {
    rate_per_kwh: f64,
    currency_symbol: String,
}

impl PricingEngine {
    /// Create a new pricing engine using the configured default rate
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            rate_per_kwh: config.default_rate_per_kwh,
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    /// Same currency, different rate (e.g. the one a request carries)
    pub fn with_rate(&self, rate_per_kwh: f64) -> Self {
        Self {
            rate_per_kwh,
            currency_symbol: self.currency_symbol.clone(),
        }
    }

    /// Get the rate per kWh
    pub fn rate(&self) -> f64 {
        self.rate_per_kwh
    }

    /// Calculate cost for a given energy consumption in kWh
    pub fn calculate_cost(&self, kwh: f64) -> f64 {
        kwh * self.rate_per_kwh
    }

    /// Annual cost of a constant daily consumption
    pub fn annual_cost(&self, daily_kwh: f64) -> f64 {
        self.calculate_cost(daily_kwh * DAYS_PER_YEAR)
    }

    /// Get the currency symbol
    pub fn get_currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Render an amount with the currency symbol
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{:.2} {}", amount, self.currency_symbol)
    }
}
