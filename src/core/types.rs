//! Common types used across the application

use serde::{Deserialize, Serialize};

/// Unit a power figure was supplied in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUnit {
    Watts,
    Kilowatts,
}

impl PowerUnit {
    /// Convert a value in this unit to kilowatts
    pub fn to_kw(self, value: f64) -> f64 {
        match self {
            PowerUnit::Watts => value / 1000.0,
            PowerUnit::Kilowatts => value,
        }
    }
}

/// A validated appliance record
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceInput {
    pub name: String,
    /// Rated power of a single unit in kW
    pub power_kw: f64,
    pub hours_per_day: f64,
    /// Fraction (0, 1] of the consumption that an ideal model would use
    pub efficiency_ratio: f64,
    /// Number of identical units
    pub count: u32,
}

/// A validated calculation request
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub cost_per_kwh: f64,
    pub appliances: Vec<ApplianceInput>,
}

/// Per-appliance audit figures returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceResult {
    pub name: String,
    pub count: u32,
    /// Daily consumption in kWh
    pub daily_energy_consumption: f64,
    /// Annual consumption in kWh
    pub annual_energy_consumption: f64,
    /// Daily kWh avoidable if efficiency were ideal
    pub gap: f64,
    pub gap_percentage: f64,
    /// Annual cost of the current consumption
    pub annual_cost: f64,
    /// Annual cost of the gap
    pub annual_savings: f64,
    pub recommendation: String,
}

/// Full audit response: per-appliance results plus totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub results: Vec<ApplianceResult>,
    /// Sum of daily consumption in kWh
    pub total_energy: f64,
    /// Sum of annual savings
    pub total_savings: f64,
}

impl AuditReport {
    /// Copy of the report with every figure rounded to `decimals` places
    pub fn rounded(&self, decimals: u32) -> Self {
        let r = |v: f64| round_to(v, decimals);
        Self {
            results: self
                .results
                .iter()
                .map(|res| ApplianceResult {
                    name: res.name.clone(),
                    count: res.count,
                    daily_energy_consumption: r(res.daily_energy_consumption),
                    annual_energy_consumption: r(res.annual_energy_consumption),
                    gap: r(res.gap),
                    gap_percentage: r(res.gap_percentage),
                    annual_cost: r(res.annual_cost),
                    annual_savings: r(res.annual_savings),
                    recommendation: res.recommendation.clone(),
                })
                .collect(),
            total_energy: r(self.total_energy),
            total_savings: r(self.total_savings),
        }
    }
}

/// Round to a fixed number of decimals
///
/// Works on the binary value, so ties that are not exactly representable
/// (2.675 is stored as 2.67499...) round down. Values too large to scale
/// are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watts_to_kw() {
        assert_eq!(PowerUnit::Watts.to_kw(1000.0), 1.0);
        assert_eq!(PowerUnit::Watts.to_kw(150.0), 0.15);
        assert_eq!(PowerUnit::Kilowatts.to_kw(2.5), 2.5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.675_1, 2), 2.68);
        assert_eq!(round_to(10.0, 0), 10.0);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn test_round_to_leaves_huge_values_alone() {
        assert_eq!(round_to(1e307, 2), 1e307);
        assert_eq!(round_to(-1e307, 2), -1e307);
        assert!(round_to(f64::MAX, 15).is_finite());
    }

    #[test]
    fn test_report_rounding_keeps_text_fields() {
        let report = AuditReport {
            results: vec![ApplianceResult {
                name: "Heater".into(),
                count: 1,
                daily_energy_consumption: 1.0 / 3.0,
                annual_energy_consumption: 365.0 / 3.0,
                gap: 0.1,
                gap_percentage: 30.0,
                annual_cost: 12.166_666,
                annual_savings: 3.65,
                recommendation: "Consider replacing".into(),
            }],
            total_energy: 1.0 / 3.0,
            total_savings: 3.65,
        };

        let rounded = report.rounded(2);
        assert_eq!(rounded.results[0].daily_energy_consumption, 0.33);
        assert_eq!(rounded.results[0].annual_energy_consumption, 121.67);
        assert_eq!(rounded.results[0].annual_cost, 12.17);
        assert_eq!(rounded.results[0].name, "Heater");
        assert_eq!(rounded.total_energy, 0.33);
    }
}
