//! Appliance energy audit
//!
//! Turns a list of appliances and an electricity rate into per-appliance
//! consumption figures, the gap to an ideal model, and a recommendation.
//! Requests are validated as a whole before anything is computed, so a
//! caller never receives partial results.

mod request;

pub use request::{parse_cost, parse_number, required_number, RawAppliance, RawCalculationRequest};

use crate::core::{
    ApplianceInput, ApplianceResult, AuditConfig, AuditReport, CalculationRequest, Config, Error,
    Result,
};
use crate::i18n::I18n;
use crate::pricing::{PricingEngine, DAYS_PER_YEAR};

/// Outcome of comparing an appliance against an ideal model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    ConsiderReplacing,
    Efficient,
}

impl Recommendation {
    /// Translation key for this recommendation
    pub fn key(self) -> &'static str {
        match self {
            Recommendation::ConsiderReplacing => "recommendation.replace",
            Recommendation::Efficient => "recommendation.efficient",
        }
    }
}

impl ApplianceInput {
    /// kWh per day for all units
    pub fn daily_energy_consumption(&self) -> f64 {
        self.power_kw * self.hours_per_day * self.count as f64
    }

    pub fn annual_energy_consumption(&self) -> f64 {
        self.daily_energy_consumption() * DAYS_PER_YEAR
    }

    /// kWh per day an ideal model would use
    pub fn ideal_energy_consumption(&self) -> f64 {
        self.daily_energy_consumption() * self.efficiency_ratio
    }

    /// kWh per day avoidable with an ideal model
    pub fn efficiency_gap(&self) -> f64 {
        self.daily_energy_consumption() - self.ideal_energy_consumption()
    }

    /// Gap as a percentage of daily consumption
    pub fn gap_percentage(&self) -> f64 {
        let daily = self.daily_energy_consumption();
        if daily > 0.0 {
            self.efficiency_gap() / daily * 100.0
        } else {
            0.0
        }
    }
}

/// Stateless energy calculator
#[derive(Debug, Clone)]
pub struct Calculator {
    settings: AuditConfig,
    pricing: PricingEngine,
    i18n: I18n,
}

impl Calculator {
    /// Create a calculator from the application configuration
    pub fn new(config: &Config) -> Self {
        Self {
            settings: config.audit.clone(),
            pricing: PricingEngine::new(&config.pricing),
            i18n: I18n::new(&config.general.language),
        }
    }

    pub fn settings(&self) -> &AuditConfig {
        &self.settings
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Convert a wire request into a validated `CalculationRequest`
    ///
    /// The cost is checked first, then each appliance in order; the first
    /// problem found is returned.
    pub fn parse_request(&self, raw: &RawCalculationRequest) -> Result<CalculationRequest> {
        let cost_per_kwh = parse_cost(&raw.cost_per_kwh, self.pricing.rate())?;
        validate_cost(cost_per_kwh)?;

        if raw.appliances.is_empty() {
            return Err(no_appliances());
        }

        let mut appliances = Vec::with_capacity(raw.appliances.len());
        for (index, item) in raw.appliances.iter().enumerate() {
            let label = item.label(index);
            let appliance = ApplianceInput {
                name: item.name(&label)?,
                power_kw: item.power_kw(&label)?,
                hours_per_day: required_number(&label, "hours_per_day", &item.hours_per_day)?,
                efficiency_ratio: required_number(&label, "efficiency_ratio", &item.efficiency_ratio)?,
                count: item.count(&label)?,
            };
            self.validate_appliance(&appliance, &label)?;
            appliances.push(appliance);
        }

        Ok(CalculationRequest {
            cost_per_kwh,
            appliances,
        })
    }

    /// Check every field of a request against its domain
    pub fn validate(&self, request: &CalculationRequest) -> Result<()> {
        validate_cost(request.cost_per_kwh)?;

        if request.appliances.is_empty() {
            return Err(no_appliances());
        }

        for (index, appliance) in request.appliances.iter().enumerate() {
            let label = if appliance.name.trim().is_empty() {
                format!("appliance #{}", index + 1)
            } else {
                appliance.name.trim().to_string()
            };
            self.validate_appliance(appliance, &label)?;
        }

        Ok(())
    }

    fn validate_appliance(&self, appliance: &ApplianceInput, label: &str) -> Result<()> {
        if appliance.name.trim().is_empty() {
            return Err(Error::invalid_input(label, "name", "must not be empty"));
        }

        positive(label, "power_kw", appliance.power_kw)?;
        positive(label, "hours_per_day", appliance.hours_per_day)?;
        if appliance.hours_per_day > self.settings.max_hours_per_day {
            return Err(Error::invalid_input(
                label,
                "hours_per_day",
                format!("must not exceed {}", self.settings.max_hours_per_day),
            ));
        }

        positive(label, "efficiency_ratio", appliance.efficiency_ratio)?;
        if appliance.efficiency_ratio > 1.0 {
            return Err(Error::invalid_input(label, "efficiency_ratio", "must not exceed 1"));
        }

        if appliance.count == 0 {
            return Err(Error::invalid_input(label, "count", "must be positive"));
        }

        Ok(())
    }

    /// Validate and compute the full report, preserving appliance order
    pub fn calculate(&self, request: &CalculationRequest) -> Result<AuditReport> {
        self.validate(request)?;

        let pricing = self.pricing.with_rate(request.cost_per_kwh);
        let results: Vec<ApplianceResult> = request
            .appliances
            .iter()
            .map(|appliance| self.evaluate(appliance, &pricing))
            .collect();

        for result in &results {
            if !result_is_finite(result) {
                return Err(Error::invalid_input(
                    &result.name,
                    "power_kw",
                    "produces a non-finite result",
                ));
            }
        }

        let total_energy: f64 = results.iter().map(|r| r.daily_energy_consumption).sum();
        let total_savings: f64 = results.iter().map(|r| r.annual_savings).sum();
        if !total_energy.is_finite() || !total_savings.is_finite() {
            return Err(Error::invalid_input(
                "request",
                "appliances",
                "produce a non-finite total",
            ));
        }

        log::debug!(
            "Audited {} appliance(s): {:.3} kWh/day, {:.2} potential savings",
            results.len(),
            total_energy,
            total_savings
        );

        Ok(AuditReport {
            results,
            total_energy,
            total_savings,
        })
    }

    /// Figures for a single, already validated appliance
    pub fn evaluate(&self, appliance: &ApplianceInput, pricing: &PricingEngine) -> ApplianceResult {
        let daily = appliance.daily_energy_consumption();
        let gap = appliance.efficiency_gap();
        let gap_percentage = appliance.gap_percentage();

        ApplianceResult {
            name: appliance.name.clone(),
            count: appliance.count,
            daily_energy_consumption: daily,
            annual_energy_consumption: appliance.annual_energy_consumption(),
            gap,
            gap_percentage,
            annual_cost: pricing.annual_cost(daily),
            annual_savings: pricing.annual_cost(gap),
            recommendation: self.i18n.get(self.recommend(gap_percentage).key()),
        }
    }

    /// Recommendation for a given gap percentage
    pub fn recommend(&self, gap_percentage: f64) -> Recommendation {
        if gap_percentage >= self.settings.replace_threshold_percent {
            Recommendation::ConsiderReplacing
        } else {
            Recommendation::Efficient
        }
    }
}

fn result_is_finite(result: &ApplianceResult) -> bool {
    [
        result.daily_energy_consumption,
        result.annual_energy_consumption,
        result.gap,
        result.gap_percentage,
        result.annual_cost,
        result.annual_savings,
    ]
    .iter()
    .all(|v| v.is_finite())
}

fn validate_cost(cost: f64) -> Result<()> {
    if !cost.is_finite() {
        return Err(Error::InvalidCost("must be finite".to_string()));
    }
    if cost <= 0.0 {
        return Err(Error::InvalidCost(format!("must be positive, got {}", cost)));
    }
    Ok(())
}

fn positive(label: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_input(label, field, "must be finite"));
    }
    if value <= 0.0 {
        return Err(Error::invalid_input(label, field, "must be positive"));
    }
    Ok(())
}

fn no_appliances() -> Error {
    Error::invalid_input("request", "appliances", "must contain at least one appliance")
}
