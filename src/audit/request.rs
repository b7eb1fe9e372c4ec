//! Wire-level request parsing
//!
//! Clients send loosely typed JSON: numbers may arrive as numeric strings,
//! power may be given in kW or W and `count` may be omitted. These types
//! accept that shape and convert it into a typed `CalculationRequest`,
//! naming the offending appliance and field on failure.

use crate::core::{Error, PowerUnit, Result};
use serde::Deserialize;
use serde_json::Value;

/// Request body as received on `POST /calculate`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCalculationRequest {
    #[serde(default)]
    pub cost_per_kwh: Option<Value>,
    #[serde(default)]
    pub appliances: Vec<RawAppliance>,
}

/// One appliance entry as received on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAppliance {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub power_kw: Option<Value>,
    #[serde(default)]
    pub power_watts: Option<Value>,
    #[serde(default)]
    pub hours_per_day: Option<Value>,
    #[serde(default)]
    pub efficiency_ratio: Option<Value>,
    #[serde(default)]
    pub count: Option<Value>,
}

impl RawAppliance {
    /// Label used in error messages: the name when usable, else the position
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(Value::String(name)) if !name.trim().is_empty() => name.trim().to_string(),
            _ => format!("appliance #{}", index + 1),
        }
    }

    /// Resolve the power figure to kW, whichever unit it was supplied in
    pub fn power_kw(&self, label: &str) -> Result<f64> {
        match (&self.power_kw, &self.power_watts) {
            (Some(kw), None) => Ok(PowerUnit::Kilowatts.to_kw(parse_number(label, "power_kw", kw)?)),
            (None, Some(w)) => Ok(PowerUnit::Watts.to_kw(parse_number(label, "power_watts", w)?)),
            (Some(_), Some(_)) => Err(Error::invalid_input(
                label,
                "power_kw",
                "cannot be combined with power_watts",
            )),
            (None, None) => Err(Error::invalid_input(label, "power_kw", "is required")),
        }
    }

    pub fn name(&self, label: &str) -> Result<String> {
        match &self.name {
            Some(Value::String(name)) => Ok(name.trim().to_string()),
            Some(_) => Err(Error::invalid_input(label, "name", "must be text")),
            None => Err(Error::invalid_input(label, "name", "is required")),
        }
    }

    pub fn count(&self, label: &str) -> Result<u32> {
        let Some(value) = &self.count else {
            return Ok(1);
        };

        let count = parse_number(label, "count", value)?;
        if count.fract() != 0.0 {
            return Err(Error::invalid_input(label, "count", "must be a whole number"));
        }
        if count <= 0.0 {
            return Err(Error::invalid_input(label, "count", "must be positive"));
        }
        if count > u32::MAX as f64 {
            return Err(Error::invalid_input(label, "count", "is too large"));
        }
        Ok(count as u32)
    }
}

/// Parse a required numeric field
pub fn required_number(label: &str, field: &str, value: &Option<Value>) -> Result<f64> {
    match value {
        Some(value) => parse_number(label, field, value),
        None => Err(Error::invalid_input(label, field, "is required")),
    }
}

/// Accept a JSON number or a numeric string; reject everything else
pub fn parse_number(label: &str, field: &str, value: &Value) -> Result<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n),
        Some(_) => Err(Error::invalid_input(label, field, "must be finite")),
        None => Err(Error::invalid_input(label, field, "must be numeric")),
    }
}

/// Parse the electricity cost, falling back to `default_rate` when absent
pub fn parse_cost(value: &Option<Value>, default_rate: f64) -> Result<f64> {
    let cost = match value {
        None | Some(Value::Null) => default_rate,
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| Error::InvalidCost("must be numeric".to_string()))?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidCost(format!("'{}' is not a number", s)))?,
        Some(other) => {
            return Err(Error::InvalidCost(format!("'{}' is not a number", other)));
        }
    };

    Ok(cost)
}
