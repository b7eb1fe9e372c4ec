//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{Config, GeneralConfig, ServerConfig, PricingConfig, AuditConfig, CONFIG_PATH_ENV};
pub use error::{Error, Result};
pub use types::{PowerUnit, ApplianceInput, CalculationRequest, ApplianceResult, AuditReport, round_to};
