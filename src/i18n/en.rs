//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Energy Audit".into());

    // Recommendations
    t.insert("recommendation.replace".into(), "\u{26A0}\u{FE0F} Consider replacing".into());
    t.insert("recommendation.efficient".into(), "\u{2714}\u{FE0F} Efficient".into());

    // Report columns
    t.insert("report.appliance".into(), "Appliance".into());
    t.insert("report.count".into(), "Count".into());
    t.insert("report.daily".into(), "Daily".into());
    t.insert("report.annual".into(), "Annual".into());
    t.insert("report.gap".into(), "Gap".into());
    t.insert("report.annual_cost".into(), "Annual cost".into());
    t.insert("report.recommendation".into(), "Recommendation".into());
    t.insert("report.total_energy".into(), "Total daily energy".into());
    t.insert("report.total_savings".into(), "Potential annual savings".into());

    // Units
    t.insert("unit.kilowatt_hours".into(), "kWh".into());
    t.insert("unit.per_day".into(), "/day".into());
    t.insert("unit.per_year".into(), "/year".into());

    t
}
