//! French translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // General
    t.insert("app.title".into(), "Audit \u{00E9}nerg\u{00E9}tique".into());

    // Recommandations
    t.insert("recommendation.replace".into(), "\u{26A0}\u{FE0F} Envisager un remplacement".into());
    t.insert("recommendation.efficient".into(), "\u{2714}\u{FE0F} Efficace".into());

    // Colonnes du rapport
    t.insert("report.appliance".into(), "Appareil".into());
    t.insert("report.count".into(), "Nombre".into());
    t.insert("report.daily".into(), "Quotidien".into());
    t.insert("report.annual".into(), "Annuel".into());
    t.insert("report.gap".into(), "\u{00C9}cart".into());
    t.insert("report.annual_cost".into(), "Co\u{00FB}t annuel".into());
    t.insert("report.recommendation".into(), "Recommandation".into());
    t.insert("report.total_energy".into(), "\u{00C9}nergie quotidienne totale".into());
    t.insert("report.total_savings".into(), "\u{00C9}conomies annuelles possibles".into());

    // Unites
    t.insert("unit.kilowatt_hours".into(), "kWh".into());
    t.insert("unit.per_day".into(), "/jour".into());
    t.insert("unit.per_year".into(), "/an".into());

    t
}
