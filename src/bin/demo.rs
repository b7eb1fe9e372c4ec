//! Energy Audit - Demo CLI
//!
//! Runs the calculator over a sample household and prints the report,
//! without starting the HTTP server.

use energy_audit_lib::audit::Calculator;
use energy_audit_lib::core::{ApplianceInput, CalculationRequest, Config, PowerUnit};

fn sample_household(cost_per_kwh: f64) -> CalculationRequest {
    let appliance = |name: &str, power: f64, unit: PowerUnit, hours: f64, efficiency: f64, count: u32| {
        ApplianceInput {
            name: name.to_string(),
            power_kw: unit.to_kw(power),
            hours_per_day: hours,
            efficiency_ratio: efficiency,
            count,
        }
    };

    CalculationRequest {
        cost_per_kwh,
        appliances: vec![
            appliance("Refrigerator", 150.0, PowerUnit::Watts, 24.0, 0.85, 1),
            appliance("Electric heater", 2.0, PowerUnit::Kilowatts, 4.0, 0.6, 2),
            appliance("LED bulb", 9.0, PowerUnit::Watts, 6.0, 0.95, 8),
            appliance("Old television", 250.0, PowerUnit::Watts, 5.0, 0.55, 1),
            appliance("Washing machine", 0.5, PowerUnit::Kilowatts, 1.0, 0.9, 1),
        ],
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let calculator = Calculator::new(&config);
    let t = calculator.i18n();
    let pricing = calculator.pricing();

    println!("==============================================");
    println!("   {} - Demo CLI", t.get("app.title"));
    println!("==============================================\n");
    println!(
        "  Rate: {:.4} {}/kWh\n",
        pricing.rate(),
        pricing.get_currency_symbol()
    );

    let request = sample_household(pricing.rate());
    let report = calculator
        .calculate(&request)?
        .rounded(config.audit.decimals);

    println!(
        "  {:<18} {:>5} {:>10} {:>10} {:>8} {:>14}  {}",
        t.get("report.appliance"),
        t.get("report.count"),
        t.get("report.daily"),
        t.get("report.annual"),
        t.get("report.gap"),
        t.get("report.annual_cost"),
        t.get("report.recommendation"),
    );
    println!("  {}", "-".repeat(90));

    for result in &report.results {
        println!(
            "  {:<18} {:>5} {:>10.2} {:>10.2} {:>8.2} {:>14}  {}",
            result.name,
            result.count,
            result.daily_energy_consumption,
            result.annual_energy_consumption,
            result.gap,
            pricing.format_amount(result.annual_cost),
            result.recommendation,
        );
    }

    println!("  {}\n", "-".repeat(90));
    println!(
        "  {}: {:.2} {}{}",
        t.get("report.total_energy"),
        report.total_energy,
        t.get("unit.kilowatt_hours"),
        t.get("unit.per_day"),
    );
    println!(
        "  {}: {}{}",
        t.get("report.total_savings"),
        pricing.format_amount(report.total_savings),
        t.get("unit.per_year"),
    );
    println!();

    Ok(())
}
