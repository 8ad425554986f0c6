//! Farm Dashboard Example
//!
//! Seeds an in-memory backend, then prints what the dashboard pages show:
//! - the landing page summary and weather widget
//! - the task list (pending first, earliest due first)
//! - the finance page (newest first, with totals)
//!
//! Run with `RUST_LOG=farmdesk=debug cargo run --example dashboard` to see
//! store activity. Pass a YAML config path as the first argument to override
//! the defaults.

use anyhow::Result;
use farmdesk::prelude::*;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("farmdesk=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DashboardConfig::from_yaml_file(path)?,
        None => DashboardConfig::default_config(),
    };

    let backend = Backend::from_config(&config)?;
    populate_test_data(&backend).await?;

    let dashboard = Dashboard::new(backend.clone(), config.clone());
    let snapshot = dashboard.load().await?;
    let summary = &snapshot.summary;
    let display = &config.display;

    println!("Farm Dashboard");
    println!("  Active crops:   {}", summary.active_crops);
    println!("  Pending tasks:  {}", summary.pending_tasks);
    println!("  Month expenses: {}", summary.month_expense_label());
    println!("  Month income:   {}", summary.month_income_label());

    let weather = &snapshot.weather;
    println!(
        "\nWeather in {}: {}°F, {}",
        weather.location, weather.current.temperature, weather.current.condition
    );
    for day in &weather.forecast {
        println!("  {:<10} {:>3}° / {:>3}°  {}", day.day, day.high, day.low, day.condition);
    }

    println!("\nUpcoming tasks");
    for task in &summary.upcoming_tasks {
        println!(
            "  #{} {} (due {})",
            task.id,
            task.title,
            format_date(&task.due_date, &display.date_format, &display.fallback)
        );
    }

    let tasks = backend.tasks.get_all().await?;
    println!("\nAll tasks");
    for task in project_tasks(&tasks, &TaskQuery::default()) {
        let mark = if task.completed { "x" } else { " " };
        println!(
            "  [{}] {:<24} {:<6} {}",
            mark,
            task.title,
            task.priority.as_str(),
            format_date(&task.due_date, &display.date_format, &display.fallback)
        );
    }

    let transactions = backend.transactions.get_all().await?;
    println!("\nTransactions");
    for tx in project_transactions(&transactions, &TransactionQuery::default()) {
        println!(
            "  {:<12} {:<8} {:<12} {:>10}",
            format_date(&tx.date, &display.date_format, &display.fallback),
            tx.kind.as_str(),
            tx.category,
            tx.signed_money()
        );
    }

    let totals = TransactionTotals::from_transactions(&transactions);
    println!(
        "  income {}  expense {}  net {}",
        totals.income,
        totals.expense,
        totals.net()
    );

    let tractors = backend.equipment.search("tractor").await?;
    println!("\nEquipment matching 'tractor': {}", tractors.len());

    Ok(())
}

fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => Fields::new(),
    }
}

async fn populate_test_data(backend: &Backend) -> Result<()> {
    let today = Utc::now().date_naive();
    let in_days = |days: i64| (today + chrono::Duration::days(days)).to_string();

    backend
        .farms
        .create(fields(json!({
            "name_c": "Green Acres",
            "location_c": "Sacramento, CA",
            "size_c": 120,
            "soil_type_c": "Loam",
            "farm_type_c": "Mixed",
            "weather_summary_c": "Mild, dry summers"
        })))
        .await?;

    for (name, status) in [("Tomatoes", "growing"), ("Corn", "planted"), ("Wheat", "harvested")] {
        backend
            .crops
            .create(fields(json!({"name_c": name, "status_c": status, "farm_c": 1})))
            .await?;
    }

    for (title, priority, due) in [
        ("Irrigate north field", "high", Some(in_days(2))),
        ("Order seed", "low", Some(in_days(-3))),
        ("Fix fence", "medium", None),
        ("Spray tomatoes", "medium", Some(in_days(1))),
    ] {
        backend
            .tasks
            .create(fields(json!({
                "title_c": title,
                "priority_c": priority,
                "duedate_c": due,
                "farm_c": 1
            })))
            .await?;
    }
    backend.tasks.toggle_complete(2).await?;

    for (kind, amount, date, category) in [
        ("income", 1250.0, in_days(0), "Sales"),
        ("expense", 310.5, in_days(0), "Seeds"),
        ("expense", 89.99, in_days(-40), "Utilities"),
    ] {
        backend
            .transactions
            .create(fields(json!({
                "type_c": kind,
                "amount_c": amount,
                "date_c": date,
                "category_c": category,
                "farm_c": 1
            })))
            .await?;
    }

    for (name, kind) in [("John Deere 5075E", "Tractor"), ("Boom sprayer", "Implement")] {
        backend
            .equipment
            .create(fields(json!({"name_c": name, "type_c": kind})))
            .await?;
    }

    Ok(())
}
