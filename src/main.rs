use dealer_ledger::{
    actions::Dealership,
    config::{database, settings},
    core::{
        report::{find_duplicate_registrations, format_currency, format_vehicle_summary},
        vehicle::list_vehicles,
    },
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file. Non-fatal, env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load application settings
    let app_config = settings::load_default_config()
        .inspect_err(|e| error!("Failed to load application settings: {}", e))?;

    // 4. Connect and make sure the schema exists
    let db = database::create_connection(&database::get_database_url())
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Registration number audit
    let vehicles = list_vehicles(&db).await?;
    let duplicates = find_duplicate_registrations(&vehicles);
    if duplicates.is_empty() {
        info!(vehicles = vehicles.len(), "No duplicate registration numbers found.");
    }
    for duplicate in &duplicates {
        warn!(
            reg_number = %duplicate.reg_number,
            vehicle_id = %duplicate.vehicle_id,
            vehicle = %duplicate.description,
            created_at = %duplicate.created_at,
            purchase_price = %format_currency(duplicate.purchase_price),
            status = ?duplicate.status,
            "Duplicate registration number"
        );
    }

    // 6. Dashboard summary
    let dealership = Dealership::new(db, &app_config);
    let profile = dealership.get_dealer_profile().await;
    if let Some(profile) = profile.data {
        info!(company_name = %profile.company_name, "Dealer profile loaded");
    }

    let dashboard = dealership.get_dashboard().await;
    match dashboard.data {
        Some(summary) => {
            info!(
                in_stock = summary.in_stock,
                inventory_value = %format_currency(summary.inventory_value),
                sold_this_month = summary.sold_this_month,
                profit_this_month = %format_currency(summary.profit_this_month),
                "Dashboard"
            );
            for detail in &summary.recent {
                match format_vehicle_summary(detail) {
                    Ok(line) => info!("{line}"),
                    Err(e) => warn!(vehicle_id = %detail.vehicle.id, "Skipping summary: {e}"),
                }
            }
        }
        None => warn!(
            reason = dashboard.message.as_deref().unwrap_or_default(),
            "Dashboard unavailable"
        ),
    }

    Ok(())
}
