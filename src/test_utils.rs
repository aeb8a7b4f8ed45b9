//! Shared test utilities for the dealership ledger.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{
        expense, vehicle,
        validation::{NewExpense, NewVehicle},
    },
    entities::{self, ExpenseCategory, ImageRefs, VehicleStatus},
    errors::Result,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

fn test_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default()
}

/// Creates a test vehicle with sensible defaults.
///
/// # Defaults
/// * make/model: "Toyota" / "Corolla"
/// * year: 2020
/// * `purchase_price`: 2,500,000
/// * `purchase_date`: 2024-01-10
pub async fn create_test_vehicle(
    db: &DatabaseConnection,
    reg_number: &str,
) -> Result<entities::vehicle::Model> {
    vehicle::create_vehicle(
        db,
        NewVehicle {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            reg_number: reg_number.to_string(),
            vin: None,
            purchase_price: Decimal::from(2_500_000),
            purchase_date: test_date(10),
            images: Vec::new(),
        },
    )
    .await
}

/// Creates a `REPAIR` expense for `vehicle_id` dated 2024-01-15.
pub async fn create_test_expense(
    db: &DatabaseConnection,
    vehicle_id: Uuid,
    amount: i64,
) -> Result<entities::expense::Model> {
    expense::create_expense(
        db,
        NewExpense {
            vehicle_id,
            description: "Test expense".to_string(),
            amount: Decimal::from(amount),
            date: test_date(15),
            category: ExpenseCategory::Repair,
            is_public: None,
        },
    )
    .await
}

/// Sets up a complete test environment with one vehicle.
/// Returns (db, vehicle) for common test scenarios.
pub async fn setup_with_vehicle() -> Result<(DatabaseConnection, entities::vehicle::Model)> {
    let db = setup_test_db().await?;
    let vehicle = create_test_vehicle(&db, "WP CAM-1234").await?;
    Ok((db, vehicle))
}

/// Builds an unsaved, available vehicle with the same defaults as
/// [`create_test_vehicle`]. For pure logic tests.
#[must_use]
pub fn sample_vehicle(reg_number: &str) -> entities::vehicle::Model {
    entities::vehicle::Model {
        id: Uuid::new_v4(),
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2020,
        reg_number: reg_number.to_string(),
        vin: None,
        purchase_price: Decimal::from(2_500_000),
        purchase_date: test_date(10),
        status: VehicleStatus::Available,
        sold_price: None,
        sold_date: None,
        images: ImageRefs::default(),
        created_at: chrono::Utc::now(),
    }
}

/// Builds an unsaved public `REPAIR` expense for pure logic tests.
#[must_use]
pub fn sample_expense(vehicle_id: Uuid, amount: Decimal) -> entities::expense::Model {
    entities::expense::Model {
        id: Uuid::new_v4(),
        vehicle_id,
        description: "Test expense".to_string(),
        amount,
        date: test_date(15),
        category: ExpenseCategory::Repair,
        is_public: true,
        created_at: chrono::Utc::now(),
    }
}
