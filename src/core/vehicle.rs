//! Vehicle persistence - All vehicle reads and writes against the database.
//!
//! Functions here take already-validated values; they do not re-check business
//! rules. Deleting a vehicle removes its expenses in the same database transaction.

use crate::{
    core::{
        aggregate,
        validation::{NewVehicle, SaleRecord, VehicleChanges},
    },
    entities::{Expense, ImageRefs, Vehicle, VehicleStatus, expense, vehicle},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{LoaderTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Serialize;
use tracing::debug;

/// A vehicle together with every expense it owns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetail {
    /// The vehicle record
    #[serde(flatten)]
    pub vehicle: vehicle::Model,
    /// Owned expenses, oldest first
    pub expenses: Vec<expense::Model>,
}

impl VehicleDetail {
    /// Sum of all owned expense amounts.
    pub fn total_expenses(&self) -> Result<Decimal> {
        aggregate::total_expenses(&self.expenses)
    }

    /// Purchase price plus expenses.
    pub fn total_cost(&self) -> Result<Decimal> {
        aggregate::total_cost(&self.vehicle, &self.expenses)
    }

    /// Sale profit, `None` until the vehicle is sold.
    pub fn profit(&self) -> Result<Option<Decimal>> {
        aggregate::profit(&self.vehicle, &self.expenses)
    }
}

/// Inserts a new vehicle. Every vehicle starts `AVAILABLE`.
pub async fn create_vehicle(db: &DatabaseConnection, new: NewVehicle) -> Result<vehicle::Model> {
    let vehicle = vehicle::ActiveModel {
        id: Set(Uuid::new_v4()),
        make: Set(new.make),
        model: Set(new.model),
        year: Set(new.year),
        reg_number: Set(new.reg_number),
        vin: Set(new.vin),
        purchase_price: Set(new.purchase_price),
        purchase_date: Set(new.purchase_date),
        status: Set(VehicleStatus::Available),
        sold_price: Set(None),
        sold_date: Set(None),
        images: Set(ImageRefs(new.images)),
        created_at: Set(chrono::Utc::now()),
    };

    let result = vehicle.insert(db).await?;
    Ok(result)
}

/// Applies a partial edit to an existing vehicle. Status and sale data are not
/// touched here; see [`mark_sold`].
pub async fn update_vehicle(
    db: &DatabaseConnection,
    current: vehicle::Model,
    changes: VehicleChanges,
) -> Result<vehicle::Model> {
    let mut active: vehicle::ActiveModel = current.into();

    if let Some(make) = changes.make {
        active.make = Set(make);
    }
    if let Some(model) = changes.model {
        active.model = Set(model);
    }
    if let Some(year) = changes.year {
        active.year = Set(year);
    }
    if let Some(reg_number) = changes.reg_number {
        active.reg_number = Set(reg_number);
    }
    if let Some(vin) = changes.vin {
        active.vin = Set(vin);
    }
    if let Some(price) = changes.purchase_price {
        active.purchase_price = Set(price);
    }
    if let Some(date) = changes.purchase_date {
        active.purchase_date = Set(date);
    }
    if let Some(images) = changes.images {
        active.images = Set(ImageRefs(images));
    }

    active.update(db).await.map_err(Into::into)
}

/// Writes sale data and moves the vehicle to `SOLD`.
pub async fn mark_sold(
    db: &DatabaseConnection,
    current: vehicle::Model,
    sale: SaleRecord,
) -> Result<vehicle::Model> {
    let mut active: vehicle::ActiveModel = current.into();
    active.status = Set(VehicleStatus::Sold);
    active.sold_price = Set(Some(sale.sold_price));
    active.sold_date = Set(Some(sale.sold_date));
    active.update(db).await.map_err(Into::into)
}

/// Deletes a vehicle and all its expenses atomically.
///
/// # Returns
/// The number of expenses removed with the vehicle.
pub async fn delete_vehicle(db: &DatabaseConnection, vehicle_id: Uuid) -> Result<u64> {
    let txn = db.begin().await?;

    let expenses_removed = Expense::delete_many()
        .filter(expense::Column::VehicleId.eq(vehicle_id))
        .exec(&txn)
        .await?
        .rows_affected;

    let deleted = Vehicle::delete_by_id(vehicle_id).exec(&txn).await?;
    if deleted.rows_affected == 0 {
        // Dropping the transaction rolls back the expense delete
        return Err(Error::VehicleNotFound {
            id: vehicle_id.to_string(),
        });
    }

    txn.commit().await?;
    debug!(%vehicle_id, expenses_removed, "Vehicle deleted with its expenses");
    Ok(expenses_removed)
}

/// Finds the vehicle holding a registration number. Matching is exact and case-sensitive.
pub async fn find_vehicle_by_reg_number(
    db: &DatabaseConnection,
    reg_number: &str,
) -> Result<Option<vehicle::Model>> {
    Vehicle::find()
        .filter(vehicle::Column::RegNumber.eq(reg_number))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a vehicle by its unique ID.
pub async fn find_vehicle_by_id(
    db: &DatabaseConnection,
    vehicle_id: Uuid,
) -> Result<Option<vehicle::Model>> {
    Vehicle::find_by_id(vehicle_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a vehicle by ID and loads its expenses.
pub async fn find_vehicle_detail(
    db: &DatabaseConnection,
    vehicle_id: Uuid,
) -> Result<Option<VehicleDetail>> {
    let Some(vehicle) = find_vehicle_by_id(db, vehicle_id).await? else {
        return Ok(None);
    };

    let expenses = vehicle
        .find_related(Expense)
        .order_by_asc(expense::Column::Date)
        .order_by_asc(expense::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(Some(VehicleDetail { vehicle, expenses }))
}

/// Lists every vehicle, newest first, without expenses.
pub async fn list_vehicles(db: &DatabaseConnection) -> Result<Vec<vehicle::Model>> {
    Vehicle::find()
        .order_by_desc(vehicle::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists every vehicle, newest first, with its expenses loaded in one batched query.
pub async fn list_vehicle_details(db: &DatabaseConnection) -> Result<Vec<VehicleDetail>> {
    let vehicles = list_vehicles(db).await?;
    let expenses = vehicles.load_many(Expense, db).await?;

    Ok(vehicles
        .into_iter()
        .zip(expenses)
        .map(|(vehicle, mut expenses)| {
            expenses.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
            VehicleDetail { vehicle, expenses }
        })
        .collect())
}
