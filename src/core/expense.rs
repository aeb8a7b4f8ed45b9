//! Expense persistence - Creating and reading vehicle expenses.
//!
//! Expenses are immutable once written. There is no update or delete path;
//! they are removed only together with their vehicle.

use crate::{
    core::{rules, validation::NewExpense},
    entities::{Expense, expense},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Inserts an expense, resolving its visibility once and storing the result.
pub async fn create_expense(db: &DatabaseConnection, new: NewExpense) -> Result<expense::Model> {
    let is_public = rules::resolve_visibility(new.category, new.is_public);

    let expense = expense::ActiveModel {
        id: Set(Uuid::new_v4()),
        vehicle_id: Set(new.vehicle_id),
        description: Set(new.description),
        amount: Set(new.amount),
        date: Set(new.date),
        category: Set(new.category),
        is_public: Set(is_public),
        created_at: Set(chrono::Utc::now()),
    };

    let result = expense.insert(db).await?;
    Ok(result)
}

/// Retrieves all expenses for a vehicle, oldest first.
pub async fn get_expenses_for_vehicle(
    db: &DatabaseConnection,
    vehicle_id: Uuid,
) -> Result<Vec<expense::Model>> {
    Expense::find()
        .filter(expense::Column::VehicleId.eq(vehicle_id))
        .order_by_asc(expense::Column::Date)
        .order_by_asc(expense::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
