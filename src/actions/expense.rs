//! Expense actions.

use super::{ActionResult, Dealership};
use crate::{
    cache::CacheTag,
    core::{
        expense as expenses,
        validation::{ExpenseInput, validate_new_expense},
    },
    entities::ExpenseModel,
    errors::Result,
};
use tracing::info;

const EXPENSE_ADDED: &str = "Expense added successfully.";
const ADD_FAILED: &str = "Failed to add expense.";

impl Dealership {
    /// Records an expense against a vehicle.
    ///
    /// When `isPublic` is omitted the category's default visibility is stored.
    pub async fn add_expense(&self, input: &ExpenseInput) -> ActionResult<ExpenseModel> {
        let result = match self.try_add_expense(input).await {
            Ok(expense) => {
                info!(
                    expense_id = %expense.id,
                    vehicle_id = %expense.vehicle_id,
                    amount = %expense.amount,
                    category = expense.category.as_str(),
                    is_public = expense.is_public,
                    "Expense added"
                );
                let tags = vec![
                    CacheTag::Vehicle(expense.vehicle_id),
                    CacheTag::VehicleList,
                    CacheTag::Dashboard,
                    CacheTag::Reports,
                ];
                ActionResult::ok(expense, EXPENSE_ADDED, tags)
            }
            Err(e) => ActionResult::from_error(&e, ADD_FAILED),
        };
        self.finish(result).await
    }

    async fn try_add_expense(&self, input: &ExpenseInput) -> Result<ExpenseModel> {
        let new = validate_new_expense(input)?;
        self.require_vehicle(new.vehicle_id).await?;
        expenses::create_expense(&self.database, new).await
    }
}
