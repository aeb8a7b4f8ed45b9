//! Derived financial figures - computed on read, never stored.
//!
//! All money arithmetic is done on `Decimal` with checked operations, so sums are
//! exact, independent of expense ordering, and fail instead of overflowing.

use crate::{
    core::vehicle::VehicleDetail,
    entities::{VehicleStatus, expense, vehicle},
    errors::{Error, Result},
};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// Number of vehicles shown in the dashboard's recent list.
pub const RECENT_VEHICLE_COUNT: usize = 5;

/// Adds up amounts, reporting an overflow as [`Error::AmountOverflow`].
pub fn checked_sum<I>(amounts: I, context: &'static str) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total
            .checked_add(amount)
            .ok_or(Error::AmountOverflow { context })
    })
}

/// `minuend - subtrahend`, reporting an overflow as [`Error::AmountOverflow`].
pub fn checked_difference(
    minuend: Decimal,
    subtrahend: Decimal,
    context: &'static str,
) -> Result<Decimal> {
    minuend
        .checked_sub(subtrahend)
        .ok_or(Error::AmountOverflow { context })
}

/// Sum of expense amounts. An empty list sums to zero.
pub fn total_expenses(expenses: &[expense::Model]) -> Result<Decimal> {
    checked_sum(expenses.iter().map(|e| e.amount), "total expenses")
}

/// Purchase price plus all expenses.
pub fn total_cost(vehicle: &vehicle::Model, expenses: &[expense::Model]) -> Result<Decimal> {
    checked_sum(
        [vehicle.purchase_price, total_expenses(expenses)?],
        "total cost",
    )
}

/// `sold_price - purchase_price - expenses`. Only defined for sold vehicles.
pub fn profit(vehicle: &vehicle::Model, expenses: &[expense::Model]) -> Result<Option<Decimal>> {
    match (vehicle.status, vehicle.sold_price) {
        (VehicleStatus::Sold, Some(sold_price)) => {
            let cost = total_cost(vehicle, expenses)?;
            checked_difference(sold_price, cost, "profit").map(Some)
        }
        _ => Ok(None),
    }
}

/// True when the vehicle is sold and its sale date falls in the same calendar
/// month and year as `today`.
#[must_use]
pub fn sold_in_month_of(vehicle: &vehicle::Model, today: NaiveDate) -> bool {
    vehicle.status == VehicleStatus::Sold
        && vehicle
            .sold_date
            .is_some_and(|d| d.year() == today.year() && d.month() == today.month())
}

/// Total profit over vehicles sold in `today`'s calendar month.
pub fn monthly_profit(vehicles: &[VehicleDetail], today: NaiveDate) -> Result<Decimal> {
    let profits = vehicles
        .iter()
        .filter(|d| sold_in_month_of(&d.vehicle, today))
        .map(VehicleDetail::profit)
        .collect::<Result<Vec<_>>>()?;
    checked_sum(profits.into_iter().flatten(), "monthly profit")
}

/// Headline figures for the dealership dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Vehicles currently available for sale
    pub in_stock: usize,
    /// Purchase cost of the available stock
    pub inventory_value: Decimal,
    /// Vehicles sold this calendar month
    pub sold_this_month: usize,
    /// Profit from this month's sales
    pub profit_this_month: Decimal,
    /// Most recently added vehicles, newest first
    pub recent: Vec<VehicleDetail>,
}

/// Builds the dashboard summary from a newest-first vehicle list.
pub fn summarize_dashboard(
    vehicles: &[VehicleDetail],
    today: NaiveDate,
) -> Result<DashboardSummary> {
    let available = vehicles
        .iter()
        .filter(|d| d.vehicle.status == VehicleStatus::Available);

    Ok(DashboardSummary {
        in_stock: available.clone().count(),
        inventory_value: checked_sum(
            available.map(|d| d.vehicle.purchase_price),
            "inventory value",
        )?,
        sold_this_month: vehicles
            .iter()
            .filter(|d| sold_in_month_of(&d.vehicle, today))
            .count(),
        profit_this_month: monthly_profit(vehicles, today)?,
        recent: vehicles.iter().take(RECENT_VEHICLE_COUNT).cloned().collect(),
    })
}
