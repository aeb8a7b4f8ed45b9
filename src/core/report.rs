//! Report generation business logic.
//!
//! This module builds the monthly sales report, the public provenance certificate,
//! and the duplicate-registration diagnostic. All functions are pure over data the
//! caller has already loaded and return structured values for the caller to render.

use crate::{
    core::{aggregate, vehicle::VehicleDetail},
    entities::{ExpenseCategory, VehicleStatus, dealer_profile, vehicle},
    errors::Result,
};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::Iterable;
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

/// The single currency all amounts are denominated in.
pub const CURRENCY_CODE: &str = "LKR";

/// One sold vehicle in a sales report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRow {
    /// Sold vehicle's id
    pub vehicle_id: Uuid,
    /// Manufacturer
    pub make: String,
    /// Model name
    pub model: String,
    /// Registration number
    pub reg_number: String,
    /// Date of sale
    pub sold_date: NaiveDate,
    /// Price paid by the dealer
    pub purchase_price: Decimal,
    /// Sum of the vehicle's expenses
    pub total_expenses: Decimal,
    /// Price the vehicle sold for
    pub sold_price: Decimal,
    /// Sold price minus purchase price and expenses
    pub profit: Decimal,
}

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    /// Expense category
    pub category: ExpenseCategory,
    /// Sum of the category's expenses
    pub total: Decimal,
}

/// Profit report for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    /// Reported year
    pub year: i32,
    /// Reported month (1-12)
    pub month: u32,
    /// Vehicles sold in the month, by sale date
    pub rows: Vec<SaleRow>,
    /// Sum of sale prices
    pub total_revenue: Decimal,
    /// Sum of purchase prices and expenses
    pub total_cost: Decimal,
    /// Revenue minus cost
    pub total_profit: Decimal,
    /// Expenses of the reported vehicles, per category, in category order
    pub expenses_by_category: Vec<CategoryTotal>,
}

/// Builds the sales report for `year`/`month` from the full vehicle list.
///
/// # Errors
/// Returns [`crate::errors::Error::AmountOverflow`] if any total overflows.
pub fn generate_sales_report(
    vehicles: &[VehicleDetail],
    year: i32,
    month: u32,
) -> Result<SalesReport> {
    let sold: Vec<&VehicleDetail> = vehicles
        .iter()
        .filter(|d| {
            d.vehicle.status == VehicleStatus::Sold
                && d.vehicle
                    .sold_date
                    .is_some_and(|date| date.year() == year && date.month() == month)
        })
        .collect();

    let mut rows = Vec::with_capacity(sold.len());
    for d in &sold {
        let (Some(sold_price), Some(sold_date), Some(profit)) =
            (d.vehicle.sold_price, d.vehicle.sold_date, d.profit()?)
        else {
            continue;
        };
        rows.push(SaleRow {
            vehicle_id: d.vehicle.id,
            make: d.vehicle.make.clone(),
            model: d.vehicle.model.clone(),
            reg_number: d.vehicle.reg_number.clone(),
            sold_date,
            purchase_price: d.vehicle.purchase_price,
            total_expenses: d.total_expenses()?,
            sold_price,
            profit,
        });
    }
    rows.sort_by(|a, b| a.sold_date.cmp(&b.sold_date));

    let total_revenue = aggregate::checked_sum(rows.iter().map(|r| r.sold_price), "revenue")?;
    let costs = rows
        .iter()
        .map(|r| aggregate::checked_sum([r.purchase_price, r.total_expenses], "report cost"))
        .collect::<Result<Vec<_>>>()?;
    let total_cost = aggregate::checked_sum(costs, "report cost")?;

    let mut expenses_by_category = Vec::new();
    for category in ExpenseCategory::iter() {
        let total = aggregate::checked_sum(
            sold.iter()
                .flat_map(|d| d.expenses.iter())
                .filter(|e| e.category == category)
                .map(|e| e.amount),
            "category total",
        )?;
        if !total.is_zero() {
            expenses_by_category.push(CategoryTotal { category, total });
        }
    }

    Ok(SalesReport {
        year,
        month,
        rows,
        total_revenue,
        total_cost,
        total_profit: aggregate::checked_difference(total_revenue, total_cost, "report profit")?,
        expenses_by_category,
    })
}

/// A line on the public certificate. Amounts are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateEntry {
    /// What was done
    pub description: String,
    /// When it was done
    pub date: NaiveDate,
}

/// Data for the externally shareable provenance certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Issuing dealer, from the profile
    pub company_name: String,
    /// Manufacturer
    pub make: String,
    /// Model name
    pub model: String,
    /// Year of manufacture
    pub year: i32,
    /// Registration number
    pub reg_number: String,
    /// Chassis number, when recorded
    pub vin: Option<String>,
    /// Public expenses, oldest first
    pub history: Vec<CertificateEntry>,
}

/// Builds certificate data from a vehicle and the dealer profile. Only public
/// expenses are listed.
#[must_use]
pub fn build_certificate(detail: &VehicleDetail, profile: &dealer_profile::Model) -> Certificate {
    let mut history: Vec<CertificateEntry> = detail
        .expenses
        .iter()
        .filter(|e| e.is_public)
        .map(|e| CertificateEntry {
            description: e.description.clone(),
            date: e.date,
        })
        .collect();
    history.sort_by(|a, b| a.date.cmp(&b.date));

    Certificate {
        company_name: profile.company_name.clone(),
        make: detail.vehicle.make.clone(),
        model: detail.vehicle.model.clone(),
        year: detail.vehicle.year,
        reg_number: detail.vehicle.reg_number.clone(),
        vin: detail.vehicle.vin.clone(),
        history,
    }
}

/// A vehicle whose registration number was already seen earlier in a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateRegistration {
    /// The repeated registration number
    pub reg_number: String,
    /// The later vehicle holding it
    pub vehicle_id: Uuid,
    /// Make and model
    pub description: String,
    /// When the later vehicle was recorded
    pub created_at: DateTime<Utc>,
    /// Its purchase price
    pub purchase_price: Decimal,
    /// Its status
    pub status: VehicleStatus,
}

/// Scans vehicles in the given order and reports every vehicle whose
/// registration number has appeared before it. The first holder is not reported.
#[must_use]
pub fn find_duplicate_registrations(vehicles: &[vehicle::Model]) -> Vec<DuplicateRegistration> {
    let mut seen = HashSet::new();
    vehicles
        .iter()
        .filter(|v| !seen.insert(v.reg_number.as_str()))
        .map(|v| DuplicateRegistration {
            reg_number: v.reg_number.clone(),
            vehicle_id: v.id,
            description: format!("{} {}", v.make, v.model),
            created_at: v.created_at,
            purchase_price: v.purchase_price,
            status: v.status,
        })
        .collect()
}

/// Formats an amount as `LKR 1,234.50`: two fraction digits, thousands
/// separators, leading `-` for negatives.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{CURRENCY_CODE} {grouped}.{fraction}")
}

/// One-line summary of a vehicle for logs and listings.
pub fn format_vehicle_summary(detail: &VehicleDetail) -> Result<String> {
    let v = &detail.vehicle;
    let status = match v.status {
        VehicleStatus::Available => "Avail",
        VehicleStatus::Sold => "Sold",
    };
    Ok(format!(
        "{} {} {} | {} | {} | cost {}",
        v.year,
        v.make,
        v.model,
        v.reg_number,
        status,
        format_currency(detail.total_cost()?)
    ))
}
