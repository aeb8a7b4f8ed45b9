//! Input validation - Schema-level checks for every mutating operation.
//!
//! Each `validate_*` function takes a raw input record (as submitted by a form or
//! API caller) and returns a normalized, strongly-typed value. Fields are checked
//! in declaration order and the first violated rule wins; no storage access happens here.

use crate::{
    entities::ExpenseCategory,
    errors::{Error, Result},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Earliest model year accepted for a vehicle.
pub const MIN_VEHICLE_YEAR: i32 = 1900;

/// Largest accepted money amount (10^15). Keeps sums over many rows far from
/// `Decimal`'s range.
pub const MAX_MONEY_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

pub(crate) const MAKE_REQUIRED: &str = "Make is required";
pub(crate) const MODEL_REQUIRED: &str = "Model is required";
pub(crate) const REG_NUMBER_REQUIRED: &str = "Registration number is required";
pub(crate) const YEAR_NOT_WHOLE: &str = "Year must be a whole number";
pub(crate) const PRICE_NOT_NUMBER: &str = "Price must be a number";
pub(crate) const PRICE_NOT_POSITIVE: &str = "Price must be positive";
pub(crate) const PRICE_TOO_LARGE: &str = "Price is too large";
pub(crate) const PURCHASE_DATE_INVALID: &str = "Purchase date is invalid";
pub(crate) const INVALID_VEHICLE_ID: &str = "Invalid vehicle id";
pub(crate) const SOLD_PRICE_NOT_NUMBER: &str = "Sold price must be a number";
pub(crate) const SOLD_PRICE_NOT_POSITIVE: &str = "Sold price must be positive";
pub(crate) const SOLD_PRICE_TOO_LARGE: &str = "Sold price is too large";
pub(crate) const SOLD_DATE_INVALID: &str = "Sold date is invalid";
pub(crate) const DESCRIPTION_REQUIRED: &str = "Description is required";
pub(crate) const AMOUNT_NOT_NUMBER: &str = "Amount must be a number";
pub(crate) const AMOUNT_NOT_POSITIVE: &str = "Amount must be positive";
pub(crate) const AMOUNT_TOO_LARGE: &str = "Amount is too large";
pub(crate) const EXPENSE_DATE_INVALID: &str = "Expense date is invalid";
pub(crate) const CATEGORY_INVALID: &str =
    "Category must be one of REPAIR, BROKER_FEE, TRAVEL, DOCUMENTATION, OTHER";
pub(crate) const COMPANY_NAME_REQUIRED: &str = "Company Name is required";
pub(crate) const EMAIL_INVALID: &str = "Invalid email address";

/// A loosely-typed scalar as it arrives from a form: numbers may come as text and
/// dates as text or epoch milliseconds. Coercion happens during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// `true` / `false`
    Bool(bool),
    /// Whole number
    Integer(i64),
    /// Fractional number
    Float(f64),
    /// Free text
    Text(String),
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<NaiveDate> for RawValue {
    fn from(value: NaiveDate) -> Self {
        Self::Text(value.format("%Y-%m-%d").to_string())
    }
}

// ---------------------------------------------------------------------------
// Raw inputs
// ---------------------------------------------------------------------------

/// Raw payload for adding a vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleInput {
    /// Manufacturer
    pub make: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Year of manufacture
    pub year: Option<RawValue>,
    /// Registration number, unique across vehicles
    pub reg_number: Option<String>,
    /// Chassis number
    pub vin: Option<String>,
    /// Price paid by the dealer
    pub purchase_price: Option<RawValue>,
    /// Date of purchase
    pub purchase_date: Option<RawValue>,
    /// Image references
    pub images: Option<Vec<String>>,
}

/// Raw payload for editing a vehicle. Every field except `id` may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleUpdateInput {
    /// Vehicle to edit
    pub id: Option<String>,
    /// Manufacturer
    pub make: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Year of manufacture
    pub year: Option<RawValue>,
    /// Registration number
    pub reg_number: Option<String>,
    /// Chassis number; blank clears it
    pub vin: Option<String>,
    /// Price paid by the dealer
    pub purchase_price: Option<RawValue>,
    /// Date of purchase
    pub purchase_date: Option<RawValue>,
    /// Replacement image list
    pub images: Option<Vec<String>>,
}

/// Raw payload for recording a sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleInput {
    /// Vehicle being sold
    pub vehicle_id: Option<String>,
    /// Sale price
    pub sold_price: Option<RawValue>,
    /// Sale date
    pub sold_date: Option<RawValue>,
}

/// Raw payload for adding an expense to a vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseInput {
    /// Owning vehicle
    pub vehicle_id: Option<String>,
    /// What the money was spent on
    pub description: Option<String>,
    /// Amount spent
    pub amount: Option<RawValue>,
    /// Date of the expense
    pub date: Option<RawValue>,
    /// Category name, e.g. `REPAIR`
    pub category: Option<String>,
    /// Certificate visibility; the category default when omitted
    pub is_public: Option<bool>,
}

/// Raw payload for the dealer profile form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    /// Dealer name shown on certificates
    pub company_name: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Validated values
// ---------------------------------------------------------------------------

/// A vehicle ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    /// Manufacturer
    pub make: String,
    /// Model name
    pub model: String,
    /// Year of manufacture
    pub year: i32,
    /// Registration number
    pub reg_number: String,
    /// Chassis number
    pub vin: Option<String>,
    /// Price paid by the dealer
    pub purchase_price: Decimal,
    /// Date of purchase
    pub purchase_date: NaiveDate,
    /// Image references, blanks removed
    pub images: Vec<String>,
}

/// A partial vehicle edit. `None` leaves the stored value untouched.
///
/// `vin` is doubly optional: `Some(None)` clears the stored VIN.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleChanges {
    /// Vehicle to edit
    pub id: Uuid,
    /// New manufacturer
    pub make: Option<String>,
    /// New model name
    pub model: Option<String>,
    /// New year of manufacture
    pub year: Option<i32>,
    /// New registration number
    pub reg_number: Option<String>,
    /// New chassis number
    pub vin: Option<Option<String>>,
    /// New purchase price
    pub purchase_price: Option<Decimal>,
    /// New purchase date
    pub purchase_date: Option<NaiveDate>,
    /// New image list
    pub images: Option<Vec<String>>,
}

/// Sale data for the sell transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleRecord {
    /// Vehicle being sold
    pub vehicle_id: Uuid,
    /// Sale price
    pub sold_price: Decimal,
    /// Sale date
    pub sold_date: NaiveDate,
}

/// An expense ready for the visibility rule. `is_public` is still optional here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// Owning vehicle
    pub vehicle_id: Uuid,
    /// What the money was spent on
    pub description: String,
    /// Amount spent
    pub amount: Decimal,
    /// Date of the expense
    pub date: NaiveDate,
    /// Expense category
    pub category: ExpenseCategory,
    /// Explicit visibility, if the caller gave one
    pub is_public: Option<bool>,
}

/// Normalized dealer profile fields. Empty strings become `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    /// Dealer name
    pub company_name: String,
    /// Postal address
    pub address: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

fn required_text(value: Option<&String>, message: &str) -> Result<String> {
    match value.map(|s| s.trim()) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(Error::validation(message)),
    }
}

fn optional_text(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parses a vehicle identifier. Identifiers are UUIDs.
pub fn parse_vehicle_id(value: Option<&str>) -> Result<Uuid> {
    value
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
        .ok_or_else(|| Error::validation(INVALID_VEHICLE_ID))
}

fn coerce_decimal(value: Option<&RawValue>, message: &str) -> Result<Decimal> {
    let parsed = match value {
        Some(RawValue::Integer(n)) => Some(Decimal::from(*n)),
        // Display gives the shortest representation that round-trips
        Some(RawValue::Float(f)) if f.is_finite() => Decimal::from_str(&f.to_string()).ok(),
        Some(RawValue::Text(s)) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    };
    parsed.ok_or_else(|| Error::validation(message))
}

/// Messages for one money field.
struct MoneyRule {
    not_number: &'static str,
    not_positive: &'static str,
    too_large: &'static str,
}

const PURCHASE_PRICE_RULE: MoneyRule = MoneyRule {
    not_number: PRICE_NOT_NUMBER,
    not_positive: PRICE_NOT_POSITIVE,
    too_large: PRICE_TOO_LARGE,
};

const SOLD_PRICE_RULE: MoneyRule = MoneyRule {
    not_number: SOLD_PRICE_NOT_NUMBER,
    not_positive: SOLD_PRICE_NOT_POSITIVE,
    too_large: SOLD_PRICE_TOO_LARGE,
};

const AMOUNT_RULE: MoneyRule = MoneyRule {
    not_number: AMOUNT_NOT_NUMBER,
    not_positive: AMOUNT_NOT_POSITIVE,
    too_large: AMOUNT_TOO_LARGE,
};

fn money_amount(value: Option<&RawValue>, rule: &MoneyRule) -> Result<Decimal> {
    let amount = coerce_decimal(value, rule.not_number)?;
    if amount <= Decimal::ZERO {
        return Err(Error::validation(rule.not_positive));
    }
    if amount > MAX_MONEY_AMOUNT {
        return Err(Error::validation(rule.too_large));
    }
    Ok(amount)
}

fn coerce_date(value: Option<&RawValue>, message: &str) -> Result<NaiveDate> {
    let parsed = match value {
        Some(RawValue::Text(s)) => parse_date_text(s.trim()),
        Some(RawValue::Integer(millis)) => {
            DateTime::from_timestamp_millis(*millis).map(|dt| dt.date_naive())
        }
        _ => None,
    };
    parsed.ok_or_else(|| Error::validation(message))
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

fn coerce_year(value: Option<&RawValue>, current_year: i32) -> Result<i32> {
    let year = match value {
        Some(RawValue::Integer(n)) => i32::try_from(*n).ok(),
        Some(RawValue::Float(f)) if f.fract() == 0.0 && f.is_finite() => {
            i32::from_str(&format!("{f:.0}")).ok()
        }
        Some(RawValue::Text(s)) => i32::from_str(s.trim()).ok(),
        _ => None,
    }
    .ok_or_else(|| Error::validation(YEAR_NOT_WHOLE))?;

    let max_year = current_year + 1;
    if year < MIN_VEHICLE_YEAR {
        return Err(Error::validation(format!(
            "Year must be {MIN_VEHICLE_YEAR} or later"
        )));
    }
    if year > max_year {
        return Err(Error::validation(format!(
            "Year cannot be later than {max_year}"
        )));
    }
    Ok(year)
}

fn clean_images(images: Option<&Vec<String>>) -> Vec<String> {
    images.map_or_else(Vec::new, |list| {
        list.iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Operation schemas
// ---------------------------------------------------------------------------

/// Validates a new vehicle.
///
/// Order: make, model, year, registration number, purchase price, purchase date.
/// `current_year` bounds the model year to `current_year + 1`.
pub fn validate_new_vehicle(input: &VehicleInput, current_year: i32) -> Result<NewVehicle> {
    let make = required_text(input.make.as_ref(), MAKE_REQUIRED)?;
    let model = required_text(input.model.as_ref(), MODEL_REQUIRED)?;
    let year = coerce_year(input.year.as_ref(), current_year)?;
    let reg_number = required_text(input.reg_number.as_ref(), REG_NUMBER_REQUIRED)?;
    let vin = optional_text(input.vin.as_ref());
    let purchase_price = money_amount(input.purchase_price.as_ref(), &PURCHASE_PRICE_RULE)?;
    let purchase_date = coerce_date(input.purchase_date.as_ref(), PURCHASE_DATE_INVALID)?;

    Ok(NewVehicle {
        make,
        model,
        year,
        reg_number,
        vin,
        purchase_price,
        purchase_date,
        images: clean_images(input.images.as_ref()),
    })
}

/// Validates a partial vehicle edit. The id is checked first, then every
/// present field with the same rule used on create.
pub fn validate_vehicle_update(
    input: &VehicleUpdateInput,
    current_year: i32,
) -> Result<VehicleChanges> {
    let id = parse_vehicle_id(input.id.as_deref())?;

    let make = input
        .make
        .as_ref()
        .map(|v| required_text(Some(v), MAKE_REQUIRED))
        .transpose()?;
    let model = input
        .model
        .as_ref()
        .map(|v| required_text(Some(v), MODEL_REQUIRED))
        .transpose()?;
    let year = input
        .year
        .as_ref()
        .map(|v| coerce_year(Some(v), current_year))
        .transpose()?;
    let reg_number = input
        .reg_number
        .as_ref()
        .map(|v| required_text(Some(v), REG_NUMBER_REQUIRED))
        .transpose()?;
    let vin = input.vin.as_ref().map(|v| optional_text(Some(v)));
    let purchase_price = input
        .purchase_price
        .as_ref()
        .map(|v| money_amount(Some(v), &PURCHASE_PRICE_RULE))
        .transpose()?;
    let purchase_date = input
        .purchase_date
        .as_ref()
        .map(|v| coerce_date(Some(v), PURCHASE_DATE_INVALID))
        .transpose()?;

    Ok(VehicleChanges {
        id,
        make,
        model,
        year,
        reg_number,
        vin,
        purchase_price,
        purchase_date,
        images: input.images.as_ref().map(|list| clean_images(Some(list))),
    })
}

/// Validates a sale: vehicle id, sold price, sold date.
pub fn validate_sale(input: &SaleInput) -> Result<SaleRecord> {
    let vehicle_id = parse_vehicle_id(input.vehicle_id.as_deref())?;
    let sold_price = money_amount(input.sold_price.as_ref(), &SOLD_PRICE_RULE)?;
    let sold_date = coerce_date(input.sold_date.as_ref(), SOLD_DATE_INVALID)?;

    Ok(SaleRecord {
        vehicle_id,
        sold_price,
        sold_date,
    })
}

/// Validates a new expense: vehicle id, description, amount, date, category.
pub fn validate_new_expense(input: &ExpenseInput) -> Result<NewExpense> {
    let vehicle_id = parse_vehicle_id(input.vehicle_id.as_deref())?;
    let description = required_text(input.description.as_ref(), DESCRIPTION_REQUIRED)?;
    let amount = money_amount(input.amount.as_ref(), &AMOUNT_RULE)?;
    let date = coerce_date(input.date.as_ref(), EXPENSE_DATE_INVALID)?;
    let category = input
        .category
        .as_deref()
        .and_then(ExpenseCategory::parse)
        .ok_or_else(|| Error::validation(CATEGORY_INVALID))?;

    Ok(NewExpense {
        vehicle_id,
        description,
        amount,
        date,
        category,
        is_public: input.is_public,
    })
}

/// Validates the dealer profile. An empty email is accepted and stored as absent.
pub fn validate_profile(input: &ProfileInput) -> Result<ProfileChanges> {
    let company_name = required_text(input.company_name.as_ref(), COMPANY_NAME_REQUIRED)?;
    let address = optional_text(input.address.as_ref());
    let phone = optional_text(input.phone.as_ref());
    let email = optional_text(input.email.as_ref());

    if let Some(address) = &email {
        if !validator::validate_email(address.as_str()) {
            return Err(Error::validation(EMAIL_INVALID));
        }
    }

    Ok(ProfileChanges {
        company_name,
        address,
        phone,
        email,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::json;

    fn message(err: Error) -> String {
        match err {
            Error::Validation { message } => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn corolla() -> VehicleInput {
        serde_json::from_value(json!({
            "make": "Toyota",
            "model": "Corolla",
            "year": 2020,
            "regNumber": "WP CAM-1234",
            "purchasePrice": 2_500_000,
            "purchaseDate": "2024-01-10"
        }))
        .unwrap()
    }

    #[test]
    fn test_new_vehicle_valid() {
        let vehicle = validate_new_vehicle(&corolla(), 2024).unwrap();
        assert_eq!(vehicle.make, "Toyota");
        assert_eq!(vehicle.year, 2020);
        assert_eq!(vehicle.reg_number, "WP CAM-1234");
        assert_eq!(vehicle.purchase_price, Decimal::from(2_500_000));
        assert_eq!(
            vehicle.purchase_date,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
        assert!(vehicle.images.is_empty());
        assert!(vehicle.vin.is_none());
    }

    #[test]
    fn test_new_vehicle_coerces_text_numbers() {
        let mut input = corolla();
        input.year = Some("2019".into());
        input.purchase_price = Some("1999999.50".into());
        let vehicle = validate_new_vehicle(&input, 2024).unwrap();
        assert_eq!(vehicle.year, 2019);
        assert_eq!(vehicle.purchase_price, Decimal::new(199_999_950, 2));
    }

    #[test]
    fn test_new_vehicle_first_failure_wins() {
        // Empty make and negative price: make is declared first
        let mut input = corolla();
        input.make = Some(String::new());
        input.purchase_price = Some((-1000).into());
        assert_eq!(
            message(validate_new_vehicle(&input, 2024).unwrap_err()),
            MAKE_REQUIRED
        );

        input.make = Some("Toyota".into());
        assert_eq!(
            message(validate_new_vehicle(&input, 2024).unwrap_err()),
            PRICE_NOT_POSITIVE
        );
    }

    #[test]
    fn test_new_vehicle_year_bounds() {
        let mut input = corolla();
        input.year = Some(1899.into());
        assert_eq!(
            message(validate_new_vehicle(&input, 2024).unwrap_err()),
            "Year must be 1900 or later"
        );

        input.year = Some(2025.into());
        assert!(validate_new_vehicle(&input, 2024).is_ok());

        input.year = Some(2026.into());
        assert_eq!(
            message(validate_new_vehicle(&input, 2024).unwrap_err()),
            "Year cannot be later than 2025"
        );

        input.year = Some(2020.5.into());
        assert_eq!(
            message(validate_new_vehicle(&input, 2024).unwrap_err()),
            YEAR_NOT_WHOLE
        );
    }

    #[test]
    fn test_new_vehicle_missing_fields() {
        let input = VehicleInput::default();
        assert_eq!(
            message(validate_new_vehicle(&input, 2024).unwrap_err()),
            MAKE_REQUIRED
        );

        let mut input = corolla();
        input.reg_number = Some("   ".into());
        assert_eq!(
            message(validate_new_vehicle(&input, 2024).unwrap_err()),
            REG_NUMBER_REQUIRED
        );

        let mut input = corolla();
        input.purchase_price = Some("abc".into());
        assert_eq!(
            message(validate_new_vehicle(&input, 2024).unwrap_err()),
            PRICE_NOT_NUMBER
        );

        let mut input = corolla();
        input.purchase_date = Some("10/01/2024".into());
        assert_eq!(
            message(validate_new_vehicle(&input, 2024).unwrap_err()),
            PURCHASE_DATE_INVALID
        );
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        for raw in ["2024-01-10", "2024-01-10T08:30:00Z", "2024-01-10T08:30:00"] {
            assert_eq!(
                coerce_date(Some(&raw.into()), PURCHASE_DATE_INVALID).unwrap(),
                expected
            );
        }
        // 2024-01-10T00:00:00Z in epoch milliseconds
        assert_eq!(
            coerce_date(Some(&RawValue::Integer(1_704_844_800_000)), "x").unwrap(),
            expected
        );
        assert!(coerce_date(Some(&RawValue::Bool(true)), "x").is_err());
    }

    #[test]
    fn test_update_requires_id_and_checks_present_fields() {
        let input = VehicleUpdateInput {
            make: Some("Honda".into()),
            ..Default::default()
        };
        assert_eq!(
            message(validate_vehicle_update(&input, 2024).unwrap_err()),
            INVALID_VEHICLE_ID
        );

        let id = Uuid::new_v4();
        let input = VehicleUpdateInput {
            id: Some(id.to_string()),
            model: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            message(validate_vehicle_update(&input, 2024).unwrap_err()),
            MODEL_REQUIRED
        );

        let input = VehicleUpdateInput {
            id: Some(id.to_string()),
            purchase_price: Some(1500.into()),
            vin: Some(String::new()),
            ..Default::default()
        };
        let changes = validate_vehicle_update(&input, 2024).unwrap();
        assert_eq!(changes.id, id);
        assert_eq!(changes.purchase_price, Some(Decimal::from(1500)));
        assert_eq!(changes.vin, Some(None));
        assert!(changes.make.is_none());
        assert!(changes.reg_number.is_none());
    }

    #[test]
    fn test_sale_validation() {
        let id = Uuid::new_v4();
        let sale: SaleInput = serde_json::from_value(json!({
            "vehicleId": id.to_string(),
            "soldPrice": "3000000",
            "soldDate": "2024-03-01"
        }))
        .unwrap();
        let record = validate_sale(&sale).unwrap();
        assert_eq!(record.vehicle_id, id);
        assert_eq!(record.sold_price, Decimal::from(3_000_000));

        let sale = SaleInput {
            vehicle_id: Some(id.to_string()),
            sold_price: Some(0.into()),
            sold_date: Some("2024-03-01".into()),
        };
        assert_eq!(
            message(validate_sale(&sale).unwrap_err()),
            SOLD_PRICE_NOT_POSITIVE
        );
    }

    #[test]
    fn test_money_amounts_are_bounded() {
        let huge = "50000000000000000000000000000";

        let mut input = corolla();
        input.purchase_price = Some(huge.into());
        assert_eq!(
            message(validate_new_vehicle(&input, 2024).unwrap_err()),
            PRICE_TOO_LARGE
        );

        input.purchase_price = Some(MAX_MONEY_AMOUNT.to_string().into());
        let vehicle = validate_new_vehicle(&input, 2024).unwrap();
        assert_eq!(vehicle.purchase_price, Decimal::from(1_000_000_000_000_000_i64));

        let sale = SaleInput {
            vehicle_id: Some(Uuid::new_v4().to_string()),
            sold_price: Some("1000000000000000.01".into()),
            sold_date: Some("2024-03-01".into()),
        };
        assert_eq!(
            message(validate_sale(&sale).unwrap_err()),
            SOLD_PRICE_TOO_LARGE
        );

        let expense = ExpenseInput {
            vehicle_id: Some(Uuid::new_v4().to_string()),
            description: Some("Respray".into()),
            amount: Some(huge.into()),
            date: Some("2024-03-01".into()),
            category: Some("REPAIR".into()),
            is_public: None,
        };
        assert_eq!(
            message(validate_new_expense(&expense).unwrap_err()),
            AMOUNT_TOO_LARGE
        );
    }

    #[test]
    fn test_expense_validation() {
        let id = Uuid::new_v4();
        let input: ExpenseInput = serde_json::from_value(json!({
            "vehicleId": id.to_string(),
            "description": "Brake pads",
            "amount": 12_500.75,
            "date": "2024-02-01",
            "category": "BROKER_FEE"
        }))
        .unwrap();
        let expense = validate_new_expense(&input).unwrap();
        assert_eq!(expense.category, ExpenseCategory::BrokerFee);
        assert_eq!(expense.amount, Decimal::new(1_250_075, 2));
        assert_eq!(expense.is_public, None);

        let mut bad = input.clone();
        bad.category = Some("repair".into());
        assert_eq!(
            message(validate_new_expense(&bad).unwrap_err()),
            CATEGORY_INVALID
        );

        let mut bad = input;
        bad.description = Some(String::new());
        bad.amount = Some((-5).into());
        assert_eq!(
            message(validate_new_expense(&bad).unwrap_err()),
            DESCRIPTION_REQUIRED
        );
    }

    #[test]
    fn test_profile_validation() {
        let input = ProfileInput {
            company_name: Some("Lanka Motors".into()),
            email: Some(String::new()),
            ..Default::default()
        };
        let profile = validate_profile(&input).unwrap();
        assert_eq!(profile.company_name, "Lanka Motors");
        assert!(profile.email.is_none());

        let input = ProfileInput {
            company_name: Some("Lanka Motors".into()),
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert_eq!(
            message(validate_profile(&input).unwrap_err()),
            EMAIL_INVALID
        );

        let input = ProfileInput {
            email: Some("sales@lanka.lk".into()),
            ..Default::default()
        };
        assert_eq!(
            message(validate_profile(&input).unwrap_err()),
            COMPANY_NAME_REQUIRED
        );
    }
}
