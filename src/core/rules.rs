//! Domain rules - Business invariants layered on top of validated input.
//!
//! These are pure decisions. Storage lookups (e.g. "who holds this registration
//! number?") are performed by the caller and passed in, so the rules can be tested
//! without a database.

use crate::{
    core::validation::SaleRecord,
    entities::{ExpenseCategory, VehicleStatus, vehicle},
    errors::{Error, Result},
};
use uuid::Uuid;

/// Visibility an expense gets when the caller does not say. Adding a category
/// means adding a row here.
pub const DEFAULT_VISIBILITY: [(ExpenseCategory, bool); 5] = [
    (ExpenseCategory::Repair, true),
    (ExpenseCategory::BrokerFee, false),
    (ExpenseCategory::Travel, false),
    (ExpenseCategory::Documentation, false),
    (ExpenseCategory::Other, false),
];

/// Rejects a new vehicle whose registration number is already taken.
///
/// `existing` is the vehicle currently holding that registration number, if any.
pub fn ensure_reg_number_free(existing: Option<&vehicle::Model>) -> Result<()> {
    match existing {
        Some(holder) => Err(Error::DuplicateRegNumber {
            reg_number: holder.reg_number.clone(),
        }),
        None => Ok(()),
    }
}

/// Rejects an edit that would move a registration number onto `vehicle_id` while
/// a different vehicle holds it. Keeping one's own number is allowed.
pub fn ensure_reg_number_free_for(
    existing: Option<&vehicle::Model>,
    vehicle_id: Uuid,
) -> Result<()> {
    match existing {
        Some(holder) if holder.id != vehicle_id => Err(Error::DuplicateRegNumber {
            reg_number: holder.reg_number.clone(),
        }),
        _ => Ok(()),
    }
}

/// Default visibility for `category`.
#[must_use]
pub fn default_visibility(category: ExpenseCategory) -> bool {
    DEFAULT_VISIBILITY
        .iter()
        .find(|(c, _)| *c == category)
        .is_some_and(|(_, public)| *public)
}

/// Resolves the stored visibility of a new expense. An explicit choice always wins.
#[must_use]
pub fn resolve_visibility(category: ExpenseCategory, explicit: Option<bool>) -> bool {
    explicit.unwrap_or_else(|| default_visibility(category))
}

/// Outcome of planning a sale against the current vehicle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalePlan {
    /// The sale data to write
    pub sale: SaleRecord,
    /// Set when the vehicle was already sold; holds the sale being overwritten
    pub overwrites: Option<(rust_decimal::Decimal, chrono::NaiveDate)>,
}

/// Plans the `AVAILABLE -> SOLD` transition.
///
/// Selling is not guarded: a sold vehicle may be sold again, replacing its sale
/// data. The plan records what is overwritten so the caller can log it.
#[must_use]
pub fn plan_sale(current: &vehicle::Model, sale: SaleRecord) -> SalePlan {
    let overwrites = match (current.status, current.sold_price, current.sold_date) {
        (VehicleStatus::Sold, Some(price), Some(date)) => Some((price, date)),
        _ => None,
    };
    SalePlan { sale, overwrites }
}

/// True when the sale fields agree with the status: sold vehicles carry both a
/// price and a date, available vehicles carry neither.
#[must_use]
pub const fn sale_state_consistent(vehicle: &vehicle::Model) -> bool {
    match vehicle.status {
        VehicleStatus::Sold => vehicle.sold_price.is_some() && vehicle.sold_date.is_some(),
        VehicleStatus::Available => vehicle.sold_price.is_none() && vehicle.sold_date.is_none(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_vehicle;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use sea_orm::Iterable;

    #[test]
    fn test_reg_number_free_on_create() {
        assert!(ensure_reg_number_free(None).is_ok());

        let holder = sample_vehicle("WP CAM-1234");
        let err = ensure_reg_number_free(Some(&holder)).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateRegNumber { reg_number } if reg_number == "WP CAM-1234"
        ));
    }

    #[test]
    fn test_reg_number_self_collision_allowed_on_update() {
        let holder = sample_vehicle("WP CAM-1234");
        assert!(ensure_reg_number_free_for(Some(&holder), holder.id).is_ok());
        assert!(ensure_reg_number_free_for(None, holder.id).is_ok());
        assert!(matches!(
            ensure_reg_number_free_for(Some(&holder), Uuid::new_v4()),
            Err(Error::DuplicateRegNumber { .. })
        ));
    }

    #[test]
    fn test_visibility_table_covers_every_category() {
        for category in ExpenseCategory::iter() {
            assert!(
                DEFAULT_VISIBILITY.iter().any(|(c, _)| *c == category),
                "{category:?} missing from DEFAULT_VISIBILITY"
            );
        }
    }

    #[test]
    fn test_default_visibility_law() {
        assert!(resolve_visibility(ExpenseCategory::Repair, None));
        for category in [
            ExpenseCategory::BrokerFee,
            ExpenseCategory::Travel,
            ExpenseCategory::Documentation,
            ExpenseCategory::Other,
        ] {
            assert!(!resolve_visibility(category, None));
            assert!(resolve_visibility(category, Some(true)));
        }
        assert!(!resolve_visibility(ExpenseCategory::Repair, Some(false)));
    }

    #[test]
    fn test_plan_sale_reports_overwrite() {
        let mut vehicle = sample_vehicle("CAB-0001");
        let first = SaleRecord {
            vehicle_id: vehicle.id,
            sold_price: Decimal::from(3_000_000),
            sold_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(plan_sale(&vehicle, first).overwrites, None);

        vehicle.status = VehicleStatus::Sold;
        vehicle.sold_price = Some(first.sold_price);
        vehicle.sold_date = Some(first.sold_date);
        let second = SaleRecord {
            sold_price: Decimal::from(3_100_000),
            ..first
        };
        let plan = plan_sale(&vehicle, second);
        assert_eq!(plan.sale, second);
        assert_eq!(plan.overwrites, Some((first.sold_price, first.sold_date)));
    }

    #[test]
    fn test_sale_state_consistency() {
        let mut vehicle = sample_vehicle("CAB-0002");
        assert!(sale_state_consistent(&vehicle));

        vehicle.status = VehicleStatus::Sold;
        assert!(!sale_state_consistent(&vehicle));

        vehicle.sold_price = Some(Decimal::from(10));
        vehicle.sold_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert!(sale_state_consistent(&vehicle));
    }
}
