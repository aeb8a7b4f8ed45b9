//! Read-only views built from the vehicle list: dashboard, sales report, certificate.

use super::{
    ActionResult, Dealership, today,
    vehicle::{FETCH_VEHICLE_FAILED, FETCH_VEHICLES_FAILED},
};
use crate::{
    core::{
        aggregate::{self, DashboardSummary},
        profile,
        report::{self, Certificate, SalesReport},
    },
    errors::{Error, Result},
};

impl Dealership {
    /// Headline figures for the current calendar month.
    pub async fn get_dashboard(&self) -> ActionResult<DashboardSummary> {
        let summary = self
            .load_vehicle_details()
            .await
            .and_then(|list| aggregate::summarize_dashboard(&list, today()));
        match summary {
            Ok(summary) => ActionResult::found(summary),
            Err(e) => ActionResult::from_error(&e, FETCH_VEHICLES_FAILED),
        }
    }

    /// Profit report for one calendar month.
    pub async fn get_sales_report(&self, year: i32, month: u32) -> ActionResult<SalesReport> {
        match self.try_sales_report(year, month).await {
            Ok(report) => ActionResult::found(report),
            Err(e) => ActionResult::from_error(&e, FETCH_VEHICLES_FAILED),
        }
    }

    async fn try_sales_report(&self, year: i32, month: u32) -> Result<SalesReport> {
        if !(1..=12).contains(&month) {
            return Err(Error::validation("Month must be between 1 and 12"));
        }
        let list = self.load_vehicle_details().await?;
        report::generate_sales_report(&list, year, month)
    }

    /// Certificate data for one vehicle, listing only its public expenses.
    pub async fn get_certificate(&self, vehicle_id: &str) -> ActionResult<Certificate> {
        match self.try_certificate(vehicle_id).await {
            Ok(certificate) => ActionResult::found(certificate),
            Err(e) => ActionResult::from_error(&e, FETCH_VEHICLE_FAILED),
        }
    }

    async fn try_certificate(&self, vehicle_id: &str) -> Result<Certificate> {
        let detail = self.load_vehicle_detail(vehicle_id).await?;
        let profile =
            profile::get_or_create_profile(&self.database, &self.default_company_name).await?;
        Ok(report::build_certificate(&detail, &profile))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        actions::VEHICLE_NOT_FOUND,
        config::settings::AppConfig,
        core::validation::{ExpenseInput, ProfileInput, SaleInput},
        test_utils::{create_test_vehicle, setup_test_db},
    };
    use crate::core::{validation::NewVehicle, vehicle as vehicles};
    use chrono::{Datelike, NaiveDate};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_certificate_uses_profile_and_public_history() -> Result<()> {
        let db = setup_test_db().await?;
        let vehicle = create_test_vehicle(&db, "CERT-9").await?;
        let dealership = Dealership::new(db, &AppConfig::default());

        for (description, category) in [("Full service", "REPAIR"), ("Broker", "BROKER_FEE")] {
            let added = dealership
                .add_expense(&ExpenseInput {
                    vehicle_id: Some(vehicle.id.to_string()),
                    description: Some(description.into()),
                    amount: Some(15_000.into()),
                    date: Some("2024-02-10".into()),
                    category: Some(category.into()),
                    is_public: None,
                })
                .await;
            assert!(added.success);
        }
        dealership
            .update_dealer_profile(&ProfileInput {
                company_name: Some("Lanka Motors".into()),
                ..Default::default()
            })
            .await;

        let certificate = dealership
            .get_certificate(&vehicle.id.to_string())
            .await
            .data
            .unwrap();
        assert_eq!(certificate.company_name, "Lanka Motors");
        assert_eq!(certificate.reg_number, "CERT-9");
        assert_eq!(certificate.history.len(), 1);
        assert_eq!(certificate.history[0].description, "Full service");

        let missing = dealership.get_certificate(&Uuid::new_v4().to_string()).await;
        assert_eq!(missing.message.as_deref(), Some(VEHICLE_NOT_FOUND));
        Ok(())
    }

    #[tokio::test]
    async fn test_sales_report_for_current_month() -> Result<()> {
        let db = setup_test_db().await?;
        let vehicle = create_test_vehicle(&db, "RPT-1").await?;
        create_test_vehicle(&db, "RPT-2").await?;
        let dealership = Dealership::new(db, &AppConfig::default());

        let today = today();
        let sold = dealership
            .mark_as_sold(&SaleInput {
                vehicle_id: Some(vehicle.id.to_string()),
                sold_price: Some(2_700_000.into()),
                sold_date: Some(today.into()),
            })
            .await;
        assert!(sold.success);

        let report = dealership
            .get_sales_report(today.year(), today.month())
            .await
            .data
            .unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.total_profit, Decimal::from(200_000));

        let dashboard = dealership.get_dashboard().await.data.unwrap();
        assert_eq!(dashboard.in_stock, 1);
        assert_eq!(dashboard.inventory_value, Decimal::from(2_500_000));
        assert_eq!(dashboard.recent.len(), 2);

        let invalid = dealership.get_sales_report(2024, 13).await;
        assert!(!invalid.success);
        assert_eq!(
            invalid.message.as_deref(),
            Some("Month must be between 1 and 12")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_dashboard_overflow_is_a_failure_envelope() -> Result<()> {
        let db = setup_test_db().await?;
        // Rows written below the action layer, so the money bound is not applied
        for reg_number in ["HUGE-1", "HUGE-2"] {
            vehicles::create_vehicle(
                &db,
                NewVehicle {
                    make: "Toyota".to_string(),
                    model: "Corolla".to_string(),
                    year: 2020,
                    reg_number: reg_number.to_string(),
                    vin: None,
                    purchase_price: Decimal::from_i128_with_scale(
                        50_000_000_000_000_000_000_000_000_000,
                        0,
                    ),
                    purchase_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                    images: Vec::new(),
                },
            )
            .await?;
        }
        let dealership = Dealership::new(db, &AppConfig::default());

        let dashboard = dealership.get_dashboard().await;
        assert!(!dashboard.success);
        assert!(dashboard.data.is_none());
        assert_eq!(dashboard.message.as_deref(), Some(FETCH_VEHICLES_FAILED));
        Ok(())
    }
}
