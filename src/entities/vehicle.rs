//! Vehicle entity - One unit of dealership inventory.
//!
//! A vehicle is purchased, accumulates expenses, and is eventually sold.
//! The registration number is the natural key and is unique across the table.

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sale state of a vehicle. Stored as `AVAILABLE` / `SOLD`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    /// In stock and for sale
    #[sea_orm(string_value = "AVAILABLE")]
    Available,
    /// Sold; `sold_price` and `sold_date` are set
    #[sea_orm(string_value = "SOLD")]
    Sold,
}

/// Ordered list of image references (URLs or storage keys), stored as JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ImageRefs(pub Vec<String>);

/// Vehicle database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the vehicle
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Manufacturer (e.g., "Toyota")
    pub make: String,
    /// Model name (e.g., "Corolla")
    pub model: String,
    /// Model year
    pub year: i32,
    /// Registration number, unique and matched case-sensitively
    #[sea_orm(unique)]
    pub reg_number: String,
    /// Vehicle identification number, if recorded
    pub vin: Option<String>,
    /// Price paid when the vehicle was acquired
    #[sea_orm(column_type = "Double")]
    pub purchase_price: Decimal,
    /// Date the vehicle was acquired
    pub purchase_date: Date,
    /// Current sale state
    pub status: VehicleStatus,
    /// Sale price, present once sold
    #[sea_orm(column_type = "Double", nullable)]
    pub sold_price: Option<Decimal>,
    /// Sale date, present once sold
    pub sold_date: Option<Date>,
    /// Image references in display order
    #[sea_orm(column_type = "Json")]
    pub images: ImageRefs,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Vehicle and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One vehicle owns many expenses
    #[sea_orm(has_many = "super::expense::Entity")]
    Expenses,
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
