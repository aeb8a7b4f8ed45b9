//! Expense entity - A cost attributed to exactly one vehicle.
//!
//! Expenses are never reassigned; they disappear together with their vehicle.
//! `is_public` controls whether the expense appears on the provenance certificate.

use sea_orm::Iterable;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of cost. Stored as the upper-case string value.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    /// Mechanical or body work
    #[sea_orm(string_value = "REPAIR")]
    Repair,
    /// Commission paid to a broker
    #[sea_orm(string_value = "BROKER_FEE")]
    BrokerFee,
    /// Fuel and transport
    #[sea_orm(string_value = "TRAVEL")]
    Travel,
    /// Registration, transfer and other paperwork
    #[sea_orm(string_value = "DOCUMENTATION")]
    Documentation,
    /// Anything else
    #[sea_orm(string_value = "OTHER")]
    Other,
}

impl ExpenseCategory {
    /// Stored string form, e.g. `"BROKER_FEE"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repair => "REPAIR",
            Self::BrokerFee => "BROKER_FEE",
            Self::Travel => "TRAVEL",
            Self::Documentation => "DOCUMENTATION",
            Self::Other => "OTHER",
        }
    }

    /// Parses the stored string form. Matching is exact.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::iter().find(|category| category.as_str() == value)
    }
}

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Vehicle that owns this expense
    pub vehicle_id: Uuid,
    /// What the money was spent on
    pub description: String,
    /// Amount spent, always positive
    #[sea_orm(column_type = "Double")]
    pub amount: Decimal,
    /// When the cost was incurred
    pub date: Date,
    /// Kind of cost
    pub category: ExpenseCategory,
    /// Whether the expense is listed on the public certificate
    pub is_public: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Expense and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each expense belongs to one vehicle
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Vehicle,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
