//! Dealer profile entity - Identity and contact details of the dealership.
//! At most one row exists.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Dealer profile database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dealer_profile")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Trading name shown on certificates and reports
    pub company_name: String,
    /// Postal address
    pub address: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
    /// Contact email address
    pub email: Option<String>,
    /// When the profile was last modified
    pub updated_at: DateTimeUtc,
}

/// `DealerProfile` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
