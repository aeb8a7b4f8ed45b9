//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod dealer_profile;
pub mod expense;
pub mod vehicle;

// Re-export specific types to avoid conflicts
pub use dealer_profile::{
    Column as DealerProfileColumn, Entity as DealerProfile, Model as DealerProfileModel,
};
pub use expense::{
    Column as ExpenseColumn, Entity as Expense, ExpenseCategory, Model as ExpenseModel,
};
pub use vehicle::{
    Column as VehicleColumn, Entity as Vehicle, ImageRefs, Model as VehicleModel, VehicleStatus,
};
