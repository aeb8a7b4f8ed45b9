//! Action layer - the mutation orchestrator and read façade.
//!
//! Every operation validates its input, applies the domain rules, calls the
//! persistence functions in [`crate::core`], and reports the outcome as an
//! [`ActionResult`]. Errors never cross this boundary: storage failures are logged
//! with full detail and surfaced only as a generic message.

/// Expense operations
pub mod expense;
/// Dashboard, report and certificate reads
pub mod reports;
/// Dealer profile operations
pub mod settings;
/// Vehicle operations
pub mod vehicle;

use crate::{
    cache::{CacheTag, VehicleListCache},
    config::settings::AppConfig,
    errors::Error,
};
use chrono::{Datelike, Local, NaiveDate};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{error, warn};

pub(crate) const VEHICLE_NOT_FOUND: &str = "Vehicle not found.";
pub(crate) const DUPLICATE_REG_NUMBER: &str = "Registration number already exists.";

/// Uniform outcome envelope returned by every action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload on success, where the operation returns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable outcome; on failure, the reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Cached views made stale by this operation
    #[serde(skip)]
    pub dirty_tags: Vec<CacheTag>,
}

impl<T> ActionResult<T> {
    /// A successful result carrying `data`.
    pub fn ok(data: T, message: impl Into<String>, dirty_tags: Vec<CacheTag>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            dirty_tags,
        }
    }

    /// A successful read with no message.
    pub const fn found(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            dirty_tags: Vec::new(),
        }
    }

    /// A failed result.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            dirty_tags: Vec::new(),
        }
    }

    /// Converts an error into a failed result.
    ///
    /// Input and rule failures surface their own message. Storage failures are
    /// logged and replaced by `storage_message`.
    pub fn from_error(err: &Error, storage_message: &str) -> Self {
        match err {
            Error::Validation { message } => Self::failure(message.clone()),
            Error::DuplicateRegNumber { reg_number } => {
                warn!(reg_number, "Rejected duplicate registration number");
                Self::failure(DUPLICATE_REG_NUMBER)
            }
            Error::VehicleNotFound { id } => {
                warn!(vehicle_id = id, "Vehicle not found");
                Self::failure(VEHICLE_NOT_FOUND)
            }
            Error::AmountOverflow { .. }
            | Error::Database(_)
            | Error::Config { .. }
            | Error::Io(_) => {
                error!(error = %err, "{storage_message}");
                Self::failure(storage_message)
            }
        }
    }
}

/// The dealership's record-keeping service.
///
/// Holds the database connection and the vehicle list cache.
pub struct Dealership {
    database: DatabaseConnection,
    vehicle_cache: VehicleListCache,
    default_company_name: String,
}

impl Dealership {
    /// Creates a service over `database` configured by `config`.
    #[must_use]
    pub fn new(database: DatabaseConnection, config: &AppConfig) -> Self {
        Self {
            database,
            vehicle_cache: VehicleListCache::new(config.vehicle_cache_ttl()),
            default_company_name: config.default_company_name.clone(),
        }
    }

    /// The underlying database connection.
    #[must_use]
    pub const fn database(&self) -> &DatabaseConnection {
        &self.database
    }

    /// Applies a result's dirty tags to the in-process cache, then hands it back.
    async fn finish<T>(&self, result: ActionResult<T>) -> ActionResult<T> {
        self.vehicle_cache.apply(&result.dirty_tags).await;
        result
    }
}

/// Today's date on the local wall clock.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn current_year() -> i32 {
    today().year()
}
