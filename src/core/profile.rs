//! Dealer profile persistence - the singleton dealership record.
//!
//! Reading the profile creates a default row when none exists yet, so callers
//! always get a profile back.

use crate::{
    core::validation::ProfileChanges,
    entities::{DealerProfile, dealer_profile},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Company name given to a freshly created profile.
pub const DEFAULT_COMPANY_NAME: &str = "AutoTrust Pro";

/// Returns the profile row, if one exists. The lowest id wins should there be more.
pub async fn find_profile(db: &DatabaseConnection) -> Result<Option<dealer_profile::Model>> {
    DealerProfile::find()
        .order_by_asc(dealer_profile::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns the profile, creating one named `default_company_name` when none exists.
pub async fn get_or_create_profile(
    db: &DatabaseConnection,
    default_company_name: &str,
) -> Result<dealer_profile::Model> {
    if let Some(profile) = find_profile(db).await? {
        return Ok(profile);
    }

    info!(company_name = default_company_name, "Creating default dealer profile");
    let profile = dealer_profile::ActiveModel {
        company_name: Set(default_company_name.to_string()),
        address: Set(None),
        phone: Set(None),
        email: Set(None),
        updated_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    profile.insert(db).await.map_err(Into::into)
}

/// Writes the profile, updating the existing row or creating the first one.
pub async fn save_profile(
    db: &DatabaseConnection,
    changes: ProfileChanges,
) -> Result<dealer_profile::Model> {
    let now = chrono::Utc::now();

    match find_profile(db).await? {
        Some(existing) => {
            let mut active: dealer_profile::ActiveModel = existing.into();
            active.company_name = Set(changes.company_name);
            active.address = Set(changes.address);
            active.phone = Set(changes.phone);
            active.email = Set(changes.email);
            active.updated_at = Set(now);
            active.update(db).await.map_err(Into::into)
        }
        None => {
            let profile = dealer_profile::ActiveModel {
                company_name: Set(changes.company_name),
                address: Set(changes.address),
                phone: Set(changes.phone),
                email: Set(changes.email),
                updated_at: Set(now),
                ..Default::default()
            };
            profile.insert(db).await.map_err(Into::into)
        }
    }
}
