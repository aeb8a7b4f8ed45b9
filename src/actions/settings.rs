//! Dealer profile actions.

use super::{ActionResult, Dealership};
use crate::{
    cache::CacheTag,
    core::{
        profile,
        validation::{ProfileInput, validate_profile},
    },
    entities::DealerProfileModel,
};
use tracing::info;

const SETTINGS_UPDATED: &str = "Settings updated successfully.";
const LOAD_SETTINGS_FAILED: &str = "Failed to load settings.";
const UPDATE_SETTINGS_FAILED: &str = "Failed to update settings.";

impl Dealership {
    /// Returns the dealer profile, creating the default one on first read.
    pub async fn get_dealer_profile(&self) -> ActionResult<DealerProfileModel> {
        match profile::get_or_create_profile(&self.database, &self.default_company_name).await {
            Ok(profile) => ActionResult::found(profile),
            Err(e) => ActionResult::from_error(&e, LOAD_SETTINGS_FAILED),
        }
    }

    /// Saves the dealer profile. Empty optional fields are stored as absent.
    pub async fn update_dealer_profile(
        &self,
        input: &ProfileInput,
    ) -> ActionResult<DealerProfileModel> {
        let changes = match validate_profile(input) {
            Ok(changes) => changes,
            Err(e) => return ActionResult::from_error(&e, UPDATE_SETTINGS_FAILED),
        };

        let result = match profile::save_profile(&self.database, changes).await {
            Ok(profile) => {
                info!(company_name = %profile.company_name, "Dealer profile updated");
                ActionResult::ok(
                    profile,
                    SETTINGS_UPDATED,
                    vec![CacheTag::Settings, CacheTag::Reports, CacheTag::Layout],
                )
            }
            Err(e) => ActionResult::from_error(&e, UPDATE_SETTINGS_FAILED),
        };
        self.finish(result).await
    }
}
