//! Vehicle actions - create, edit, sell, delete and the cached list read.

use super::{ActionResult, Dealership, current_year};
use crate::{
    cache::CacheTag,
    core::{
        rules,
        validation::{
            SaleInput, VehicleInput, VehicleUpdateInput, parse_vehicle_id, validate_new_vehicle,
            validate_sale, validate_vehicle_update,
        },
        vehicle::{self as vehicles, VehicleDetail},
    },
    entities::VehicleModel,
    errors::{Error, Result},
};
use tracing::{info, warn};
use uuid::Uuid;

const VEHICLE_CREATED: &str = "Vehicle created successfully.";
const VEHICLE_UPDATED: &str = "Vehicle updated successfully.";
const VEHICLE_DELETED: &str = "Vehicle deleted successfully.";
const VEHICLE_SOLD: &str = "Vehicle marked as sold.";

const CREATE_FAILED: &str = "Failed to create vehicle.";
const UPDATE_FAILED: &str = "Failed to update vehicle.";
const DELETE_FAILED: &str = "Failed to delete vehicle.";
const SELL_FAILED: &str = "Failed to update vehicle status.";
pub(super) const FETCH_VEHICLES_FAILED: &str = "Failed to fetch vehicles.";
pub(super) const FETCH_VEHICLE_FAILED: &str = "Failed to fetch vehicle.";

impl Dealership {
    /// Adds a vehicle to inventory. New vehicles are always `AVAILABLE`.
    pub async fn create_vehicle(&self, input: &VehicleInput) -> ActionResult<VehicleModel> {
        let result = match self.try_create_vehicle(input).await {
            Ok(vehicle) => {
                info!(
                    vehicle_id = %vehicle.id,
                    reg_number = %vehicle.reg_number,
                    "Vehicle created"
                );
                ActionResult::ok(
                    vehicle,
                    VEHICLE_CREATED,
                    vec![CacheTag::VehicleList, CacheTag::Dashboard],
                )
            }
            Err(e) => ActionResult::from_error(&e, CREATE_FAILED),
        };
        self.finish(result).await
    }

    async fn try_create_vehicle(&self, input: &VehicleInput) -> Result<VehicleModel> {
        let new = validate_new_vehicle(input, current_year())?;
        let holder = vehicles::find_vehicle_by_reg_number(&self.database, &new.reg_number).await?;
        rules::ensure_reg_number_free(holder.as_ref())?;
        vehicles::create_vehicle(&self.database, new).await
    }

    /// Edits an existing vehicle. Only the fields present in `input` change.
    pub async fn update_vehicle(&self, input: &VehicleUpdateInput) -> ActionResult<VehicleModel> {
        let result = match self.try_update_vehicle(input).await {
            Ok(vehicle) => {
                info!(vehicle_id = %vehicle.id, "Vehicle updated");
                let tags = vec![
                    CacheTag::VehicleList,
                    CacheTag::Vehicle(vehicle.id),
                    CacheTag::Dashboard,
                ];
                ActionResult::ok(vehicle, VEHICLE_UPDATED, tags)
            }
            Err(e) => ActionResult::from_error(&e, UPDATE_FAILED),
        };
        self.finish(result).await
    }

    async fn try_update_vehicle(&self, input: &VehicleUpdateInput) -> Result<VehicleModel> {
        let changes = validate_vehicle_update(input, current_year())?;
        let current = self.require_vehicle(changes.id).await?;

        if let Some(reg_number) = changes
            .reg_number
            .as_deref()
            .filter(|reg| *reg != current.reg_number)
        {
            let holder = vehicles::find_vehicle_by_reg_number(&self.database, reg_number).await?;
            rules::ensure_reg_number_free_for(holder.as_ref(), current.id)?;
        }

        vehicles::update_vehicle(&self.database, current, changes).await
    }

    /// Deletes a vehicle and every expense it owns.
    ///
    /// On success `data` holds the number of expenses removed with it.
    pub async fn delete_vehicle(&self, vehicle_id: &str) -> ActionResult<u64> {
        let result = match self.try_delete_vehicle(vehicle_id).await {
            Ok((id, expenses_removed)) => {
                info!(vehicle_id = %id, expenses_removed, "Vehicle deleted");
                ActionResult::ok(
                    expenses_removed,
                    VEHICLE_DELETED,
                    vec![CacheTag::VehicleList, CacheTag::Dashboard, CacheTag::Vehicle(id)],
                )
            }
            Err(e) => ActionResult::from_error(&e, DELETE_FAILED),
        };
        self.finish(result).await
    }

    async fn try_delete_vehicle(&self, vehicle_id: &str) -> Result<(Uuid, u64)> {
        let id = parse_vehicle_id(Some(vehicle_id))?;
        self.require_vehicle(id).await?;
        let removed = vehicles::delete_vehicle(&self.database, id).await?;
        Ok((id, removed))
    }

    /// Records a sale and moves the vehicle to `SOLD`.
    ///
    /// Selling an already-sold vehicle replaces the previous sale data; the
    /// overwrite is logged at `warn` level.
    pub async fn mark_as_sold(&self, input: &SaleInput) -> ActionResult<VehicleModel> {
        let result = match self.try_mark_as_sold(input).await {
            Ok(vehicle) => {
                info!(
                    vehicle_id = %vehicle.id,
                    sold_price = ?vehicle.sold_price,
                    sold_date = ?vehicle.sold_date,
                    "Vehicle marked as sold"
                );
                let tags = vec![
                    CacheTag::Vehicle(vehicle.id),
                    CacheTag::VehicleList,
                    CacheTag::Dashboard,
                    CacheTag::Reports,
                ];
                ActionResult::ok(vehicle, VEHICLE_SOLD, tags)
            }
            Err(e) => ActionResult::from_error(&e, SELL_FAILED),
        };
        self.finish(result).await
    }

    async fn try_mark_as_sold(&self, input: &SaleInput) -> Result<VehicleModel> {
        let sale = validate_sale(input)?;
        let current = self.require_vehicle(sale.vehicle_id).await?;

        let plan = rules::plan_sale(&current, sale);
        if let Some((previous_price, previous_date)) = plan.overwrites {
            warn!(
                vehicle_id = %current.id,
                %previous_price,
                %previous_date,
                new_price = %plan.sale.sold_price,
                new_date = %plan.sale.sold_date,
                "Vehicle already sold; overwriting sale data"
            );
        }

        vehicles::mark_sold(&self.database, current, plan.sale).await
    }

    /// Lists every vehicle with its expenses, newest first.
    ///
    /// Served from the in-process cache when it is fresh.
    pub async fn get_vehicles(&self) -> ActionResult<Vec<VehicleDetail>> {
        match self.load_vehicle_details().await {
            Ok(list) => ActionResult::found(list),
            Err(e) => ActionResult::from_error(&e, FETCH_VEHICLES_FAILED),
        }
    }

    /// Fetches one vehicle with its expenses. Never cached.
    pub async fn get_vehicle_by_id(&self, vehicle_id: &str) -> ActionResult<VehicleDetail> {
        match self.load_vehicle_detail(vehicle_id).await {
            Ok(detail) => ActionResult::found(detail),
            Err(e) => ActionResult::from_error(&e, FETCH_VEHICLE_FAILED),
        }
    }

    /// Cached read path shared by the list, dashboard and report views.
    pub(super) async fn load_vehicle_details(&self) -> Result<Vec<VehicleDetail>> {
        if let Some(cached) = self.vehicle_cache.get().await {
            return Ok(cached);
        }

        let list = vehicles::list_vehicle_details(&self.database).await?;
        self.vehicle_cache.store(list.clone()).await;
        Ok(list)
    }

    pub(super) async fn load_vehicle_detail(&self, vehicle_id: &str) -> Result<VehicleDetail> {
        let id = parse_vehicle_id(Some(vehicle_id))?;
        vehicles::find_vehicle_detail(&self.database, id)
            .await?
            .ok_or_else(|| Error::VehicleNotFound { id: id.to_string() })
    }

    pub(super) async fn require_vehicle(&self, id: Uuid) -> Result<VehicleModel> {
        vehicles::find_vehicle_by_id(&self.database, id)
            .await?
            .ok_or_else(|| Error::VehicleNotFound { id: id.to_string() })
    }
}
