//! Read-through cache for the vehicle list, plus the dirty-tag vocabulary that
//! mutations use to say which cached views they made stale.

use crate::core::vehicle::VehicleDetail;
use serde::Serialize;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;
use tracing::{debug, trace};
use uuid::Uuid;

/// Default staleness bound for the cached vehicle list.
pub const DEFAULT_VEHICLE_CACHE_TTL: Duration = Duration::from_secs(30);

/// A cached read view that a mutation may have made stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "tag", content = "id", rename_all = "camelCase")]
pub enum CacheTag {
    /// The full vehicle list
    VehicleList,
    /// One vehicle's detail view
    Vehicle(Uuid),
    /// Dashboard figures
    Dashboard,
    /// Dealer profile / settings
    Settings,
    /// Sales and profit reports
    Reports,
    /// Anything rendered on every page (e.g. the company name)
    Layout,
}

struct CachedList {
    loaded_at: Instant,
    vehicles: Vec<VehicleDetail>,
}

/// Vehicle list cache with a bounded staleness window.
///
/// Entries older than the TTL are treated as absent. Any [`CacheTag::VehicleList`]
/// or [`CacheTag::Vehicle`] tag drops the entry.
#[derive(Clone)]
pub struct VehicleListCache {
    ttl: Duration,
    slot: Arc<RwLock<Option<CachedList>>>,
}

impl VehicleListCache {
    /// Creates an empty cache whose entries expire after `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the cached list if it is younger than the TTL.
    pub async fn get(&self) -> Option<Vec<VehicleDetail>> {
        let reader = self.slot.read().await;
        match reader.as_ref() {
            Some(cached) if cached.loaded_at.elapsed() < self.ttl => {
                trace!(count = cached.vehicles.len(), "Vehicle list cache hit");
                Some(cached.vehicles.clone())
            }
            _ => {
                debug!("Vehicle list cache miss");
                None
            }
        }
    }

    /// Replaces the cached list.
    pub async fn store(&self, vehicles: Vec<VehicleDetail>) {
        let mut writer = self.slot.write().await;
        *writer = Some(CachedList {
            loaded_at: Instant::now(),
            vehicles,
        });
    }

    /// Drops the cached list.
    pub async fn invalidate(&self) {
        let mut writer = self.slot.write().await;
        *writer = None;
    }

    /// Drops the cached list when any tag touches vehicles. Over-invalidating is fine.
    pub async fn apply(&self, tags: &[CacheTag]) {
        if tags
            .iter()
            .any(|tag| matches!(tag, CacheTag::VehicleList | CacheTag::Vehicle(_)))
        {
            debug!(?tags, "Invalidating vehicle list cache");
            self.invalidate().await;
        }
    }
}

impl Default for VehicleListCache {
    fn default() -> Self {
        Self::new(DEFAULT_VEHICLE_CACHE_TTL)
    }
}
