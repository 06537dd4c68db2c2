//! Truck CRUD operations.

use std::sync::Arc;

use tracing::{error, info};

use truckreg_core::error::{AppError, ErrorKind};
use truckreg_core::result::AppResult;
use truckreg_core::{Entity, EntityId, Repository};
use truckreg_entity::truck::Truck;

use super::input::TruckInput;
use super::view::TruckView;

/// Orchestrates truck use cases on top of a [`Repository`].
///
/// Lookups by id check existence first, so a missing truck is reported as
/// `NotFound` before the store is asked to do anything else. Every store
/// failure after that point is logged and reported as `BadRequest`,
/// including a record that disappears between the check and the action.
#[derive(Clone)]
pub struct TruckService {
    /// Truck repository.
    repo: Arc<dyn Repository<Truck>>,
}

impl std::fmt::Debug for TruckService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TruckService").finish_non_exhaustive()
    }
}

impl TruckService {
    /// Creates a new truck service.
    pub fn new(repo: Arc<dyn Repository<Truck>>) -> Self {
        Self { repo }
    }

    /// Stores a new truck and returns it with its assigned id.
    pub async fn add(&self, input: &TruckInput) -> AppResult<TruckView> {
        info!(model = ?input.model, "Adding truck");

        let created = match input.to_truck() {
            Ok(truck) => self.repo.add(truck).await,
            Err(e) => Err(e),
        }
        .map_err(|e| rejected("add", None, e))?;

        info!(truck_id = created.id(), "Truck added");
        Ok(created.into())
    }

    /// Fetches a single truck.
    pub async fn get(&self, id: EntityId) -> AppResult<TruckView> {
        info!(truck_id = id, "Getting truck");
        self.ensure_exists(id).await?;

        let truck = self
            .repo
            .get(id)
            .await
            .map_err(|e| rejected("get", Some(id), e))?
            .ok_or_else(|| {
                rejected(
                    "get",
                    Some(id),
                    AppError::not_found(format!("Truck {id} disappeared")),
                )
            })?;

        info!(truck_id = id, "Truck found");
        Ok(truck.into())
    }

    /// Lists every truck in store order.
    pub async fn get_all(&self) -> AppResult<Vec<TruckView>> {
        info!("Listing trucks");

        let trucks = self
            .repo
            .get_all()
            .await
            .map_err(|e| rejected("list", None, e))?;

        info!(count = trucks.len(), "Trucks listed");
        Ok(trucks.into_iter().map(TruckView::from).collect())
    }

    /// Replaces the attributes of an existing truck. The id never changes.
    pub async fn edit(&self, id: EntityId, input: &TruckInput) -> AppResult<()> {
        info!(truck_id = id, "Editing truck");
        self.ensure_exists(id).await?;

        let result = match input.to_truck() {
            Ok(truck) => self.repo.edit(truck.with_id(id)).await,
            Err(e) => Err(e),
        };
        result.map_err(|e| rejected("edit", Some(id), e))?;

        info!(truck_id = id, "Truck edited");
        Ok(())
    }

    /// Removes an existing truck.
    pub async fn delete(&self, id: EntityId) -> AppResult<()> {
        info!(truck_id = id, "Deleting truck");
        self.ensure_exists(id).await?;

        self.repo
            .delete(id)
            .await
            .map_err(|e| rejected("delete", Some(id), e))?;

        info!(truck_id = id, "Truck deleted");
        Ok(())
    }

    async fn ensure_exists(&self, id: EntityId) -> AppResult<()> {
        let exists = self
            .repo
            .exists(id)
            .await
            .map_err(|e| rejected("check", Some(id), e))?;

        if !exists {
            info!(truck_id = id, "Truck not found");
            return Err(AppError::not_found(format!("Truck {id} not found")));
        }
        Ok(())
    }
}

/// Log a store failure and hide it behind a `BadRequest`.
fn rejected(action: &str, id: Option<EntityId>, cause: AppError) -> AppError {
    error!(action, truck_id = ?id, kind = %cause.kind, error = %cause, "Truck operation failed");
    AppError::with_source(
        ErrorKind::BadRequest,
        format!("Could not {action} truck"),
        cause,
    )
}
