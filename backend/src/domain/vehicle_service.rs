//! Vehicle domain service implementing the vehicle driving ports.
//!
//! Mirrors the driver pipeline without creation or attachment, which belong
//! to [`crate::domain::DriverService`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::driver_service::{ensure_positive_id, repository_failure};
use crate::domain::ports::{VehicleCommand, VehicleQuery, VehicleRepository};
use crate::domain::{EntityKind, Error, Vehicle, VehiclePatch};

/// Vehicle service implementing [`VehicleQuery`] and [`VehicleCommand`].
#[derive(Clone)]
pub struct VehicleService<R> {
    vehicles: Arc<R>,
}

impl<R> VehicleService<R> {
    /// Create a new service backed by `vehicles`.
    pub fn new(vehicles: Arc<R>) -> Self {
        Self { vehicles }
    }
}

#[async_trait]
impl<R> VehicleQuery for VehicleService<R>
where
    R: VehicleRepository,
{
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        self.vehicles
            .list()
            .await
            .map_err(repository_failure("list vehicles"))
    }

    async fn get_vehicle(&self, vehicle_id: i64) -> Result<Option<Vehicle>, Error> {
        ensure_positive_id(vehicle_id, EntityKind::Vehicle)?;
        self.vehicles
            .find_by_id(vehicle_id)
            .await
            .map_err(repository_failure("find vehicle"))
    }
}

#[async_trait]
impl<R> VehicleCommand for VehicleService<R>
where
    R: VehicleRepository,
{
    async fn update_vehicle(&self, vehicle_id: i64, patch: VehiclePatch) -> Result<(), Error> {
        ensure_positive_id(vehicle_id, EntityKind::Vehicle)?;
        let mut vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await
            .map_err(repository_failure("find vehicle"))?
            .ok_or_else(|| Error::not_found(EntityKind::Vehicle))?;

        vehicle.apply(patch);
        vehicle.validate()?;

        self.vehicles
            .save(&vehicle)
            .await
            .map_err(repository_failure("save vehicle"))?;
        debug!(vehicle_id, "vehicle updated");
        Ok(())
    }

    async fn delete_vehicle(&self, vehicle_id: i64) -> Result<(), Error> {
        ensure_positive_id(vehicle_id, EntityKind::Vehicle)?;
        self.vehicles
            .delete(vehicle_id)
            .await
            .map_err(repository_failure("delete vehicle"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockVehicleRepository, RepositoryError};
    use rstest::rstest;

    fn make_service(repo: MockVehicleRepository) -> VehicleService<MockVehicleRepository> {
        VehicleService::new(Arc::new(repo))
    }

    fn stored_vehicle() -> Vehicle {
        let mut vehicle = Vehicle::new("Toyota", "Camry", 2022, "ABC-1234");
        vehicle.id = 7;
        vehicle.driver_id = Some(1);
        vehicle
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    #[tokio::test]
    async fn identifier_guard_runs_before_any_store_call(#[case] vehicle_id: i64) {
        let mut repo = MockVehicleRepository::new();
        repo.expect_find_by_id().times(0);
        repo.expect_save().times(0);
        repo.expect_delete().times(0);
        let service = make_service(repo);
        let expected = Error::invalid_id(EntityKind::Vehicle);

        assert_eq!(service.get_vehicle(vehicle_id).await, Err(expected.clone()));
        assert_eq!(
            service
                .update_vehicle(vehicle_id, VehiclePatch::default())
                .await,
            Err(expected.clone())
        );
        assert_eq!(service.delete_vehicle(vehicle_id).await, Err(expected));
    }

    #[tokio::test]
    async fn list_passes_repository_errors_through() {
        let mut repo = MockVehicleRepository::new();
        repo.expect_list()
            .times(1)
            .return_once(|| Err(RepositoryError::connection("reset by peer")));

        let err = make_service(repo).list_vehicles().await.expect_err("fails");
        assert_eq!(
            err,
            Error::Repository(RepositoryError::connection("reset by peer"))
        );
    }

    #[tokio::test]
    async fn get_returns_none_for_missing_vehicle() {
        let mut repo = MockVehicleRepository::new();
        repo.expect_find_by_id()
            .withf(|id| *id == 4)
            .times(1)
            .return_once(|_| Ok(None));

        let found = make_service(repo).get_vehicle(4).await.expect("get");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn update_of_missing_vehicle_never_saves() {
        let mut repo = MockVehicleRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(None));
        repo.expect_save().times(0);

        let err = make_service(repo)
            .update_vehicle(4, VehiclePatch::default())
            .await
            .expect_err("missing vehicle");
        assert_eq!(err, Error::not_found(EntityKind::Vehicle));
    }

    #[tokio::test]
    async fn update_keeps_owner_and_unpatched_fields() {
        let mut repo = MockVehicleRepository::new();
        let vehicle = stored_vehicle();
        let mut expected = vehicle.clone();
        expected.year = 2023;

        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(vehicle)));
        repo.expect_save()
            .withf(move |saved: &Vehicle| *saved == expected)
            .times(1)
            .return_once(|_| Ok(()));

        make_service(repo)
            .update_vehicle(
                7,
                VehiclePatch {
                    year: 2023,
                    ..VehiclePatch::default()
                },
            )
            .await
            .expect("update");
    }

    #[tokio::test]
    async fn update_rejects_invalid_merge() {
        let mut repo = MockVehicleRepository::new();
        let vehicle = stored_vehicle();
        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(vehicle)));
        repo.expect_save().times(0);

        let err = make_service(repo)
            .update_vehicle(
                7,
                VehiclePatch {
                    brand: "T".to_owned(),
                    plate: "abc-1234".to_owned(),
                    ..VehiclePatch::default()
                },
            )
            .await
            .expect_err("invalid merge");
        assert_eq!(
            err.to_string(),
            "vehicle brand is invalid,vehicle plate is invalid"
        );
    }

    #[tokio::test]
    async fn delete_delegates_to_store() {
        let mut repo = MockVehicleRepository::new();
        repo.expect_delete()
            .withf(|id| *id == 7)
            .times(1)
            .return_once(|_| Ok(()));

        make_service(repo).delete_vehicle(7).await.expect("delete");
    }
}
