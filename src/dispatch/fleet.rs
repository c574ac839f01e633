use chrono::NaiveDate;

use crate::dispatch::validator::AssignmentValidator;
use crate::error::{FleetError, ResourceKind, Result};
use crate::store::{
    Assignment, AssignmentStore, Driver, DriverStore, NewAssignment, NewDriver, NewTruck, Truck,
    TruckStore,
};

/// All dispatch state: drivers, trucks and their daily assignments.
///
/// Built once at startup and handed to the API behind a lock. Assignment
/// writes validate and persist in one `&mut self` call, so holding the lock
/// for the call keeps at most one assignment per driver and per truck on any
/// date.
#[derive(Debug, Default)]
pub struct Fleet {
    drivers: DriverStore,
    trucks: TruckStore,
    assignments: AssignmentStore,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validator(&self) -> AssignmentValidator<'_> {
        AssignmentValidator::new(&self.drivers, &self.trucks, &self.assignments)
    }

    // Drivers

    pub fn create_driver(&mut self, input: NewDriver) -> Driver {
        let driver = self.drivers.create(input);
        tracing::info!(driver_id = driver.id, license = %driver.license_type, "Driver created");
        driver
    }

    pub fn driver(&self, id: u64) -> Result<&Driver> {
        self.drivers
            .get(id)
            .ok_or_else(|| FleetError::not_found(ResourceKind::Driver, id))
    }

    pub fn drivers(&self) -> Vec<&Driver> {
        self.drivers.list()
    }

    pub fn update_driver(&mut self, id: u64, input: NewDriver) -> Result<Driver> {
        let driver = self
            .drivers
            .update(id, input)
            .ok_or_else(|| FleetError::not_found(ResourceKind::Driver, id))?;
        tracing::info!(driver_id = id, "Driver updated");
        Ok(driver)
    }

    /// Assignments referencing the driver are left in place.
    pub fn delete_driver(&mut self, id: u64) -> Result<()> {
        if !self.drivers.delete(id) {
            return Err(FleetError::not_found(ResourceKind::Driver, id));
        }
        tracing::info!(driver_id = id, "Driver deleted");
        Ok(())
    }

    // Trucks

    pub fn create_truck(&mut self, input: NewTruck) -> Truck {
        let truck = self.trucks.create(input);
        tracing::info!(
            truck_id = truck.id,
            plate = %truck.plate,
            minimum_license = %truck.minimum_license_type,
            "Truck created"
        );
        truck
    }

    pub fn truck(&self, id: u64) -> Result<&Truck> {
        self.trucks
            .get(id)
            .ok_or_else(|| FleetError::not_found(ResourceKind::Truck, id))
    }

    pub fn trucks(&self) -> Vec<&Truck> {
        self.trucks.list()
    }

    pub fn update_truck(&mut self, id: u64, input: NewTruck) -> Result<Truck> {
        let truck = self
            .trucks
            .update(id, input)
            .ok_or_else(|| FleetError::not_found(ResourceKind::Truck, id))?;
        tracing::info!(truck_id = id, "Truck updated");
        Ok(truck)
    }

    pub fn delete_truck(&mut self, id: u64) -> Result<()> {
        if !self.trucks.delete(id) {
            return Err(FleetError::not_found(ResourceKind::Truck, id));
        }
        tracing::info!(truck_id = id, "Truck deleted");
        Ok(())
    }

    // Assignments

    pub fn create_assignment(&mut self, input: NewAssignment) -> Result<Assignment> {
        if let Err(e) = self.validator().validate_for_create(&input) {
            tracing::warn!(
                driver_id = input.driver_id(),
                truck_id = input.truck_id(),
                date = %input.assignment_date(),
                error = %e,
                "Assignment rejected"
            );
            return Err(e);
        }

        let assignment = self.assignments.create(input);
        tracing::info!(
            assignment_id = assignment.id,
            driver_id = assignment.driver_id,
            truck_id = assignment.truck_id,
            date = %assignment.assignment_date,
            "Assignment created"
        );
        Ok(assignment)
    }

    pub fn assignment(&self, id: u64) -> Result<&Assignment> {
        self.assignments
            .get(id)
            .ok_or_else(|| FleetError::not_found(ResourceKind::Assignment, id))
    }

    /// All assignments, or only those on `date` when given.
    pub fn assignments(&self, date: Option<NaiveDate>) -> Vec<&Assignment> {
        match date {
            Some(date) => self.assignments.find_by_date(date),
            None => self.assignments.list(),
        }
    }

    pub fn update_assignment(&mut self, id: u64, input: NewAssignment) -> Result<Assignment> {
        if let Err(e) = self.validator().validate_for_update(id, &input) {
            tracing::warn!(assignment_id = id, error = %e, "Assignment update rejected");
            return Err(e);
        }

        let assignment = self
            .assignments
            .update(id, input)
            .ok_or_else(|| FleetError::not_found(ResourceKind::Assignment, id))?;
        tracing::info!(
            assignment_id = id,
            driver_id = assignment.driver_id,
            truck_id = assignment.truck_id,
            date = %assignment.assignment_date,
            "Assignment updated"
        );
        Ok(assignment)
    }

    pub fn delete_assignment(&mut self, id: u64) -> Result<()> {
        if !self.assignments.delete(id) {
            return Err(FleetError::not_found(ResourceKind::Assignment, id));
        }
        tracing::info!(assignment_id = id, "Assignment deleted");
        Ok(())
    }
}
