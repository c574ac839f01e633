use chrono::NaiveDate;

use crate::error::{FleetError, ResourceKind, Result};
use crate::license::{can_operate, LicenseCategory};
use crate::store::{AssignmentStore, DriverStore, NewAssignment, TruckStore};

/// Decides whether a proposed driver/truck/date binding may be stored.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. the driver exists
/// 2. the truck exists
/// 3. the driver's license covers the truck's minimum
/// 4. no other assignment holds the driver on that date
/// 5. no other assignment holds the truck on that date
pub struct AssignmentValidator<'a> {
    drivers: &'a DriverStore,
    trucks: &'a TruckStore,
    assignments: &'a AssignmentStore,
}

impl<'a> AssignmentValidator<'a> {
    pub fn new(
        drivers: &'a DriverStore,
        trucks: &'a TruckStore,
        assignments: &'a AssignmentStore,
    ) -> Self {
        Self {
            drivers,
            trucks,
            assignments,
        }
    }

    pub fn validate_for_create(&self, proposal: &NewAssignment) -> Result<()> {
        self.validate(proposal, None)
    }

    /// Same checks as create, but the assignment being replaced must exist and
    /// never conflicts with itself.
    pub fn validate_for_update(&self, assignment_id: u64, proposal: &NewAssignment) -> Result<()> {
        if !self.assignments.exists(assignment_id) {
            return Err(FleetError::not_found(
                ResourceKind::Assignment,
                assignment_id,
            ));
        }
        self.validate(proposal, Some(assignment_id))
    }

    fn validate(&self, proposal: &NewAssignment, exclude: Option<u64>) -> Result<()> {
        let driver = self
            .drivers
            .get(proposal.driver_id())
            .ok_or_else(|| FleetError::not_found(ResourceKind::Driver, proposal.driver_id()))?;

        let truck = self
            .trucks
            .get(proposal.truck_id())
            .ok_or_else(|| FleetError::not_found(ResourceKind::Truck, proposal.truck_id()))?;

        check_license(driver.license_type, truck.minimum_license_type)?;

        let date = proposal.assignment_date();
        self.check_driver_available(proposal.driver_id(), date, exclude)?;
        self.check_truck_available(proposal.truck_id(), date, exclude)?;
        Ok(())
    }

    fn check_driver_available(
        &self,
        driver_id: u64,
        date: NaiveDate,
        exclude: Option<u64>,
    ) -> Result<()> {
        match self.assignments.find_by_driver_and_date(driver_id, date) {
            Some(existing) if Some(existing.id) != exclude => Err(FleetError::Conflict(format!(
                "Driver {} is already assigned to truck {} on {}",
                driver_id, existing.truck_id, date
            ))),
            _ => Ok(()),
        }
    }

    fn check_truck_available(
        &self,
        truck_id: u64,
        date: NaiveDate,
        exclude: Option<u64>,
    ) -> Result<()> {
        match self.assignments.find_by_truck_and_date(truck_id, date) {
            Some(existing) if Some(existing.id) != exclude => Err(FleetError::Conflict(format!(
                "Truck {} is already assigned to driver {} on {}",
                truck_id, existing.driver_id, date
            ))),
            _ => Ok(()),
        }
    }
}

fn check_license(held: LicenseCategory, required: LicenseCategory) -> Result<()> {
    if can_operate(held, required) {
        return Ok(());
    }
    Err(FleetError::Validation(format!(
        "Driver with license type {held} cannot operate a truck requiring license type \
         {required}. Driver needs at least a {required} license."
    )))
}
