use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};
use crate::store::{EntityStore, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u64,
    pub driver_id: u64,
    pub truck_id: u64,
    pub assignment_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAssignment {
    driver_id: u64,
    truck_id: u64,
    assignment_date: NaiveDate,
}

impl NewAssignment {
    /// Rejects zero ids; existence is checked later by the validator.
    pub fn new(driver_id: u64, truck_id: u64, assignment_date: NaiveDate) -> Result<Self> {
        if driver_id == 0 {
            return Err(FleetError::Validation(
                "driver_id must be greater than 0".to_string(),
            ));
        }
        if truck_id == 0 {
            return Err(FleetError::Validation(
                "truck_id must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            driver_id,
            truck_id,
            assignment_date,
        })
    }

    pub fn driver_id(&self) -> u64 {
        self.driver_id
    }

    pub fn truck_id(&self) -> u64 {
        self.truck_id
    }

    pub fn assignment_date(&self) -> NaiveDate {
        self.assignment_date
    }
}

impl Record for Assignment {
    type Input = NewAssignment;

    fn from_input(id: u64, input: NewAssignment) -> Self {
        Self {
            id,
            driver_id: input.driver_id,
            truck_id: input.truck_id,
            assignment_date: input.assignment_date,
        }
    }
}

impl EntityStore<Assignment> {
    /// The assignment holding `driver_id` on `date`, if any.
    pub fn find_by_driver_and_date(&self, driver_id: u64, date: NaiveDate) -> Option<&Assignment> {
        self.records
            .values()
            .find(|a| a.driver_id == driver_id && a.assignment_date == date)
    }

    /// The assignment holding `truck_id` on `date`, if any.
    pub fn find_by_truck_and_date(&self, truck_id: u64, date: NaiveDate) -> Option<&Assignment> {
        self.records
            .values()
            .find(|a| a.truck_id == truck_id && a.assignment_date == date)
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Vec<&Assignment> {
        self.records
            .values()
            .filter(|a| a.assignment_date == date)
            .collect()
    }
}
