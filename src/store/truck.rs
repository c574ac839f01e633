use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};
use crate::license::LicenseCategory;
use crate::store::Record;

pub const MAX_PLATE_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truck {
    pub id: u64,
    pub plate: String,
    pub minimum_license_type: LicenseCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTruck {
    plate: String,
    minimum_license_type: LicenseCategory,
}

impl NewTruck {
    /// Normalizes the plate to uppercase with single spaces between parts.
    /// The length limit applies to the plate as given.
    pub fn new(plate: impl AsRef<str>, minimum_license_type: LicenseCategory) -> Result<Self> {
        let raw = plate.as_ref();
        if raw.chars().count() > MAX_PLATE_LEN {
            return Err(FleetError::Validation(format!(
                "Truck plate cannot be longer than {} characters",
                MAX_PLATE_LEN
            )));
        }
        let plate = normalize_plate(raw);
        if plate.is_empty() {
            return Err(FleetError::Validation(
                "Truck plate cannot be empty or only whitespace".to_string(),
            ));
        }
        Ok(Self {
            plate,
            minimum_license_type,
        })
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn minimum_license_type(&self) -> LicenseCategory {
        self.minimum_license_type
    }
}

fn normalize_plate(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

impl Record for Truck {
    type Input = NewTruck;

    fn from_input(id: u64, input: NewTruck) -> Self {
        Self {
            id,
            plate: input.plate,
            minimum_license_type: input.minimum_license_type,
        }
    }
}
