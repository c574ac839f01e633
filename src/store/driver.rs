use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};
use crate::license::LicenseCategory;
use crate::store::Record;

pub const MAX_NAME_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: u64,
    pub name: String,
    pub license_type: LicenseCategory,
}

/// Validated driver data, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDriver {
    name: String,
    license_type: LicenseCategory,
}

impl NewDriver {
    /// Rejects names that are too long as given, then trims and rejects
    /// names with nothing left.
    pub fn new(name: impl AsRef<str>, license_type: LicenseCategory) -> Result<Self> {
        let raw = name.as_ref();
        if raw.chars().count() > MAX_NAME_LEN {
            return Err(FleetError::Validation(format!(
                "Driver name cannot be longer than {} characters",
                MAX_NAME_LEN
            )));
        }
        let name = raw.trim();
        if name.is_empty() {
            return Err(FleetError::Validation(
                "Driver name cannot be empty or only whitespace".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            license_type,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn license_type(&self) -> LicenseCategory {
        self.license_type
    }
}

impl Record for Driver {
    type Input = NewDriver;

    fn from_input(id: u64, input: NewDriver) -> Self {
        Self {
            id,
            name: input.name,
            license_type: input.license_type,
        }
    }
}
