//! In-memory entity stores.
//!
//! Each store owns its id→record map and the counter used to mint ids.
//! Ids start at 1, only ever increase, and are never handed out twice even
//! after the record holding them is deleted.

pub mod assignment;
pub mod driver;
pub mod truck;

use std::collections::BTreeMap;

pub use assignment::{Assignment, NewAssignment};
pub use driver::{Driver, NewDriver};
pub use truck::{NewTruck, Truck};

pub type DriverStore = EntityStore<Driver>;
pub type TruckStore = EntityStore<Truck>;
pub type AssignmentStore = EntityStore<Assignment>;

/// A stored entity built from validated input plus the id the store assigned.
pub trait Record: Clone {
    type Input;

    fn from_input(id: u64, input: Self::Input) -> Self;
}

#[derive(Debug)]
pub struct EntityStore<T: Record> {
    records: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Store a new record under the next id and return it.
    pub fn create(&mut self, input: T::Input) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = T::from_input(id, input);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.records.get(&id)
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<&T> {
        // ids are minted in increasing order, so key order is insertion order
        self.records.values().collect()
    }

    /// Replace the record under `id` wholesale, keeping the id.
    pub fn update(&mut self, id: u64, input: T::Input) -> Option<T> {
        let slot = self.records.get_mut(&id)?;
        *slot = T::from_input(id, input);
        Some(slot.clone())
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.records.remove(&id).is_some()
    }

    pub fn exists(&self, id: u64) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
