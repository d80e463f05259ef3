// crates/worldseed-core/src/store.rs

//! Persistence and progress boundaries.
//!
//! The seeder never issues queries of its own; it talks to a [`WorldStore`]
//! through atomic per-row operations, and reports chunk progress through a
//! [`SeedProgress`] sink that has no effect on control flow. Concrete
//! backends (SQL databases, ORMs) live outside this crate; [`MemoryStore`]
//! is provided for tests and dry runs.

use crate::model::{CityRecord, CountryRecord, StateRecord};
use std::fmt;
use thiserror::Error;

/// Destination table for seeded rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Countries,
    States,
    Cities,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Countries => "countries",
            Table::States => "states",
            Table::Cities => "cities",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque error raised by a store backend. Wraps the backend's native error
/// so it survives into [`crate::WorldError::Persistence`] diagnostics.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StoreError(Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        StoreError(source.into())
    }

    pub fn msg(message: impl Into<String>) -> Self {
        StoreError(message.into().into())
    }
}

/// Persistence boundary for seeded rows.
///
/// `is_active` is computed by the policy resolver and is not part of the
/// source records; implementations persist it alongside all record fields.
pub trait WorldStore {
    fn table_exists(&self, table: Table) -> Result<bool, StoreError>;
    fn count_rows(&self, table: Table) -> Result<u64, StoreError>;
    fn insert_country(&mut self, country: &CountryRecord, is_active: bool)
        -> Result<(), StoreError>;
    fn insert_state(&mut self, state: &StateRecord, is_active: bool) -> Result<(), StoreError>;
    fn insert_city(&mut self, city: &CityRecord, is_active: bool) -> Result<(), StoreError>;
}

/// Observational progress reporting, one batch per entity kind.
pub trait SeedProgress {
    fn batch_start(&mut self, table: Table, total: usize);
    /// Called once per completed chunk.
    fn batch_advance(&mut self, table: Table);
    fn batch_finish(&mut self, table: Table);
}

/// Progress sink that reports nothing.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl SeedProgress for SilentProgress {
    fn batch_start(&mut self, _table: Table, _total: usize) {}
    fn batch_advance(&mut self, _table: Table) {}
    fn batch_finish(&mut self, _table: Table) {}
}

/// Vec-backed store for tests and dry runs. Rows are kept in insertion
/// order as `(record, is_active)` pairs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub countries: Vec<(CountryRecord, bool)>,
    pub states: Vec<(StateRecord, bool)>,
    pub cities: Vec<(CityRecord, bool)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorldStore for MemoryStore {
    fn table_exists(&self, _table: Table) -> Result<bool, StoreError> {
        Ok(true)
    }

    fn count_rows(&self, table: Table) -> Result<u64, StoreError> {
        Ok(match table {
            Table::Countries => self.countries.len() as u64,
            Table::States => self.states.len() as u64,
            Table::Cities => self.cities.len() as u64,
        })
    }

    fn insert_country(
        &mut self,
        country: &CountryRecord,
        is_active: bool,
    ) -> Result<(), StoreError> {
        self.countries.push((country.clone(), is_active));
        Ok(())
    }

    fn insert_state(&mut self, state: &StateRecord, is_active: bool) -> Result<(), StoreError> {
        self.states.push((state.clone(), is_active));
        Ok(())
    }

    fn insert_city(&mut self, city: &CityRecord, is_active: bool) -> Result<(), StoreError> {
        self.cities.push((city.clone(), is_active));
        Ok(())
    }
}
