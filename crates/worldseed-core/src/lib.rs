// crates/worldseed-core/src/lib.rs

//! worldseed-core
//! ==============
//!
//! Bulk-seeds the bundled countries/states/cities reference dataset into a
//! persistent store, computing an `is_active` flag per row from a
//! configurable activation policy (ISO2/ISO3 allow- and deny-lists).
//!
//! The pipeline is a synchronous batch job:
//!
//! 1. [`WorldData`] loads the bundled dataset once per process.
//! 2. [`SeedPolicy::ensure_codes_valid`] rejects configurations referencing
//!    ISO codes that do not exist in the dataset.
//! 3. [`Seeder::seed`] guards against non-empty destination tables, resolves
//!    activation per record and bulk-inserts in chunks through a
//!    [`WorldStore`] implementation.
//!
//! Persistence and progress reporting are boundaries ([`WorldStore`],
//! [`SeedProgress`]); this crate ships only an in-memory store for tests and
//! dry runs.

pub mod error;
pub mod loader;
pub mod model;
pub mod policy;
pub mod seeder;
pub mod store;
pub mod validate;
// Raw JSON input shapes, shared by the loader.
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{Result, WorldError};
pub use crate::loader::WorldData;
pub use crate::model::{CityRecord, CountryRecord, DatasetStats, StateRecord};
pub use crate::policy::{ActiveIdSets, CodeSet, CountryActivation, DependentActivation, SeedPolicy};
pub use crate::seeder::{SeedReport, Seeder};
pub use crate::store::{MemoryStore, SeedProgress, SilentProgress, StoreError, Table, WorldStore};
