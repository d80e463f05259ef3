// crates/worldseed-core/src/seeder.rs

//! # Seeding Orchestrator
//!
//! Coordinates a run: idempotency guard, code validation, activation
//! precomputation, then chunked bulk inserts for countries, states and
//! cities — strictly in that order, because dependents resolve through the
//! active-country-id sets produced from the countries.
//!
//! Chunking bounds peak memory and store transaction size; chunks are
//! processed sequentially in source dataset order. Any insert failure aborts
//! the run — retries, if desired, belong to the store.

use crate::error::{Result, WorldError};
use crate::loader::WorldData;
use crate::policy::{ActiveIdSets, SeedPolicy};
use crate::store::{SeedProgress, StoreError, Table, WorldStore};
use tracing::info;

/// Rows written per entity kind by a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
}

/// A single seeding run over a loaded dataset and a resolved policy.
///
/// The dataset is shared by reference; nothing is copied per entity.
pub struct Seeder<'a> {
    data: &'a WorldData,
    policy: &'a SeedPolicy,
}

impl<'a> Seeder<'a> {
    pub fn new(data: &'a WorldData, policy: &'a SeedPolicy) -> Self {
        Seeder { data, policy }
    }

    /// Validates, guards, then seeds all three tables.
    ///
    /// Nothing is written unless the destination tables are empty and every
    /// configured ISO code exists in the dataset.
    pub fn seed<S, P>(&self, store: &mut S, progress: &mut P) -> Result<SeedReport>
    where
        S: WorldStore,
        P: SeedProgress,
    {
        self.ensure_tables_empty(store)?;
        self.policy.ensure_codes_valid(&self.data.countries)?;

        let sets = ActiveIdSets::build(self.policy, &self.data.countries);
        let filtered = self.policy.insert_activations_only && self.policy.has_restriction();

        let mut report = SeedReport::default();
        report.countries = self.seed_countries(&sets, filtered, store, progress)?;
        report.states = self.seed_states(&sets, filtered, store, progress)?;
        report.cities = self.seed_cities(&sets, filtered, store, progress)?;

        info!(
            countries = report.countries,
            states = report.states,
            cities = report.cities,
            "seeding run complete"
        );
        Ok(report)
    }

    /// Refuses to seed into already-populated storage. Each table is checked
    /// independently, countries first; a missing table counts as empty
    /// (schema creation is the migration boundary's concern).
    pub fn ensure_tables_empty<S: WorldStore>(&self, store: &S) -> Result<()> {
        for table in [Table::Countries, Table::States, Table::Cities] {
            if store.table_exists(table)? && store.count_rows(table)? > 0 {
                return Err(WorldError::NonEmptyTable { table });
            }
        }
        Ok(())
    }

    fn seed_countries<S, P>(
        &self,
        sets: &ActiveIdSets,
        filtered: bool,
        store: &mut S,
        progress: &mut P,
    ) -> Result<usize>
    where
        S: WorldStore,
        P: SeedProgress,
    {
        let candidates: Vec<_> = self
            .data
            .countries
            .iter()
            .filter(|c| !filtered || sets.country_active(c.id))
            .collect();

        seed_chunks(
            Table::Countries,
            &candidates,
            self.policy.countries.chunk_len,
            store,
            progress,
            |c| self.policy.country_active(&c.iso2, &c.iso3),
            |store, c, active| store.insert_country(c, active),
        )
    }

    fn seed_states<S, P>(
        &self,
        sets: &ActiveIdSets,
        filtered: bool,
        store: &mut S,
        progress: &mut P,
    ) -> Result<usize>
    where
        S: WorldStore,
        P: SeedProgress,
    {
        let default_active = self.policy.states.default_active;
        let candidates: Vec<_> = self
            .data
            .states
            .iter()
            .filter(|s| !filtered || sets.dependent_active(s.country_id, default_active))
            .collect();

        seed_chunks(
            Table::States,
            &candidates,
            self.policy.states.chunk_len,
            store,
            progress,
            |s| sets.dependent_active(s.country_id, default_active),
            |store, s, active| store.insert_state(s, active),
        )
    }

    fn seed_cities<S, P>(
        &self,
        sets: &ActiveIdSets,
        filtered: bool,
        store: &mut S,
        progress: &mut P,
    ) -> Result<usize>
    where
        S: WorldStore,
        P: SeedProgress,
    {
        let default_active = self.policy.cities.default_active;
        let candidates: Vec<_> = self
            .data
            .cities
            .iter()
            .filter(|c| !filtered || sets.dependent_active(c.country_id, default_active))
            .collect();

        seed_chunks(
            Table::Cities,
            &candidates,
            self.policy.cities.chunk_len,
            store,
            progress,
            |c| sets.dependent_active(c.country_id, default_active),
            |store, c, active| store.insert_city(c, active),
        )
    }
}

/// Inserts candidates in fixed-size chunks, computing `is_active` per row.
///
/// The progress sink sees one `batch_advance` per completed chunk. The first
/// insert failure aborts with the table and chunk index for diagnosis.
fn seed_chunks<T, S, P, A, I>(
    table: Table,
    candidates: &[&T],
    chunk_len: usize,
    store: &mut S,
    progress: &mut P,
    is_active: A,
    mut insert: I,
) -> Result<usize>
where
    S: WorldStore,
    P: SeedProgress,
    A: Fn(&T) -> bool,
    I: FnMut(&mut S, &T, bool) -> std::result::Result<(), StoreError>,
{
    info!(total = candidates.len(), "seeding {table}");
    progress.batch_start(table, candidates.len());

    let mut written = 0;
    for (chunk_idx, chunk) in candidates.chunks(chunk_len.max(1)).enumerate() {
        for &record in chunk {
            insert(store, record, is_active(record)).map_err(|source| {
                WorldError::Persistence {
                    table,
                    chunk: chunk_idx,
                    source,
                }
            })?;
            written += 1;
        }
        progress.batch_advance(table);
    }

    progress.batch_finish(table);
    Ok(written)
}
