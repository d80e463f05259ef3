// crates/worldseed-core/tests/seed_pipeline.rs

//! End-to-end seeding runs against the in-memory store.

use std::collections::HashMap;
use worldseed_core::{
    CityRecord, CountryRecord, MemoryStore, SeedPolicy, SeedProgress, Seeder, SilentProgress,
    StateRecord, StoreError, Table, WorldData, WorldError, WorldStore,
};

fn country(id: i64, iso2: &str, iso3: &str) -> CountryRecord {
    CountryRecord {
        id,
        name: format!("Country {id}"),
        iso2: iso2.to_string(),
        iso3: iso3.to_string(),
        numeric_code: None,
        phonecode: None,
        capital: None,
        currency: None,
        currency_name: None,
        currency_symbol: None,
        tld: None,
        native_name: None,
        region: None,
        subregion: None,
        timezones: Vec::new(),
        translations: HashMap::new(),
        latitude: None,
        longitude: None,
        emoji: None,
        emoji_u: None,
        flag: true,
    }
}

fn state(id: i64, country_id: i64) -> StateRecord {
    StateRecord {
        id,
        name: format!("State {id}"),
        country_id,
        latitude: None,
        longitude: None,
    }
}

fn city(id: i64, country_id: i64, state_id: i64) -> CityRecord {
    CityRecord {
        id,
        name: format!("City {id}"),
        country_id,
        state_id,
        latitude: None,
        longitude: None,
    }
}

/// Two countries (US, DE), two states each, one city per state.
fn small_world() -> WorldData {
    WorldData {
        countries: vec![country(1, "US", "USA"), country(2, "DE", "DEU")],
        states: vec![state(10, 1), state(11, 1), state(20, 2), state(21, 2)],
        cities: vec![city(100, 1, 10), city(110, 1, 11), city(200, 2, 20), city(210, 2, 21)],
    }
}

fn policy_json(json: &str) -> SeedPolicy {
    serde_json::from_str(json).expect("policy json")
}

/// Records every progress callback for cadence assertions.
#[derive(Default)]
struct RecordingProgress {
    starts: Vec<(Table, usize)>,
    advances: Vec<Table>,
    finishes: Vec<Table>,
}

impl SeedProgress for RecordingProgress {
    fn batch_start(&mut self, table: Table, total: usize) {
        self.starts.push((table, total));
    }
    fn batch_advance(&mut self, table: Table) {
        self.advances.push(table);
    }
    fn batch_finish(&mut self, table: Table) {
        self.finishes.push(table);
    }
}

/// Store whose state inserts start failing after a set number of rows.
struct FlakyStore {
    inner: MemoryStore,
    states_before_failure: usize,
}

impl WorldStore for FlakyStore {
    fn table_exists(&self, table: Table) -> Result<bool, StoreError> {
        self.inner.table_exists(table)
    }
    fn count_rows(&self, table: Table) -> Result<u64, StoreError> {
        self.inner.count_rows(table)
    }
    fn insert_country(&mut self, c: &CountryRecord, active: bool) -> Result<(), StoreError> {
        self.inner.insert_country(c, active)
    }
    fn insert_state(&mut self, s: &StateRecord, active: bool) -> Result<(), StoreError> {
        if self.inner.states.len() >= self.states_before_failure {
            return Err(StoreError::msg("disk full"));
        }
        self.inner.insert_state(s, active)
    }
    fn insert_city(&mut self, c: &CityRecord, active: bool) -> Result<(), StoreError> {
        self.inner.insert_city(c, active)
    }
}

#[test]
fn default_policy_seeds_everything_active() {
    let data = small_world();
    let policy = SeedPolicy::default();
    let mut store = MemoryStore::new();

    let report = Seeder::new(&data, &policy)
        .seed(&mut store, &mut SilentProgress)
        .unwrap();

    assert_eq!(report.countries, 2);
    assert_eq!(report.states, 4);
    assert_eq!(report.cities, 4);
    assert!(store.countries.iter().all(|(_, active)| *active));
    assert!(store.states.iter().all(|(_, active)| *active));
    assert!(store.cities.iter().all(|(_, active)| *active));
}

#[test]
fn allow_list_flags_without_filtering_when_not_activations_only() {
    let data = small_world();
    let policy = policy_json(r#"{"countries": {"only": {"iso2": ["US"]}}}"#);
    let mut store = MemoryStore::new();

    let report = Seeder::new(&data, &policy)
        .seed(&mut store, &mut SilentProgress)
        .unwrap();

    // All rows written, activation flags follow the country resolution.
    assert_eq!(report.countries, 2);
    assert_eq!(report.states, 4);
    let us = store.countries.iter().find(|(c, _)| c.iso2 == "US").unwrap();
    let de = store.countries.iter().find(|(c, _)| c.iso2 == "DE").unwrap();
    assert!(us.1);
    assert!(!de.1);
    for (s, active) in &store.states {
        assert_eq!(*active, s.country_id == 1);
    }
    for (c, active) in &store.cities {
        assert_eq!(*active, c.country_id == 1);
    }
}

#[test]
fn activations_only_filters_countries_and_dependents() {
    let mut data = small_world();
    data.countries.push(country(3, "FR", "FRA"));
    data.states.push(state(30, 3));
    data.cities.push(city(300, 3, 30));

    let policy = policy_json(
        r#"{
            "insert_activations_only": true,
            "countries": { "only": { "iso2": ["US"], "iso3": ["DEU"] } }
        }"#,
    );
    let mut store = MemoryStore::new();

    let report = Seeder::new(&data, &policy)
        .seed(&mut store, &mut SilentProgress)
        .unwrap();

    // FR resolves inactive and is skipped entirely, along with its dependents.
    assert_eq!(report.countries, 2);
    assert_eq!(report.states, 4);
    assert_eq!(report.cities, 4);
    assert!(store.countries.iter().all(|(c, active)| c.iso2 != "FR" && *active));
    assert!(store.states.iter().all(|(s, _)| s.country_id != 3));
    assert!(store.cities.iter().all(|(c, _)| c.country_id != 3));
}

#[test]
fn deny_list_deactivates_dependents_of_denied_country() {
    let data = small_world();
    let policy = policy_json(r#"{"countries": {"except": {"iso3": ["DEU"]}}}"#);
    let mut store = MemoryStore::new();

    Seeder::new(&data, &policy)
        .seed(&mut store, &mut SilentProgress)
        .unwrap();

    for (s, active) in &store.states {
        assert_eq!(*active, s.country_id != 2);
    }
}

#[test]
fn activations_only_without_restriction_seeds_all() {
    let data = small_world();
    let policy = policy_json(r#"{"insert_activations_only": true}"#);
    let mut store = MemoryStore::new();

    let report = Seeder::new(&data, &policy)
        .seed(&mut store, &mut SilentProgress)
        .unwrap();

    assert_eq!(report.countries, 2);
    assert_eq!(report.states, 4);
}

#[test]
fn allow_list_resolving_nothing_yields_empty_report() {
    let data = small_world();
    let policy = policy_json(
        r#"{
            "insert_activations_only": true,
            "countries": { "only": { "iso2": ["US"] }, "except": { "iso2": ["US"] } }
        }"#,
    );
    let mut store = MemoryStore::new();

    // US is both allowed and denied; deny wins, so nothing resolves active.
    let report = Seeder::new(&data, &policy)
        .seed(&mut store, &mut SilentProgress)
        .unwrap();
    assert_eq!(report, Default::default());
    assert!(store.countries.is_empty());
}

#[test]
fn invalid_code_aborts_before_any_write() {
    let data = small_world();
    let policy = policy_json(r#"{"countries": {"only": {"iso2": ["ZZ"]}}}"#);
    let mut store = MemoryStore::new();

    let err = Seeder::new(&data, &policy)
        .seed(&mut store, &mut SilentProgress)
        .unwrap_err();

    match err {
        WorldError::Iso2NotFound { code } => assert_eq!(code, "ZZ"),
        other => panic!("expected Iso2NotFound, got {other:?}"),
    }
    assert!(store.countries.is_empty());
    assert!(store.states.is_empty());
}

#[test]
fn guard_refuses_populated_countries_table() {
    let data = small_world();
    let policy = SeedPolicy::default();
    let mut store = MemoryStore::new();
    store.countries.push((country(999, "XX", "XXX"), true));

    let err = Seeder::new(&data, &policy)
        .seed(&mut store, &mut SilentProgress)
        .unwrap_err();

    match err {
        WorldError::NonEmptyTable { table } => assert_eq!(table, Table::Countries),
        other => panic!("expected NonEmptyTable, got {other:?}"),
    }
    // The pre-existing row is the only one.
    assert_eq!(store.countries.len(), 1);
}

#[test]
fn guard_names_first_offending_table_in_order() {
    let data = small_world();
    let policy = SeedPolicy::default();
    let mut store = MemoryStore::new();
    store.states.push((state(1, 1), true));
    store.cities.push((city(1, 1, 1), true));

    let err = Seeder::new(&data, &policy)
        .seed(&mut store, &mut SilentProgress)
        .unwrap_err();
    assert!(matches!(err, WorldError::NonEmptyTable { table: Table::States }));
}

#[test]
fn chunks_advance_progress_once_per_chunk() {
    let data = WorldData {
        countries: (1..=120)
            .map(|i| country(i, &format!("A{i}"), &format!("AA{i}")))
            .collect(),
        states: Vec::new(),
        cities: Vec::new(),
    };
    let policy = policy_json(r#"{"countries": {"chunk_len": 50}}"#);
    let mut store = MemoryStore::new();
    let mut progress = RecordingProgress::default();

    let report = Seeder::new(&data, &policy)
        .seed(&mut store, &mut progress)
        .unwrap();

    assert_eq!(report.countries, 120);
    assert!(progress.starts.contains(&(Table::Countries, 120)));
    // 50 + 50 + 20 => three chunk advances for countries.
    let advances = progress
        .advances
        .iter()
        .filter(|t| **t == Table::Countries)
        .count();
    assert_eq!(advances, 3);
    assert_eq!(progress.finishes.len(), 3); // one finish per entity kind

    // Source order survives chunking.
    let ids: Vec<i64> = store.countries.iter().map(|(c, _)| c.id).collect();
    assert_eq!(ids, (1..=120).collect::<Vec<_>>());
}

#[test]
fn insert_failure_aborts_with_table_and_chunk() {
    let data = small_world();
    let policy = policy_json(r#"{"states": {"chunk_len": 1}}"#);
    let mut store = FlakyStore {
        inner: MemoryStore::new(),
        states_before_failure: 2,
    };

    let err = Seeder::new(&data, &policy)
        .seed(&mut store, &mut SilentProgress)
        .unwrap_err();

    match err {
        WorldError::Persistence { table, chunk, .. } => {
            assert_eq!(table, Table::States);
            assert_eq!(chunk, 2);
        }
        other => panic!("expected Persistence, got {other:?}"),
    }
    // Countries completed, states stopped at the failure, cities never ran.
    assert_eq!(store.inner.countries.len(), 2);
    assert_eq!(store.inner.states.len(), 2);
    assert!(store.inner.cities.is_empty());
}

#[test]
fn empty_dataset_seeds_nothing() {
    let data = WorldData::default();
    let policy = SeedPolicy::default();
    let mut store = MemoryStore::new();

    let report = Seeder::new(&data, &policy)
        .seed(&mut store, &mut SilentProgress)
        .unwrap();
    assert_eq!(report, Default::default());
}
