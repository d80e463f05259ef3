// crates/worldseed-core/src/loader.rs

//! # Dataset Loader
//!
//! Reads the three bundled reference files (countries, states, cities) into
//! memory. An absent or unreadable file yields an empty collection, never an
//! error: callers treat "nothing loaded" as "nothing to seed".
//!
//! `load()` caches the bundled dataset in a process-wide `OnceCell`; the
//! result is shared by reference for the lifetime of the run.

use crate::model::{CityRecord, CountryRecord, DatasetStats, StateRecord};
use crate::raw::{CityRaw, CountryRaw, StateRaw};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

static WORLD_DATA_CACHE: OnceCell<WorldData> = OnceCell::new();

/// The loaded reference dataset, immutable for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct WorldData {
    pub countries: Vec<CountryRecord>,
    pub states: Vec<StateRecord>,
    pub cities: Vec<CityRecord>,
}

impl WorldData {
    /// Directory holding the bundled dataset files.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Loads the bundled dataset, once per process.
    pub fn load() -> &'static WorldData {
        WORLD_DATA_CACHE.get_or_init(|| Self::load_from_dir(Self::default_data_dir()))
    }

    /// Loads a dataset from a custom directory containing `countries.json`,
    /// `states.json` and `cities.json` (optionally `.json.gz`).
    pub fn load_from_dir(dir: impl AsRef<Path>) -> WorldData {
        let dir = dir.as_ref();
        let data = WorldData {
            countries: load_kind::<CountryRaw, CountryRecord>(dir, "countries"),
            states: load_kind::<StateRaw, StateRecord>(dir, "states"),
            cities: load_kind::<CityRaw, CityRecord>(dir, "cities"),
        };
        debug!(
            countries = data.countries.len(),
            states = data.states.len(),
            cities = data.cities.len(),
            "dataset loaded from {}",
            dir.display()
        );
        data
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            countries: self.countries.len(),
            states: self.states.len(),
            cities: self.cities.len(),
        }
    }
}

/// Reads one entity kind, preferring the gzipped bundle when present.
fn load_kind<R, T>(dir: &Path, name: &str) -> Vec<T>
where
    R: DeserializeOwned,
    T: From<R>,
{
    let mut candidates = Vec::with_capacity(2);
    #[cfg(feature = "compact")]
    candidates.push(dir.join(format!("{name}.json.gz")));
    candidates.push(dir.join(format!("{name}.json")));

    for path in &candidates {
        if !path.exists() {
            continue;
        }
        match read_json::<R>(path) {
            Ok(raw) => return raw.into_iter().map(T::from).collect(),
            Err(e) => {
                warn!("skipping unreadable dataset file {}: {e}", path.display());
                return Vec::new();
            }
        }
    }

    debug!("no bundled {name} file under {}", dir.display());
    Vec::new()
}

fn read_json<R: DeserializeOwned>(path: &Path) -> crate::Result<Vec<R>> {
    let reader = open_stream(path)?;
    Ok(serde_json::from_reader(reader)?)
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// extension calls for one.
fn open_stream(path: &Path) -> std::io::Result<Box<dyn Read>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        use flate2::read::GzDecoder;
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}
