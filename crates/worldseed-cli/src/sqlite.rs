//! SQLite persistence backend.
//!
//! Implements the core's [`WorldStore`] boundary over `rusqlite`. Schema
//! creation happens on open (`IF NOT EXISTS`); the destructive reset behind
//! `seed --refresh` lives here too, keeping it out of the core per the
//! orchestrator's contract. Timezone lists and translation maps are stored
//! as JSON text columns.

use rusqlite::{params, Connection};
use worldseed_core::{CityRecord, CountryRecord, StateRecord, StoreError, Table, WorldStore};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS countries (
    id              INTEGER PRIMARY KEY,
    name            TEXT NOT NULL,
    iso2            TEXT NOT NULL,
    iso3            TEXT NOT NULL,
    numeric_code    TEXT,
    phonecode       TEXT,
    capital         TEXT,
    currency        TEXT,
    currency_name   TEXT,
    currency_symbol TEXT,
    tld             TEXT,
    native          TEXT,
    region          TEXT,
    subregion       TEXT,
    timezones       TEXT,
    translations    TEXT,
    latitude        REAL,
    longitude       REAL,
    emoji           TEXT,
    emojiU          TEXT,
    flag            INTEGER NOT NULL DEFAULT 1,
    is_active       INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS states (
    id         INTEGER PRIMARY KEY,
    name       TEXT NOT NULL,
    country_id INTEGER NOT NULL REFERENCES countries(id),
    latitude   REAL,
    longitude  REAL,
    is_active  INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS cities (
    id         INTEGER PRIMARY KEY,
    name       TEXT NOT NULL,
    country_id INTEGER NOT NULL REFERENCES countries(id),
    state_id   INTEGER NOT NULL REFERENCES states(id),
    latitude   REAL,
    longitude  REAL,
    is_active  INTEGER NOT NULL
);
";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database and ensures the schema exists.
    pub fn open(path: &str) -> anyhow::Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStore { conn })
    }

    /// Destructively clears the three world tables and recreates them.
    pub fn refresh(&self) -> anyhow::Result<()> {
        self.conn.execute_batch(
            "DROP TABLE IF EXISTS cities;
             DROP TABLE IF EXISTS states;
             DROP TABLE IF EXISTS countries;",
        )?;
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}

fn store_err(e: rusqlite::Error) -> StoreError {
    StoreError::new(e)
}

impl WorldStore for SqliteStore {
    fn table_exists(&self, table: Table) -> Result<bool, StoreError> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table.name()],
                |row| row.get(0),
            )
            .map_err(store_err)?;
        Ok(count > 0)
    }

    fn count_rows(&self, table: Table) -> Result<u64, StoreError> {
        // Table names come from a closed enum, not user input.
        let sql = format!("SELECT COUNT(*) FROM {}", table.name());
        let count: i64 = self
            .conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(store_err)?;
        Ok(count as u64)
    }

    fn insert_country(
        &mut self,
        country: &CountryRecord,
        is_active: bool,
    ) -> Result<(), StoreError> {
        let timezones = serde_json::to_string(&country.timezones)
            .map_err(StoreError::new)?;
        let translations = serde_json::to_string(&country.translations)
            .map_err(StoreError::new)?;

        self.conn
            .execute(
                "INSERT INTO countries (
                    id, name, iso2, iso3, numeric_code, phonecode, capital,
                    currency, currency_name, currency_symbol, tld, native,
                    region, subregion, timezones, translations,
                    latitude, longitude, emoji, emojiU, flag, is_active
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                           ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22)",
                params![
                    country.id,
                    country.name,
                    country.iso2,
                    country.iso3,
                    country.numeric_code,
                    country.phonecode,
                    country.capital,
                    country.currency,
                    country.currency_name,
                    country.currency_symbol,
                    country.tld,
                    country.native_name,
                    country.region,
                    country.subregion,
                    timezones,
                    translations,
                    country.latitude,
                    country.longitude,
                    country.emoji,
                    country.emoji_u,
                    country.flag,
                    is_active,
                ],
            )
            .map_err(store_err)?;
        Ok(())
    }

    fn insert_state(&mut self, state: &StateRecord, is_active: bool) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO states (id, name, country_id, latitude, longitude, is_active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    state.id,
                    state.name,
                    state.country_id,
                    state.latitude,
                    state.longitude,
                    is_active,
                ],
            )
            .map_err(store_err)?;
        Ok(())
    }

    fn insert_city(&mut self, city: &CityRecord, is_active: bool) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO cities (id, name, country_id, state_id, latitude, longitude, is_active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    city.id,
                    city.name,
                    city.country_id,
                    city.state_id,
                    city.latitude,
                    city.longitude,
                    is_active,
                ],
            )
            .map_err(store_err)?;
        Ok(())
    }
}
