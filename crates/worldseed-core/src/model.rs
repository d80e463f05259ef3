// crates/worldseed-core/src/model.rs

//! Domain records produced by the loader.
//!
//! These are read-only for the lifetime of a seeding run. Coordinates are
//! parsed from the dataset's string form into `f64` here, once, so stores
//! never deal with the raw representation. The persisted `is_active` flag is
//! deliberately *not* a field on these records: it is computed per row at
//! seed time from the policy and handed to the store alongside the record.

use crate::raw::{CityRaw, CountryRaw, StateRaw, TimezoneRaw};
use serde::Serialize;
use std::collections::HashMap;

/// A timezone entry belonging to a country.
#[derive(Clone, Debug, Serialize)]
pub struct CountryTimezone {
    pub zone_name: Option<String>,
    pub gmt_offset: Option<i64>,
    pub gmt_offset_name: Option<String>,
    pub abbreviation: Option<String>,
    pub tz_name: Option<String>,
}

/// A country entry from the reference dataset.
#[derive(Clone, Debug, Serialize)]
pub struct CountryRecord {
    pub id: i64,
    pub name: String,
    pub iso2: String,
    pub iso3: String,
    pub numeric_code: Option<String>,
    pub phonecode: Option<String>,
    pub capital: Option<String>,
    pub currency: Option<String>,
    pub currency_name: Option<String>,
    pub currency_symbol: Option<String>,
    pub tld: Option<String>,
    pub native_name: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub timezones: Vec<CountryTimezone>,
    pub translations: HashMap<String, String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub emoji: Option<String>,
    pub emoji_u: Option<String>,
    pub flag: bool,
}

/// A state / region within a country.
#[derive(Clone, Debug, Serialize)]
pub struct StateRecord {
    pub id: i64,
    pub name: String,
    pub country_id: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A city within a state.
#[derive(Clone, Debug, Serialize)]
pub struct CityRecord {
    pub id: i64,
    pub name: String,
    pub country_id: i64,
    pub state_id: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Record counts for a loaded dataset.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DatasetStats {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
}

pub(crate) fn parse_opt_f64(s: &Option<String>) -> Option<f64> {
    s.as_ref().and_then(|v| v.trim().parse::<f64>().ok())
}

impl From<CountryRaw> for CountryRecord {
    fn from(c: CountryRaw) -> Self {
        let timezones = c.timezones.into_iter().map(CountryTimezone::from).collect();

        CountryRecord {
            id: c.id,
            name: c.name,
            iso2: c.iso2,
            iso3: c.iso3,
            numeric_code: c.numeric_code,
            phonecode: c.phonecode,
            capital: c.capital,
            currency: c.currency,
            currency_name: c.currency_name,
            currency_symbol: c.currency_symbol,
            tld: c.tld,
            native_name: c.native,
            region: c.region,
            subregion: c.subregion,
            timezones,
            translations: c.translations,
            latitude: parse_opt_f64(&c.latitude),
            longitude: parse_opt_f64(&c.longitude),
            emoji: c.emoji,
            emoji_u: c.emoji_u,
            flag: c.flag.unwrap_or(true),
        }
    }
}

impl From<TimezoneRaw> for CountryTimezone {
    fn from(tz: TimezoneRaw) -> Self {
        CountryTimezone {
            zone_name: tz.zone_name,
            gmt_offset: tz.gmt_offset,
            gmt_offset_name: tz.gmt_offset_name,
            abbreviation: tz.abbreviation,
            tz_name: tz.tz_name,
        }
    }
}

impl From<StateRaw> for StateRecord {
    fn from(s: StateRaw) -> Self {
        StateRecord {
            id: s.id,
            name: s.name,
            country_id: s.country_id,
            latitude: parse_opt_f64(&s.latitude),
            longitude: parse_opt_f64(&s.longitude),
        }
    }
}

impl From<CityRaw> for CityRecord {
    fn from(c: CityRaw) -> Self {
        CityRecord {
            id: c.id,
            name: c.name,
            country_id: c.country_id,
            state_id: c.state_id,
            latitude: parse_opt_f64(&c.latitude),
            longitude: parse_opt_f64(&c.longitude),
        }
    }
}
