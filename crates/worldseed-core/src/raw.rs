// crates/worldseed-core/src/raw.rs

//! Raw input shapes, mirroring the bundled JSON files field-for-field.
//!
//! The dataset ships as three separate arrays (`countries.json`,
//! `states.json`, `cities.json`); states and cities carry foreign keys to
//! their country (and state) instead of being nested. Coordinates arrive as
//! strings and are parsed during conversion to the domain records.

use serde::Deserialize;
use std::collections::HashMap;

/// Raw timezone entry for a country, as in the JSON:
/// {
///   "zoneName": "Europe/Andorra",
///   "gmtOffset": 3600,
///   "gmtOffsetName": "UTC+01:00",
///   "abbreviation": "CET",
///   "tzName": "Central European Time"
/// }
#[derive(Debug, Deserialize)]
pub struct TimezoneRaw {
    #[serde(rename = "zoneName")]
    pub zone_name: Option<String>,
    #[serde(rename = "gmtOffset")]
    pub gmt_offset: Option<i64>,
    #[serde(rename = "gmtOffsetName")]
    pub gmt_offset_name: Option<String>,
    pub abbreviation: Option<String>,
    #[serde(rename = "tzName")]
    pub tz_name: Option<String>,
}

/// Raw country structure from JSON.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub id: i64,
    pub name: String,
    pub iso2: String,
    pub iso3: String,
    #[serde(default)]
    pub numeric_code: Option<String>,
    #[serde(default)]
    pub phonecode: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub currency_name: Option<String>,
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(default)]
    pub tld: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub timezones: Vec<TimezoneRaw>,
    /// translations: { "de": "Andorra", "fr": "Andorre", ... }
    #[serde(default)]
    pub translations: HashMap<String, String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(rename = "emojiU", default)]
    pub emoji_u: Option<String>,
    #[serde(default)]
    pub flag: Option<bool>,
}

/// Raw state / region structure from JSON.
#[derive(Debug, Deserialize)]
pub struct StateRaw {
    pub id: i64,
    pub name: String,
    pub country_id: i64,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

/// Raw city structure from JSON.
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    pub id: i64,
    pub name: String,
    pub country_id: i64,
    pub state_id: i64,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}
