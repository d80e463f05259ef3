// crates/worldseed-core/src/policy.rs

//! Activation policy and its resolution rules.
//!
//! A [`SeedPolicy`] is an explicit, constructed value passed into the
//! validator and the seeder; resolution is a pure function of the policy and
//! a country's ISO codes. Countries resolve directly from the allow/deny
//! lists; states and cities have no codes of their own and inherit through
//! their country via [`ActiveIdSets`], a one-time precomputation that keeps
//! the per-row decision O(1).
//!
//! Precedence, evaluated in order and short-circuiting:
//!
//! 1. deny-list match → inactive (deny always wins over allow);
//! 2. allow-list configured → active iff the country matches it;
//! 3. neither list configured → the configured default flag.

use crate::model::CountryRecord;
use serde::Deserialize;
use std::collections::HashSet;

/// A pair of ISO code lists, matched against `iso2`/`iso3` respectively.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CodeSet {
    pub iso2: Vec<String>,
    pub iso3: Vec<String>,
}

impl CodeSet {
    pub fn is_empty(&self) -> bool {
        self.iso2.is_empty() && self.iso3.is_empty()
    }

    fn matches(&self, iso2: &str, iso3: &str) -> bool {
        self.iso2.iter().any(|c| c == iso2) || self.iso3.iter().any(|c| c == iso3)
    }
}

/// Country-level activation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CountryActivation {
    pub default_active: bool,
    /// Allow-list: when non-empty, only matching countries are active.
    pub only: CodeSet,
    /// Deny-list: matching countries are inactive regardless of the allow-list.
    pub except: CodeSet,
    pub chunk_len: usize,
}

impl Default for CountryActivation {
    fn default() -> Self {
        CountryActivation {
            default_active: true,
            only: CodeSet::default(),
            except: CodeSet::default(),
            chunk_len: 50,
        }
    }
}

/// Activation settings for states and cities. They carry no ISO codes, so
/// only a default flag and a chunk length apply; restriction is inherited
/// from the country level.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DependentActivation {
    pub default_active: bool,
    pub chunk_len: usize,
}

impl Default for DependentActivation {
    fn default() -> Self {
        DependentActivation {
            default_active: true,
            chunk_len: 200,
        }
    }
}

/// Full seeding policy. `Default` activates everything, no restrictions,
/// chunk lengths 50/200/200.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedPolicy {
    /// When true and a restriction is configured, records resolving inactive
    /// are not inserted at all rather than written with `is_active = false`.
    pub insert_activations_only: bool,
    pub countries: CountryActivation,
    pub states: DependentActivation,
    pub cities: DependentActivation,
}

impl SeedPolicy {
    pub fn has_only(&self) -> bool {
        !self.countries.only.is_empty()
    }

    pub fn has_except(&self) -> bool {
        !self.countries.except.is_empty()
    }

    /// Whether any allow- or deny-list is configured at the country level.
    pub fn has_restriction(&self) -> bool {
        self.has_only() || self.has_except()
    }

    /// Resolves a country's active flag from its ISO codes.
    ///
    /// Deterministic: depends only on the policy and the two codes.
    pub fn country_active(&self, iso2: &str, iso3: &str) -> bool {
        if self.has_except() && self.countries.except.matches(iso2, iso3) {
            return false;
        }
        if self.has_only() {
            return self.countries.only.matches(iso2, iso3);
        }
        self.countries.default_active
    }
}

/// Country-id sets precomputed once per run for dependent resolution.
///
/// `denied` holds ids of countries matched by the deny-lists; `active` holds
/// ids of countries resolving active under [`SeedPolicy::country_active`].
#[derive(Debug)]
pub struct ActiveIdSets {
    denied: HashSet<i64>,
    active: HashSet<i64>,
    restricted: bool,
}

impl ActiveIdSets {
    pub fn build(policy: &SeedPolicy, countries: &[CountryRecord]) -> Self {
        let mut denied = HashSet::new();
        let mut active = HashSet::new();

        for country in countries {
            if policy.has_except() && policy.countries.except.matches(&country.iso2, &country.iso3)
            {
                denied.insert(country.id);
            }
            if policy.country_active(&country.iso2, &country.iso3) {
                active.insert(country.id);
            }
        }

        ActiveIdSets {
            denied,
            active,
            restricted: policy.has_restriction(),
        }
    }

    /// Whether the country with this id resolves active.
    pub fn country_active(&self, country_id: i64) -> bool {
        self.active.contains(&country_id)
    }

    /// Resolves a dependent (state or city) by its owning country's id.
    ///
    /// `default_active` is the dependent's own configured default, used only
    /// when no country-level restriction exists.
    pub fn dependent_active(&self, country_id: i64, default_active: bool) -> bool {
        if self.denied.contains(&country_id) {
            return false;
        }
        if self.restricted {
            return self.active.contains(&country_id);
        }
        default_active
    }
}
