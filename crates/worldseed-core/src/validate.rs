// crates/worldseed-core/src/validate.rs

//! Configuration validation against the loaded dataset.
//!
//! Every ISO code referenced by the allow- and deny-lists must exist among
//! the loaded countries. A misconfigured code aborts the whole run before
//! any write, rather than silently matching nothing.

use crate::error::{Result, WorldError};
use crate::model::CountryRecord;
use crate::policy::SeedPolicy;
use std::collections::HashSet;

impl SeedPolicy {
    /// Checks every configured ISO code for membership in the dataset.
    ///
    /// ISO2 codes are checked before ISO3 codes; within each, allow-list
    /// entries before deny-list entries, in configuration order. Fails on
    /// the first unmatched code.
    pub fn ensure_codes_valid(&self, countries: &[CountryRecord]) -> Result<()> {
        let iso2: HashSet<&str> = countries.iter().map(|c| c.iso2.as_str()).collect();
        let iso3: HashSet<&str> = countries.iter().map(|c| c.iso3.as_str()).collect();

        for code in self
            .countries
            .only
            .iso2
            .iter()
            .chain(&self.countries.except.iso2)
        {
            if !iso2.contains(code.as_str()) {
                return Err(WorldError::Iso2NotFound { code: code.clone() });
            }
        }

        for code in self
            .countries
            .only
            .iso3
            .iter()
            .chain(&self.countries.except.iso3)
        {
            if !iso3.contains(code.as_str()) {
                return Err(WorldError::Iso3NotFound { code: code.clone() });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{CodeSet, CountryActivation};

    fn countries() -> Vec<CountryRecord> {
        ["US:USA", "DE:DEU", "FR:FRA"]
            .iter()
            .enumerate()
            .map(|(i, pair)| {
                let (iso2, iso3) = pair.split_once(':').unwrap();
                let raw: crate::raw::CountryRaw = serde_json::from_str(&format!(
                    r#"{{"id": {}, "name": "x", "iso2": "{iso2}", "iso3": "{iso3}"}}"#,
                    i + 1
                ))
                .unwrap();
                raw.into()
            })
            .collect()
    }

    fn policy(only2: &[&str], only3: &[&str], except2: &[&str], except3: &[&str]) -> SeedPolicy {
        let list = |codes: &[&str]| codes.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        SeedPolicy {
            countries: CountryActivation {
                only: CodeSet {
                    iso2: list(only2),
                    iso3: list(only3),
                },
                except: CodeSet {
                    iso2: list(except2),
                    iso3: list(except3),
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn empty_lists_always_validate() {
        assert!(SeedPolicy::default().ensure_codes_valid(&countries()).is_ok());
    }

    #[test]
    fn known_codes_validate() {
        let p = policy(&["US"], &["DEU"], &["FR"], &["FRA"]);
        assert!(p.ensure_codes_valid(&countries()).is_ok());
    }

    #[test]
    fn unknown_iso2_is_rejected_with_the_code() {
        let p = policy(&["ZZ"], &[], &[], &[]);
        match p.ensure_codes_valid(&countries()) {
            Err(WorldError::Iso2NotFound { code }) => assert_eq!(code, "ZZ"),
            other => panic!("expected Iso2NotFound, got {other:?}"),
        }
    }

    #[test]
    fn unknown_iso3_in_deny_list_is_rejected() {
        let p = policy(&[], &[], &[], &["XYZ"]);
        match p.ensure_codes_valid(&countries()) {
            Err(WorldError::Iso3NotFound { code }) => assert_eq!(code, "XYZ"),
            other => panic!("expected Iso3NotFound, got {other:?}"),
        }
    }

    #[test]
    fn iso2_errors_take_precedence_over_iso3() {
        // Both lists are bad; the iso2 check runs first.
        let p = policy(&["ZZ"], &["XYZ"], &[], &[]);
        assert!(matches!(
            p.ensure_codes_valid(&countries()),
            Err(WorldError::Iso2NotFound { .. })
        ));
    }
}
