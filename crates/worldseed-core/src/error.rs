// crates/worldseed-core/src/error.rs

use crate::store::{StoreError, Table};
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, WorldError>;

/// Errors terminating a seeding run.
///
/// All variants are fatal: the run performs no retries and keeps no
/// resumable checkpoints. Recovery (fixing the configuration, clearing the
/// destination tables, repairing the store) is an operator action.
#[derive(Debug, Error)]
pub enum WorldError {
    /// A configured ISO2 code matches no loaded country.
    #[error("no country has iso2 code {code:?}")]
    Iso2NotFound { code: String },

    /// A configured ISO3 code matches no loaded country.
    #[error("no country has iso3 code {code:?}")]
    Iso3NotFound { code: String },

    /// Destination table already holds rows and no reset was requested.
    #[error("cannot seed: table {table} is not empty")]
    NonEmptyTable { table: Table },

    /// A row insert failed; identifies the entity kind and chunk for diagnosis.
    #[error("insert into {table} failed in chunk {chunk}: {source}")]
    Persistence {
        table: Table,
        chunk: usize,
        #[source]
        source: StoreError,
    },

    /// Store inspection (row counts, table existence) failed.
    #[error("store inspection failed: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
