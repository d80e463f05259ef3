//! worldseed-cli
//! =============
//!
//! Command-line interface for the `worldseed-core` seeding library.
//!
//! This crate primarily provides a binary (`worldseed`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! worldseed --help
//! worldseed stats
//! worldseed --config policy.json check
//! worldseed --config policy.json seed --db world.db
//! ```
//!
//! For programmatic access to the policy resolver and seeder, use the
//! `worldseed-core` crate directly.

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
