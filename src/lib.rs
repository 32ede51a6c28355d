//! Vendor Alias - Maven artifact-id to group-id alias map generator
//!
//! This library builds an alias map from a pipe-delimited dump of Maven
//! coordinates, applying exclusion heuristics so that only stable,
//! unambiguous artifact ids survive. The resulting JSON file is consumed
//! by downstream vendor-name resolution.

pub mod alias_map;
pub mod builder;
pub mod cli;
pub mod filter;
pub mod record;
pub mod stats;
