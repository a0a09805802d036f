//! Immutable enum value tables and their reuse cache.
//!
//! # Key Components
//!
//! - [`EnumValues`]: Ordinal-indexed table of compiled tokens for one enumerated type
//! - [`EnumValueMap`]: The lazily built constant-to-token view of a table
//! - [`EnumValuesSnapshot`]: `serde`-serializable form of a table
//! - [`EnumValuesCache`]: Concurrent cache sharing tables within one mapping context

mod cache;
mod snapshot;
mod table;

pub use cache::EnumValuesCache;
pub use snapshot::EnumValuesSnapshot;
pub use table::{EnumValueMap, EnumValues};
