// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # enumvalues
//!
//! Resolution and caching of the external (textual) names of enum constants, used
//! symmetrically when enum values are written to and read back from a data-interchange format.
//!
//! For every enumerated type, `enumvalues` decides which string token represents each constant,
//! compiles those tokens once, and keeps them in an immutable, ordinal-indexed table for O(1)
//! lookup during serialization.
//!
//! ## Features
//!
//! - **Four naming policies** - declared name, string form, naming strategy, explicit list
//! - **Per-constant overrides** - pluggable providers, declared renames, chained lookups
//! - **Built-in naming strategies** - camel, snake, kebab, dot and plain case conversions
//! - **Compiled tokens** - escaped forms computed once, optional interning of equal names
//! - **Lock-free reads** - immutable tables, race-tolerant lazily built map view
//! - **Reuse** - a concurrent cache keyed by type and feature flags, parallel prefetching
//!
//! ## Quick Start
//!
//! ```rust
//! use enumvalues::prelude::*;
//!
//! let color = EnumTypeBuilder::new("demo", "Color")
//!     .constant("RED")
//!     .constant("GREEN")
//!     .renamed_constant("BLUE", "azure")
//!     .build();
//!
//! let config = MapperConfig::builder()
//!     .enable(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE)
//!     .build();
//!
//! let table = EnumValues::construct(&config, &color)?;
//! let names: Vec<&str> = table.values().iter().map(SerializedString::value).collect();
//! assert_eq!(names, ["red", "green", "azure"]);
//! # Ok::<(), enumvalues::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `enumvalues` is organized into several key modules:
//!
//! - [`typesystem`] - Type descriptors and enum constants
//! - [`config`] - Feature flags and the [`MapperConfig`]
//! - [`naming`] - Override providers, naming strategies and the [`naming::NamingResolver`]
//! - [`token`] - Compiled tokens and token compilers
//! - [`values`] - The [`EnumValues`] table, snapshots and the [`EnumValuesCache`]
//! - [`Error`] and [`Result`] - Error handling
//!
//! ### Naming Precedence
//!
//! For the declared-name and string-form policies, a non-empty per-constant override always
//! wins over the default name, and the lowercase feature applies to whichever name was picked.
//! Naming strategies and explicit name lists are authoritative and used verbatim.
//!
//! ## Error Handling
//!
//! All failures happen at construction time and are reported as [`Error`]; a constructed
//! table can not fail:
//!
//! ```rust
//! use enumvalues::{Error, EnumValues, MapperConfig, TypeDescriptor};
//!
//! let config = MapperConfig::default();
//! match EnumValues::construct(&config, &TypeDescriptor::class("demo", "Point")) {
//!     Ok(_) => println!("Built table"),
//!     Err(Error::Configuration { message, .. }) => println!("Not usable: {}", message),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Table construction emits `tracing` events (`debug` per resolved type, `trace` per applied
//! override). The library never installs a subscriber.
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use enumvalues::prelude::*;
///
/// let config = MapperConfig::default();
/// assert!(!config.is_enabled(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE));
/// ```
pub mod prelude;

pub mod config;
pub mod naming;
pub mod token;
pub mod typesystem;
pub mod values;

/// `enumvalues` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `enumvalues` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

pub use config::{EnumFeatures, MapperConfig};
pub use token::SerializedString;
pub use typesystem::{EnumConstant, TypeDescriptor};
pub use values::{EnumValues, EnumValuesCache, EnumValuesSnapshot};
