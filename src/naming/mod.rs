//! Resolution of external names for enum constants.
//!
//! This module decides, for every constant of an enumerated type, which string is used at the
//! data-interchange boundary. Four policies exist (see [`NamingPolicy`]) and all of them are
//! executed by the [`NamingResolver`]:
//!
//! - **Declared name**: per-constant override, else the declared name; optionally lowercased
//! - **String form**: per-constant override, else the string-conversion form; optionally
//!   lowercased
//! - **External strategy**: an [`EnumNamingStrategy`] applied to the declared name, verbatim
//! - **Explicit list**: caller-supplied names in ordinal order, verbatim
//!
//! # Key Components
//!
//! - [`NamingResolver`] / [`NamingPolicy`]: The resolver core and its policy selector
//! - [`EnumNameOverrides`]: Capability interface for per-constant overrides, with
//!   [`DeclaredOverrides`], [`ExplicitOverrides`] and [`OverridesChain`] implementations
//! - [`EnumNamingStrategy`]: Capability interface for naming strategies, with the built-in
//!   [`EnumNamingStrategies`]

mod overrides;
mod resolver;
mod strategy;

pub use overrides::{DeclaredOverrides, EnumNameOverrides, ExplicitOverrides, OverridesChain};
pub(crate) use resolver::check_len;
pub use resolver::{NamingPolicy, NamingResolver, ResolvedNames};
pub use strategy::{EnumNamingStrategies, EnumNamingStrategy};
