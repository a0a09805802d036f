//! Compiled external tokens.
//!
//! Every external name resolved for an enum constant is turned into a [`SerializedString`]
//! before it is stored in an [`crate::EnumValues`] table. The compilation step is pluggable
//! through the [`TokenCompiler`] trait; [`crate::MapperConfig`] carries the compiler in use.
//!
//! # Key Components
//!
//! - [`SerializedString`]: Immutable token with a lazily computed, cached escaped form
//! - [`TokenCompiler`]: The compilation seam, `&str -> SerializedString`
//! - [`DirectCompiler`]: Creates a fresh token for every call
//! - [`InterningCompiler`]: Hands out one shared token per distinct input
//!
//! # Examples
//!
//! ```rust
//! use enumvalues::token::{InterningCompiler, SerializedString, TokenCompiler};
//!
//! let compiler = InterningCompiler::new();
//! let first = compiler.compile("say \"hi\"");
//! let second = compiler.compile("say \"hi\"");
//!
//! assert!(SerializedString::ptr_eq(&first, &second));
//! assert_eq!(first.as_quoted(), "say \\\"hi\\\"");
//! ```

mod compiler;
mod serialized;

pub use compiler::{DirectCompiler, InterningCompiler, TokenCompiler};
pub use serialized::SerializedString;
