//! Type descriptors for enumerated types.
//!
//! This module provides the minimal type model the naming resolver needs: a descriptor
//! identifying a type, its [`TypeFlavor`], and, for enumerated types, the ordered list of
//! [`EnumConstant`]s. It stands in for general reflection: [`TypeDescriptor::enum_constants`]
//! is the single entry point that turns a descriptor into an ordinal-ordered constant list,
//! failing if the type is not an enum or has no constants.
//!
//! # Key Components
//!
//! - [`TypeDescriptor`]: Cheaply clonable handle identifying a type
//! - [`TypeFlavor`]: Classification of the type (enum, class, interface, primitive)
//! - [`EnumConstant`]: One constant of an enumerated type, with ordinal and names
//! - [`EnumTypeBuilder`]: Builder pattern for enumerated type descriptors
//!
//! # Examples
//!
//! ```rust
//! use enumvalues::typesystem::{EnumTypeBuilder, TypeDescriptor};
//!
//! let color = EnumTypeBuilder::new("demo", "Color")
//!     .constant("RED")
//!     .constant_with_string_form("GREEN", "Green")
//!     .renamed_constant("BLUE", "azure")
//!     .build();
//!
//! let constants = color.enum_constants()?;
//! assert_eq!(constants.len(), 3);
//! assert_eq!(constants[1].string_form(), "Green");
//! assert_eq!(constants[2].rename(), Some("azure"));
//! # Ok::<(), enumvalues::Error>(())
//! ```

mod base;
mod builder;

pub use base::{EnumConstant, EnumConstantList, TypeDescriptor, TypeFlavor};
pub use builder::EnumTypeBuilder;
