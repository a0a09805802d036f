//! # enumvalues Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the enumvalues library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all enumvalues operations
pub use crate::Error;

/// The result type used throughout enumvalues
pub use crate::Result;

// ================================================================================================
// Configuration
// ================================================================================================

/// Feature flags and mapper configuration
pub use crate::config::{EnumFeature, EnumFeatures, FeatureSettings, MapperConfig};

// ================================================================================================
// Type System
// ================================================================================================

/// Type descriptors and enum constants
pub use crate::typesystem::{EnumConstant, EnumTypeBuilder, TypeDescriptor, TypeFlavor};

// ================================================================================================
// Naming
// ================================================================================================

/// Override providers, naming strategies and the resolver
pub use crate::naming::{
    DeclaredOverrides, EnumNameOverrides, EnumNamingStrategies, EnumNamingStrategy,
    ExplicitOverrides, NamingPolicy, NamingResolver, OverridesChain,
};

// ================================================================================================
// Tokens and Tables
// ================================================================================================

/// Compiled tokens and compilers
pub use crate::token::{DirectCompiler, InterningCompiler, SerializedString, TokenCompiler};

/// Enum value tables
pub use crate::values::{EnumValueMap, EnumValues, EnumValuesCache, EnumValuesSnapshot};
