//! Mapper configuration consumed by the enum naming resolver.
//!
//! [`MapperConfig`] bundles everything a table construction needs besides the type itself:
//! the [`EnumFeatures`] flags, the [`TokenCompiler`] used to turn names into tokens, and the
//! [`EnumNameOverrides`] provider consulted for per-constant renames.
//!
//! The configuration is immutable once built and cheap to clone. A changed configuration is a
//! new value; tables built from the old one keep the names they were built with.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use enumvalues::config::{EnumFeatures, MapperConfig};
//! use enumvalues::token::InterningCompiler;
//!
//! let config = MapperConfig::builder()
//!     .enable(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE)
//!     .compiler(Arc::new(InterningCompiler::new()))
//!     .build();
//!
//! assert!(config.is_enabled(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE));
//! assert_eq!(config.compile_string("red"), "red");
//! ```

mod features;

use std::{fmt, sync::Arc};

pub use features::{EnumFeature, EnumFeatures, FeatureSettings};

use crate::{
    naming::{DeclaredOverrides, EnumNameOverrides},
    token::{DirectCompiler, SerializedString, TokenCompiler},
    Result,
};

/// Immutable configuration for building [`crate::EnumValues`] tables.
#[derive(Clone)]
pub struct MapperConfig {
    features: EnumFeatures,
    compiler: Arc<dyn TokenCompiler>,
    overrides: Option<Arc<dyn EnumNameOverrides>>,
}

impl MapperConfig {
    /// Start building a configuration from the default settings
    #[must_use]
    pub fn builder() -> MapperConfigBuilder {
        MapperConfigBuilder::new()
    }

    /// Build a configuration from externally supplied feature toggles, with default
    /// compiler and override provider
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownFeature`] if the settings name an unknown feature
    pub fn from_settings(settings: &FeatureSettings) -> Result<Self> {
        let features = settings.apply(EnumFeatures::defaults())?;
        Ok(MapperConfig::builder().features(features).build())
    }

    /// The active feature flags
    #[must_use]
    pub fn features(&self) -> EnumFeatures {
        self.features
    }

    /// Returns true if all flags in `features` are enabled
    #[must_use]
    pub fn is_enabled(&self, features: EnumFeatures) -> bool {
        self.features.contains(features)
    }

    /// The override provider, if per-constant overrides are consulted at all
    #[must_use]
    pub fn overrides(&self) -> Option<&dyn EnumNameOverrides> {
        self.overrides.as_deref()
    }

    /// Compile a raw external name into a token with the configured compiler
    #[must_use]
    pub fn compile_string(&self, raw: &str) -> SerializedString {
        self.compiler.compile(raw)
    }

    /// A copy of this configuration with different feature flags; compiler and overrides are
    /// shared with `self`
    #[must_use]
    pub fn with_features(&self, features: EnumFeatures) -> Self {
        MapperConfig {
            features,
            compiler: self.compiler.clone(),
            overrides: self.overrides.clone(),
        }
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig::builder().build()
    }
}

impl fmt::Debug for MapperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperConfig")
            .field("features", &self.features)
            .field("overrides", &self.overrides.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`MapperConfig`].
///
/// Defaults: [`EnumFeatures::defaults`], [`DirectCompiler`], and [`DeclaredOverrides`] as
/// override provider.
pub struct MapperConfigBuilder {
    features: EnumFeatures,
    compiler: Arc<dyn TokenCompiler>,
    overrides: Option<Arc<dyn EnumNameOverrides>>,
}

impl MapperConfigBuilder {
    fn new() -> Self {
        MapperConfigBuilder {
            features: EnumFeatures::defaults(),
            compiler: Arc::new(DirectCompiler),
            overrides: Some(Arc::new(DeclaredOverrides)),
        }
    }

    /// Replace the complete feature set
    #[must_use]
    pub fn features(mut self, features: EnumFeatures) -> Self {
        self.features = features;
        self
    }

    /// Switch the given flags on
    #[must_use]
    pub fn enable(mut self, features: EnumFeatures) -> Self {
        self.features.insert(features);
        self
    }

    /// Switch the given flags off
    #[must_use]
    pub fn disable(mut self, features: EnumFeatures) -> Self {
        self.features.remove(features);
        self
    }

    /// Use `compiler` to turn names into tokens
    #[must_use]
    pub fn compiler(mut self, compiler: Arc<dyn TokenCompiler>) -> Self {
        self.compiler = compiler;
        self
    }

    /// Consult `overrides` for per-constant renames
    #[must_use]
    pub fn overrides(mut self, overrides: Arc<dyn EnumNameOverrides>) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Ignore per-constant renames entirely
    #[must_use]
    pub fn no_overrides(mut self) -> Self {
        self.overrides = None;
        self
    }

    /// Finish the configuration
    #[must_use]
    pub fn build(self) -> MapperConfig {
        MapperConfig {
            features: self.features,
            compiler: self.compiler,
            overrides: self.overrides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MapperConfig::default();
        assert_eq!(config.features(), EnumFeatures::empty());
        assert!(config.overrides().is_some());
        assert_eq!(config.compile_string("x").value(), "x");
    }

    #[test]
    fn builder_toggles() {
        let config = MapperConfig::builder()
            .enable(
                EnumFeatures::WRITE_ENUMS_TO_LOWERCASE | EnumFeatures::WRITE_ENUMS_USING_TO_STRING,
            )
            .disable(EnumFeatures::WRITE_ENUMS_USING_TO_STRING)
            .no_overrides()
            .build();

        assert!(config.is_enabled(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE));
        assert!(!config.is_enabled(EnumFeatures::WRITE_ENUMS_USING_TO_STRING));
        assert!(config.overrides().is_none());
    }

    #[test]
    fn with_features_keeps_collaborators() {
        let base = MapperConfig::builder().no_overrides().build();
        let lower = base.with_features(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE);
        assert!(lower.is_enabled(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE));
        assert!(lower.overrides().is_none());
        assert_eq!(base.features(), EnumFeatures::empty());
    }

    #[test]
    fn from_settings() {
        let settings = FeatureSettings {
            enable: vec!["WRITE_ENUMS_USING_TO_STRING".to_string()],
            disable: Vec::new(),
        };
        let config = MapperConfig::from_settings(&settings).unwrap();
        assert_eq!(config.features(), EnumFeatures::WRITE_ENUMS_USING_TO_STRING);

        let bad = FeatureSettings {
            enable: vec!["NOPE".to_string()],
            disable: Vec::new(),
        };
        assert!(MapperConfig::from_settings(&bad).is_err());
    }
}
