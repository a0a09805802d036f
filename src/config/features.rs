use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result};

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    /// Feature flags controlling how enum constants are named on output
    pub struct EnumFeatures: u32 {
        /// Use the string-conversion form of a constant instead of its declared name
        const WRITE_ENUMS_USING_TO_STRING = 0x0001;
        /// Lowercase the name chosen by the declared-name or string-form policy
        const WRITE_ENUMS_TO_LOWERCASE = 0x0002;
    }
}

/// Named form of the individual [`EnumFeatures`] flags.
///
/// Feature names are written in `SCREAMING_SNAKE_CASE`, which is how they appear in
/// [`FeatureSettings`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EnumFeature {
    /// See [`EnumFeatures::WRITE_ENUMS_USING_TO_STRING`]
    WriteEnumsUsingToString,
    /// See [`EnumFeatures::WRITE_ENUMS_TO_LOWERCASE`]
    WriteEnumsToLowercase,
}

impl EnumFeature {
    /// The flag this feature toggles
    #[must_use]
    pub fn flag(self) -> EnumFeatures {
        match self {
            EnumFeature::WriteEnumsUsingToString => EnumFeatures::WRITE_ENUMS_USING_TO_STRING,
            EnumFeature::WriteEnumsToLowercase => EnumFeatures::WRITE_ENUMS_TO_LOWERCASE,
        }
    }

    /// Whether this feature is enabled when nothing else is configured
    #[must_use]
    pub fn enabled_by_default(self) -> bool {
        false
    }

    /// Parse a feature from its `SCREAMING_SNAKE_CASE` name
    ///
    /// # Errors
    /// Returns [`Error::UnknownFeature`] if `name` does not name a feature
    pub fn parse(name: &str) -> Result<Self> {
        EnumFeature::from_str(name.trim()).map_err(|_| Error::UnknownFeature(name.to_string()))
    }
}

impl EnumFeatures {
    /// The flags that are enabled when nothing else is configured
    #[must_use]
    pub fn defaults() -> Self {
        use strum::IntoEnumIterator;

        EnumFeature::iter()
            .filter(|feature| feature.enabled_by_default())
            .fold(EnumFeatures::empty(), |flags, feature| flags | feature.flag())
    }
}

/// Externally supplied feature toggles, usually deserialized from a configuration file.
///
/// ```rust
/// use enumvalues::config::{EnumFeatures, FeatureSettings};
///
/// let settings: FeatureSettings =
///     serde_json::from_str(r#"{ "enable": ["WRITE_ENUMS_TO_LOWERCASE"] }"#).unwrap();
/// let features = settings.apply(EnumFeatures::defaults())?;
/// assert!(features.contains(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE));
/// # Ok::<(), enumvalues::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureSettings {
    /// Features to switch on
    pub enable: Vec<String>,
    /// Features to switch off; applied after `enable`
    pub disable: Vec<String>,
}

impl FeatureSettings {
    /// Apply these settings on top of `base`
    ///
    /// # Errors
    /// Returns [`Error::UnknownFeature`] for the first name that is not a known feature
    pub fn apply(&self, base: EnumFeatures) -> Result<EnumFeatures> {
        let mut features = base;
        for name in &self.enable {
            features.insert(EnumFeature::parse(name)?.flag());
        }
        for name in &self.disable {
            features.remove(EnumFeature::parse(name)?.flag());
        }
        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_names_round_trip() {
        use strum::IntoEnumIterator;

        for feature in EnumFeature::iter() {
            let name: &'static str = feature.into();
            assert_eq!(EnumFeature::parse(name).unwrap(), feature);
        }
        assert_eq!(
            EnumFeature::parse("WRITE_ENUMS_TO_LOWERCASE").unwrap(),
            EnumFeature::WriteEnumsToLowercase
        );
    }

    #[test]
    fn unknown_feature() {
        match EnumFeature::parse("WRITE_ENUMS_BACKWARDS") {
            Err(Error::UnknownFeature(name)) => assert_eq!(name, "WRITE_ENUMS_BACKWARDS"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn defaults_are_empty() {
        assert_eq!(EnumFeatures::defaults(), EnumFeatures::empty());
    }

    #[test]
    fn disable_wins_over_enable() {
        let settings = FeatureSettings {
            enable: vec![
                "WRITE_ENUMS_TO_LOWERCASE".to_string(),
                "WRITE_ENUMS_USING_TO_STRING".to_string(),
            ],
            disable: vec!["WRITE_ENUMS_TO_LOWERCASE".to_string()],
        };
        let features = settings.apply(EnumFeatures::empty()).unwrap();
        assert_eq!(features, EnumFeatures::WRITE_ENUMS_USING_TO_STRING);
    }
}
