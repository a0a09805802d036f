use std::fmt;

use tracing::{debug, trace};

use crate::{
    config::{EnumFeatures, MapperConfig},
    naming::EnumNamingStrategy,
    typesystem::{EnumConstant, EnumConstantList, TypeDescriptor},
    Error, Result,
};

/// Where the external name of each constant comes from.
///
/// `DeclaredName` and `StringForm` consult the override provider of the configuration and
/// honor [`EnumFeatures::WRITE_ENUMS_TO_LOWERCASE`]. `ExternalStrategy` and `ExplicitList` are
/// authoritative and used verbatim.
#[derive(Clone, Copy)]
pub enum NamingPolicy<'a> {
    /// Override if present, else the declared name of the constant
    DeclaredName,
    /// Override if present, else the string-conversion form of the constant
    StringForm,
    /// The strategy applied to the declared name of each constant
    ExternalStrategy(&'a dyn EnumNamingStrategy),
    /// One caller-supplied name per constant, in ordinal order
    ExplicitList(&'a [&'a str]),
}

impl NamingPolicy<'static> {
    /// Pick between `DeclaredName` and `StringForm` based on
    /// [`EnumFeatures::WRITE_ENUMS_USING_TO_STRING`]
    #[must_use]
    pub fn for_config(config: &MapperConfig) -> Self {
        if config.is_enabled(EnumFeatures::WRITE_ENUMS_USING_TO_STRING) {
            NamingPolicy::StringForm
        } else {
            NamingPolicy::DeclaredName
        }
    }
}

impl NamingPolicy<'_> {
    /// Short label used in logs
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            NamingPolicy::DeclaredName => "declared-name",
            NamingPolicy::StringForm => "string-form",
            NamingPolicy::ExternalStrategy(_) => "external-strategy",
            NamingPolicy::ExplicitList(_) => "explicit-list",
        }
    }
}

impl fmt::Debug for NamingPolicy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingPolicy::ExplicitList(names) => {
                f.debug_tuple("ExplicitList").field(names).finish()
            }
            other => f.write_str(other.label()),
        }
    }
}

/// Ordinal-aligned output of a resolution: the constants and one external name for each.
#[derive(Clone, Debug)]
pub struct ResolvedNames {
    /// The constants of the type, in ordinal order
    pub constants: EnumConstantList,
    /// External names, `names[i]` belongs to `constants[i]`
    pub names: Vec<String>,
}

/// Computes the external name of every constant of an enumerated type.
///
/// All four naming policies run through [`NamingResolver::resolve`], so the precedence rules
/// live in a single place:
///
/// 1. The constants are fetched first; a type that is not an enum, or has no constants, fails
///    before any name is computed.
/// 2. For `DeclaredName` and `StringForm`, a non-empty override beats the default name, and the
///    lowercase feature applies to whichever of the two was chosen.
/// 3. Strategy output and explicit lists are used verbatim.
///
/// # Examples
///
/// ```rust
/// use enumvalues::{naming::{NamingPolicy, NamingResolver}, MapperConfig, TypeDescriptor};
/// use enumvalues::typesystem::EnumTypeBuilder;
///
/// let color = EnumTypeBuilder::new("demo", "Color").constant("RED").constant("GREEN").build();
/// let config = MapperConfig::default();
///
/// let resolved = NamingResolver::new(&config).resolve(&color, NamingPolicy::DeclaredName)?;
/// assert_eq!(resolved.names, vec!["RED", "GREEN"]);
/// # Ok::<(), enumvalues::Error>(())
/// ```
pub struct NamingResolver<'a> {
    config: &'a MapperConfig,
}

impl<'a> NamingResolver<'a> {
    /// Create a resolver using `config` for overrides and features
    #[must_use]
    pub fn new(config: &'a MapperConfig) -> Self {
        NamingResolver { config }
    }

    /// Resolve the external names of all constants of `enum_type` under `policy`
    ///
    /// # Errors
    /// - [`Error::Configuration`] if `enum_type` is not an enum or has no constants
    /// - [`Error::ContractViolation`] if an explicit list or the override provider output does
    ///   not have one entry per constant
    /// - Any error raised by the naming strategy or the override provider, unchanged
    pub fn resolve(
        &self,
        enum_type: &TypeDescriptor,
        policy: NamingPolicy<'_>,
    ) -> Result<ResolvedNames> {
        let constants = enum_type.enum_constants()?;

        debug!(
            enum_type = %enum_type,
            policy = policy.label(),
            constants = constants.len(),
            "resolving enum names"
        );

        let names = match policy {
            NamingPolicy::DeclaredName => {
                self.with_overrides(enum_type, &constants, EnumConstant::name)?
            }
            NamingPolicy::StringForm => {
                self.with_overrides(enum_type, &constants, EnumConstant::string_form)?
            }
            NamingPolicy::ExternalStrategy(strategy) => constants
                .iter()
                .map(|constant| strategy.convert_enum_to_external_name(constant.name()))
                .collect::<Result<Vec<_>>>()?,
            NamingPolicy::ExplicitList(names) => {
                check_len("external names", constants.len(), names.len())?;
                names.iter().map(|name| name.to_string()).collect()
            }
        };

        Ok(ResolvedNames { constants, names })
    }

    fn with_overrides(
        &self,
        enum_type: &TypeDescriptor,
        constants: &[EnumConstant],
        default_name: fn(&EnumConstant) -> &str,
    ) -> Result<Vec<String>> {
        let overrides = match self.config.overrides() {
            Some(provider) => {
                let found = provider.find_enum_values(enum_type, constants)?;
                check_len("override names", constants.len(), found.len())?;
                found
            }
            None => vec![None; constants.len()],
        };

        let lowercase = self
            .config
            .is_enabled(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE);

        Ok(constants
            .iter()
            .zip(overrides)
            .map(|(constant, explicit)| {
                let name = match explicit {
                    Some(name) if !name.is_empty() => {
                        trace!(
                            constant = constant.name(),
                            external = name.as_str(),
                            "override replaces default enum name"
                        );
                        name
                    }
                    _ => default_name(constant).to_string(),
                };

                if lowercase {
                    name.to_lowercase()
                } else {
                    name
                }
            })
            .collect())
    }
}

pub(crate) fn check_len(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::ContractViolation {
            context,
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        naming::{EnumNameOverrides, EnumNamingStrategies, ExplicitOverrides},
        test::fixtures::{color_type, plain_color_type, string_form_type},
        typesystem::EnumTypeBuilder,
    };

    fn resolve(config: &MapperConfig, ty: &TypeDescriptor, policy: NamingPolicy) -> Vec<String> {
        NamingResolver::new(config).resolve(ty, policy).unwrap().names
    }

    #[test]
    fn declared_name_defaults() {
        let config = MapperConfig::default();
        assert_eq!(
            resolve(&config, &plain_color_type(), NamingPolicy::DeclaredName),
            vec!["RED", "GREEN", "BLUE"]
        );
    }

    #[test]
    fn declared_name_lowercase() {
        let config = MapperConfig::builder()
            .enable(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE)
            .build();
        assert_eq!(
            resolve(&config, &plain_color_type(), NamingPolicy::DeclaredName),
            vec!["red", "green", "blue"]
        );
    }

    #[test]
    fn override_beats_declared_name() {
        let config = MapperConfig::default();
        assert_eq!(
            resolve(&config, &color_type(), NamingPolicy::DeclaredName),
            vec!["RED", "GREEN", "azure"]
        );

        let lower = config.with_features(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE);
        let shouting = EnumTypeBuilder::new("demo", "Loud")
            .renamed_constant("QUIET", "Whisper")
            .build();
        assert_eq!(
            resolve(&lower, &shouting, NamingPolicy::DeclaredName),
            vec!["whisper"]
        );
    }

    #[test]
    fn string_form_with_and_without_override() {
        let config = MapperConfig::default();
        let ty = string_form_type();
        assert_eq!(
            resolve(&config, &ty, NamingPolicy::StringForm),
            vec!["Small", "Medium Size", "xl"]
        );

        let lower = config.with_features(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE);
        assert_eq!(
            resolve(&lower, &ty, NamingPolicy::StringForm),
            vec!["small", "medium size", "xl"]
        );
    }

    #[test]
    fn empty_override_is_ignored() {
        let overrides = ExplicitOverrides::new().rename("demo.Color", "GREEN", "");
        let config = MapperConfig::builder()
            .overrides(Arc::new(overrides))
            .build();
        assert_eq!(
            resolve(&config, &plain_color_type(), NamingPolicy::DeclaredName),
            vec!["RED", "GREEN", "BLUE"]
        );
    }

    #[test]
    fn disabled_overrides_use_defaults() {
        let config = MapperConfig::builder().no_overrides().build();
        assert_eq!(
            resolve(&config, &color_type(), NamingPolicy::DeclaredName),
            vec!["RED", "GREEN", "BLUE"]
        );
    }

    #[test]
    fn strategy_is_authoritative() {
        let config = MapperConfig::builder()
            .enable(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE)
            .build();
        let reverse = |name: &str| -> Result<String> { Ok(name.chars().rev().collect()) };

        assert_eq!(
            resolve(&config, &color_type(), NamingPolicy::ExternalStrategy(&reverse)),
            vec!["DER", "NEERG", "EULB"]
        );
        assert_eq!(
            resolve(
                &config,
                &color_type(),
                NamingPolicy::ExternalStrategy(&EnumNamingStrategies::UpperCamelCase)
            ),
            vec!["Red", "Green", "Blue"]
        );
    }

    #[test]
    fn strategy_error_propagates() {
        let config = MapperConfig::default();
        let failing = |name: &str| -> Result<String> {
            if name == "GREEN" {
                Err(Error::Naming("no green allowed".to_string()))
            } else {
                Ok(name.to_string())
            }
        };

        match NamingResolver::new(&config)
            .resolve(&color_type(), NamingPolicy::ExternalStrategy(&failing))
        {
            Err(Error::Naming(message)) => assert_eq!(message, "no green allowed"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn explicit_list_verbatim_and_checked() {
        let config = MapperConfig::builder()
            .enable(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE)
            .build();
        let names = ["R", "G", "B"];
        assert_eq!(
            resolve(&config, &color_type(), NamingPolicy::ExplicitList(&names)),
            vec!["R", "G", "B"]
        );

        let short = ["R"];
        match NamingResolver::new(&config)
            .resolve(&color_type(), NamingPolicy::ExplicitList(&short))
        {
            Err(Error::ContractViolation {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn override_provider_error_propagates() {
        let failing = |_: &TypeDescriptor, constant: &EnumConstant| -> Result<Option<String>> {
            Err(Error::Naming(format!("lookup failed for {}", constant.owner())))
        };
        let config = MapperConfig::builder().overrides(Arc::new(failing)).build();

        match NamingResolver::new(&config).resolve(&color_type(), NamingPolicy::StringForm) {
            Err(Error::Naming(message)) => assert_eq!(message, "lookup failed for demo.Color"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn not_an_enum_fails_before_naming() {
        let config = MapperConfig::default();
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let counting = |name: &str| -> Result<String> {
            calls.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            Ok(name.to_string())
        };

        let result = NamingResolver::new(&config).resolve(
            &TypeDescriptor::class("demo", "Point"),
            NamingPolicy::ExternalStrategy(&counting),
        );
        assert!(matches!(result, Err(Error::Configuration { .. })));
        assert_eq!(calls.load(std::sync::atomic::Ordering::Relaxed), 0);
    }

    #[test]
    fn short_override_output_is_a_contract_violation() {
        struct Truncating;

        impl EnumNameOverrides for Truncating {
            fn find_enum_value(
                &self,
                _enum_type: &TypeDescriptor,
                _constant: &EnumConstant,
            ) -> Result<Option<String>> {
                Ok(None)
            }

            fn find_enum_values(
                &self,
                _enum_type: &TypeDescriptor,
                _constants: &[EnumConstant],
            ) -> Result<Vec<Option<String>>> {
                Ok(vec![None])
            }
        }

        let config = MapperConfig::builder()
            .overrides(Arc::new(Truncating))
            .build();
        assert!(matches!(
            NamingResolver::new(&config).resolve(&color_type(), NamingPolicy::DeclaredName),
            Err(Error::ContractViolation {
                context: "override names",
                ..
            })
        ));
    }

    #[test]
    fn policy_follows_config() {
        let config = MapperConfig::default();
        assert!(matches!(
            NamingPolicy::for_config(&config),
            NamingPolicy::DeclaredName
        ));
        let to_string = config.with_features(EnumFeatures::WRITE_ENUMS_USING_TO_STRING);
        assert!(matches!(
            NamingPolicy::for_config(&to_string),
            NamingPolicy::StringForm
        ));
        assert_eq!(NamingPolicy::StringForm.label(), "string-form");
    }
}
