use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    typesystem::{EnumConstant, TypeDescriptor},
    Result,
};

/// Supplies optional per-constant external names that take precedence over the default
/// naming source.
///
/// The resolver does not know where overrides come from; it only asks. An answer of `None`
/// or an empty string means "no override". Errors are returned to the caller of the table
/// construction unchanged.
pub trait EnumNameOverrides: Send + Sync {
    /// Find the override for a single constant
    ///
    /// # Errors
    /// Implementation specific; forwarded as-is by the resolver
    fn find_enum_value(
        &self,
        enum_type: &TypeDescriptor,
        constant: &EnumConstant,
    ) -> Result<Option<String>>;

    /// Find the overrides for all constants of a type, one entry per constant in ordinal order
    ///
    /// # Errors
    /// Implementation specific; forwarded as-is by the resolver
    fn find_enum_values(
        &self,
        enum_type: &TypeDescriptor,
        constants: &[EnumConstant],
    ) -> Result<Vec<Option<String>>> {
        constants
            .iter()
            .map(|constant| self.find_enum_value(enum_type, constant))
            .collect()
    }
}

impl<F> EnumNameOverrides for F
where
    F: Fn(&TypeDescriptor, &EnumConstant) -> Result<Option<String>> + Send + Sync,
{
    fn find_enum_value(
        &self,
        enum_type: &TypeDescriptor,
        constant: &EnumConstant,
    ) -> Result<Option<String>> {
        self(enum_type, constant)
    }
}

/// Reads the rename declared on each constant of the descriptor
/// (see [`crate::typesystem::EnumTypeBuilder::renamed_constant`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclaredOverrides;

impl EnumNameOverrides for DeclaredOverrides {
    fn find_enum_value(
        &self,
        _enum_type: &TypeDescriptor,
        constant: &EnumConstant,
    ) -> Result<Option<String>> {
        Ok(constant.rename().map(str::to_string))
    }
}

/// Overrides configured in code, keyed by the full type name and the declared constant name.
///
/// ```rust
/// use enumvalues::naming::ExplicitOverrides;
///
/// let overrides = ExplicitOverrides::new()
///     .rename("demo.Color", "RED", "rouge")
///     .rename("demo.Color", "BLUE", "bleu");
/// assert_eq!(overrides.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ExplicitOverrides {
    renames: HashMap<String, HashMap<String, String>>,
}

impl ExplicitOverrides {
    /// Create an empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        ExplicitOverrides::default()
    }

    /// Rename `constant` of the type `type_fullname` to `external`
    #[must_use]
    pub fn rename(
        mut self,
        type_fullname: impl Into<String>,
        constant: impl Into<String>,
        external: impl Into<String>,
    ) -> Self {
        self.renames
            .entry(type_fullname.into())
            .or_default()
            .insert(constant.into(), external.into());
        self
    }

    /// Total number of configured renames
    #[must_use]
    pub fn len(&self) -> usize {
        self.renames.values().map(HashMap::len).sum()
    }

    /// Returns true if no rename is configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnumNameOverrides for ExplicitOverrides {
    fn find_enum_value(
        &self,
        enum_type: &TypeDescriptor,
        constant: &EnumConstant,
    ) -> Result<Option<String>> {
        Ok(self
            .renames
            .get(enum_type.fullname())
            .and_then(|by_constant| by_constant.get(constant.name()))
            .cloned())
    }
}

/// Two providers consulted in order; the first non-empty answer wins.
#[derive(Clone)]
pub struct OverridesChain {
    primary: Arc<dyn EnumNameOverrides>,
    fallback: Arc<dyn EnumNameOverrides>,
}

impl OverridesChain {
    /// Ask `primary` first and `fallback` when `primary` has no answer
    pub fn new(primary: Arc<dyn EnumNameOverrides>, fallback: Arc<dyn EnumNameOverrides>) -> Self {
        OverridesChain { primary, fallback }
    }
}

impl EnumNameOverrides for OverridesChain {
    fn find_enum_value(
        &self,
        enum_type: &TypeDescriptor,
        constant: &EnumConstant,
    ) -> Result<Option<String>> {
        match self.primary.find_enum_value(enum_type, constant)? {
            Some(name) if !name.is_empty() => Ok(Some(name)),
            _ => self.fallback.find_enum_value(enum_type, constant),
        }
    }
}

impl fmt::Debug for OverridesChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverridesChain").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test::fixtures::color_type, Error};

    #[test]
    fn declared_overrides_read_renames() {
        let ty = color_type();
        let constants = ty.enum_constants().unwrap();
        let found = DeclaredOverrides.find_enum_values(&ty, &constants).unwrap();
        assert_eq!(found, vec![None, None, Some("azure".to_string())]);
    }

    #[test]
    fn explicit_overrides_match_type_and_constant() {
        let ty = color_type();
        let constants = ty.enum_constants().unwrap();
        let overrides = ExplicitOverrides::new()
            .rename("demo.Color", "RED", "rouge")
            .rename("demo.Other", "GREEN", "vert");

        let found = overrides.find_enum_values(&ty, &constants).unwrap();
        assert_eq!(found, vec![Some("rouge".to_string()), None, None]);
        assert_eq!(overrides.len(), 2);
        assert!(!overrides.is_empty());
    }

    #[test]
    fn chain_falls_back_on_none_and_empty() {
        let ty = color_type();
        let constants = ty.enum_constants().unwrap();
        let primary = ExplicitOverrides::new()
            .rename("demo.Color", "RED", "rouge")
            .rename("demo.Color", "BLUE", "");
        let chain = OverridesChain::new(Arc::new(primary), Arc::new(DeclaredOverrides));

        let found = chain.find_enum_values(&ty, &constants).unwrap();
        assert_eq!(
            found,
            vec![Some("rouge".to_string()), None, Some("azure".to_string())]
        );
    }

    #[test]
    fn closure_provider_errors_propagate() {
        let ty = color_type();
        let constants = ty.enum_constants().unwrap();
        let failing = |_: &TypeDescriptor, constant: &EnumConstant| -> Result<Option<String>> {
            if constant.ordinal() == 1 {
                Err(Error::Naming(format!("cannot name {}", constant.name())))
            } else {
                Ok(None)
            }
        };

        match failing.find_enum_values(&ty, &constants) {
            Err(Error::Naming(message)) => assert_eq!(message, "cannot name GREEN"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
