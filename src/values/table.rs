use std::{collections::HashSet, fmt};

use indexmap::IndexMap;
use once_cell::race::OnceBox;

use crate::{
    config::MapperConfig,
    naming::{check_len, EnumNamingStrategy, NamingPolicy, NamingResolver},
    token::SerializedString,
    typesystem::{EnumConstant, EnumConstantList, TypeDescriptor},
    Result,
};

/// Insertion-ordered (ordinal-ordered) mapping from constant to its token
pub type EnumValueMap = IndexMap<EnumConstant, SerializedString>;

/// Immutable table of the external tokens of one enumerated type.
///
/// The table holds the type, its constants, and one compiled token per constant, all
/// ordinal-aligned: `values()[i]` is the token of `enums()[i]`. It is built once by one of the
/// constructors and never changes afterwards; a different naming requires a new table.
///
/// # Construction
///
/// | Constructor | Names come from |
/// |---|---|
/// | [`EnumValues::construct`] | declared name or string form, as selected by the config |
/// | [`EnumValues::from_declared_names`] | override, else declared name; optionally lowercased |
/// | [`EnumValues::from_string_forms`] | override, else string form; optionally lowercased |
/// | [`EnumValues::from_naming_strategy`] | the strategy, verbatim |
/// | [`EnumValues::from_external_names`] | the supplied list, verbatim |
/// | [`EnumValues::from_tokens`] | the supplied precompiled tokens |
///
/// # Thread Safety
///
/// All accessors are lock-free reads. [`EnumValues::internal_map`] is built on first use and
/// cached in a compute-once cell that tolerates racing initializers: concurrent first callers
/// may each build a copy, exactly one copy is published, and the others are dropped. Every
/// copy has the same content, so callers can not observe the difference.
///
/// # Examples
///
/// ```rust
/// use enumvalues::{EnumFeatures, EnumValues, MapperConfig};
/// use enumvalues::typesystem::EnumTypeBuilder;
///
/// let color = EnumTypeBuilder::new("demo", "Color")
///     .constant("RED")
///     .constant("GREEN")
///     .constant("BLUE")
///     .build();
/// let config = MapperConfig::builder()
///     .enable(EnumFeatures::WRITE_ENUMS_TO_LOWERCASE)
///     .build();
///
/// let table = EnumValues::construct(&config, &color)?;
/// let green = &table.enums()[1];
/// assert_eq!(table.serialized_value_for(green), "green");
/// assert_eq!(table.values()[2], "blue");
/// # Ok::<(), enumvalues::Error>(())
/// ```
pub struct EnumValues {
    enum_type: TypeDescriptor,
    values: EnumConstantList,
    textual: Box<[SerializedString]>,
    as_map: OnceBox<EnumValueMap>,
}

impl EnumValues {
    /// Build the table with the policy selected by
    /// [`crate::EnumFeatures::WRITE_ENUMS_USING_TO_STRING`]: string forms when enabled,
    /// declared names otherwise.
    ///
    /// The choice is made once; a table does not follow later configuration changes.
    ///
    /// # Errors
    /// See [`NamingResolver::resolve`]
    pub fn construct(config: &MapperConfig, enum_type: &TypeDescriptor) -> Result<Self> {
        EnumValues::resolve_with(config, enum_type, NamingPolicy::for_config(config))
    }

    /// Build the table from declared names, honoring overrides and the lowercase feature
    ///
    /// # Errors
    /// See [`NamingResolver::resolve`]
    pub fn from_declared_names(config: &MapperConfig, enum_type: &TypeDescriptor) -> Result<Self> {
        EnumValues::resolve_with(config, enum_type, NamingPolicy::DeclaredName)
    }

    /// Build the table from string-conversion forms, honoring overrides and the lowercase
    /// feature
    ///
    /// # Errors
    /// See [`NamingResolver::resolve`]
    pub fn from_string_forms(config: &MapperConfig, enum_type: &TypeDescriptor) -> Result<Self> {
        EnumValues::resolve_with(config, enum_type, NamingPolicy::StringForm)
    }

    /// Build the table by applying `strategy` to the declared name of every constant
    ///
    /// # Errors
    /// See [`NamingResolver::resolve`]; strategy errors are returned unchanged
    pub fn from_naming_strategy(
        config: &MapperConfig,
        enum_type: &TypeDescriptor,
        strategy: &dyn EnumNamingStrategy,
    ) -> Result<Self> {
        EnumValues::resolve_with(config, enum_type, NamingPolicy::ExternalStrategy(strategy))
    }

    /// Build the table from one external name per constant, in ordinal order
    ///
    /// ## Arguments
    /// * `config`    - Supplies the token compiler
    /// * `enum_type` - The enumerated type
    /// * `names`     - External names, `names[i]` belongs to the constant with ordinal `i`
    ///
    /// # Errors
    /// Returns [`crate::Error::ContractViolation`] if `names` does not have exactly one entry
    /// per constant
    pub fn from_external_names<S: AsRef<str>>(
        config: &MapperConfig,
        enum_type: &TypeDescriptor,
        names: &[S],
    ) -> Result<Self> {
        let names: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();
        EnumValues::resolve_with(config, enum_type, NamingPolicy::ExplicitList(&names))
    }

    /// Build the table directly from precompiled tokens, bypassing name resolution
    ///
    /// # Errors
    /// - [`crate::Error::Configuration`] if `enum_type` is not an enum or has no constants
    /// - [`crate::Error::ContractViolation`] if `tokens` does not have exactly one entry per
    ///   constant
    pub fn from_tokens(enum_type: &TypeDescriptor, tokens: Vec<SerializedString>) -> Result<Self> {
        let values = enum_type.enum_constants()?;
        check_len("tokens", values.len(), tokens.len())?;

        Ok(EnumValues {
            enum_type: enum_type.clone(),
            values,
            textual: tokens.into_boxed_slice(),
            as_map: OnceBox::new(),
        })
    }

    fn resolve_with(
        config: &MapperConfig,
        enum_type: &TypeDescriptor,
        policy: NamingPolicy<'_>,
    ) -> Result<Self> {
        let resolved = NamingResolver::new(config).resolve(enum_type, policy)?;
        let textual = resolved
            .names
            .iter()
            .map(|name| config.compile_string(name))
            .collect::<Box<[_]>>();

        Ok(EnumValues {
            enum_type: enum_type.clone(),
            values: resolved.constants,
            textual,
            as_map: OnceBox::new(),
        })
    }

    /// The token of `constant`.
    ///
    /// # Panics
    /// `constant` must belong to this table's type. An ordinal out of range panics, and debug
    /// builds also assert that the constant's owner matches the table's type.
    #[must_use]
    pub fn serialized_value_for(&self, constant: &EnumConstant) -> &SerializedString {
        debug_assert_eq!(constant.owner(), self.enum_type.fullname());
        &self.textual[constant.ordinal()]
    }

    /// The token at `ordinal`, or `None` if the type has no such constant
    #[must_use]
    pub fn serialized_value_at(&self, ordinal: usize) -> Option<&SerializedString> {
        self.textual.get(ordinal)
    }

    /// All tokens in ordinal order
    #[must_use]
    pub fn values(&self) -> &[SerializedString] {
        &self.textual
    }

    /// All constants in ordinal order
    #[must_use]
    pub fn enums(&self) -> &[EnumConstant] {
        &self.values
    }

    /// Mapping from each constant to its token, in ordinal order; built on first use
    pub fn internal_map(&self) -> &EnumValueMap {
        self.as_map.get_or_init(|| {
            Box::new(
                self.values
                    .iter()
                    .cloned()
                    .zip(self.textual.iter().cloned())
                    .collect(),
            )
        })
    }

    /// The enumerated type this table describes
    #[must_use]
    pub fn enum_type(&self) -> &TypeDescriptor {
        &self.enum_type
    }

    /// Number of constants (and tokens)
    #[must_use]
    pub fn len(&self) -> usize {
        self.textual.len()
    }

    /// Always false; tables of types without constants can not be built
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textual.is_empty()
    }

    /// Iterate over `(constant, token)` pairs in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = (&EnumConstant, &SerializedString)> {
        self.values.iter().zip(self.textual.iter())
    }

    /// Returns true if two constants share the same token.
    ///
    /// Construction does not reject such tables; a consumer that decodes tokens back to
    /// constants can use this to detect the ambiguity.
    #[must_use]
    pub fn has_duplicate_values(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.textual.len());
        !self.textual.iter().all(|token| seen.insert(token.value()))
    }
}

impl Clone for EnumValues {
    fn clone(&self) -> Self {
        EnumValues {
            enum_type: self.enum_type.clone(),
            values: self.values.clone(),
            textual: self.textual.clone(),
            as_map: OnceBox::new(),
        }
    }
}

impl fmt::Debug for EnumValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumValues")
            .field("enum_type", &self.enum_type)
            .field("values", &self.textual)
            .finish()
    }
}
