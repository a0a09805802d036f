use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use strum::IntoEnumIterator;

use crate::{typesystem::EnumTypeBuilder, Result};

/// Shared, ordinal-ordered list of the constants of one enumerated type
pub type EnumConstantList = Arc<[EnumConstant]>;

/// Classification of a type, and for enumerated types the constants they declare.
///
/// Two `Enum` flavors are equal only if every constant has the same declared name, string
/// form and rename at the same ordinal.
#[derive(Clone, Debug)]
pub enum TypeFlavor {
    /// An enumerated type with its constants in declaration (ordinal) order
    Enum(EnumConstantList),
    /// A regular class or struct
    Class,
    /// An interface or trait
    Interface,
    /// A built-in primitive
    Primitive,
}

impl TypeFlavor {
    /// Short lowercase label used in error messages
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TypeFlavor::Enum(_) => "enum",
            TypeFlavor::Class => "class",
            TypeFlavor::Interface => "interface",
            TypeFlavor::Primitive => "primitive",
        }
    }
}

impl PartialEq for TypeFlavor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeFlavor::Enum(lhs), TypeFlavor::Enum(rhs)) => {
                Arc::ptr_eq(lhs, rhs)
                    || (lhs.len() == rhs.len()
                        && lhs.iter().zip(rhs.iter()).all(|(l, r)| l.same_declaration(r)))
            }
            (TypeFlavor::Class, TypeFlavor::Class)
            | (TypeFlavor::Interface, TypeFlavor::Interface)
            | (TypeFlavor::Primitive, TypeFlavor::Primitive) => true,
            _ => false,
        }
    }
}

impl Eq for TypeFlavor {}

impl Hash for TypeFlavor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label().hash(state);
        if let TypeFlavor::Enum(constants) = self {
            for constant in constants.iter() {
                constant.name.hash(state);
                constant.string_form.hash(state);
                constant.rename.hash(state);
            }
        }
    }
}

struct TypeInner {
    namespace: String,
    name: String,
    fullname: String,
    flavor: TypeFlavor,
}

/// Identifies a type for which external enum names are resolved.
///
/// The descriptor is immutable and cheap to clone. It is used as a lookup key (see
/// [`crate::EnumValuesCache`]) and in error messages; equality and hashing consider the full
/// name and the flavor.
#[derive(Clone)]
pub struct TypeDescriptor {
    inner: Arc<TypeInner>,
}

impl TypeDescriptor {
    /// Create a descriptor from its parts
    ///
    /// ## Arguments
    /// * `namespace` - The namespace of the type, may be empty
    /// * `name`      - The simple name of the type
    /// * `flavor`    - What kind of type this is
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, flavor: TypeFlavor) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        let fullname = if namespace.is_empty() {
            name.clone()
        } else {
            format!("{namespace}.{name}")
        };

        TypeDescriptor {
            inner: Arc::new(TypeInner {
                namespace,
                name,
                fullname,
                flavor,
            }),
        }
    }

    /// Descriptor of a non-enumerated class type
    pub fn class(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDescriptor::new(namespace, name, TypeFlavor::Class)
    }

    /// Build the descriptor of a Rust enum through its `strum` derives.
    ///
    /// The declared name of each constant is the variant name as printed by `Debug`, the
    /// string form comes from `Display`, and the ordinal from `EnumIter` order. Only fieldless
    /// enums produce meaningful declared names. The namespace is the module path of
    /// the type as reported by [`std::any::type_name`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumvalues::TypeDescriptor;
    ///
    /// #[allow(non_camel_case_types)]
    /// #[derive(Clone, Copy, Debug, strum::EnumIter, strum::Display)]
    /// enum Suit {
    ///     #[strum(to_string = "Hearts")]
    ///     HEARTS,
    ///     #[strum(to_string = "Spades")]
    ///     SPADES,
    /// }
    ///
    /// let suit = TypeDescriptor::of_enum::<Suit>();
    /// assert_eq!(suit.name(), "Suit");
    /// let constants = suit.enum_constants()?;
    /// assert_eq!(constants[0].name(), "HEARTS");
    /// assert_eq!(constants[0].string_form(), "Hearts");
    /// # Ok::<(), enumvalues::Error>(())
    /// ```
    #[must_use]
    pub fn of_enum<E>() -> Self
    where
        E: IntoEnumIterator + fmt::Debug + fmt::Display,
    {
        let (namespace, name) = split_type_path(std::any::type_name::<E>());

        E::iter()
            .fold(EnumTypeBuilder::new(namespace, name), |builder, value| {
                builder.constant_with_string_form(format!("{value:?}"), value.to_string())
            })
            .build()
    }

    /// The namespace of this type, may be empty
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.inner.namespace
    }

    /// The simple name of this type
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The namespace-qualified name of this type
    #[must_use]
    pub fn fullname(&self) -> &str {
        &self.inner.fullname
    }

    /// The flavor of this type
    #[must_use]
    pub fn flavor(&self) -> &TypeFlavor {
        &self.inner.flavor
    }

    /// Returns true if this descriptor describes an enumerated type
    #[must_use]
    pub fn is_enum(&self) -> bool {
        matches!(self.inner.flavor, TypeFlavor::Enum(_))
    }

    /// Returns the constants of this enumerated type, in ordinal order.
    ///
    /// # Errors
    /// Returns [`crate::Error::Configuration`] if the type is not an enum, or if it declares
    /// no constants.
    pub fn enum_constants(&self) -> Result<EnumConstantList> {
        match &self.inner.flavor {
            TypeFlavor::Enum(constants) if !constants.is_empty() => Ok(constants.clone()),
            TypeFlavor::Enum(_) => Err(configuration_error!(
                "No enum constants for type {}",
                self.fullname()
            )),
            other => Err(configuration_error!(
                "Type {} is a {}, not an enum; cannot determine enum constants",
                self.fullname(),
                other.label()
            )),
        }
    }
}

/// Split a Rust type path into a dotted namespace and the simple name. Generic arguments stay
/// part of the name: `app::Wrap<alloc::string::String>` is `app` + `Wrap<alloc::string::String>`.
fn split_type_path(path: &str) -> (String, &str) {
    let base = path.find('<').map_or(path, |generics| &path[..generics]);
    match base.rfind("::") {
        Some(split) => (path[..split].replace("::", "."), &path[split + 2..]),
        None => (String::new(), path),
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.fullname == other.inner.fullname
                && self.inner.flavor == other.inner.flavor)
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.fullname.hash(state);
        self.inner.flavor.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("fullname", &self.inner.fullname)
            .field("flavor", &self.inner.flavor.label())
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.fullname)
    }
}

/// A single constant of an enumerated type.
///
/// Two constants are equal when they belong to the same type (by full name) and share the
/// same ordinal. The declared name, string form and rename are descriptive data carried along
/// for the naming resolver.
#[derive(Clone, Debug)]
pub struct EnumConstant {
    owner: Arc<str>,
    ordinal: usize,
    name: Arc<str>,
    string_form: Arc<str>,
    rename: Option<Arc<str>>,
}

impl EnumConstant {
    pub(crate) fn new(
        owner: Arc<str>,
        ordinal: usize,
        name: Arc<str>,
        string_form: Arc<str>,
        rename: Option<Arc<str>>,
    ) -> Self {
        EnumConstant {
            owner,
            ordinal,
            name,
            string_form,
            rename,
        }
    }

    /// Position of this constant within its type's declaration order
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The intrinsic declared name of this constant
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The string-conversion form, which may differ from the declared name
    #[must_use]
    pub fn string_form(&self) -> &str {
        &self.string_form
    }

    /// External name declared on the constant itself, if any
    #[must_use]
    pub fn rename(&self) -> Option<&str> {
        self.rename.as_deref()
    }

    /// Full name of the enumerated type this constant belongs to
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Same identity and the same names, string form included
    fn same_declaration(&self, other: &EnumConstant) -> bool {
        self == other
            && self.name == other.name
            && self.string_form == other.string_form
            && self.rename == other.rename
    }
}

impl PartialEq for EnumConstant {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal && self.owner == other.owner
    }
}

impl Eq for EnumConstant {}

impl Hash for EnumConstant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.ordinal.hash(state);
    }
}

impl fmt::Display for EnumConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
