use std::sync::Arc;

use crate::typesystem::{EnumConstant, TypeDescriptor, TypeFlavor};

struct PendingConstant {
    name: Arc<str>,
    string_form: Option<Arc<str>>,
    rename: Option<Arc<str>>,
}

/// Builder for the descriptor of an enumerated type.
///
/// Constants receive their ordinal in the order they are added. A constant without an
/// explicit string form uses its declared name as string form.
///
/// # Examples
///
/// ```rust
/// use enumvalues::typesystem::EnumTypeBuilder;
///
/// let status = EnumTypeBuilder::new("http", "Status")
///     .constant("OK")
///     .renamed_constant("NOT_FOUND", "not-found")
///     .build();
///
/// assert_eq!(status.fullname(), "http.Status");
/// assert_eq!(status.enum_constants()?[1].ordinal(), 1);
/// # Ok::<(), enumvalues::Error>(())
/// ```
pub struct EnumTypeBuilder {
    namespace: String,
    name: String,
    constants: Vec<PendingConstant>,
}

impl EnumTypeBuilder {
    /// Start a new enumerated type
    ///
    /// ## Arguments
    /// * `namespace` - The namespace of the type, may be empty
    /// * `name`      - The simple name of the type
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        EnumTypeBuilder {
            namespace: namespace.into(),
            name: name.into(),
            constants: Vec::new(),
        }
    }

    /// Append a constant whose string form equals its declared name
    #[must_use]
    pub fn constant(mut self, name: impl AsRef<str>) -> Self {
        self.constants.push(PendingConstant {
            name: Arc::from(name.as_ref()),
            string_form: None,
            rename: None,
        });
        self
    }

    /// Append a constant with a custom string-conversion form
    #[must_use]
    pub fn constant_with_string_form(
        mut self,
        name: impl AsRef<str>,
        string_form: impl AsRef<str>,
    ) -> Self {
        self.constants.push(PendingConstant {
            name: Arc::from(name.as_ref()),
            string_form: Some(Arc::from(string_form.as_ref())),
            rename: None,
        });
        self
    }

    /// Append a constant carrying a declared external name.
    ///
    /// The rename is picked up by [`crate::naming::DeclaredOverrides`], the default
    /// override provider of [`crate::MapperConfig`].
    #[must_use]
    pub fn renamed_constant(mut self, name: impl AsRef<str>, rename: impl AsRef<str>) -> Self {
        self.constants.push(PendingConstant {
            name: Arc::from(name.as_ref()),
            string_form: None,
            rename: Some(Arc::from(rename.as_ref())),
        });
        self
    }

    /// Finish the type; the resulting descriptor is immutable
    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        let owner: Arc<str> = if self.namespace.is_empty() {
            Arc::from(self.name.as_str())
        } else {
            Arc::from(format!("{}.{}", self.namespace, self.name))
        };

        let constants = self
            .constants
            .into_iter()
            .enumerate()
            .map(|(ordinal, pending)| {
                let string_form = pending
                    .string_form
                    .unwrap_or_else(|| pending.name.clone());
                EnumConstant::new(
                    owner.clone(),
                    ordinal,
                    pending.name,
                    string_form,
                    pending.rename,
                )
            })
            .collect::<Vec<_>>();

        TypeDescriptor::new(self.namespace, self.name, TypeFlavor::Enum(constants.into()))
    }
}
