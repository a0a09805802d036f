use serde::{Deserialize, Serialize};

use crate::{config::MapperConfig, typesystem::TypeDescriptor, values::EnumValues, Result};

/// Serializable snapshot of an [`EnumValues`] table: the type name and the raw token texts in
/// ordinal order.
///
/// The snapshot is not a wire format of its own; it exists so an already resolved naming can
/// be persisted through any `serde` format and restored against the same type later.
///
/// ```rust
/// use enumvalues::{EnumValues, EnumValuesSnapshot, MapperConfig};
/// use enumvalues::typesystem::EnumTypeBuilder;
///
/// let color = EnumTypeBuilder::new("demo", "Color").constant("RED").constant("GREEN").build();
/// let config = MapperConfig::default();
///
/// let snapshot = EnumValues::construct(&config, &color)?.snapshot();
/// let json = serde_json::to_string(&snapshot).unwrap();
/// assert_eq!(json, r#"{"enum_type":"demo.Color","values":["RED","GREEN"]}"#);
///
/// let restored: EnumValuesSnapshot = serde_json::from_str(&json).unwrap();
/// let table = EnumValues::from_snapshot(&config, &color, &restored)?;
/// assert_eq!(table.values()[1], "GREEN");
/// # Ok::<(), enumvalues::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValuesSnapshot {
    /// Full name of the enumerated type
    pub enum_type: String,
    /// Raw token texts, in ordinal order
    pub values: Vec<String>,
}

impl EnumValues {
    /// Capture the type name and tokens of this table
    #[must_use]
    pub fn snapshot(&self) -> EnumValuesSnapshot {
        EnumValuesSnapshot {
            enum_type: self.enum_type().fullname().to_string(),
            values: self
                .values()
                .iter()
                .map(|token| token.value().to_string())
                .collect(),
        }
    }

    /// Rebuild a table from a snapshot, compiling the tokens with `config`
    ///
    /// # Errors
    /// - [`crate::Error::Configuration`] if the snapshot was taken from a different type, or
    ///   `enum_type` is not a usable enum
    /// - [`crate::Error::ContractViolation`] if the number of values does not match the
    ///   constants of `enum_type`
    pub fn from_snapshot(
        config: &MapperConfig,
        enum_type: &TypeDescriptor,
        snapshot: &EnumValuesSnapshot,
    ) -> Result<Self> {
        if snapshot.enum_type != enum_type.fullname() {
            return Err(configuration_error!(
                "Snapshot of {} can not be restored as {}",
                snapshot.enum_type,
                enum_type.fullname()
            ));
        }

        EnumValues::from_external_names(config, enum_type, snapshot.values.as_slice())
    }
}
