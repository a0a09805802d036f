use std::sync::Arc;

use dashmap::DashMap;
use rayon::prelude::*;
use tracing::debug;

use crate::{
    config::{EnumFeatures, MapperConfig},
    typesystem::TypeDescriptor,
    values::EnumValues,
    Result,
};

/// Concurrent cache of [`EnumValues`] tables, keyed by type and feature flags.
///
/// A cache belongs to one mapping context: the override provider and token compiler of the
/// configuration are not part of the key, so all configurations used with one cache must share
/// them. Configurations that only differ in their [`EnumFeatures`] (see
/// [`MapperConfig::with_features`]) get separate entries.
///
/// Two threads missing on the same key at once may both construct a table; one of them is
/// kept and both callers receive the kept table.
#[derive(Default)]
pub struct EnumValuesCache {
    tables: DashMap<(TypeDescriptor, EnumFeatures), Arc<EnumValues>>,
}

impl EnumValuesCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        EnumValuesCache {
            tables: DashMap::new(),
        }
    }

    /// Return the cached table of `enum_type`, constructing it with
    /// [`EnumValues::construct`] on a miss
    ///
    /// # Errors
    /// Construction errors are returned unchanged; failed constructions are not cached
    pub fn get_or_construct(
        &self,
        config: &MapperConfig,
        enum_type: &TypeDescriptor,
    ) -> Result<Arc<EnumValues>> {
        let key = (enum_type.clone(), config.features());
        if let Some(hit) = self.tables.get(&key) {
            return Ok(hit.value().clone());
        }

        let table = Arc::new(EnumValues::construct(config, enum_type)?);
        debug!(
            enum_type = %enum_type,
            features = config.features().bits(),
            constants = table.len(),
            "cached new enum value table"
        );

        Ok(self.tables.entry(key).or_insert(table).value().clone())
    }

    /// Construct and cache the tables of all `types` in parallel
    ///
    /// # Errors
    /// Returns one of the construction errors if any type fails; tables built before the
    /// failure stay cached
    pub fn prefetch(&self, config: &MapperConfig, types: &[TypeDescriptor]) -> Result<()> {
        types
            .par_iter()
            .try_for_each(|enum_type| self.get_or_construct(config, enum_type).map(|_| ()))
    }

    /// Number of cached tables
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no table is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drop all cached tables; tables handed out earlier stay valid
    pub fn clear(&self) {
        self.tables.clear();
    }
}
