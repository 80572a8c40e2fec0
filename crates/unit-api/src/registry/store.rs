use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::types::UnitName;
use crate::unit::ConfigUnit;

use super::RegisteredUnit;

/// Registry of all configuration units available to a resolution pass.
///
/// Units are kept in registration order. Registration happens single-threaded
/// at bootstrap; resolution only reads the registry.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: IndexMap<UnitName, RegisteredUnit>,
}

impl UnitRegistry {
    /// Create an empty registry without any units registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            units: IndexMap::new(),
        }
    }

    /// Register a unit under its declared name.
    ///
    /// Registration is declarative, so a name collision is rejected rather
    /// than silently replacing the earlier unit.
    pub fn register(&mut self, unit: ConfigUnit) -> Result<(), RegistryError> {
        let name = unit.name().clone();
        if self.units.contains_key(&name) {
            return Err(RegistryError::DuplicateUnit { name });
        }
        self.units.insert(name, RegisteredUnit::new(Arc::new(unit)));
        Ok(())
    }

    /// Lookup the unit registered under the provided name.
    #[must_use]
    pub fn unit(&self, name: &UnitName) -> Option<&RegisteredUnit> {
        self.units.get(name)
    }

    /// Lookup a unit by its raw identifier.
    #[must_use]
    pub fn unit_by_id(&self, id: &str) -> Option<&RegisteredUnit> {
        self.units.get(id)
    }

    /// Iterate over registered units in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredUnit> {
        self.units.values()
    }

    /// Iterate over registered unit names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &UnitName> {
        self.units.keys()
    }

    /// Remove the unit registered under the provided name.
    pub fn deregister(&mut self, name: &UnitName) -> Option<RegisteredUnit> {
        self.units.shift_remove(name)
    }

    /// Return the number of registered units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` when no units have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns `true` if a unit has been registered under the provided name.
    #[must_use]
    pub fn contains(&self, name: &UnitName) -> bool {
        self.units.contains_key(name)
    }
}
