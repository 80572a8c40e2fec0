use serde::{Deserialize, Serialize};

use crate::types::{UnitAttributes, UnitName};

/// Metadata describing a configuration unit contributed to a registry.
///
/// The descriptor is the portion of a unit exposed to import selectors: its
/// stable name and the attributes declared alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDescriptor {
    /// Stable identifier used to reference the unit in import declarations.
    pub name: UnitName,
    /// Declarative metadata inspected by selector-driven imports.
    pub attributes: UnitAttributes,
}

impl UnitDescriptor {
    /// Create a descriptor for the named unit without any attributes.
    #[must_use]
    pub fn new(name: impl Into<UnitName>) -> Self {
        Self {
            name: name.into(),
            attributes: UnitAttributes::new(),
        }
    }
}
