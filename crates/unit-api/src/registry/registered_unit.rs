use std::sync::Arc;

use crate::descriptors::UnitDescriptor;
use crate::types::UnitName;
use crate::unit::ConfigUnit;

/// Shared handle to a configuration unit stored by the registry.
#[derive(Debug, Clone)]
pub struct RegisteredUnit {
    unit: Arc<ConfigUnit>,
}

impl RegisteredUnit {
    #[must_use]
    pub fn new(unit: Arc<ConfigUnit>) -> Self {
        Self { unit }
    }

    #[must_use]
    pub fn name(&self) -> &UnitName {
        self.unit.name()
    }

    #[must_use]
    pub fn descriptor(&self) -> &UnitDescriptor {
        self.unit.descriptor()
    }

    #[must_use]
    pub fn unit(&self) -> Arc<ConfigUnit> {
        Arc::clone(&self.unit)
    }
}
