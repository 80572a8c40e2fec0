use thiserror::Error;

use crate::types::UnitName;

/// Errors that can occur when mutating the [`UnitRegistry`](crate::UnitRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A unit attempted to register a name that already exists in the registry.
    #[error("configuration unit '{name}' is already registered")]
    DuplicateUnit { name: UnitName },
}
