use crate::descriptors::UnitDescriptor;
use crate::types::{UnitAttributes, UnitName};

/// Shared inputs provided to selectors when they are asked to choose imports.
///
/// Wrapping the importer metadata in a context struct makes it easier to
/// extend the available data in the future without forcing every selector
/// implementation to adjust its method signature.
#[derive(Clone, Copy)]
pub struct SelectionContext<'a> {
    importer: &'a UnitDescriptor,
}

impl<'a> SelectionContext<'a> {
    /// Create a new selection context for the importing unit.
    #[must_use]
    pub fn new(importer: &'a UnitDescriptor) -> Self {
        Self { importer }
    }

    /// Descriptor of the unit whose import rule is being evaluated.
    #[must_use]
    pub fn importer(&self) -> &'a UnitDescriptor {
        self.importer
    }

    /// Attributes declared on the importing unit.
    #[must_use]
    pub fn attributes(&self) -> &'a UnitAttributes {
        &self.importer.attributes
    }
}

/// Chooses which configuration units an importing unit merges in.
///
/// Implementations must be pure: the same context yields the same names, with
/// no side effects. The resolver invokes a selector exactly once per
/// resolution pass; a selector that violates the purity contract is a caller
/// error and is not detected here.
pub trait ImportSelector: Send + Sync {
    /// Return the ordered unit names to merge into the importing unit.
    fn select(&self, context: SelectionContext<'_>) -> Vec<UnitName>;
}

impl<F> ImportSelector for F
where
    F: Fn(SelectionContext<'_>) -> Vec<UnitName> + Send + Sync,
{
    fn select(&self, context: SelectionContext<'_>) -> Vec<UnitName> {
        self(context)
    }
}
