//! Core crate exports for composing configuration units with `confit`.
//!
//! The root module primarily re-exports types from the api crate and the
//! resolver so that embedders can assemble a resolved context without
//! digging through the module hierarchy.

pub mod resolver;
/// Built-in import selectors covering common selection rules.
pub mod selectors;

pub use confit_unit_api as api;

pub use api::{
    BeanDeclaration, BeanFactory, BeanValue, ConfigUnit, ImportDeclaration, ImportSelector,
    RegisteredUnit, RegistryError, SelectionContext, UnitAttributes, UnitDescriptor, UnitName,
    UnitRegistry,
};
pub use resolver::{MergePolicy, ResolveError, ResolveOptions, ResolvedContext, Resolver};
pub use selectors::AttributeSelector;
