use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::descriptors::UnitDescriptor;
use crate::selector::ImportSelector;
use crate::types::UnitName;

/// Value produced by a bean factory.
///
/// Contexts hold heterogeneous values, so beans are erased to `Any` and
/// recovered with a typed lookup on the resolved context.
pub type BeanValue = Arc<dyn Any + Send + Sync>;

/// No-argument factory invoked once per resolution to produce a bean value.
pub type BeanFactory = Arc<dyn Fn() -> BeanValue + Send + Sync>;

/// A named value declaration carried by a configuration unit.
#[derive(Clone)]
pub struct BeanDeclaration {
    name: String,
    factory: BeanFactory,
}

impl BeanDeclaration {
    /// Declare a bean produced by the provided factory.
    #[must_use]
    pub fn new<T, F>(name: impl Into<String>, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(move || Arc::new(factory()) as BeanValue),
        }
    }

    /// Name the produced value is registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the factory and produce the bean value.
    #[must_use]
    pub fn produce(&self) -> BeanValue {
        (self.factory)()
    }
}

impl fmt::Debug for BeanDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanDeclaration")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Instruction for which other units an importing unit merges in.
#[derive(Clone)]
pub enum ImportDeclaration {
    /// Fixed list of unit names, merged in declaration order.
    Static(Vec<UnitName>),
    /// Selector invoked at resolution time with the importer's metadata.
    Selector(Arc<dyn ImportSelector>),
}

impl fmt::Debug for ImportDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(names) => f.debug_tuple("Static").field(names).finish(),
            Self::Selector(_) => f.write_str("Selector(..)"),
        }
    }
}

/// A named group of bean declarations plus at most one import rule.
///
/// Units are assembled with chainable declaration calls and handed to a
/// [`UnitRegistry`](crate::UnitRegistry); once registered they are never
/// mutated. A unit carries at most one import rule — declaring a second one
/// replaces the first.
#[derive(Debug)]
pub struct ConfigUnit {
    descriptor: UnitDescriptor,
    beans: Vec<BeanDeclaration>,
    import: Option<ImportDeclaration>,
}

impl ConfigUnit {
    /// Start declaring a unit with the provided name.
    #[must_use]
    pub fn new(name: impl Into<UnitName>) -> Self {
        Self {
            descriptor: UnitDescriptor::new(name),
            beans: Vec::new(),
            import: None,
        }
    }

    /// Attach a declarative attribute visible to import selectors.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.descriptor.attributes.insert(key, value);
        self
    }

    /// Declare a bean produced by the provided factory.
    #[must_use]
    pub fn bean<T, F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.beans.push(BeanDeclaration::new(name, factory));
        self
    }

    /// Declare a static import of the named units, merged in the given order.
    #[must_use]
    pub fn imports<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<UnitName>,
    {
        self.import = Some(ImportDeclaration::Static(
            names.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Declare a selector-driven import evaluated against this unit's metadata.
    #[must_use]
    pub fn selector<S>(mut self, selector: S) -> Self
    where
        S: ImportSelector + 'static,
    {
        self.import = Some(ImportDeclaration::Selector(Arc::new(selector)));
        self
    }

    /// Name the unit registers under.
    #[must_use]
    pub fn name(&self) -> &UnitName {
        &self.descriptor.name
    }

    /// Metadata exposed to import selectors.
    #[must_use]
    pub fn descriptor(&self) -> &UnitDescriptor {
        &self.descriptor
    }

    /// Bean declarations in declaration order.
    #[must_use]
    pub fn beans(&self) -> &[BeanDeclaration] {
        &self.beans
    }

    /// The unit's import rule, if one was declared.
    #[must_use]
    pub fn import(&self) -> Option<&ImportDeclaration> {
        self.import.as_ref()
    }
}
