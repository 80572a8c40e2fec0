use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::api::{BeanValue, UnitName};

/// A bean merged into a context, together with the unit that declared it.
#[derive(Clone)]
pub(super) struct ResolvedBean {
    pub(super) value: BeanValue,
    pub(super) source: UnitName,
}

/// Final name→value mapping produced by one resolution pass.
///
/// A context is immutable once returned: lookups by name, by name plus
/// expected type, and enumeration in merge order are the whole surface.
pub struct ResolvedContext {
    beans: IndexMap<String, ResolvedBean>,
}

impl ResolvedContext {
    pub(super) fn new(beans: IndexMap<String, ResolvedBean>) -> Self {
        Self { beans }
    }

    /// Lookup the bean registered under the provided name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BeanValue> {
        self.beans.get(name).map(|bean| &bean.value)
    }

    /// Lookup a bean and downcast it to the expected type.
    ///
    /// Returns `None` both for unknown names and for beans of a different
    /// type.
    #[must_use]
    pub fn get_as<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        self.beans
            .get(name)
            .and_then(|bean| Arc::clone(&bean.value).downcast::<T>().ok())
    }

    /// The unit whose declaration produced the named bean.
    #[must_use]
    pub fn source_of(&self, name: &str) -> Option<&UnitName> {
        self.beans.get(name).map(|bean| &bean.source)
    }

    /// Iterate over bean names in merge order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.beans.keys().map(String::as_str)
    }

    /// Returns `true` if a bean has been merged under the provided name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.beans.contains_key(name)
    }

    /// Return the number of merged beans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.beans.len()
    }

    /// Returns `true` when the context holds no beans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }
}

impl fmt::Debug for ResolvedContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedContext")
            .field("beans", &self.beans.keys().collect::<Vec<_>>())
            .finish()
    }
}
