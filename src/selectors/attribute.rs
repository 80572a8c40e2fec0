use indexmap::IndexMap;

use crate::api::{ImportSelector, SelectionContext, UnitName};

/// Selector keyed on a single string attribute of the importing unit.
///
/// Each arm associates an attribute value with the units to import when the
/// importer declares that value. The fallback list applies when the attribute
/// is absent, is not a string, or matches no arm.
#[derive(Debug, Clone, Default)]
pub struct AttributeSelector {
    key: String,
    arms: IndexMap<String, Vec<UnitName>>,
    fallback: Vec<UnitName>,
}

impl AttributeSelector {
    /// Create a selector inspecting the provided attribute key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            arms: IndexMap::new(),
            fallback: Vec::new(),
        }
    }

    /// Import the named units when the attribute equals `value`.
    #[must_use]
    pub fn when<I, N>(mut self, value: impl Into<String>, units: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<UnitName>,
    {
        self.arms
            .insert(value.into(), units.into_iter().map(Into::into).collect());
        self
    }

    /// Import the named units when no arm matches.
    #[must_use]
    pub fn otherwise<I, N>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<UnitName>,
    {
        self.fallback = units.into_iter().map(Into::into).collect();
        self
    }
}

impl ImportSelector for AttributeSelector {
    fn select(&self, context: SelectionContext<'_>) -> Vec<UnitName> {
        context
            .attributes()
            .get_str(&self.key)
            .and_then(|value| self.arms.get(value))
            .unwrap_or(&self.fallback)
            .clone()
    }
}
