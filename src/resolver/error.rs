use thiserror::Error;

use crate::api::UnitName;

/// Errors that can occur while resolving a configuration unit graph.
///
/// Resolution is deterministic, so every failure is fail-fast and final: the
/// partial context is discarded and a retry would fail identically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// A referenced unit name has no registered definition.
    #[error("configuration unit '{name}' has no registered definition")]
    UnresolvedUnit {
        name: UnitName,
        /// The unit whose import referenced the missing name, when the
        /// reference did not come from the resolution root itself.
        requested_by: Option<UnitName>,
    },

    /// Resolution revisited a unit already on the current resolution path.
    #[error("cyclic import: {}", render_path(.path))]
    CyclicImport {
        /// The offending path, starting and ending at the revisited unit.
        path: Vec<UnitName>,
    },

    /// Two units declared the same bean name under the reject merge policy.
    #[error("bean '{bean}' from unit '{unit}' is already declared by unit '{previous_unit}'")]
    DuplicateBean {
        bean: String,
        unit: UnitName,
        previous_unit: UnitName,
    },
}

fn render_path(path: &[UnitName]) -> String {
    path.iter()
        .map(UnitName::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_import_renders_the_full_path() {
        let error = ResolveError::CyclicImport {
            path: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(error.to_string(), "cyclic import: a -> b -> a");
    }

    #[test]
    fn unresolved_unit_names_the_missing_unit() {
        let error = ResolveError::UnresolvedUnit {
            name: "x".into(),
            requested_by: Some("a".into()),
        };
        assert_eq!(
            error.to_string(),
            "configuration unit 'x' has no registered definition"
        );
    }
}
