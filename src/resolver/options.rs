use serde::{Deserialize, Serialize};

/// Conflict handling for bean names merged from multiple units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// A later-resolved declaration silently replaces an earlier one.
    #[default]
    LastWins,
    /// A colliding declaration aborts resolution with
    /// [`ResolveError::DuplicateBean`](super::ResolveError::DuplicateBean).
    Reject,
}

/// Configuration options for one resolution pass.
///
/// `confit` reads no files and no environment; embedders that want these
/// options user-tunable can deserialize them as part of their own
/// configuration surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// How bean name collisions between merged units are handled.
    pub merge_policy: MergePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_last_wins() {
        assert_eq!(ResolveOptions::default().merge_policy, MergePolicy::LastWins);
    }

    #[test]
    fn options_round_trip_through_serde() {
        let options = ResolveOptions {
            merge_policy: MergePolicy::Reject,
        };
        let encoded = serde_json::to_string(&options).expect("options encoded");
        assert_eq!(encoded, r#"{"merge_policy":"reject"}"#);
        let decoded: ResolveOptions = serde_json::from_str(&encoded).expect("options decoded");
        assert_eq!(decoded, options);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let decoded: ResolveOptions = serde_json::from_str("{}").expect("options decoded");
        assert_eq!(decoded, ResolveOptions::default());
    }
}
