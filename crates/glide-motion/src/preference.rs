//! Reduced-motion preference signal.
//!
//! The animator reads this once at the start of each cycle through an
//! injected source rather than a hidden global, so tests and hosts can
//! substitute their own signal.

use serde::{Deserialize, Serialize};

/// The user's motion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    /// No stated preference; animate normally.
    NoPreference,
    /// The user wants minimal or no animation.
    Reduce,
}

impl Default for MotionPreference {
    fn default() -> Self {
        Self::NoPreference
    }
}

impl MotionPreference {
    pub fn is_reduce(&self) -> bool {
        *self == Self::Reduce
    }
}

/// Read-only source of the motion preference.
pub trait MotionPreferenceSource {
    fn preference(&self) -> MotionPreference;
}

/// A source that always returns the same preference.
#[derive(Debug, Clone, Copy)]
pub struct FixedPreference(pub MotionPreference);

impl MotionPreferenceSource for FixedPreference {
    fn preference(&self) -> MotionPreference {
        self.0
    }
}

/// Reads the preference from an environment variable, the headless stand-in
/// for the platform accessibility setting.
#[derive(Debug, Clone)]
pub struct SystemPreference {
    var: String,
}

impl Default for SystemPreference {
    fn default() -> Self {
        Self {
            var: "GLIDE_REDUCE_MOTION".to_string(),
        }
    }
}

impl SystemPreference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom environment variable name.
    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Parse a raw variable value. Unset or unrecognized values mean no
    /// preference.
    pub fn parse(value: Option<&str>) -> MotionPreference {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "1" || v == "true" || v == "reduce" => MotionPreference::Reduce,
            _ => MotionPreference::NoPreference,
        }
    }
}

impl MotionPreferenceSource for SystemPreference {
    fn preference(&self) -> MotionPreference {
        Self::parse(std::env::var(&self.var).ok().as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source() {
        assert!(FixedPreference(MotionPreference::Reduce)
            .preference()
            .is_reduce());
        assert!(!FixedPreference(MotionPreference::NoPreference)
            .preference()
            .is_reduce());
    }

    #[test]
    fn test_parse_values() {
        assert!(SystemPreference::parse(Some("1")).is_reduce());
        assert!(SystemPreference::parse(Some("true")).is_reduce());
        assert!(SystemPreference::parse(Some("Reduce")).is_reduce());
        assert!(SystemPreference::parse(Some(" reduce ")).is_reduce());

        assert!(!SystemPreference::parse(Some("0")).is_reduce());
        assert!(!SystemPreference::parse(Some("no-preference")).is_reduce());
        assert!(!SystemPreference::parse(Some("")).is_reduce());
        assert!(!SystemPreference::parse(None).is_reduce());
    }
}
