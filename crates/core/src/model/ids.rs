use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a tutorial step (1-based, ordered).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(u32);

impl StepId {
    /// Creates a new `StepId`
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StepId({})", self.0)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr ───────────────────────────────────────────────────────────────────

/// Error type for parsing an id from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl ParseIdError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse StepId from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for StepId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(StepId::new)
            .map_err(|_| ParseIdError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_id_display() {
        let id = StepId::new(3);
        assert_eq!(id.to_string(), "3");
        assert_eq!(format!("{id:?}"), "StepId(3)");
    }

    #[test]
    fn test_step_id_from_str_trims() {
        let id: StepId = " 4 ".parse().unwrap();
        assert_eq!(id, StepId::new(4));
    }

    #[test]
    fn test_step_id_from_str_invalid() {
        let err = "two".parse::<StepId>().unwrap_err();
        assert_eq!(err.raw(), "two");
        assert!(err.to_string().contains("StepId"));
    }

    #[test]
    fn test_step_id_rejects_negative() {
        assert!("-1".parse::<StepId>().is_err());
    }

    #[test]
    fn test_step_id_serializes_as_number() {
        let json = serde_json::to_string(&StepId::new(2)).unwrap();
        assert_eq!(json, "2");
    }
}
