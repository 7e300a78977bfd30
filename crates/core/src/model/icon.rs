use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Icons the tutorial page can show. Names match the icon set used by the
/// page markup (`Package`, `CheckCircle2`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKey {
    Package,
    Wind,
    Sparkles,
    Star,
    Circle,
    CheckCircle2,
    ListChecks,
    Lightbulb,
    Award,
    AlertCircle,
}

impl IconKey {
    pub const ALL: [IconKey; 10] = [
        IconKey::Package,
        IconKey::Wind,
        IconKey::Sparkles,
        IconKey::Star,
        IconKey::Circle,
        IconKey::CheckCircle2,
        IconKey::ListChecks,
        IconKey::Lightbulb,
        IconKey::Award,
        IconKey::AlertCircle,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            IconKey::Package => "Package",
            IconKey::Wind => "Wind",
            IconKey::Sparkles => "Sparkles",
            IconKey::Star => "Star",
            IconKey::Circle => "Circle",
            IconKey::CheckCircle2 => "CheckCircle2",
            IconKey::ListChecks => "ListChecks",
            IconKey::Lightbulb => "Lightbulb",
            IconKey::Award => "Award",
            IconKey::AlertCircle => "AlertCircle",
        }
    }

    /// Icon for the completion toggle of a step.
    #[must_use]
    pub const fn for_completion(complete: bool) -> Self {
        if complete {
            IconKey::CheckCircle2
        } else {
            IconKey::Circle
        }
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IconKeyError {
    #[error("unknown icon key: {0}")]
    Unknown(String),
}

impl FromStr for IconKey {
    type Err = IconKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| IconKeyError::Unknown(s.to_string()))
    }
}
