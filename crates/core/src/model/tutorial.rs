use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::model::{StepDefinition, StepError, StepId};

//
// ─── TYPES ─────────────────────────────────────────────────────────────────────
//

/// Message shown once every step is marked complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Celebration {
    pub emoji: String,
    pub headline: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialDraft {
    pub title: String,
    pub subtitle: String,
    pub duration_label: String,
    pub hero_emoji: String,
    pub steps: Vec<StepDefinition>,
    pub safety_title: String,
    pub safety_rules: Vec<String>,
    pub celebration: Celebration,
}

/// A validated tutorial page: header texts, ordered steps, safety rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tutorial {
    title: String,
    subtitle: String,
    duration_label: String,
    hero_emoji: String,
    steps: Vec<StepDefinition>,
    safety_title: String,
    safety_rules: Vec<String>,
    celebration: Celebration,
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TutorialError {
    #[error("tutorial title cannot be empty")]
    EmptyTitle,

    #[error("tutorial has no steps")]
    NoSteps,

    #[error("duplicate step id {id}")]
    DuplicateStepId { id: StepId },

    #[error("step ids must run 1..N in order: expected {expected}, found {found}")]
    NonSequentialStepId { expected: StepId, found: StepId },

    #[error(transparent)]
    Step(#[from] StepError),
}

//
// ─── VALIDATION ────────────────────────────────────────────────────────────────
//

impl TutorialDraft {
    /// Validate the draft into a `Tutorial`.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::EmptyTitle` for a blank title,
    /// `TutorialError::NoSteps` for an empty step list,
    /// `TutorialError::DuplicateStepId` when an id repeats, and
    /// `TutorialError::NonSequentialStepId` when ids are not `1..=N` in order.
    pub fn validate(self) -> Result<Tutorial, TutorialError> {
        if self.title.trim().is_empty() {
            return Err(TutorialError::EmptyTitle);
        }
        if self.steps.is_empty() {
            return Err(TutorialError::NoSteps);
        }

        let mut seen = BTreeSet::new();
        for (index, step) in self.steps.iter().enumerate() {
            let id = step.id();
            if !seen.insert(id) {
                return Err(TutorialError::DuplicateStepId { id });
            }
            let expected = StepId::new(u32::try_from(index + 1).unwrap_or(u32::MAX));
            if id != expected {
                return Err(TutorialError::NonSequentialStepId {
                    expected,
                    found: id,
                });
            }
        }

        Ok(Tutorial {
            title: self.title,
            subtitle: self.subtitle,
            duration_label: self.duration_label,
            hero_emoji: self.hero_emoji,
            steps: self.steps,
            safety_title: self.safety_title,
            safety_rules: self.safety_rules,
            celebration: self.celebration,
        })
    }
}

//
// ─── ACCESSORS ─────────────────────────────────────────────────────────────────
//

impl Tutorial {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }

    #[must_use]
    pub fn hero_emoji(&self) -> &str {
        &self.hero_emoji
    }

    #[must_use]
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    #[must_use]
    pub fn step(&self, id: StepId) -> Option<&StepDefinition> {
        self.steps.iter().find(|step| step.id() == id)
    }

    pub fn step_ids(&self) -> impl Iterator<Item = StepId> + '_ {
        self.steps.iter().map(StepDefinition::id)
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn safety_title(&self) -> &str {
        &self.safety_title
    }

    #[must_use]
    pub fn safety_rules(&self) -> &[String] {
        &self.safety_rules
    }

    #[must_use]
    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
