//! Completion tracking for the steps of a tutorial.

use std::collections::BTreeSet;

use crate::model::{StepId, Tutorial};

/// What a call to [`StepTracker::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The step was added to the completion set.
    Completed,
    /// The step was removed from the completion set.
    Reopened,
    /// The id is not a step of this tracker; nothing changed.
    Ignored,
}

/// Aggregated view of checklist progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepProgress {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Owns the completion set for one page view.
///
/// The set of known steps is fixed at construction. The completed set is
/// always a subset of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTracker {
    steps: BTreeSet<StepId>,
    completed: BTreeSet<StepId>,
}

impl StepTracker {
    #[must_use]
    pub fn new(steps: impl IntoIterator<Item = StepId>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            completed: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn for_tutorial(tutorial: &Tutorial) -> Self {
        Self::new(tutorial.step_ids())
    }

    /// Marks the given steps complete. Unknown ids are skipped and repeated
    /// ids count once.
    #[must_use]
    pub fn with_completed(mut self, ids: impl IntoIterator<Item = StepId>) -> Self {
        for id in ids {
            if self.steps.contains(&id) {
                self.completed.insert(id);
            }
        }
        self
    }

    pub fn toggle(&mut self, id: StepId) -> ToggleOutcome {
        if !self.steps.contains(&id) {
            return ToggleOutcome::Ignored;
        }
        if self.completed.remove(&id) {
            ToggleOutcome::Reopened
        } else {
            self.completed.insert(id);
            ToggleOutcome::Completed
        }
    }

    #[must_use]
    pub fn is_complete(&self, id: StepId) -> bool {
        self.completed.contains(&id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_all_complete(&self) -> bool {
        self.completed_count() == self.total()
    }

    pub fn completed_ids(&self) -> impl Iterator<Item = StepId> + '_ {
        self.completed.iter().copied()
    }

    #[must_use]
    pub fn progress(&self) -> StepProgress {
        let total = self.total();
        let completed = self.completed_count();
        StepProgress {
            total,
            completed,
            remaining: total - completed,
            is_complete: completed == total,
        }
    }
}
