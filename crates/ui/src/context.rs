use std::sync::Arc;

use guide_core::StepTracker;
use guide_core::model::{StepId, Tutorial};

/// Initial page state for a launch or a static render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepPreset {
    pub completed: Vec<StepId>,
    pub expand_details: bool,
}

pub trait UiApp: Send + Sync {
    fn tutorial(&self) -> Arc<Tutorial>;
    fn preset(&self) -> StepPreset;
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    tutorial: Arc<Tutorial>,
    preset: StepPreset,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self::from_parts(app.tutorial(), app.preset())
    }

    #[must_use]
    pub fn from_parts(tutorial: Arc<Tutorial>, preset: StepPreset) -> Self {
        Self { tutorial, preset }
    }

    #[must_use]
    pub fn tutorial(&self) -> Arc<Tutorial> {
        Arc::clone(&self.tutorial)
    }

    /// A fresh tracker for one page view, with the preset steps applied.
    #[must_use]
    pub fn new_tracker(&self) -> StepTracker {
        StepTracker::for_tutorial(&self.tutorial)
            .with_completed(self.preset.completed.iter().copied())
    }

    #[must_use]
    pub fn details_expanded(&self) -> bool {
        self.preset.expand_details
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
