mod icon;
mod ids;
mod step;
mod tutorial;

pub use icon::{IconKey, IconKeyError};
pub use ids::{ParseIdError, StepId};
pub use step::{StepDefinition, StepError};
pub use tutorial::{Celebration, Tutorial, TutorialDraft, TutorialError};
