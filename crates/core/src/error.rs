use thiserror::Error;

use crate::model::{IconKeyError, ParseIdError, StepError, TutorialError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Step(#[from] StepError),
    #[error(transparent)]
    Tutorial(#[from] TutorialError),
    #[error(transparent)]
    Icon(#[from] IconKeyError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
