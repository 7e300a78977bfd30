use serde::Serialize;
use thiserror::Error;

use crate::model::{IconKey, StepId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepError {
    #[error("step {id} has an empty title")]
    EmptyTitle { id: StepId },
}

/// One instruction stage of a tutorial. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    id: StepId,
    title: String,
    description: String,
    details: Vec<String>,
    tip: String,
    icon: IconKey,
}

impl StepDefinition {
    /// Build a step definition.
    ///
    /// # Errors
    ///
    /// Returns `StepError::EmptyTitle` if the title is blank after trimming.
    pub fn new<I, S>(
        id: StepId,
        title: impl Into<String>,
        description: impl Into<String>,
        details: I,
        tip: impl Into<String>,
        icon: IconKey,
    ) -> Result<Self, StepError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(StepError::EmptyTitle { id });
        }

        Ok(Self {
            id,
            title: title.trim().to_string(),
            description: description.into(),
            details: details.into_iter().map(Into::into).collect(),
            tip: tip.into(),
            icon,
        })
    }

    #[must_use]
    pub fn id(&self) -> StepId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn details(&self) -> &[String] {
        &self.details
    }

    #[must_use]
    pub fn tip(&self) -> &str {
        &self.tip
    }

    #[must_use]
    pub fn icon(&self) -> IconKey {
        self.icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank_title() {
        let err = StepDefinition::new(
            StepId::new(1),
            "   ",
            "desc",
            ["a"],
            "tip",
            IconKey::Star,
        )
        .unwrap_err();
        assert_eq!(err, StepError::EmptyTitle { id: StepId::new(1) });
    }

    #[test]
    fn new_keeps_detail_order() {
        let step = StepDefinition::new(
            StepId::new(2),
            " Wrap ",
            "Cover the base",
            ["first", "second", "third"],
            "Take your time",
            IconKey::Wind,
        )
        .unwrap();
        assert_eq!(step.title(), "Wrap");
        assert_eq!(step.details(), ["first", "second", "third"]);
        assert_eq!(step.icon(), IconKey::Wind);
    }

    #[test]
    fn serializes_icon_as_name() {
        let step = StepDefinition::new(
            StepId::new(1),
            "Prepare",
            "",
            Vec::<String>::new(),
            "",
            IconKey::Package,
        )
        .unwrap();
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["icon"], "Package");
    }
}
