use guide_core::model::{IconKey, StepDefinition, StepId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepCardVm {
    pub id: StepId,
    pub badge_label: String,
    pub title: String,
    pub description: String,
    pub details: Vec<String>,
    pub tip: String,
    pub icon: IconKey,
    pub toggle_icon: IconKey,
    pub toggle_label: &'static str,
    pub complete: bool,
    pub card_class: &'static str,
    pub icon_class: &'static str,
    pub toggle_class: &'static str,
}

#[must_use]
pub fn map_step_card(step: &StepDefinition, complete: bool) -> StepCardVm {
    let (card_class, icon_class, toggle_class) = if complete {
        (
            "step-card step-card--complete",
            "step-icon step-icon--complete",
            "step-toggle step-toggle--complete",
        )
    } else {
        ("step-card", "step-icon", "step-toggle")
    };

    StepCardVm {
        id: step.id(),
        badge_label: format!("Этап {}", step.id()),
        title: step.title().to_string(),
        description: step.description().to_string(),
        details: step.details().to_vec(),
        tip: step.tip().to_string(),
        icon: step.icon(),
        toggle_icon: IconKey::for_completion(complete),
        toggle_label: if complete {
            "Отметить этап как невыполненный"
        } else {
            "Отметить этап как выполненный"
        },
        complete,
        card_class,
        icon_class,
        toggle_class,
    }
}
