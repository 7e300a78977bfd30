use dioxus::prelude::*;

use guide_core::model::{Celebration, IconKey};

use super::icon::Icon;
use crate::vm::ProgressVm;

#[component]
pub(super) fn SafetyCard(title: String, rules: Vec<String>) -> Element {
    rsx! {
        section { class: "safety-card",
            h3 { class: "safety-card__title",
                Icon { name: IconKey::Award, size: 28, class: "safety-card__icon" }
                "{title}"
            }
            ul { class: "safety-card__list",
                for (idx, rule) in rules.iter().enumerate() {
                    li { key: "{idx}", class: "safety-card__rule",
                        Icon { name: IconKey::AlertCircle, size: 20, class: "safety-card__alert" }
                        span { "{rule}" }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn CompletionFooter(progress: ProgressVm, celebration: Celebration) -> Element {
    rsx! {
        footer { class: "completion",
            p { class: "completion__count", "{progress.label()}" }
            if progress.show_celebration {
                div { class: "celebration",
                    div { class: "celebration__emoji", "{celebration.emoji}" }
                    p { class: "celebration__headline", "{celebration.headline}" }
                    p { class: "celebration__message", "{celebration.message}" }
                }
            }
        }
    }
}
