use dioxus::prelude::*;

use guide_core::model::{IconKey, StepId};

use super::icon::Icon;
use crate::vm::StepCardVm;

#[component]
pub(super) fn StepCard(
    card: StepCardVm,
    details_expanded: bool,
    on_toggle: Callback<StepId>,
) -> Element {
    let id = card.id;
    rsx! {
        article { class: "{card.card_class}", id: "step-{id}",
            header { class: "step-card__header",
                div { class: "{card.icon_class}",
                    Icon { name: card.icon, size: 28, class: "" }
                }
                div { class: "step-card__heading",
                    div { class: "step-card__meta",
                        span { class: "badge badge--outline", "{card.badge_label}" }
                        button {
                            class: "{card.toggle_class}",
                            r#type: "button",
                            aria_label: "{card.toggle_label}",
                            aria_pressed: if card.complete { "true" } else { "false" },
                            onclick: move |_| on_toggle.call(id),
                            Icon { name: card.toggle_icon, size: 24, class: "" }
                        }
                    }
                    h3 { class: "step-card__title", "{card.title}" }
                    p { class: "step-card__description", "{card.description}" }
                }
            }
            StepDetails {
                step: id,
                details: card.details.clone(),
                tip: card.tip.clone(),
                initially_open: details_expanded,
            }
        }
    }
}

/// Collapsible "detailed instructions" panel with the tip callout.
#[component]
fn StepDetails(step: StepId, details: Vec<String>, tip: String, initially_open: bool) -> Element {
    let mut open = use_signal(|| initially_open);
    let expanded = open();

    let toggle_open = use_callback(move |()| {
        let next = !*open.peek();
        open.set(next);
        tracing::trace!(step = %step, open = next, "details toggled");
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<super::tutorial::TutorialTestHandles>() {
                handles.register_details(step, toggle_open);
            }
        }
    }

    rsx! {
        div { class: "step-details",
            button {
                class: if expanded {
                    "step-details__trigger step-details__trigger--open"
                } else {
                    "step-details__trigger"
                },
                r#type: "button",
                aria_expanded: if expanded { "true" } else { "false" },
                onclick: move |_| toggle_open.call(()),
                Icon { name: IconKey::ListChecks, size: 20, class: "" }
                span { "Подробная инструкция" }
                span { class: "step-details__caret" }
            }
            if expanded {
                div { class: "step-details__body",
                    ul { class: "step-details__list",
                        for (idx, detail) in details.iter().enumerate() {
                            li { key: "{idx}", class: "step-details__item",
                                span { class: "step-details__bullet", "•" }
                                span { "{detail}" }
                            }
                        }
                    }
                    TipCallout { tip }
                }
            }
        }
    }
}

#[component]
fn TipCallout(tip: String) -> Element {
    rsx! {
        div { class: "tip",
            Icon { name: IconKey::Lightbulb, size: 20, class: "tip__icon" }
            div {
                p { class: "tip__label", "Совет:" }
                p { class: "tip__text", "{tip}" }
            }
        }
    }
}
