use dioxus::prelude::*;

use guide_core::ToggleOutcome;
use guide_core::model::StepId;

use super::step_card::StepCard;
use super::summary::{CompletionFooter, SafetyCard};
use crate::context::AppContext;
use crate::vm::{ProgressVm, map_step_card};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::BTreeMap;
#[cfg(test)]
use std::rc::Rc;

/// The tutorial page. Owns the completion tracker for its lifetime.
#[component]
pub fn TutorialView() -> Element {
    let ctx = use_context::<AppContext>();
    let tutorial = ctx.tutorial();
    let details_expanded = ctx.details_expanded();

    let mut tracker = use_signal(|| ctx.new_tracker());

    let on_toggle = use_callback(move |id: StepId| {
        let outcome = tracker.write().toggle(id);
        match outcome {
            ToggleOutcome::Ignored => {
                tracing::debug!(step = %id, "toggle for unknown step ignored");
            }
            ToggleOutcome::Completed | ToggleOutcome::Reopened => {
                let done = tracker.peek().completed_count();
                tracing::debug!(step = %id, ?outcome, done, "step toggled");
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<TutorialTestHandles>() {
                handles.register(on_toggle, tracker);
            }
        }
    }

    let (cards, progress) = {
        let tracker = tracker.read();
        let cards = tutorial
            .steps()
            .iter()
            .map(|step| map_step_card(step, tracker.is_complete(step.id())))
            .collect::<Vec<_>>();
        (cards, ProgressVm::from(tracker.progress()))
    };

    rsx! {
        div { class: "page tutorial",
            header { class: "hero",
                div { class: "hero__emoji", "{tutorial.hero_emoji()}" }
                h1 { class: "hero__title", "{tutorial.title()}" }
                p { class: "hero__subtitle", "{tutorial.subtitle()}" }
                span { class: "badge badge--secondary", "{tutorial.duration_label()}" }
            }

            div { class: "steps",
                for card in cards {
                    StepCard {
                        key: "{card.id}",
                        card: card.clone(),
                        details_expanded,
                        on_toggle,
                    }
                }
            }

            SafetyCard {
                title: tutorial.safety_title().to_string(),
                rules: tutorial.safety_rules().to_vec(),
            }

            CompletionFooter {
                progress,
                celebration: tutorial.celebration().clone(),
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct TutorialTestHandles {
    toggle: Rc<RefCell<Option<Callback<StepId>>>>,
    tracker: Rc<RefCell<Option<Signal<guide_core::StepTracker>>>>,
    details: Rc<RefCell<BTreeMap<StepId, Callback<()>>>>,
}

#[cfg(test)]
impl TutorialTestHandles {
    pub(crate) fn register(
        &self,
        toggle: Callback<StepId>,
        tracker: Signal<guide_core::StepTracker>,
    ) {
        *self.toggle.borrow_mut() = Some(toggle);
        *self.tracker.borrow_mut() = Some(tracker);
    }

    pub(crate) fn toggle(&self) -> Callback<StepId> {
        (*self.toggle.borrow()).expect("tutorial toggle registered")
    }

    pub(crate) fn tracker(&self) -> Signal<guide_core::StepTracker> {
        (*self.tracker.borrow()).expect("tutorial tracker registered")
    }

    pub(crate) fn register_details(&self, step: StepId, toggle_open: Callback<()>) {
        self.details.borrow_mut().insert(step, toggle_open);
    }

    pub(crate) fn details(&self, step: StepId) -> Callback<()> {
        *self
            .details
            .borrow()
            .get(&step)
            .expect("details toggle registered")
    }
}
