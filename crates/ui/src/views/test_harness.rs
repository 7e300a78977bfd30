use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use guide_core::catalog::ornament_tutorial;
use guide_core::model::{StepId, Tutorial};

use crate::context::{StepPreset, UiApp, build_app_context};
use crate::views::TutorialView;
use crate::views::tutorial::TutorialTestHandles;

struct TestApp {
    tutorial: Arc<Tutorial>,
    preset: StepPreset,
}

impl UiApp for TestApp {
    fn tutorial(&self) -> Arc<Tutorial> {
        Arc::clone(&self.tutorial)
    }

    fn preset(&self) -> StepPreset {
        self.preset.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: TutorialTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn TutorialHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { TutorialView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: TutorialTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Click the completion toggle of a step, then flush the re-render.
    pub fn toggle(&mut self, id: u32) {
        let toggle = self.handles.toggle();
        self.dom.in_runtime(|| toggle.call(StepId::new(id)));
        drive_dom(&mut self.dom);
    }

    /// Click the "detailed instructions" trigger of a step.
    pub fn toggle_details(&mut self, id: u32) {
        let toggle_open = self.handles.details(StepId::new(id));
        self.dom.in_runtime(|| toggle_open.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(preset: StepPreset) -> ViewHarness {
    let tutorial = Arc::new(ornament_tutorial().expect("built-in tutorial"));
    setup_view_harness_with_tutorial(tutorial, preset)
}

pub fn setup_view_harness_with_tutorial(tutorial: Arc<Tutorial>, preset: StepPreset) -> ViewHarness {
    let handles = TutorialTestHandles::default();
    let app = Arc::new(TestApp { tutorial, preset });
    let dom = VirtualDom::new_with_props(
        TutorialHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
