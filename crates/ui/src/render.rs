//! Static HTML rendering of the tutorial page.

use std::sync::Arc;

use dioxus::prelude::*;
use guide_core::model::Tutorial;

use crate::context::{AppContext, StepPreset};
use crate::views::TutorialView;

const STYLESHEET: &str = include_str!("../assets/style.css");

#[component]
fn StaticPage(context: AppContext) -> Element {
    use_context_provider(|| context.clone());
    rsx! {
        div { class: "app-root",
            TutorialView {}
        }
    }
}

/// Render the page body once, without a window.
#[must_use]
pub fn render_page_body(tutorial: Arc<Tutorial>, preset: StepPreset) -> String {
    let mut dom = VirtualDom::new_with_props(
        StaticPage,
        StaticPageProps {
            context: AppContext::from_parts(tutorial, preset),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a standalone HTML document with the stylesheet inlined.
#[must_use]
pub fn render_static_page(tutorial: Arc<Tutorial>, preset: StepPreset) -> String {
    let title = escape_html(tutorial.title());
    let body = render_page_body(tutorial, preset);
    format!(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>\n{STYLESHEET}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
