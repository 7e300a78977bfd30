use dioxus::prelude::*;

use guide_core::model::IconKey;

const CIRCLE: &str = "M22 12A10 10 0 1 1 2 12a10 10 0 0 1 20 0z";

fn icon_paths(icon: IconKey) -> &'static [&'static str] {
    match icon {
        IconKey::Package => &[
            "M16.5 9.4 7.55 4.24",
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12.01l8.73-5.05",
            "M12 22.08V12",
        ],
        IconKey::Wind => &[
            "M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2",
            "M9.6 4.6A2 2 0 1 1 11 8H2",
            "M12.6 19.4A2 2 0 1 0 14 16H2",
        ],
        IconKey::Sparkles => &[
            "M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9z",
            "M20 3v4",
            "M22 5h-4",
            "M4 17v2",
            "M5 18H3",
        ],
        IconKey::Star => &[
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z",
        ],
        IconKey::Circle => &[CIRCLE],
        IconKey::CheckCircle2 => &[CIRCLE, "m9 12 2 2 4-4"],
        IconKey::ListChecks => &[
            "m3 17 2 2 4-4",
            "m3 7 2 2 4-4",
            "M13 6h8",
            "M13 12h8",
            "M13 18h8",
        ],
        IconKey::Lightbulb => &[
            "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
            "M9 18h6",
            "M10 22h4",
        ],
        IconKey::Award => &[
            "M18 8A6 6 0 1 1 6 8a6 6 0 0 1 12 0z",
            "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
        ],
        IconKey::AlertCircle => &[CIRCLE, "M12 8v4", "M12 16h.01"],
    }
}

/// Inline stroke icon.
#[component]
pub fn Icon(name: IconKey, size: u32, class: &'static str) -> Element {
    let paths = icon_paths(name);
    rsx! {
        svg {
            class: "icon {class}",
            "data-icon": "{name}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in paths.iter() {
                path { d: *d }
            }
        }
    }
}
