use std::sync::Arc;

use dioxus::prelude::*;
use guide_core::model::{Celebration, IconKey, StepDefinition, StepId, TutorialDraft};

use crate::context::StepPreset;

use super::test_harness::{setup_view_harness, setup_view_harness_with_tutorial};

fn preset(completed: &[u32], expand_details: bool) -> StepPreset {
    StepPreset {
        completed: completed.iter().copied().map(StepId::new).collect(),
        expand_details,
    }
}

#[test]
fn tutorial_view_smoke_renders_every_step() {
    let mut harness = setup_view_harness(StepPreset::default());
    harness.rebuild();
    let html = harness.render();

    for title in [
        "Подготовка материалов",
        "Обмотка основы",
        "Декорирование",
        "Финальная отделка",
    ] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("Этап 4"), "missing badge in {html}");
    assert!(html.contains("Время работы: 2-3 часа"), "missing duration in {html}");
    assert!(html.contains("Техника безопасности"), "missing safety card in {html}");
    assert!(html.contains("Завершено этапов: 0 из 4"), "missing footer in {html}");
    assert!(!html.contains("step-card--complete"), "unexpected complete card in {html}");
    assert!(!html.contains("Поздравляем"), "unexpected celebration in {html}");
}

#[test]
fn tutorial_view_smoke_hides_details_by_default() {
    let mut harness = setup_view_harness(StepPreset::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Подробная инструкция"), "missing trigger in {html}");
    assert!(!html.contains("Совет:"), "details should be collapsed in {html}");
}

#[test]
fn tutorial_view_smoke_expands_details_when_asked() {
    let mut harness = setup_view_harness(preset(&[], true));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Совет:"), "missing tip in {html}");
    assert!(html.contains("Закрепите петельку для подвешивания"), "missing detail in {html}");
}

#[test]
fn tutorial_view_details_trigger_opens_and_closes_panel() {
    let mut harness = setup_view_harness(StepPreset::default());
    harness.rebuild();

    harness.toggle_details(3);
    let html = harness.render();
    assert_eq!(html.matches("Совет:").count(), 1, "only step 3 should open in {html}");
    assert!(html.contains("Закрепите петельку для подвешивания"), "missing step 3 detail in {html}");
    assert!(!html.contains("Кисточка для клея"), "step 1 should stay closed in {html}");
    assert!(html.contains("step-details__trigger--open"), "missing open trigger in {html}");

    harness.toggle_details(3);
    let html = harness.render();
    assert!(!html.contains("Совет:"), "panel should close again in {html}");
}

#[test]
fn tutorial_view_details_trigger_closes_expanded_panel() {
    let mut harness = setup_view_harness(preset(&[], true));
    harness.rebuild();
    assert_eq!(harness.render().matches("Совет:").count(), 4);

    harness.toggle_details(1);
    let html = harness.render();
    assert_eq!(html.matches("Совет:").count(), 3, "step 1 should close in {html}");
    assert!(!html.contains("Кисточка для клея"), "step 1 detail still shown in {html}");
}

#[test]
fn tutorial_view_smoke_renders_preset_steps_complete() {
    let mut harness = setup_view_harness(preset(&[1, 3], false));
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("step-card step-card--complete").count(), 2);
    assert!(html.contains("data-icon=\"CheckCircle2\""), "missing check icon in {html}");
    assert!(html.contains("Завершено этапов: 2 из 4"), "missing count in {html}");
}

#[test]
fn tutorial_view_toggle_updates_footer() {
    let mut harness = setup_view_harness(StepPreset::default());
    harness.rebuild();

    harness.toggle(2);
    let html = harness.render();
    assert!(html.contains("Завершено этапов: 1 из 4"), "missing count in {html}");
    let marked = harness
        .dom
        .in_runtime(|| harness.handles.tracker().peek().is_complete(StepId::new(2)));
    assert!(marked);

    harness.toggle(2);
    let html = harness.render();
    assert!(html.contains("Завершено этапов: 0 из 4"), "missing reset count in {html}");
}

#[test]
fn tutorial_view_shows_celebration_once_all_complete() {
    let mut harness = setup_view_harness(StepPreset::default());
    harness.rebuild();

    for id in 1..=3 {
        harness.toggle(id);
    }
    assert!(!harness.render().contains("Поздравляем"));

    harness.toggle(4);
    let html = harness.render();
    assert!(html.contains("Завершено этапов: 4 из 4"), "missing count in {html}");
    assert!(html.contains("Поздравляем! Вы завершили все этапы!"), "missing celebration in {html}");
    assert!(html.contains("Ваш новогодний шар готов украсить праздник!"), "missing message in {html}");
}

#[test]
fn tutorial_view_ignores_unknown_step() {
    let mut harness = setup_view_harness(preset(&[1], false));
    harness.rebuild();

    harness.toggle(99);
    let html = harness.render();
    assert!(html.contains("Завершено этапов: 1 из 4"), "count changed in {html}");
}

#[test]
fn tutorial_view_renders_custom_tutorial() {
    let tutorial = TutorialDraft {
        title: "Paper star".to_string(),
        subtitle: "Two quick steps".to_string(),
        duration_label: "10 min".to_string(),
        hero_emoji: "⭐".to_string(),
        steps: vec![
            StepDefinition::new(StepId::new(1), "Fold", "", ["Fold in half"], "Crease well", IconKey::Package)
                .unwrap(),
            StepDefinition::new(StepId::new(2), "Cut", "", ["Cut the tips"], "Mind the scissors", IconKey::Star)
                .unwrap(),
        ],
        safety_title: "Safety".to_string(),
        safety_rules: vec!["Use round-tip scissors".to_string()],
        celebration: Celebration {
            emoji: "🎉".to_string(),
            headline: "Done!".to_string(),
            message: "Hang it up.".to_string(),
        },
    }
    .validate()
    .unwrap();

    let mut harness = setup_view_harness_with_tutorial(Arc::new(tutorial), StepPreset::default());
    harness.rebuild();
    harness.toggle(1);
    harness.toggle(2);
    let html = harness.render();
    assert!(html.contains("Paper star"), "missing title in {html}");
    assert!(html.contains("Завершено этапов: 2 из 2"), "missing count in {html}");
    assert!(html.contains("Done!"), "missing celebration in {html}");
    assert!(html.contains("Use round-tip scissors"), "missing safety rule in {html}");
}
