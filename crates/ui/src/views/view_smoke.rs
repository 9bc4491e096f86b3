use super::test_harness::{ViewKind, seeded_vm, setup_view_harness};

const ANSWERS: [&str; 5] = [
    "Battery is dead",
    "Alternator stopped charging",
    "Drive belt snapped",
    "Belt was worn out",
    "Service was skipped",
];

#[test]
fn wizard_view_smoke_renders_problem_form() {
    let mut harness = setup_view_harness(ViewKind::Wizard);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("What problem are you trying to understand?"), "missing hint in {html}");
    assert!(html.contains("Start analysis"), "missing submit in {html}");
    assert!(html.contains("0 / 500"), "missing counter in {html}");
    assert!(!html.contains("Start over"), "reset shown while idle in {html}");
    assert!(!html.contains("maxlength"), "browser length cap in {html}");
}

#[test]
fn panel_smoke_renders_active_step_and_progress() {
    let vm = seeded_vm(&["Engine stalls", ANSWERS[0]]);
    let mut harness = setup_view_harness(ViewKind::Panel(vm));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Problem: Engine stalls"), "missing problem in {html}");
    assert!(html.contains("Why 2 of 5"), "missing progress in {html}");
    assert!(html.contains("Battery is dead"), "missing answer in {html}");
    assert!(html.contains("step active"), "missing active step in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
    assert!(html.contains("Start over"), "missing reset in {html}");
    assert!(!html.contains("maxlength"), "browser length cap in {html}");
}

#[test]
fn panel_smoke_renders_inline_validation_message() {
    let vm = seeded_vm(&["Engine stalls", "no"]);
    let mut harness = setup_view_harness(ViewKind::Panel(vm));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Please enter at least 3 characters."),
        "missing message in {html}"
    );
    assert!(html.contains("Why 1 of 5"), "step advanced in {html}");
}

#[test]
fn panel_smoke_renders_root_cause_when_complete() {
    let mut inputs = vec!["Engine stalls"];
    inputs.extend(ANSWERS);
    let vm = seeded_vm(&inputs);
    let mut harness = setup_view_harness(ViewKind::Panel(vm));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Root cause"), "missing heading in {html}");
    assert!(html.contains("Service was skipped"), "missing root cause in {html}");
    assert!(html.contains("2023-11-14 22:13 UTC"), "missing completion time in {html}");
    assert!(!html.contains("Why 5 of 5"), "progress shown after completion in {html}");
    assert!(!html.contains("wizard-draft"), "input shown after completion in {html}");
}

#[test]
fn about_view_smoke_describes_limits() {
    let mut harness = setup_view_harness(ViewKind::About);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("between 3 and 500 characters"), "missing limits in {html}");
    assert!(html.contains("Nothing is saved."), "missing persistence note in {html}");
}
