use dioxus::prelude::*;

use whys_core::model::WizardPhase;

use crate::context::AppContext;
use crate::vm::{RootCauseVm, StepVm, WizardIntent, WizardVm};

#[component]
pub fn WizardView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let vm = use_signal(move || WizardVm::new(clock));

    rsx! {
        div { class: "page",
            h2 { "Five Whys" }
            WizardPanel { vm }
        }
    }
}

/// Renders whichever phase the wizard is in. The signal is the only state.
#[component]
pub fn WizardPanel(vm: Signal<WizardVm>) -> Element {
    let mut vm = vm;
    let (phase, problem, progress, steps, root) = {
        let state = vm.read();
        (
            state.phase(),
            state.problem_text().map(str::to_string),
            state.progress_label(),
            state.steps(),
            state.root_cause(),
        )
    };

    rsx! {
        div { class: "wizard", id: "wizard-root",
            match phase {
                WizardPhase::Idle => rsx! {
                    p { class: "hint", "What problem are you trying to understand?" }
                    DraftForm {
                        vm,
                        multiline: true,
                        placeholder: "Describe the problem",
                        submit_label: "Start analysis",
                    }
                },
                WizardPhase::InProgress(_) | WizardPhase::Completed => rsx! {
                    div { class: "wizard-header",
                        if let Some(problem) = problem {
                            p { class: "problem", "Problem: {problem}" }
                        }
                        if let Some(progress) = progress {
                            span { class: "progress", "{progress}" }
                        }
                        button {
                            class: "btn secondary",
                            id: "wizard-reset",
                            onclick: move |_| vm.write().dispatch(WizardIntent::Reset),
                            "Start over"
                        }
                    }
                    ol { class: "steps",
                        for step in steps {
                            StepCard { key: "{step.number}", step: step.clone(), vm }
                        }
                    }
                    if let Some(root) = root {
                        RootCausePanel { root }
                    }
                },
            }
        }
    }
}

#[component]
fn StepCard(step: StepVm, vm: Signal<WizardVm>) -> Element {
    let class = if step.is_active { "step active" } else { "step" };

    rsx! {
        li { class: "{class}",
            p { class: "question", "{step.question}" }
            if let Some(answer) = step.answer.as_ref() {
                p { class: "answer", "{answer}" }
            }
            if step.is_active {
                DraftForm {
                    vm,
                    multiline: false,
                    placeholder: "Because...",
                    submit_label: "Next",
                }
            }
        }
    }
}

#[component]
fn DraftForm(
    vm: Signal<WizardVm>,
    multiline: bool,
    placeholder: &'static str,
    submit_label: &'static str,
) -> Element {
    let mut vm = vm;
    let (draft, message, counter, can_submit) = {
        let state = vm.read();
        (
            state.draft().to_string(),
            state.message().map(str::to_string),
            state.char_count_label(),
            state.can_submit(),
        )
    };

    rsx! {
        form {
            class: "draft-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                vm.write().dispatch(WizardIntent::Submit);
            },
            if multiline {
                textarea {
                    id: "wizard-draft",
                    rows: "3",
                    placeholder,
                    value: "{draft}",
                    oninput: move |evt: FormEvent| {
                        vm.write().dispatch(WizardIntent::EditDraft(evt.value()));
                    },
                }
            } else {
                input {
                    id: "wizard-draft",
                    r#type: "text",
                    placeholder,
                    value: "{draft}",
                    oninput: move |evt: FormEvent| {
                        vm.write().dispatch(WizardIntent::EditDraft(evt.value()));
                    },
                }
            }
            div { class: "draft-footer",
                span { class: "counter", "{counter}" }
                button {
                    class: "btn primary",
                    r#type: "submit",
                    disabled: !can_submit,
                    "{submit_label}"
                }
            }
            if let Some(message) = message {
                p { class: "error", role: "alert", "{message}" }
            }
        }
    }
}

#[component]
fn RootCausePanel(root: RootCauseVm) -> Element {
    rsx! {
        section { class: "root-cause",
            h3 { "Root cause" }
            p { class: "root-cause-text", "{root.root_cause}" }
            dl { class: "summary",
                dt { "Problem" }
                dd { "{root.problem}" }

                dt { "Completed" }
                dd { "{root.completed_at_str}" }

                dt { "Time taken" }
                dd { "{root.elapsed_str}" }
            }
            details { class: "transcript",
                summary { "Transcript (Markdown)" }
                pre { "{root.transcript}" }
            }
        }
    }
}
