use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use whys_core::Clock;
use whys_core::time::fixed_clock;

use crate::context::{UiApp, UiSettings, build_app_context};
use crate::views::{AboutView, WizardPanel, WizardView};
use crate::vm::{WizardIntent, WizardVm};

struct TestApp {
    clock: Clock,
}

impl UiApp for TestApp {
    fn settings(&self) -> UiSettings {
        UiSettings {
            title: "Five Whys (test)".to_string(),
            always_on_top: false,
        }
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Clone)]
pub enum ViewKind {
    Wizard,
    About,
    /// Wizard panel pre-seeded with a view model.
    Panel(WizardVm),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Wizard => rsx! { WizardView {} },
        ViewKind::About => rsx! { AboutView {} },
        ViewKind::Panel(seed) => rsx! { SeededPanel { seed } },
    }
}

#[component]
fn SeededPanel(seed: WizardVm) -> Element {
    let vm = use_signal(|| seed.clone());
    rsx! { WizardPanel { vm } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
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

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let app = Arc::new(TestApp {
        clock: fixed_clock(),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}

/// A view model driven through the given submissions, in order.
pub fn seeded_vm(inputs: &[&str]) -> WizardVm {
    let mut vm = WizardVm::new(fixed_clock());
    for input in inputs {
        vm.dispatch(WizardIntent::EditDraft((*input).to_string()));
        vm.dispatch(WizardIntent::Submit);
    }
    vm
}
