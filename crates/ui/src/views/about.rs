use dioxus::prelude::*;
use dioxus_router::Link;

use whys_core::model::{MAX_INPUT_CHARS, MIN_INPUT_CHARS, WHY_COUNT};

use crate::routes::Route;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "About" }
            p {
                "Describe a problem, then answer {WHY_COUNT} questions in a row. "
                "Each question asks why your previous answer happens; the last answer "
                "is taken as the root cause."
            }
            p { "Answers must be between {MIN_INPUT_CHARS} and {MAX_INPUT_CHARS} characters. Markup is removed as you type." }
            p { "Nothing is saved. Resetting discards the current analysis." }
            Link { to: Route::Wizard {}, "Start an analysis" }
        }
    }
}
