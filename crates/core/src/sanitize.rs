//! Input scrubbing for free-text wizard fields.
//!
//! `sanitize_input` runs on every keystroke and removes markup outright. It
//! repeats until nothing more comes off, so fragments that reassemble after a
//! removal (`<scr<script>ipt>`, `javajavascript:script:`) are stripped too and
//! the output never matches `contains_injection`. The submit-time check still
//! guards text that reaches the model without passing through the sanitizer.

use std::sync::LazyLock;

use regex::Regex;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("tag pattern compiles"));

static SCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<\s*/?\s*script").expect("script pattern compiles"));

static JAVASCRIPT_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript\s*:").expect("scheme pattern compiles"));

// Known DOM event attributes only, so prose like `one=two` is left alone.
static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bon(?:click|dblclick|contextmenu|load|unload|beforeunload|error|abort|mouse[a-z]*|key[a-z]*|pointer[a-z]*|touch[a-z]*|focus[a-z]*|blur|submit|reset|change|input|invalid|select|resize|scroll|wheel|drag[a-z]*|drop|copy|cut|paste|animation[a-z]*|transition[a-z]*|toggle|play|pause|message|hashchange|popstate|pageshow|pagehide)\s*=",
    )
    .expect("handler pattern compiles")
});

/// Strip HTML tags, dangling `<script` openers, `javascript:` prefixes and
/// inline event handlers until the text stops changing.
///
/// Whitespace is preserved so the caret does not jump while typing; trimming
/// happens on submit.
#[must_use]
pub fn sanitize_input(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let next = scrub_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

// Every removal shortens the text, so the loop above terminates.
fn scrub_once(text: &str) -> String {
    let without_tags = HTML_TAG.replace_all(text, "");
    let without_openers = SCRIPT_TAG.replace_all(&without_tags, "");
    let without_scheme = JAVASCRIPT_SCHEME.replace_all(&without_openers, "");
    EVENT_HANDLER.replace_all(&without_scheme, "").into_owned()
}

/// True if the text matches any pattern the wizard refuses to accept.
#[must_use]
pub fn contains_injection(text: &str) -> bool {
    SCRIPT_TAG.is_match(text) || JAVASCRIPT_SCHEME.is_match(text) || EVENT_HANDLER.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::{contains_injection, sanitize_input};

    #[test]
    fn strips_script_tags_but_keeps_text() {
        let out = sanitize_input("<script>alert(1)</script>Engine stalls");
        assert_eq!(out, "alert(1)Engine stalls");
        assert!(!out.contains("<script"));
    }

    #[test]
    fn strips_javascript_scheme_in_any_case() {
        assert_eq!(sanitize_input("JavaScript:alert(1)"), "alert(1)");
        assert_eq!(sanitize_input("go to javascript : void"), "go to  void");
    }

    #[test]
    fn strips_inline_event_handlers() {
        assert_eq!(sanitize_input("click onclick=steal()"), "click steal()");
        assert_eq!(sanitize_input("x onMouseOver = y"), "x  y");
    }

    #[test]
    fn plain_text_passes_through_untouched() {
        let text = "Car won't start & battery is 2 < 3 years old";
        assert_eq!(sanitize_input(text), text);
        assert!(!contains_injection(text));
    }

    #[test]
    fn nested_fragments_are_stripped_until_nothing_reassembles() {
        let out = sanitize_input("<scr<script>ipt>alert(1)");
        assert_eq!(out, "alert(1)");
        assert!(!contains_injection(&out));

        let out = sanitize_input("javajavascript:script:x");
        assert_eq!(out, "x");
        assert!(!contains_injection(&out));
    }

    #[test]
    fn dangling_script_opener_is_removed() {
        let out = sanitize_input("< script src=x");
        assert_eq!(out, " src=x");
        assert!(!contains_injection(&out));
    }

    #[test]
    fn detects_unclosed_script_tag() {
        assert!(contains_injection("< script src=x"));
        assert!(contains_injection("</SCRIPT"));
    }

    #[test]
    fn words_starting_with_on_are_fine_without_assignment() {
        assert!(!contains_injection("only on Mondays"));
        assert!(contains_injection("onload=run"));
    }

    #[test]
    fn assignments_that_are_not_event_handlers_pass() {
        let text = "Config has one=two and online = false";
        assert!(!contains_injection(text));
        assert_eq!(sanitize_input(text), text);
        assert!(contains_injection("img onerror=boom"));
        assert!(contains_injection("ONFOCUSIN = x"));
    }
}
