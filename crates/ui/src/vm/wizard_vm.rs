use services::{Clock, WizardService};
use whys_core::model::{InputError, MAX_INPUT_CHARS, WHY_COUNT, WizardPhase};
use whys_core::sanitize::{contains_injection, sanitize_input};

use crate::vm::time_fmt::{format_datetime, format_elapsed};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardIntent {
    EditDraft(String),
    Submit,
    Reset,
}

/// Render data for one question card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepVm {
    pub number: usize,
    pub question: String,
    pub answer: Option<String>,
    pub is_active: bool,
}

/// Render data for the finished analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootCauseVm {
    pub problem: String,
    pub root_cause: String,
    pub completed_at_str: String,
    pub elapsed_str: String,
    pub transcript: String,
}

/// Presenter state: the controller plus the draft being typed and any inline
/// message from the last submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardVm {
    wizard: WizardService,
    draft: String,
    message: Option<String>,
}

impl WizardVm {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            wizard: WizardService::new().with_clock(clock),
            draft: String::new(),
            message: None,
        }
    }

    pub fn dispatch(&mut self, intent: WizardIntent) {
        match intent {
            WizardIntent::EditDraft(raw) => self.edit_draft(&raw),
            WizardIntent::Submit => self.submit(),
            WizardIntent::Reset => self.reset(),
        }
    }

    fn edit_draft(&mut self, raw: &str) {
        self.draft = sanitize_input(raw);
        self.message = None;
    }

    fn submit(&mut self) {
        let text = match validate_draft(&self.draft) {
            Ok(text) => text,
            Err(err) => {
                self.message = Some(err.to_string());
                return;
            }
        };

        let result = match self.wizard.phase() {
            WizardPhase::Idle => self.wizard.start_analysis(&text).map(|_| ()),
            WizardPhase::InProgress(_) | WizardPhase::Completed => {
                self.wizard.submit_answer(&text).map(|_| ())
            }
        };

        match result {
            Ok(()) => {
                self.draft.clear();
                self.message = None;
            }
            Err(err) => self.message = Some(capitalize(&err.to_string())),
        }
    }

    fn reset(&mut self) {
        self.wizard.reset();
        self.draft.clear();
        self.message = None;
    }

    #[must_use]
    pub fn phase(&self) -> WizardPhase {
        self.wizard.phase()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    #[must_use]
    pub fn char_count_label(&self) -> String {
        format!("{} / {MAX_INPUT_CHARS}", self.draft.trim().chars().count())
    }

    #[must_use]
    pub fn problem_text(&self) -> Option<&str> {
        self.wizard.session().map(|s| s.problem_text())
    }

    /// "Why 2 of 5" while in progress.
    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        match self.phase() {
            WizardPhase::InProgress(index) => Some(format!("Why {} of {WHY_COUNT}", index + 1)),
            WizardPhase::Idle | WizardPhase::Completed => None,
        }
    }

    #[must_use]
    pub fn steps(&self) -> Vec<StepVm> {
        let Some(session) = self.wizard.session() else {
            return Vec::new();
        };
        let active = session.current_step().map(|_| session.current_index());
        session
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| StepVm {
                number: i + 1,
                question: step.question().to_string(),
                answer: step.is_answered().then(|| step.answer().to_string()),
                is_active: active == Some(i),
            })
            .collect()
    }

    #[must_use]
    pub fn root_cause(&self) -> Option<RootCauseVm> {
        let session = self.wizard.session()?;
        let root_cause = session.root_cause()?.to_string();
        let completed_at = session.completed_at()?;
        let report = self.wizard.report()?;

        Some(RootCauseVm {
            problem: session.problem_text().to_string(),
            root_cause,
            completed_at_str: format_datetime(completed_at),
            elapsed_str: format_elapsed(completed_at - session.started_at()),
            transcript: report.to_markdown(),
        })
    }
}

/// Submit-time check run by the presenter before the controller sees the text.
///
/// # Errors
///
/// Returns `InputError::Disallowed` for injection patterns and
/// `InputError::TooLong` past the character cap.
pub fn validate_draft(draft: &str) -> Result<String, InputError> {
    let trimmed = draft.trim();
    if contains_injection(trimmed) {
        return Err(InputError::Disallowed);
    }
    if trimmed.chars().count() > MAX_INPUT_CHARS {
        return Err(InputError::TooLong {
            max: MAX_INPUT_CHARS,
        });
    }
    Ok(trimmed.to_string())
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
