use serde::Serialize;

use crate::model::InputText;

/// Question asked about a problem statement or a previous answer.
#[must_use]
pub fn why_question(subject: &str) -> String {
    format!("Why is \"{subject}\" happening?")
}

/// One question/answer pair. The answer is empty until the step is answered
/// and cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    question: String,
    answer: String,
}

impl Step {
    #[must_use]
    pub(crate) fn asking_about(subject: &InputText) -> Self {
        Self {
            question: why_question(subject.as_str()),
            answer: String::new(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The recorded answer, or `""` while unanswered.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Returns false (and leaves the step alone) if it was already answered.
    pub(crate) fn record_answer(&mut self, answer: &InputText) -> bool {
        if self.is_answered() {
            return false;
        }
        self.answer = answer.as_str().to_string();
        true
    }
}
