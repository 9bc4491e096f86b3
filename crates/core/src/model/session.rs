use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::model::{InputText, Step};

/// Number of "why" questions in a full analysis.
pub const WHY_COUNT: usize = 5;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("analysis already completed")]
    Completed,
}

/// Where the wizard currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Idle,
    InProgress(usize),
    Completed,
}

impl WizardPhase {
    #[must_use]
    pub fn of(session: Option<&Session>) -> Self {
        match session {
            None => Self::Idle,
            Some(s) if s.is_complete() => Self::Completed,
            Some(s) => Self::InProgress(s.current_index()),
        }
    }
}

/// Outcome of answering the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionProgress {
    Advanced { index: usize },
    Completed,
}

/// An in-progress or completed five-whys analysis.
///
/// While in progress `steps.len() == current_index + 1`; once complete
/// `current_index == WHY_COUNT` and every step is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    problem_text: String,
    steps: Vec<Step>,
    current_index: usize,
    started: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Open a session whose first question asks about the problem.
    #[must_use]
    pub fn start(problem: &InputText, now: DateTime<Utc>) -> Self {
        Self {
            problem_text: problem.as_str().to_string(),
            steps: vec![Step::asking_about(problem)],
            current_index: 0,
            started: true,
            started_at: now,
            completed_at: None,
        }
    }

    /// Record the answer to the current question and move forward.
    ///
    /// The fifth answer completes the session instead of opening a new step.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once all questions are answered.
    pub fn answer_current(
        &mut self,
        answer: &InputText,
        now: DateTime<Utc>,
    ) -> Result<SessionProgress, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        let step = self
            .steps
            .get_mut(self.current_index)
            .ok_or(SessionError::Completed)?;
        if !step.record_answer(answer) {
            return Err(SessionError::Completed);
        }

        if self.current_index + 1 < WHY_COUNT {
            self.steps.push(Step::asking_about(answer));
            self.current_index += 1;
            Ok(SessionProgress::Advanced {
                index: self.current_index,
            })
        } else {
            self.current_index = WHY_COUNT;
            self.completed_at = Some(now);
            Ok(SessionProgress::Completed)
        }
    }

    #[must_use]
    pub fn problem_text(&self) -> &str {
        &self.problem_text
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_index >= WHY_COUNT
    }

    #[must_use]
    pub fn phase(&self) -> WizardPhase {
        WizardPhase::of(Some(self))
    }

    /// The step awaiting an answer, if any.
    #[must_use]
    pub fn current_step(&self) -> Option<&Step> {
        if self.is_complete() {
            return None;
        }
        self.steps.get(self.current_index)
    }

    /// Count of answered steps.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.steps.iter().filter(|step| step.is_answered()).count()
    }

    /// The last answer, available once the session is complete.
    #[must_use]
    pub fn root_cause(&self) -> Option<&str> {
        if !self.is_complete() {
            return None;
        }
        self.steps.last().map(Step::answer)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}
