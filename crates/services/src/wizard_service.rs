use whys_core::model::{InputText, Session, SessionProgress, WHY_COUNT, WizardPhase};

use crate::Clock;
use crate::error::WizardError;
use crate::report::Report;

/// Owns the five-whys session and enforces its forward-only transitions.
///
/// `Idle → InProgress(0..=4) → Completed`; `reset` returns to `Idle` from
/// anywhere. Every rejected call leaves the state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardService {
    clock: Clock,
    session: Option<Session>,
}

impl WizardService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Validate the problem statement and open a session on it.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::AlreadyStarted` if a session exists, or
    /// `WizardError::Input` when the text fails validation.
    pub fn start_analysis(&mut self, problem_text: &str) -> Result<&Session, WizardError> {
        if self.session.is_some() {
            return Err(WizardError::AlreadyStarted);
        }
        let problem = InputText::parse(problem_text).map_err(|err| {
            tracing::warn!(error = %err, "rejected problem statement");
            err
        })?;

        tracing::info!(chars = problem.as_str().chars().count(), "analysis started");
        Ok(self
            .session
            .insert(Session::start(&problem, self.clock.now())))
    }

    /// Record an answer for the active question.
    ///
    /// Returns the phase after the transition: the next `InProgress` step, or
    /// `Completed` after the fifth answer.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NotStarted` without a session,
    /// `WizardError::Completed` once all answers are in, or
    /// `WizardError::Input` when the text fails validation.
    pub fn submit_answer(&mut self, answer: &str) -> Result<WizardPhase, WizardError> {
        let Some(session) = self.session.as_mut() else {
            return Err(WizardError::NotStarted);
        };
        if session.is_complete() {
            return Err(WizardError::Completed);
        }
        let answer = InputText::parse(answer).map_err(|err| {
            tracing::warn!(error = %err, step = session.current_index(), "rejected answer");
            err
        })?;

        match session.answer_current(&answer, self.clock.now())? {
            SessionProgress::Advanced { index } => {
                tracing::debug!(step = index, "advanced to next why");
                Ok(WizardPhase::InProgress(index))
            }
            SessionProgress::Completed => {
                tracing::info!(steps = session.steps().len(), "analysis completed");
                Ok(WizardPhase::Completed)
            }
        }
    }

    /// Drop the session, whatever state it is in.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("analysis reset");
        }
    }

    #[must_use]
    pub fn phase(&self) -> WizardPhase {
        WizardPhase::of(self.session.as_ref())
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(Session::current_step)
            .map(|step| step.question())
    }

    #[must_use]
    pub fn root_cause(&self) -> Option<&str> {
        self.session.as_ref().and_then(Session::root_cause)
    }

    /// `(answered, total)` question counts.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let answered = self.session.as_ref().map_or(0, Session::answered);
        (answered, WHY_COUNT)
    }

    #[must_use]
    pub fn report(&self) -> Option<Report> {
        self.session.as_ref().map(Report::from_session)
    }
}
