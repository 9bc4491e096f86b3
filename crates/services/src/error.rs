//! Shared error types for the services crate.

use thiserror::Error;

use whys_core::model::{InputError, SessionError};

/// Errors emitted by `WizardService`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WizardError {
    #[error("enter a problem statement first")]
    NotStarted,
    #[error("an analysis is already running; reset to start over")]
    AlreadyStarted,
    #[error("analysis already completed")]
    Completed,
    #[error(transparent)]
    Input(#[from] InputError),
}

impl From<SessionError> for WizardError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Completed => Self::Completed,
        }
    }
}
