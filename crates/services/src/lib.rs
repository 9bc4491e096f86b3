#![forbid(unsafe_code)]

pub mod error;
pub mod report;
pub mod wizard_service;

pub use whys_core::Clock;

pub use error::WizardError;
pub use report::{Report, ReportStep};
pub use wizard_service::WizardService;
