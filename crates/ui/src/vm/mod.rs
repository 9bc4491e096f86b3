mod time_fmt;
mod wizard_vm;

pub use time_fmt::{format_datetime, format_elapsed};
pub use wizard_vm::{RootCauseVm, StepVm, WizardIntent, WizardVm, validate_draft};
