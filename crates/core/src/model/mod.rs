mod session;
mod step;
mod text;

pub use session::{Session, SessionError, SessionProgress, WHY_COUNT, WizardPhase};
pub use step::{Step, why_question};
pub use text::{InputError, InputText, MAX_INPUT_CHARS, MIN_INPUT_CHARS};
