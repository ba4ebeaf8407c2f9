// Terminal quiz: question generation and the timed answer session.
pub mod question;
pub mod session;

pub use session::{FailCause, Outcome, PuzzleKey, PuzzleRules, PuzzleSession};
