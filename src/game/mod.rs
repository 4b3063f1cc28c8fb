//! Round state machine and its collaborators
//!
//! `RoundState` is the heart of the game; `WordSource` feeds it targets and
//! accepted guesses, `KeyboardState` summarizes results for display, and
//! `Session` ties them together for the presentation layers.

mod error;
mod keyboard;
mod round;
mod session;
mod source;

pub use error::{SourceError, ValidationError};
pub use keyboard::{KEY_ROWS, KeyboardState};
pub use round::{MAX_ATTEMPTS, RoundState, RoundStatus};
pub use session::{Session, Statistics};
pub use source::WordSource;
