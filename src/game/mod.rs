//! Game core
//!
//! Question order and answer checking, screen routing, and the session
//! facade that a front end renders from and sends player actions to.

pub mod router;
pub mod session;
pub mod state;

pub use router::{Router, RouterEvent, Screen, TitleKey, Transition};
pub use session::{Outcome, TriviaSession};
pub use state::{GameChange, GameState, Progress};
