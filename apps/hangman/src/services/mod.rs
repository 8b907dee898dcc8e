pub mod game_flow;
pub mod sessions;

pub use game_flow::{GameFlowService, GuessReport};
pub use sessions::{SessionKey, SessionStore};
