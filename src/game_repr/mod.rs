mod action;
mod error;
mod game_state;
mod isolation;


pub use action::*;
pub use error::*;
pub use game_state::*;
pub use isolation::*;
