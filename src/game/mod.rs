//! Connect-N game logic: the gravity board, players, and the engine that
//! tracks whether a game has been won or tied.

mod board;
mod player;
mod state;

pub use board::Board;
pub use player::Player;
pub use state::{ConnectGame, ConnectN, GameOutcome};
