//! Move selection for computer players.

mod bot;

pub use bot::Bot;
