//! Terminal UI for playing Connect-N: humans pick columns with the keyboard,
//! bot sides are driven by [`crate::ai::Bot`].

mod app;
mod game_view;

pub use app::App;
