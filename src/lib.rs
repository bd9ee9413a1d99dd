//! # Connect N
//!
//! Generalized Connect Four: any board size, any run length `n`. Two players
//! alternately drop pieces into columns; the first to line up `n` pieces
//! horizontally, vertically, or diagonally wins.
//!
//! ## Modules
//!
//! - [`game`]: Board engine with gravity board, players, win and tie detection
//! - [`ai`]: Greedy one-ply bot (win, else block, else random)
//! - [`config`]: TOML configuration loading and validation
//! - [`ui`]: Terminal UI driver
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
