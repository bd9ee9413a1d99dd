use tracing::{debug, info};

use super::{Board, Player};
use crate::error::{ConfigError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Query and mutation surface of a Connect-N engine.
///
/// The bot only needs the query half, and takes any `&impl ConnectGame`.
pub trait ConnectGame {
    fn num_rows(&self) -> usize;
    fn num_cols(&self) -> usize;
    /// Run length needed to win.
    fn n(&self) -> usize;

    /// True iff `col` is on the board and not full.
    fn is_allowed(&self, col: usize) -> bool;

    /// Whether `player` dropping into `col` right now would complete a run of
    /// `n`. Hypothetical: the board is not touched.
    fn is_winner(&self, col: usize, player: Player) -> bool;

    /// Place `player`'s piece in `col` and update the terminal state.
    fn execute_move(&mut self, col: usize, player: Player) -> Result<(), MoveError>;

    fn done(&self) -> bool;
    fn winner_player(&self) -> Option<Player>;

    /// Owned snapshot of the cells, top row first.
    fn grid(&self) -> Vec<Vec<Option<Player>>>;

    /// Legal columns in ascending order; empty once the game is over.
    fn legal_columns(&self) -> Vec<usize> {
        if self.done() {
            return Vec::new();
        }
        (0..self.num_cols())
            .filter(|&col| self.is_allowed(col))
            .collect()
    }
}

/// The Connect-N engine: a gravity board, the run length, and the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectN {
    board: Board,
    n: usize,
    outcome: Option<GameOutcome>,
}

impl ConnectN {
    /// Start a game on an empty `rows x cols` board, won by a run of `n`.
    pub fn new(rows: usize, cols: usize, n: usize) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::ZeroRunLength);
        }
        if rows < n || cols < n {
            return Err(ConfigError::BoardTooSmall { rows, cols, n });
        }

        Ok(ConnectN {
            board: Board::new(rows, cols),
            n,
            outcome: None,
        })
    }

    /// Erase the board, keeping its size and `n`.
    pub fn reset(&mut self) {
        self.board.clear();
        self.outcome = None;
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The player at a position, if any
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Player> {
        self.board.get(row, col)
    }

    pub fn moves_played(&self) -> usize {
        self.board.piece_count()
    }
}

impl ConnectGame for ConnectN {
    fn num_rows(&self) -> usize {
        self.board.rows()
    }

    fn num_cols(&self) -> usize {
        self.board.cols()
    }

    fn n(&self) -> usize {
        self.n
    }

    fn is_allowed(&self, col: usize) -> bool {
        !self.board.is_column_full(col)
    }

    fn is_winner(&self, col: usize, player: Player) -> bool {
        self.board.would_win(col, player, self.n)
    }

    fn execute_move(&mut self, col: usize, player: Player) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }

        let row = self.board.drop_piece(col, player)?;
        debug!(%player, row, col, "piece placed");

        if self.board.check_win(row, col, self.n) {
            self.outcome = Some(GameOutcome::Winner(player));
            info!(%player, moves = self.moves_played(), "game won");
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            info!(moves = self.moves_played(), "game tied");
        }

        Ok(())
    }

    fn done(&self) -> bool {
        self.outcome.is_some()
    }

    fn winner_player(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    fn grid(&self) -> Vec<Vec<Option<Player>>> {
        self.board.to_rows()
    }
}
