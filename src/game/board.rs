use crate::error::MoveError;

use super::Player;

/// Step vectors for the four axes a run can lie on: horizontal, vertical,
/// diagonal up-right (/), diagonal down-right (\). Row 0 is the top.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (1, 1)];

/// A `rows x cols` grid with gravity. Row 0 is the top, row `rows - 1` is the
/// bottom; pieces fill each column from the bottom up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells.
    cells: Vec<Option<Player>>,
    /// Number of pieces already in each column.
    heights: Vec<usize>,
}

impl Board {
    /// Create an empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![None; rows * cols],
            heights: vec![0; cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the piece at a position, `None` when empty or out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.heights.get(col) {
            Some(&height) => height >= self.rows,
            None => true,
        }
    }

    /// Row a piece dropped into `col` would land on right now.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if self.is_column_full(col) {
            return None;
        }
        Some(self.rows - 1 - self.heights[col])
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                col,
                cols: self.cols,
            });
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull { col })?;

        self.cells[row * self.cols + col] = Some(player);
        self.heights[col] += 1;
        Ok(row)
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h >= self.rows)
    }

    pub fn piece_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Empty every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.heights.fill(0);
    }

    /// Owned copy of the cells, one `Vec` per row, top row first.
    pub fn to_rows(&self) -> Vec<Vec<Option<Player>>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(<[_]>::to_vec)
            .collect()
    }

    /// True if the piece at `(row, col)` is part of a run of at least `n`.
    pub fn check_win(&self, row: usize, col: usize, n: usize) -> bool {
        match self.get(row, col) {
            Some(player) => self.completes_run(row, col, player, n),
            None => false,
        }
    }

    /// True if dropping `player` into `col` would complete a run of `n`.
    /// Reads the current fill height only; nothing is written.
    pub fn would_win(&self, col: usize, player: Player, n: usize) -> bool {
        match self.landing_row(col) {
            Some(row) => self.completes_run(row, col, player, n),
            None => false,
        }
    }

    /// Treat `(row, col)` as held by `player` and check every axis for a run
    /// of `n` through it. Scans at most `n - 1` cells each way.
    fn completes_run(&self, row: usize, col: usize, player: Player, n: usize) -> bool {
        let reach = n.saturating_sub(1);
        AXES.iter().any(|&(dr, dc)| {
            let forward = self.count_from(row, col, dr, dc, player, reach);
            let backward = self.count_from(row, col, -dr, -dc, player, reach);
            1 + forward + backward >= n
        })
    }

    /// Consecutive `player` pieces stepping away from `(row, col)` by
    /// `(dr, dc)`, not counting the start cell, capped at `limit`.
    fn count_from(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        player: Player,
        limit: usize,
    ) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while count < limit
            && r >= 0
            && c >= 0
            && (r as usize) < self.rows
            && (c as usize) < self.cols
            && self.cells[r as usize * self.cols + c as usize] == Some(player)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), None);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_piece_stacks_from_bottom() {
        let mut board = Board::new(6, 7);

        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Some(Player::Red));

        let row = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Some(Player::Yellow));
        assert_eq!(board.landing_row(3), Some(3));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(4, 5);
        for _ in 0..4 {
            board.drop_piece(0, Player::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
        assert_eq!(
            board.drop_piece(0, Player::Yellow),
            Err(MoveError::ColumnFull { col: 0 })
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(6, 7);
        assert_eq!(
            board.drop_piece(7, Player::Red),
            Err(MoveError::InvalidColumn { col: 7, cols: 7 })
        );
        assert!(board.is_column_full(7));
        assert_eq!(board.get(0, 7), None);
        assert_eq!(board.get(6, 0), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 3);
        for col in 0..3 {
            for _ in 0..2 {
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.piece_count(), 6);
    }

    #[test]
    fn test_clear_resets_heights() {
        let mut board = Board::new(3, 3);
        board.drop_piece(1, Player::Red).unwrap();
        board.clear();
        assert_eq!(board, Board::new(3, 3));
    }

    #[test]
    fn test_to_rows_is_a_copy() {
        let mut board = Board::new(2, 3);
        board.drop_piece(2, Player::Yellow).unwrap();

        let mut rows = board.to_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec![None, None, Some(Player::Yellow)]);

        rows[0][0] = Some(Player::Red);
        assert_eq!(board.get(0, 0), None);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new(6, 7);
        for col in 0..4 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        assert!(board.check_win(5, 2, 4));
        assert!(board.check_win(5, 0, 4));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new(6, 7);
        for _ in 0..4 {
            board.drop_piece(3, Player::Yellow).unwrap();
        }
        assert!(board.check_win(2, 3, 4));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new(6, 7);
        board.drop_piece(0, Player::Red).unwrap();

        board.drop_piece(1, Player::Yellow).unwrap();
        board.drop_piece(1, Player::Red).unwrap();

        board.drop_piece(2, Player::Yellow).unwrap();
        board.drop_piece(2, Player::Yellow).unwrap();
        board.drop_piece(2, Player::Red).unwrap();

        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        assert!(board.would_win(3, Player::Red, 4));

        let row = board.drop_piece(3, Player::Red).unwrap();
        assert!(board.check_win(row, 3, 4));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new(6, 7);
        board.drop_piece(6, Player::Red).unwrap();

        board.drop_piece(5, Player::Yellow).unwrap();
        board.drop_piece(5, Player::Red).unwrap();

        board.drop_piece(4, Player::Yellow).unwrap();
        board.drop_piece(4, Player::Yellow).unwrap();
        board.drop_piece(4, Player::Red).unwrap();

        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        let row = board.drop_piece(3, Player::Red).unwrap();

        assert!(board.check_win(row, 3, 4));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new(6, 7);
        for col in 0..3 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        assert!(!board.check_win(5, 1, 4));
        assert!(board.check_win(5, 1, 3));
    }

    #[test]
    fn test_would_win_fills_gap_in_middle() {
        let mut board = Board::new(6, 7);
        for col in [0, 1, 3] {
            board.drop_piece(col, Player::Yellow).unwrap();
        }
        let before = board.clone();

        assert!(board.would_win(2, Player::Yellow, 4));
        assert!(!board.would_win(2, Player::Red, 4));
        assert!(!board.would_win(4, Player::Yellow, 4));
        assert_eq!(board, before);
    }

    #[test]
    fn test_would_win_on_full_or_missing_column_is_false() {
        let mut board = Board::new(1, 3);
        board.drop_piece(0, Player::Red).unwrap();
        board.drop_piece(1, Player::Red).unwrap();
        assert!(board.would_win(2, Player::Red, 3));
        assert!(!board.would_win(0, Player::Red, 3));
        assert!(!board.would_win(5, Player::Red, 3));
    }

    #[test]
    fn test_scan_clips_at_corners() {
        let mut board = Board::new(5, 5);
        board.drop_piece(4, Player::Red).unwrap();
        assert!(!board.check_win(4, 4, 2));
        assert!(board.check_win(4, 4, 1));
        board.drop_piece(4, Player::Red).unwrap();
        assert!(board.check_win(3, 4, 2));
    }

    #[test]
    fn test_run_longer_than_n_still_wins() {
        let mut board = Board::new(3, 7);
        for col in [0, 1, 2, 4, 5, 6] {
            board.drop_piece(col, Player::Yellow).unwrap();
        }
        assert!(board.would_win(3, Player::Yellow, 4));
        assert!(board.would_win(3, Player::Yellow, 7));
    }
}
