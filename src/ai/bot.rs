use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::game::{ConnectGame, Player};

/// Greedy one-ply bot:
/// 1. take a winning move if there is one,
/// 2. otherwise block the opponent's winning spot,
/// 3. otherwise pick a legal column at random.
///
/// The bot borrows the game read-only, so it can simulate but never play.
pub struct Bot<'a, G: ?Sized, R = StdRng> {
    game: &'a G,
    player: Player,
    opponent: Player,
    rng: R,
}

impl<'a, G: ConnectGame + ?Sized> Bot<'a, G> {
    pub fn new(game: &'a G, player: Player, opponent: Player) -> Self {
        Self::with_rng(game, player, opponent, StdRng::from_os_rng())
    }
}

impl<'a, G: ConnectGame + ?Sized, R: Rng> Bot<'a, G, R> {
    /// Bind a bot with an explicit randomness source for the fallback pick.
    pub fn with_rng(game: &'a G, player: Player, opponent: Player, rng: R) -> Self {
        Bot {
            game,
            player,
            opponent,
            rng,
        }
    }

    /// Choose a column. Columns are scanned in ascending order, so ties in
    /// steps 1 and 2 go to the lowest index.
    ///
    /// # Panics
    ///
    /// If no column is legal. Callers check `done()` first.
    pub fn suggest_move(&mut self) -> usize {
        let mut blocking = Vec::new();
        let mut quiet = Vec::new();

        for col in 0..self.game.num_cols() {
            if !self.game.is_allowed(col) {
                continue;
            }

            if self.game.is_winner(col, self.player) {
                debug!(player = %self.player, col, "bot takes winning move");
                return col;
            } else if self.game.is_winner(col, self.opponent) {
                blocking.push(col);
            } else {
                quiet.push(col);
            }
        }

        if let Some(&col) = blocking.first() {
            debug!(player = %self.player, col, threats = blocking.len(), "bot blocks");
            return col;
        }

        assert!(!quiet.is_empty(), "suggest_move called with no legal columns");
        let col = quiet[self.rng.random_range(0..quiet.len())];
        debug!(player = %self.player, col, candidates = quiet.len(), "bot picks at random");
        col
    }
}
