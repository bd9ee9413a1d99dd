use std::fmt;

/// One of the two sides of a game. Only identity matters; there is no
/// ordering between players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// The side that opens a new game.
    pub const FIRST: Player = Player::Yellow;

    /// Get the opposing player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_an_involution() {
        assert_eq!(Player::Red.other(), Player::Yellow);
        assert_eq!(Player::Yellow.other(), Player::Red);
        assert_eq!(Player::Red.other().other(), Player::Red);
    }

    #[test]
    fn test_yellow_opens() {
        assert_eq!(Player::FIRST, Player::Yellow);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Player::Red.to_string(), "Red");
        assert_eq!(format!("{}", Player::Yellow), "Yellow");
    }
}
