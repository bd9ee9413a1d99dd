use crate::ai::Bot;
use crate::config::{GameConfig, PlayerKind};
use crate::error::{ConfigError, MoveError};
use crate::game::{ConnectGame, ConnectN, GameOutcome, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

const IDLE_POLL: Duration = Duration::from_millis(100);

pub struct App {
    game: ConnectN,
    current: Player,
    player1: PlayerKind,
    player2: PlayerKind,
    bot_delay: Duration,
    /// When the pending bot move may be played; armed at the start of a bot turn.
    bot_ready_at: Option<Instant>,
    rng: StdRng,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let game = config.new_game()?;
        let rng = match config.players.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(App {
            selected_column: game.num_cols() / 2,
            game,
            current: Player::FIRST,
            player1: config.players.player1,
            player2: config.players.player2,
            bot_delay: config.players.delay()?,
            bot_ready_at: None,
            rng,
            should_quit: false,
            message: None,
        })
    }

    pub fn game(&self) -> &ConnectN {
        &self.game
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Yellow is player 1, Red is player 2.
    pub fn kind_of(&self, player: Player) -> PlayerKind {
        match player {
            Player::Yellow => self.player1,
            Player::Red => self.player2,
        }
    }

    /// "Player 1", "Bot 2", ...
    pub fn side_name(&self, player: Player) -> String {
        let number = match player {
            Player::Yellow => 1,
            Player::Red => 2,
        };
        match self.kind_of(player) {
            PlayerKind::Human => format!("Player {number}"),
            PlayerKind::Bot => format!("Bot {number}"),
        }
    }

    /// Line printed once the terminal is restored.
    pub fn final_message(&self) -> Option<String> {
        match self.game.outcome()? {
            GameOutcome::Winner(player) => Some(format!("The winner is {}!", self.side_name(player))),
            GameOutcome::Draw => Some("It's a tie!".to_string()),
        }
    }

    fn is_bot_turn(&self) -> bool {
        !self.game.done() && self.kind_of(self.current) == PlayerKind::Bot
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            let timeout = match self.bot_deadline(now) {
                Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
                None => IDLE_POLL,
            };
            self.handle_events(timeout)?;

            if !self.should_quit && self.bot_due(Instant::now()) {
                self.play_bot_turn();
            }
        }
        Ok(())
    }

    /// Deadline for the current bot turn, armed on first call. `None` when a
    /// human is to move or the game is over.
    fn bot_deadline(&mut self, now: Instant) -> Option<Instant> {
        if !self.is_bot_turn() {
            self.bot_ready_at = None;
            return None;
        }
        Some(*self.bot_ready_at.get_or_insert(now + self.bot_delay))
    }

    /// Whether the bot to move has waited out its delay. Key presses in the
    /// meantime do not shorten the wait.
    pub fn bot_due(&mut self, now: Instant) -> bool {
        self.bot_deadline(now).is_some_and(|deadline| now >= deadline)
    }

    fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;
        let cols = self.game.num_cols();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_drop(self.selected_column);
            }
            KeyCode::Char(c) if c.is_ascii_digit() && cols <= 10 => {
                // '1'..'9' address columns 1-9, '0' is column 10.
                let col = match c.to_digit(10) {
                    Some(0) => 9,
                    Some(d) => d as usize - 1,
                    None => return,
                };
                if self.game.is_allowed(col) {
                    self.selected_column = col;
                    self.human_drop(col);
                }
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.current = Player::FIRST;
                self.bot_ready_at = None;
                self.selected_column = cols / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn human_drop(&mut self, col: usize) {
        if self.kind_of(self.current) == PlayerKind::Bot {
            self.message = Some("Wait for the bot to move.".to_string());
            return;
        }
        self.play(col);
    }

    /// Ask a bot bound to the current side for its move and play it.
    pub fn play_bot_turn(&mut self) {
        if self.game.done() {
            return;
        }
        let col = Bot::with_rng(&self.game, self.current, self.current.other(), &mut self.rng)
            .suggest_move();
        self.selected_column = col;
        self.play(col);
    }

    fn play(&mut self, col: usize) {
        match self.game.execute_move(col, self.current) {
            Ok(()) => {
                debug!(player = %self.current, col, "move applied");
                self.bot_ready_at = None;
                if self.game.done() {
                    self.message = self.final_message();
                } else {
                    self.current = self.current.other();
                }
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}
