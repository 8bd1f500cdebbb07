use std::{collections::HashSet, thread::sleep, time::{Duration, Instant}};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};
use snek::{Direction::{self, *}, Game, GameConfig, GameState, Snapshot, Vector};
use snek::{snake::Snake, valid_direction_change};

use crate::app_error::{AppError, Result};
use crate::term::{Coords, TermInt, TermManager};

const FRAME_INTERVAL_MS: u64 = 5;

const SNAKE_BODY_CHAR: char = '█';
const APPLE_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';

pub enum Outcome {
    PlayAgain,
    Quit,
}

/// Runs games of snake inside the terminal, one board at a time.
pub struct SnakeApp {
    config: GameConfig,
    seed: Option<u64>,
    paused_since: Option<Instant>,
    paused_total: Duration,
    term: TermManager,
}

impl SnakeApp {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let term = TermManager::new()?;
        Ok(SnakeApp { config, seed, paused_since: None, paused_total: Duration::default(), term })
    }

    /// Fits the board inside the terminal. Dimensions left at zero take all
    /// the room inside the border.
    pub fn initialize(&mut self) -> Result {
        let (w, h) = self.term.get_terminal_size();
        if w < 3 || h < 3 {
            return Err(AppError::TerminalTooSmall { width: w, height: h });
        }
        let (max_w, max_h) = (w - 2, h - 2);

        if self.config.width == 0 {
            self.config.width = max_w;
        }
        if self.config.height == 0 {
            self.config.height = max_h;
        }
        if self.config.width > max_w || self.config.height > max_h {
            warn!(
                "board {}x{} does not fit a {}x{} terminal, shrinking",
                self.config.width, self.config.height, w, h
            );
            self.config.width = self.config.width.min(max_w);
            self.config.height = self.config.height.min(max_h);
        }

        let requested_start = self.config.start;
        if self.config.centre_start_if_outside() {
            warn!(
                "start {} is off the {}x{} board, starting at {} instead",
                requested_start, self.config.width, self.config.height, self.config.start
            );
        }

        self.config.validate()?;
        self.term.setup()?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result {
        self.term.restore()?;
        Ok(())
    }

    pub fn show_intro(&mut self) -> Result<Outcome> {
        let lines = &[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(Outcome::Quit);
        }

        self.term.hide_message()?;
        Ok(Outcome::PlayAgain)
    }

    pub fn play(&mut self) -> Result<Outcome> {
        self.term.clear()?;
        self.term.draw_borders((self.config.width + 2, self.config.height + 2))?;
        self.term.hide_message()?;

        let mut game = match self.seed {
            Some(seed) => Game::with_seed(self.config.clone(), seed)?,
            None => Game::new(self.config.clone())?,
        };
        let started = Instant::now();
        self.paused_since = None;
        self.paused_total = Duration::default();

        let mut requested: Option<Direction> = None;
        let mut drawn = game.snapshot();
        self.draw_full(&drawn, game.snake().direction())?;

        loop {
            sleep(Duration::from_millis(FRAME_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue()? {
                match &key_ev {
                    ev if is_ctrl_c(ev) => return Ok(Outcome::Quit),
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') | KeyCode::Up => requested = Some(Up),
                        KeyCode::Char('a') | KeyCode::Left => requested = Some(Left),
                        KeyCode::Char('s') | KeyCode::Down => requested = Some(Down),
                        KeyCode::Char('d') | KeyCode::Right => requested = Some(Right),
                        KeyCode::Esc => self.toggle_pause()?,
                        _ => {}
                    }
                }
            }

            if self.paused_since.is_some() { continue; }

            let now_ms = (started.elapsed() - self.paused_total).as_secs_f64() * 1000.0;
            let result = game.tick(requested, now_ms);

            requested = settle_request(requested, game.snake());

            if result.is_terminal() {
                self.game_over(&game)?;
                break;
            }

            if result.needs_redraw() {
                let snap = game.snapshot();
                self.draw_update(&drawn, &snap, game.snake().direction())?;
                drawn = snap;
            }
        }

        // Quit if the user CTRL+C's after the game
        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(Outcome::Quit);
        }
        Ok(Outcome::PlayAgain)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn game_over(&mut self, game: &Game) -> Result {
        let score = game.fruits_eaten();
        let (title, reason) = match game.state() {
            GameState::Collided(cause) => ("Game over!", format!("The snake {}", cause)),
            GameState::BoardFull => ("You won!", "No room left for fruit".to_string()),
            GameState::Playing => ("Game over!", String::new()),
        };
        info!("game finished: {} {}, score {}", title, reason, score);

        if !matches!(game.state(), GameState::BoardFull) {
            for pos in game.snapshot().body {
                self.term.print_at(to_screen(pos), DEAD_SNAKE_CHAR)?;
            }
        }

        self.term.show_message(&[
            title,
            reason.as_str(),
            &*format!("Score: {}", score),
            "",
            "Press any key to play again,",
            "or CTRL+C to quit."
        ])?;
        Ok(())
    }

    fn draw_full(&mut self, snap: &Snapshot, dir: Direction) -> Result {
        let len = snap.body.len();

        for (i, pos) in snap.body.iter().enumerate() {
            let ch = if i == len - 1 {head_char(dir)} else {SNAKE_BODY_CHAR};
            self.term.print_at(to_screen(*pos), ch)?;
        }
        if let Some(fruit) = snap.fruit {
            self.term.print_at(to_screen(fruit), APPLE_CHAR)?;
        }

        self.term.flush()?;
        Ok(())
    }

    fn draw_update(&mut self, old: &Snapshot, new: &Snapshot, dir: Direction) -> Result {
        let still_there: HashSet<Vector> = new.body.iter().copied().collect();
        for pos in old.body.iter().filter(|pos| !still_there.contains(pos)) {
            self.term.print_at(to_screen(*pos), ' ')?;
        }
        if let Some(fruit) = old.fruit.filter(|f| Some(*f) != new.fruit && !still_there.contains(f)) {
            self.term.print_at(to_screen(fruit), ' ')?;
        }

        if let Some(old_head) = old.head().filter(|h| still_there.contains(h)) {
            self.term.print_at(to_screen(old_head), SNAKE_BODY_CHAR)?;
        }

        self.draw_full(new, dir)
    }

    fn toggle_pause(&mut self) -> Result {
        match self.paused_since.take() {
            None => {
                self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;
                self.paused_since = Some(Instant::now());
            }
            Some(since) => {
                self.term.hide_message()?;
                self.paused_total += since.elapsed();
            }
        }
        Ok(())
    }
}

/// Terminals report no key releases, so a pressed direction is offered to the
/// game every frame until the snake adopts it. A key pressed while a turn is
/// latched waits for the next step; one the snake can never take is dropped.
fn settle_request(requested: Option<Direction>, snake: &Snake) -> Option<Direction> {
    requested.filter(|&dir| {
        snake.direction() != dir
            && (snake.is_turning() || valid_direction_change(snake.direction(), dir))
    })
}

fn head_char(dir: Direction) -> char {
    match dir {
        Up => '^',
        Down => 'v',
        Left => '<',
        Right => '>',
    }
}

/// Board cells sit one column and one row inside the border.
fn to_screen(pos: Vector) -> Coords {
    ((pos.x + 1) as TermInt, (pos.y + 1) as TermInt)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
