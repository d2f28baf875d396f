use game_core::{Config, ConfigError, FrameClock, Game, InputState, Notice, WorldSnapshot};

use crate::input::{handle_key_down, handle_key_up};

/// Output of one animation frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub snapshot: WorldSnapshot,
    pub notices: Vec<Notice>,
}

/// A local two-player session: the game plus the host-side input and clock
pub struct LocalGame {
    pub game: Game,
    pub input: InputState,
    pub clock: FrameClock,
}

impl LocalGame {
    /// Court dimensions come from the canvas
    pub fn new(width: f32, height: f32, seed: u64) -> Result<Self, ConfigError> {
        let config = Config::for_court(width, height)?;
        Ok(Self {
            game: Game::new(config, seed),
            input: InputState::new(),
            clock: FrameClock::new(),
        })
    }

    /// Returns true when the game uses the key, so the page can suppress scrolling
    pub fn key_down(&mut self, key: &str, code: &str) -> bool {
        let bound = self.game.bindings().is_bound(key, code);
        if handle_key_down(&mut self.input, self.game.bindings(), key, code) {
            self.game.start();
        }
        bound
    }

    pub fn key_up(&mut self, key: &str) {
        handle_key_up(&mut self.input, key);
    }

    /// Drop all held keys and re-prime the clock, e.g. when the window loses focus
    pub fn release_keys(&mut self) {
        self.input.clear();
        self.clock.reset();
    }

    pub fn start(&mut self) -> bool {
        self.game.start()
    }

    /// Run one animation frame at the host timestamp (ms)
    pub fn frame(&mut self, timestamp_ms: f64) -> Frame {
        let dt = self.clock.tick(timestamp_ms);
        self.game.apply_input(&self.input);
        let snapshot = self.game.advance(dt);
        Frame {
            snapshot,
            notices: self.game.drain_notices(),
        }
    }
}
