//! Held-key tracking and key → paddle intent translation

use std::collections::BTreeSet;

use crate::{PaddleIntent, Side};

/// A key a binding reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A letter key; upper and lower case match alike
    Letter(char),
    /// A named key identifier (`"ArrowUp"`, `" "`), matched exactly
    Named(&'static str),
}

impl Key {
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Key::Letter(letter) => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.eq_ignore_ascii_case(letter),
                    _ => false,
                }
            }
            Key::Named(name) => key == *name,
        }
    }
}

/// Keys assigned to each paddle direction and to the start command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub left_up: Vec<Key>,
    pub left_down: Vec<Key>,
    pub right_up: Vec<Key>,
    pub right_down: Vec<Key>,
    pub start: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: vec![Key::Letter('w')],
            left_down: vec![Key::Letter('s')],
            right_up: vec![Key::Named("ArrowUp")],
            right_down: vec![Key::Named("ArrowDown")],
            // Matched against both the key value and the physical key code
            start: vec![Key::Named(" "), Key::Named("Space")],
        }
    }
}

impl KeyBindings {
    /// Whether a key press (by value or by physical code) issues the start command
    pub fn is_start(&self, key: &str, code: &str) -> bool {
        self.start.iter().any(|k| k.matches(key) || k.matches(code))
    }

    /// Whether the game reacts to this key at all
    pub fn is_bound(&self, key: &str, code: &str) -> bool {
        self.is_start(key, code)
            || [&self.left_up, &self.left_down, &self.right_up, &self.right_down]
                .iter()
                .any(|binding| binding.iter().any(|k| k.matches(key)))
    }
}

/// Set of currently held key identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: BTreeSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        if !self.held.contains(key) {
            self.held.insert(key.to_owned());
        }
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Forget every held key (e.g. when the page loses focus)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, binding: &[Key]) -> bool {
        self.held
            .iter()
            .any(|held| binding.iter().any(|k| k.matches(held)))
    }

    /// Translate the held keys into a paddle intent for one side
    pub fn intent(&self, side: Side, bindings: &KeyBindings) -> PaddleIntent {
        let (up, down) = match side {
            Side::Left => (&bindings.left_up, &bindings.left_down),
            Side::Right => (&bindings.right_up, &bindings.right_down),
        };
        PaddleIntent::from_keys(self.is_held(up), self.is_held(down))
    }

    /// Intents for (left, right)
    pub fn intents(&self, bindings: &KeyBindings) -> (PaddleIntent, PaddleIntent) {
        (
            self.intent(Side::Left, bindings),
            self.intent(Side::Right, bindings),
        )
    }
}
