//! Keyboard input handling

use game_core::{InputState, KeyBindings};

/// Handle key down event; returns true when the key issues the start command
pub fn handle_key_down(
    input: &mut InputState,
    bindings: &KeyBindings,
    key: &str,
    code: &str,
) -> bool {
    input.press(key);
    bindings.is_start(key, code)
}

/// Handle key up event
pub fn handle_key_up(input: &mut InputState, key: &str) {
    input.release(key);
}
