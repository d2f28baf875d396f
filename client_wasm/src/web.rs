//! wasm-bindgen exports driven by the page script

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

use crate::renderer::{scene, CanvasRenderer};
use crate::simulation::LocalGame;
use crate::ui::DomHud;

/// Main client state
struct Client {
    local: LocalGame,
    renderer: CanvasRenderer,
    hud: DomHud,
}

impl Client {
    fn render(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        let frame = self.local.frame(timestamp_ms);
        self.hud.show(&frame.notices);
        self.renderer.draw(&scene(&frame.snapshot))
    }
}

// Global client storage for WASM bindings
thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, JsValue>) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => f(client),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

/// Set up the game on `canvas`. Without a seed one is drawn from `Math.random`.
#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement, seed: Option<f64>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Already set on a second init
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = seed.unwrap_or_else(|| js_sys::Math::random() * u32::MAX as f64) as u64;
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let local = LocalGame::new(canvas.width() as f32, canvas.height() as f32, seed)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let renderer = CanvasRenderer::new(&canvas)?;
    let hud = DomHud::from_document(&document)?;

    log::info!(
        "client ready: {}x{} court, seed {seed}",
        canvas.width(),
        canvas.height()
    );
    CLIENT.with(|cell| {
        *cell.borrow_mut() = Some(Client {
            local,
            renderer,
            hud,
        })
    });
    Ok(())
}

/// Returns true when the game handled the key
#[wasm_bindgen]
pub fn key_down(event: &KeyboardEvent) -> Result<bool, JsValue> {
    with_client(|client| Ok(client.local.key_down(&event.key(), &event.code())))
}

#[wasm_bindgen]
pub fn key_up(event: &KeyboardEvent) -> Result<(), JsValue> {
    with_client(|client| {
        client.local.key_up(&event.key());
        Ok(())
    })
}

#[wasm_bindgen]
pub fn release_keys() -> Result<(), JsValue> {
    with_client(|client| {
        client.local.release_keys();
        Ok(())
    })
}

/// Start button
#[wasm_bindgen]
pub fn start_game() -> Result<bool, JsValue> {
    with_client(|client| Ok(client.local.start()))
}

#[wasm_bindgen]
pub fn render_frame(timestamp_ms: f64) -> Result<(), JsValue> {
    with_client(|client| client.render(timestamp_ms))
}
