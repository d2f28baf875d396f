//! Browser host for the Pong simulation
//!
//! Draws the court on a 2D canvas and mirrors score and status into the page.
//! The wasm bindings only exist when compiling for wasm32; the rest is plain
//! Rust and is tested natively.

pub mod input;
pub mod renderer;
pub mod simulation;
pub mod ui;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::*;
