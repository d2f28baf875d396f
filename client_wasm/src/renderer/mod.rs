//! Canvas drawing
//!
//! `scene` turns a snapshot into a flat list of shapes; the canvas backend
//! only knows how to paint those.

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use game_core::{PaddleSnapshot, WorldSnapshot};

pub const CENTER_LINE_COLOR: &str = "#1f2a44";
pub const CENTER_LINE_DASH: [f64; 2] = [10.0, 16.0];
pub const FOREGROUND_COLOR: &str = "#f5f7ff";

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Clear {
        width: f64,
        height: f64,
    },
    DashedLine {
        from: (f64, f64),
        to: (f64, f64),
        dash: [f64; 2],
        color: &'static str,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &'static str,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: &'static str,
    },
}

fn paddle_rect(paddle: &PaddleSnapshot) -> Shape {
    Shape::Rect {
        x: f64::from(paddle.x),
        y: f64::from(paddle.y),
        width: f64::from(paddle.width),
        height: f64::from(paddle.height),
        color: FOREGROUND_COLOR,
    }
}

/// Shapes for one frame, back to front
pub fn scene(snapshot: &WorldSnapshot) -> Vec<Shape> {
    let width = f64::from(snapshot.court_width);
    let height = f64::from(snapshot.court_height);

    vec![
        Shape::Clear { width, height },
        Shape::DashedLine {
            from: (width / 2.0, 0.0),
            to: (width / 2.0, height),
            dash: CENTER_LINE_DASH,
            color: CENTER_LINE_COLOR,
        },
        paddle_rect(&snapshot.left_paddle),
        paddle_rect(&snapshot.right_paddle),
        Shape::Circle {
            x: f64::from(snapshot.ball.x),
            y: f64::from(snapshot.ball.y),
            radius: f64::from(snapshot.ball.radius),
            color: FOREGROUND_COLOR,
        },
    ]
}
