use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Shape;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        Ok(Self { ctx })
    }

    pub fn draw(&self, shapes: &[Shape]) -> Result<(), JsValue> {
        for shape in shapes {
            match *shape {
                Shape::Clear { width, height } => self.ctx.clear_rect(0.0, 0.0, width, height),
                Shape::DashedLine {
                    from,
                    to,
                    dash,
                    color,
                } => {
                    let pattern = js_sys::Array::of2(&dash[0].into(), &dash[1].into());
                    self.ctx.set_stroke_style_str(color);
                    self.ctx.set_line_dash(&pattern)?;
                    self.ctx.begin_path();
                    self.ctx.move_to(from.0, from.1);
                    self.ctx.line_to(to.0, to.1);
                    self.ctx.stroke();
                    self.ctx.set_line_dash(&js_sys::Array::new())?;
                }
                Shape::Rect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill_rect(x, y, width, height);
                }
                Shape::Circle {
                    x,
                    y,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.begin_path();
                    self.ctx.arc(x, y, radius, 0.0, TAU)?;
                    self.ctx.fill();
                }
            }
        }
        Ok(())
    }
}
