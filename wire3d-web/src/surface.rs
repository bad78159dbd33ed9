/// Canvas 2D drawing surface
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};
use wire3d_core::{Color, DrawingSurface, Viewport};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_id(document: &Document, canvas_id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", canvas_id)))?;
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, context })
    }
}

impl DrawingSurface for CanvasSurface {
    /// Read live so a resized canvas is picked up on the next draw
    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self, background: Color) {
        let viewport = self.viewport();
        self.context.set_fill_style_str(&background.to_string());
        self.context.fill_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.context.set_stroke_style_str(&color.to_string());
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }
}
