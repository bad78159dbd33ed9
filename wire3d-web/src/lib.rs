/// Wire3D Web - canvas wireframe editor driven by an HTML toolbar
///
/// The page supplies a canvas, an input per toolbar field (`tx` .. `rz`,
/// `fov`, `objColor`, `bgColor`, `projection`) and a checkbox per shape
/// whose id is the shape name. Call `update` from the inputs' change
/// handlers and `select` from the checkboxes.
use std::fmt::Display;
use wasm_bindgen::prelude::*;
use wire3d_core::Scene;

pub mod form;
pub mod surface;

pub use form::FormConfig;
pub use surface::CanvasSurface;

fn js_error(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WebRenderer {
    scene: Scene,
    surface: CanvasSurface,
    form: FormConfig,
}

impl WebRenderer {
    fn sync_toolbar(&self) -> Result<(), JsValue> {
        self.form
            .mark_selected(self.scene.names(), self.scene.selected_name())?;
        self.form.write_toolbar(&self.scene.toolbar());
        Ok(())
    }
}

#[wasm_bindgen]
impl WebRenderer {
    /// Bind to a canvas and load the demo scene, with its first shape selected
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebRenderer, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let surface = CanvasSurface::from_id(&document, canvas_id)?;

        let scene = Scene::demo();
        log::info!("loaded demo scene with {} shapes", scene.len());
        let renderer = WebRenderer {
            scene,
            surface,
            form: FormConfig::new(document),
        };
        renderer.sync_toolbar()?;
        Ok(renderer)
    }

    /// Make a shape the target of toolbar edits
    pub fn select(&mut self, name: &str) -> Result<(), JsValue> {
        self.scene.select(name).map_err(js_error)?;
        self.sync_toolbar()?;
        self.draw()
    }

    /// Apply the toolbar to the selected shape and redraw
    pub fn update(&mut self) -> Result<(), JsValue> {
        self.scene.update(&self.form).map_err(js_error)?;
        self.draw()
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.scene.reset();
        self.form.write_toolbar(&self.scene.toolbar());
        self.draw()
    }

    pub fn draw(&mut self) -> Result<(), JsValue> {
        self.scene.draw(&self.form, &mut self.surface).map_err(js_error)
    }

    #[wasm_bindgen(js_name = selectedName)]
    pub fn selected_name(&self) -> String {
        self.scene.selected_name().to_string()
    }

    #[wasm_bindgen(js_name = shapeNames)]
    pub fn shape_names(&self) -> Vec<String> {
        self.scene.names().map(str::to_string).collect()
    }
}
