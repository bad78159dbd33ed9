/// Toolbar values read from, and written back to, the page's form controls
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};
use wire3d_core::config::fields;
use wire3d_core::{ConfigSource, ToolbarState};

/// Class put on the label wrapping the selected shape's checkbox
const ACTIVE_CLASS: &str = "active";

/// Form controls looked up by element id; field names double as ids
pub struct FormConfig {
    document: Document,
}

impl FormConfig {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            log::warn!("no form control with id '{}'", id);
        }
        element
    }

    fn value(&self, id: &str) -> Option<String> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        element.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
    }

    fn set_value(&self, id: &str, value: &str) {
        let Some(element) = self.element(id) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    /// Show a shape's transform and color in the toolbar
    pub fn write_toolbar(&self, state: &ToolbarState) {
        let values = state
            .translation
            .iter()
            .chain(&state.scale)
            .chain(&state.rotation_degrees);
        for (field, value) in fields::TRANSFORM.iter().zip(values) {
            self.set_value(field, &format_number(*value));
        }
        self.set_value(fields::COLOR, &state.color.to_string());
    }

    /// Highlight the selected shape's checkbox and make it visible
    pub fn mark_selected<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
        selected: &str,
    ) -> Result<(), JsValue> {
        for name in names {
            let Some(element) = self.element(name) else {
                continue;
            };
            let label = element.parent_element();
            if name == selected {
                if let Some(label) = label {
                    label.class_list().add_1(ACTIVE_CLASS)?;
                }
                if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                    input.set_checked(true);
                }
            } else if let Some(label) = label {
                label.class_list().remove_1(ACTIVE_CLASS)?;
            }
        }
        Ok(())
    }
}

impl ConfigSource for FormConfig {
    fn number(&self, name: &str) -> f64 {
        self.value(name).map_or(f64::NAN, |v| parse_number(&v))
    }

    fn text(&self, name: &str) -> String {
        self.value(name).unwrap_or_default()
    }

    fn flag(&self, name: &str) -> bool {
        self.element(name)
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
            .is_some_and(|input| input.checked())
    }
}

/// Coerce a form value the way a browser does: blank is zero, junk is NaN
pub fn parse_number(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }
    value.parse().unwrap_or(f64::NAN)
}

/// Render a toolbar number without float noise from degree conversion
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    rounded.to_string()
}
