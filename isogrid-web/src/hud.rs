use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Coin counter overlay. The observed behavior is a static initial value;
/// `set_coins` is the only mutation path.
pub struct Hud {
    counter: HtmlElement,
}

impl Hud {
    pub fn new(document: &Document, counter_id: &str) -> Result<Self, JsValue> {
        let counter = document
            .get_element_by_id(counter_id)
            .ok_or("HUD counter element not found")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| "HUD counter is not an HTML element")?;
        Ok(Self { counter })
    }

    pub fn set_coins(&self, coins: u32) {
        self.counter.set_text_content(Some(&coins.to_string()));
    }
}
