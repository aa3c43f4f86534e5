use js_sys::JSON;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use glide_content_core::parse_site_content_json;
use glide_interaction_core::{Config, Engine, Inputs, LayoutMode, Outputs, PageCfg, PageId};

#[wasm_bindgen]
pub struct GlideInteraction {
    core: Engine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl GlideInteraction {
    /// Create a new engine instance. Pass a JSON config object or
    /// undefined/null for defaults.
    /// Example:
    ///   new GlideInteraction({ damping: 0.15, cooldown: 0.8 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GlideInteraction, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(GlideInteraction {
            core: Engine::new(cfg),
        })
    }

    /// Register a page. `cfg` is optional JSON matching PageCfg. Returns a
    /// PageId (u32).
    #[wasm_bindgen(js_name = add_page)]
    pub fn add_page(&mut self, name: String, cfg: JsValue) -> Result<u32, JsError> {
        let cfg_rs: PageCfg = if jsvalue_is_undefined_or_null(&cfg) {
            PageCfg::default()
        } else {
            swb::from_value(cfg).map_err(|e| JsError::new(&format!("page cfg error: {e}")))?
        };
        let id: PageId = self.core.add_page(&name, cfg_rs);
        Ok(id.0)
    }

    /// Step the controllers by dt (seconds) with inputs JSON. Returns Outputs
    /// JSON. Call once per requestAnimationFrame with the events gathered
    /// since the previous frame.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32, inputs_json: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs_json) {
            Inputs::default()
        } else {
            swb::from_value(inputs_json).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out: &Outputs = self.core.update(dt, inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Current section index of a paged page, or undefined.
    #[wasm_bindgen(js_name = section_index)]
    pub fn section_index(&self, page: u32) -> Option<u32> {
        self.core.section_index(PageId(page))
    }

    /// True when the host should preventDefault wheel events for this page.
    #[wasm_bindgen(js_name = wants_wheel_capture)]
    pub fn wants_wheel_capture(&self, page: u32) -> bool {
        self.core.wants_wheel_capture(PageId(page))
    }

    /// True while the viewport is below the mobile breakpoint.
    #[wasm_bindgen(js_name = layout_is_mobile)]
    pub fn layout_is_mobile(&self) -> bool {
        self.core.layout_mode() == LayoutMode::Mobile
    }
}

/// Parse and validate a SiteContent JS object, returning the normalized
/// content as a plain JS value. Throws on malformed or invalid content.
#[wasm_bindgen(js_name = load_site_content)]
pub fn load_site_content(data_json: JsValue) -> Result<JsValue, JsError> {
    if jsvalue_is_undefined_or_null(&data_json) {
        return Err(JsError::new("load_site_content: data_json is null/undefined"));
    }
    // Stringify the JS object so we can reuse the core parser (expects &str)
    let s = JSON::stringify(&data_json)
        .map_err(|e| JsError::new(&format!("load_site_content stringify error: {:?}", e)))?
        .as_string()
        .ok_or_else(|| JsError::new("load_site_content: stringify produced non-string"))?;
    let content = parse_site_content_json(&s)
        .map_err(|e| JsError::new(&format!("load_site_content parse error: {e}")))?;
    swb::to_value(&content).map_err(|e| JsError::new(&format!("content error: {e}")))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
