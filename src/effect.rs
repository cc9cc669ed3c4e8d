use page_core::{EffectKind, EffectOptions, OptionValue, PageError};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(js_namespace = VANTA)]
extern "C" {
    #[wasm_bindgen(catch, js_name = DOTS)]
    fn vanta_dots(options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = TOPOLOGY)]
    fn vanta_topology(options: &JsValue) -> Result<JsValue, JsValue>;
}

fn options_object(options: &EffectOptions) -> JsValue {
    let obj = js_sys::Object::new();
    for (key, value) in options.entries() {
        let value = match value {
            OptionValue::Bool(b) => JsValue::from_bool(b),
            OptionValue::Number(n) => JsValue::from_f64(n),
            OptionValue::Text(s) => JsValue::from_str(s),
        };
        _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), &value);
    }
    obj.into()
}

/// Create the background effect. The returned handle is owned by the library
/// for the rest of the session; it is never reconfigured.
pub fn init_background(
    document: &web::Document,
    options: &EffectOptions,
) -> anyhow::Result<JsValue> {
    if document.query_selector(options.el).ok().flatten().is_none() {
        return Err(PageError::MissingElement(options.el.to_string()).into());
    }
    let js_options = options_object(options);
    let handle = match options.kind() {
        EffectKind::Dots => vanta_dots(&js_options),
        EffectKind::Topology => vanta_topology(&js_options),
    }
    .map_err(|e| PageError::Vendor(format!("VANTA.{}: {:?}", options.kind().constructor(), e)))?;
    log::info!("[effect] VANTA.{} bound to {}", options.kind().constructor(), options.el);
    Ok(handle)
}
