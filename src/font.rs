use crate::three;
use page_core::PageError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch and parse a typeface JSON. No retries; callers treat any error as
/// "no title text".
pub async fn fetch_font(url: &str) -> anyhow::Result<three::Font> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| PageError::Font(format!("{:?}", e)))?
        .dyn_into::<web::Response>()
        .map_err(|e| PageError::Font(format!("{:?}", e)))?;
    if !resp.ok() {
        return Err(PageError::Font(format!("HTTP {} for {}", resp.status(), url)).into());
    }
    let json_promise = resp
        .json()
        .map_err(|e| PageError::Font(format!("{:?}", e)))?;
    let json = JsFuture::from(json_promise)
        .await
        .map_err(|e| PageError::Font(format!("invalid JSON: {:?}", e)))?;
    let font = three::FontLoader::new()
        .parse(&json)
        .map_err(|e| PageError::Font(format!("typeface parse: {:?}", e)))?;
    Ok(font)
}
