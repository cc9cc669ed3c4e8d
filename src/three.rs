//! Minimal bindings to the page's global `THREE` build (plus its FontLoader /
//! TextGeometry addons, loaded as globals by the page).

use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(js_namespace = THREE)]
extern "C" {
    // ---------------- math ----------------
    pub type Vector3;
    #[wasm_bindgen(method)]
    pub fn set(this: &Vector3, x: f64, y: f64, z: f64);
    #[wasm_bindgen(method, setter = y)]
    pub fn set_y(this: &Vector3, y: f64);

    pub type Euler;
    #[wasm_bindgen(method)]
    pub fn set(this: &Euler, x: f64, y: f64, z: f64);

    // ---------------- scene graph ----------------
    pub type Object3D;
    #[wasm_bindgen(method, getter)]
    pub fn position(this: &Object3D) -> Vector3;
    #[wasm_bindgen(method, getter)]
    pub fn rotation(this: &Object3D) -> Euler;
    #[wasm_bindgen(method)]
    pub fn add(this: &Object3D, child: &Object3D);

    #[wasm_bindgen(extends = Object3D)]
    pub type Scene;
    #[wasm_bindgen(constructor)]
    pub fn new() -> Scene;

    #[wasm_bindgen(extends = Object3D)]
    pub type Group;
    #[wasm_bindgen(constructor)]
    pub fn new() -> Group;

    #[wasm_bindgen(extends = Object3D)]
    pub type Mesh;
    #[wasm_bindgen(constructor)]
    pub fn new(geometry: &BufferGeometry, material: &Material) -> Mesh;

    #[wasm_bindgen(extends = Object3D)]
    pub type PerspectiveCamera;
    #[wasm_bindgen(constructor)]
    pub fn new(fov: f64, aspect: f64, near: f64, far: f64) -> PerspectiveCamera;
    #[wasm_bindgen(method, setter)]
    pub fn set_aspect(this: &PerspectiveCamera, aspect: f64);
    #[wasm_bindgen(method, js_name = updateProjectionMatrix)]
    pub fn update_projection_matrix(this: &PerspectiveCamera);

    // ---------------- lights ----------------
    #[wasm_bindgen(extends = Object3D)]
    pub type AmbientLight;
    #[wasm_bindgen(constructor)]
    pub fn new(color: u32, intensity: f64) -> AmbientLight;

    #[wasm_bindgen(extends = Object3D)]
    pub type DirectionalLight;
    #[wasm_bindgen(constructor)]
    pub fn new(color: u32, intensity: f64) -> DirectionalLight;

    // ---------------- geometry ----------------
    pub type BufferGeometry;
    #[wasm_bindgen(method)]
    pub fn center(this: &BufferGeometry) -> BufferGeometry;

    #[wasm_bindgen(extends = BufferGeometry)]
    pub type IcosahedronGeometry;
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, detail: u32) -> IcosahedronGeometry;

    #[wasm_bindgen(extends = BufferGeometry)]
    pub type OctahedronGeometry;
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, detail: u32) -> OctahedronGeometry;

    #[wasm_bindgen(extends = BufferGeometry)]
    pub type TetrahedronGeometry;
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, detail: u32) -> TetrahedronGeometry;

    #[wasm_bindgen(extends = BufferGeometry)]
    pub type DodecahedronGeometry;
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, detail: u32) -> DodecahedronGeometry;

    #[wasm_bindgen(extends = BufferGeometry)]
    pub type TorusGeometry;
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, tube: f64, radial: u32, tubular: u32) -> TorusGeometry;

    #[wasm_bindgen(extends = BufferGeometry)]
    pub type TorusKnotGeometry;
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, tube: f64, tubular: u32, radial: u32) -> TorusKnotGeometry;

    #[wasm_bindgen(extends = BufferGeometry)]
    pub type TextGeometry;
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str, params: &JsValue) -> TextGeometry;

    // ---------------- materials ----------------
    pub type Material;

    #[wasm_bindgen(extends = Material)]
    pub type MeshBasicMaterial;
    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue) -> MeshBasicMaterial;

    #[wasm_bindgen(extends = Material)]
    pub type MeshStandardMaterial;
    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue) -> MeshStandardMaterial;

    // ---------------- fonts ----------------
    pub type Font;

    pub type FontLoader;
    #[wasm_bindgen(constructor)]
    pub fn new() -> FontLoader;
    #[wasm_bindgen(method, catch)]
    pub fn parse(this: &FontLoader, json: &JsValue) -> Result<Font, JsValue>;

    // ---------------- renderer ----------------
    pub type WebGLRenderer;
    #[wasm_bindgen(constructor, catch)]
    pub fn new(params: &JsValue) -> Result<WebGLRenderer, JsValue>;
    #[wasm_bindgen(method, js_name = setSize)]
    pub fn set_size(this: &WebGLRenderer, width: f64, height: f64);
    #[wasm_bindgen(method, js_name = setPixelRatio)]
    pub fn set_pixel_ratio(this: &WebGLRenderer, ratio: f64);
    #[wasm_bindgen(method, getter = domElement)]
    pub fn dom_element(this: &WebGLRenderer) -> web::HtmlCanvasElement;
    #[wasm_bindgen(method)]
    pub fn render(this: &WebGLRenderer, scene: &Scene, camera: &PerspectiveCamera);
}

/// Build a plain JS object from key/value pairs, for THREE parameter bags.
pub fn params(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = js_sys::Object::new();
    for (k, v) in entries {
        _ = js_sys::Reflect::set(&obj, &JsValue::from_str(k), v);
    }
    obj.into()
}
