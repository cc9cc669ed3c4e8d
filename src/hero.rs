use crate::three;
use glam::{Vec2, Vec3};
use page_core::constants::*;
use page_core::{
    aspect_ratio, title_euler, CameraRig, DecorationField, DragController, Shape, TitleLine,
};
use rand::Rng;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Owns the THREE objects of the hero scene together with the state that
/// drives them. One instance per page, shared by the frame loop and the
/// scroll/pointer/resize handlers.
pub struct HeroScene {
    container: web::Element,
    renderer: three::WebGLRenderer,
    scene: three::Scene,
    camera: three::PerspectiveCamera,
    rig: CameraRig,
    field: DecorationField,
    meshes: Vec<three::Mesh>,
    title: Option<three::Group>,
    drag: DragController,
}

fn shape_geometry(shape: Shape) -> three::BufferGeometry {
    use wasm_bindgen::JsCast;
    let geo: JsValue = match shape {
        Shape::Icosahedron => three::IcosahedronGeometry::new(0.5, 0).into(),
        Shape::Octahedron => three::OctahedronGeometry::new(0.5, 0).into(),
        Shape::Torus => three::TorusGeometry::new(0.4, 0.12, 8, 24).into(),
        Shape::Tetrahedron => three::TetrahedronGeometry::new(0.5, 0).into(),
        Shape::TorusKnot => three::TorusKnotGeometry::new(0.35, 0.1, 48, 8).into(),
        Shape::Dodecahedron => three::DodecahedronGeometry::new(0.45, 0).into(),
    };
    geo.unchecked_into()
}

#[inline]
fn set_vec3(v: &three::Vector3, p: Vec3) {
    v.set(p.x as f64, p.y as f64, p.z as f64);
}

#[inline]
fn set_euler(e: &three::Euler, r: Vec3) {
    e.set(r.x as f64, r.y as f64, r.z as f64);
}

fn container_size(container: &web::Element) -> (f64, f64) {
    let rect = container.get_bounding_client_rect();
    (rect.width(), rect.height())
}

impl HeroScene {
    /// Build camera, lights, renderer and decorations inside `container`.
    /// Title text is attached later, once the font arrives.
    pub fn build(container: web::Element, rng: &mut impl Rng) -> anyhow::Result<Self> {
        let (width, height) = container_size(&container);
        let rig = CameraRig::default();

        let scene = three::Scene::new();
        let camera = three::PerspectiveCamera::new(
            rig.fov_deg as f64,
            aspect_ratio(width, height) as f64,
            rig.near as f64,
            rig.far as f64,
        );
        set_vec3(&camera.position(), rig.position);

        let renderer = three::WebGLRenderer::new(&three::params(&[
            ("alpha", JsValue::TRUE),
            ("antialias", JsValue::TRUE),
        ]))
        .map_err(|e| anyhow::anyhow!("WebGLRenderer: {:?}", e))?;
        renderer.set_size(width, height);
        if let Some(w) = web::window() {
            renderer.set_pixel_ratio(w.device_pixel_ratio());
        }
        container
            .append_child(&renderer.dom_element())
            .map_err(|e| anyhow::anyhow!("append renderer canvas: {:?}", e))?;

        scene.add(&three::AmbientLight::new(AMBIENT_COLOR, AMBIENT_INTENSITY as f64));
        let key = three::DirectionalLight::new(KEY_LIGHT_COLOR, KEY_LIGHT_INTENSITY as f64);
        set_vec3(&key.position(), KEY_LIGHT_POSITION);
        scene.add(&key);

        let field = DecorationField::spawn(rng);
        let material = three::MeshBasicMaterial::new(&three::params(&[
            ("color", JsValue::from(DECORATION_COLOR)),
            ("wireframe", JsValue::TRUE),
            ("transparent", JsValue::TRUE),
            ("opacity", JsValue::from_f64(DECORATION_OPACITY as f64)),
        ]));
        let meshes = field
            .decorations
            .iter()
            .map(|d| {
                let mesh = three::Mesh::new(&shape_geometry(d.shape), &material);
                set_vec3(&mesh.position(), d.position);
                set_euler(&mesh.rotation(), d.rotation);
                scene.add(&mesh);
                mesh
            })
            .collect::<Vec<_>>();
        log::info!("[scene] built with {} decorations ({}x{})", meshes.len(), width, height);

        Ok(Self {
            container,
            renderer,
            scene,
            camera,
            rig,
            field,
            meshes,
            title: None,
            drag: DragController::default(),
        })
    }

    pub fn container(&self) -> &web::Element {
        &self.container
    }

    pub fn attach_title(&mut self, font: &three::Font, lines: &[TitleLine]) {
        let material = three::MeshStandardMaterial::new(&three::params(&[
            ("color", JsValue::from(TEXT_COLOR)),
            ("metalness", JsValue::from_f64(0.3)),
            ("roughness", JsValue::from_f64(0.4)),
        ]));
        let group = three::Group::new();
        for line in lines {
            let geometry = three::TextGeometry::new(
                &line.text,
                &three::params(&[
                    ("font", JsValue::from(font.clone())),
                    ("size", JsValue::from_f64(line.size as f64)),
                    ("height", JsValue::from_f64(line.depth as f64)),
                    ("depth", JsValue::from_f64(line.depth as f64)),
                    ("curveSegments", JsValue::from(12)),
                    ("bevelEnabled", JsValue::FALSE),
                ]),
            );
            geometry.center();
            let mesh = three::Mesh::new(&geometry, &material);
            mesh.position().set_y(line.y as f64);
            group.add(&mesh);
        }
        set_euler(&group.rotation(), title_euler(self.drag.rotation));
        self.scene.add(&group);
        self.title = Some(group);
        log::info!("[scene] title attached ({} lines)", lines.len());
    }

    fn apply_title_rotation(&self) {
        if let Some(title) = &self.title {
            set_euler(&title.rotation(), title_euler(self.drag.rotation));
        }
    }

    /// One display frame: advance decorations, copy transforms, render.
    pub fn frame(&mut self) {
        self.field.tick();
        for (mesh, d) in self.meshes.iter().zip(&self.field.decorations) {
            set_euler(&mesh.rotation(), d.rotation);
            mesh.position().set_y(d.position.y as f64);
        }
        self.camera.position().set_y(self.rig.position.y as f64);
        self.renderer.render(&self.scene, &self.camera);
    }

    pub fn on_scroll(&mut self, scroll_offset: f64) {
        self.rig.follow_scroll(scroll_offset);
    }

    pub fn on_resize(&mut self) {
        let (width, height) = container_size(&self.container);
        self.camera.set_aspect(aspect_ratio(width, height) as f64);
        self.camera.update_projection_matrix();
        self.renderer.set_size(width, height);
    }

    pub fn pointer_down(&mut self, at: Vec2) {
        self.drag.pointer_down(at);
    }

    pub fn pointer_move(&mut self, at: Vec2) {
        if self.drag.pointer_move(at).is_some() {
            self.apply_title_rotation();
        }
    }

    pub fn pointer_up(&mut self) {
        if self.drag.is_dragging() {
            log::debug!(
                "[drag] released at pitch={:.2} yaw={:.2}",
                self.drag.rotation.x,
                self.drag.rotation.y
            );
        }
        self.drag.pointer_up();
    }
}
