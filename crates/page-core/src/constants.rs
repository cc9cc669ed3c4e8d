use glam::Vec3;

// Shared page tuning constants used by the web frontend and host tests.

// DOM contract
pub const VANTA_CONTAINER: &str = "#vanta-bg";
pub const SCENE_CONTAINER_ID: &str = "three-container";
pub const HERO_CONTENT: &str = ".hero-content";
pub const SCROLL_HINT: &str = ".scroll-hint";
pub const REVEAL_SELECTORS: [&str; 2] = [".fade-in", ".video-section"];
pub const VISIBLE_CLASS: &str = "visible";
pub const VARIANT_ATTRIBUTE: &str = "data-variant";

// Reveal-on-scroll
pub const VISIBILITY_THRESHOLD: f64 = 0.2; // fraction of the element inside the viewport
pub const OBSERVER_ROOT_MARGIN: &str = "0px";

// Parallax
pub const HERO_TRANSLATE_RATIO: f64 = 0.3; // px of translateY per px scrolled
pub const HERO_FADE_DISTANCE: f64 = 500.0; // hero fully transparent at this offset
pub const HINT_FADE_DISTANCE: f64 = 300.0; // scroll hint fully transparent at this offset
pub const CAMERA_SCROLL_RATIO: f32 = 0.005; // world units per px scrolled

// Drag-to-rotate
pub const DRAG_SENSITIVITY: f32 = 0.01; // radians per px
pub const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2;
pub const DRAG_END_EVENTS: [&str; 2] = ["pointerup", "pointercancel"];

// Floating decorations
pub const TIME_STEP: f32 = 0.01; // nominal per-frame advance, not wall clock
pub const FLOAT_AMPLITUDE: f32 = 0.002;
pub const ROTATION_SPEED_MAX: f32 = 0.01; // radians per frame, per axis
pub const FLOAT_SPEED_MIN: f32 = 0.5;
pub const FLOAT_SPEED_MAX: f32 = 1.5;

pub const DECORATION_LAYOUT: [Vec3; 6] = [
    Vec3::new(-4.0, 2.0, -2.0),
    Vec3::new(4.0, 1.5, -3.0),
    Vec3::new(-3.5, -2.0, -1.5),
    Vec3::new(3.5, -1.8, -2.5),
    Vec3::new(0.0, 3.0, -4.0),
    Vec3::new(0.0, -3.0, -3.5),
];

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Lights
pub const AMBIENT_COLOR: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const KEY_LIGHT_COLOR: u32 = 0xffffff;
pub const KEY_LIGHT_INTENSITY: f32 = 0.8;
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);

// Title text
pub const FONT_URL: &str = "https://threejs.org/examples/fonts/helvetiker_bold.typeface.json";
pub const TEXT_COLOR: u32 = 0xffffff;
pub const DECORATION_COLOR: u32 = 0x8ab4f8;
pub const DECORATION_OPACITY: f32 = 0.35;
