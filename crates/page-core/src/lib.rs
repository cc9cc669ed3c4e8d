pub mod constants;
pub mod decoration;
pub mod drag;
pub mod effect;
pub mod error;
pub mod parallax;
pub mod reveal;
pub mod scene;
pub mod variant;

pub use decoration::*;
pub use drag::*;
pub use effect::*;
pub use error::PageError;
pub use parallax::*;
pub use reveal::*;
pub use scene::*;
pub use variant::*;
