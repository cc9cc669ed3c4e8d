pub mod pointer;
pub mod scroll;

pub use pointer::wire_drag;
pub use scroll::{wire_parallax, wire_resize};
