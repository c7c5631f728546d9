pub mod drag;
pub mod mode;

pub use drag::DragScroll;
pub use mode::RenderMode;
