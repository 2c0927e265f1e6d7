pub mod geometry;
pub mod surface;
pub mod window;

pub use geometry::{Rect, RectDelta, Rotation, Size};
pub use surface::{Surface, SurfaceKey, VirtualDesktop};
pub use window::{Tile, WindowId, WindowState};
