pub mod command;
pub mod engine;
pub(crate) mod graph;
pub mod parts;
pub mod resize;
pub mod store;
pub mod systems;
pub mod utils;

pub use command::{LayoutCommand, ParseCommandError};
pub use engine::{EngineContext, LayoutEngine};
pub use graph::{Direction, Orientation};
pub use resize::ResizeValue;
pub use store::{LayoutStore, LayoutStoreEntry, ScreenLayoutRule};
pub use systems::{
    FloatingLayout, Layout, LayoutId, LayoutStrategy, MonocleLayout, StackedLayout, TileLayout,
};
