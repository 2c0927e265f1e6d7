use enum_dispatch::enum_dispatch;
use strum::{Display, EnumIter, EnumString};

use crate::common::config::LayoutConfig;
use crate::layout_engine::{EngineContext, LayoutCommand};
use crate::model::geometry::{Rect, RectDelta, Rotation};
use crate::model::window::{Tile, WindowId, WindowState};

mod floating;
mod monocle;
mod stacked;
mod tile;

pub use floating::FloatingLayout;
pub use monocle::MonocleLayout;
pub use stacked::StackedLayout;
pub use tile::TileLayout;

/// Stable identity of a strategy, used in configuration and as the key of a
/// surface's layout cache.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter
)]
#[strum(ascii_case_insensitive)]
pub enum LayoutId {
    #[strum(to_string = "TileLayout", serialize = "tile")]
    Tile,
    #[strum(to_string = "MonocleLayout", serialize = "monocle")]
    Monocle,
    #[strum(to_string = "StackedLayout", serialize = "stacked")]
    Stacked,
    #[strum(to_string = "FloatingLayout", serialize = "floating")]
    Floating,
}

impl LayoutId {
    pub fn build(self, config: &LayoutConfig) -> Layout {
        match self {
            LayoutId::Tile => TileLayout::new(config.tile_initial_rotation()).into(),
            LayoutId::Monocle => MonocleLayout::new().into(),
            LayoutId::Stacked => StackedLayout::new().into(),
            LayoutId::Floating => FloatingLayout::new().into(),
        }
    }
}

#[enum_dispatch]
pub trait LayoutStrategy {
    fn id(&self) -> LayoutId;

    /// Maximum number of windows this strategy tiles; the rest are left alone.
    fn capacity(&self) -> Option<usize> { None }

    /// Short human readable label, shown when the layout changes.
    fn description(&self) -> String;

    /// Exclusive layouts toggle back to the previous one when selected twice.
    fn is_exclusive(&self) -> bool { false }

    fn apply(&mut self, tiles: &mut [Tile], area: Rect, gap: i32);

    /// Folds an interactive resize of `basis` into the strategy's tunables.
    fn adjust(
        &mut self,
        _area: Rect,
        _tiles: &[Tile],
        _basis: WindowId,
        _delta: RectDelta,
        _gap: i32,
    ) {
    }

    /// Returns whether the command was consumed.
    fn handle_command(&mut self, _ctx: &mut dyn EngineContext, _command: LayoutCommand) -> bool {
        false
    }

    fn set_screen_rotation(&mut self, _rotation: Rotation) {}

    /// A fresh instance carrying over the tunable parameters only.
    fn clone_layout(&self) -> Layout;
}

#[derive(Debug)]
#[enum_dispatch(LayoutStrategy)]
pub enum Layout {
    Tile(TileLayout),
    Stacked(StackedLayout),
    Monocle(MonocleLayout),
    Floating(FloatingLayout),
}

impl Layout {
    pub fn as_tile(&self) -> Option<&TileLayout> {
        match self {
            Layout::Tile(tile) => Some(tile),
            _ => None,
        }
    }
}

/// Writes `rects` into `tiles` pairwise and marks them tiled.
fn commit_tiled(tiles: &mut [Tile], rects: Vec<Rect>) {
    for (tile, rect) in tiles.iter_mut().zip(rects) {
        tile.state = WindowState::Tiled;
        tile.commit(rect);
    }
}
