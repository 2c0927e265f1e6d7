use super::{Layout, LayoutId, LayoutStrategy};
use crate::model::geometry::Rect;
use crate::model::window::{Tile, WindowState};

/// Every window maximized over the tiling area.
#[derive(Debug, Default)]
pub struct MonocleLayout;

impl MonocleLayout {
    pub fn new() -> Self { Self }
}

impl LayoutStrategy for MonocleLayout {
    fn id(&self) -> LayoutId { LayoutId::Monocle }

    fn description(&self) -> String { "Monocle".to_string() }

    fn is_exclusive(&self) -> bool { true }

    fn apply(&mut self, tiles: &mut [Tile], area: Rect, _gap: i32) {
        for tile in tiles {
            tile.state = WindowState::Tiled;
            tile.commit(area);
        }
    }

    fn clone_layout(&self) -> Layout { MonocleLayout.into() }
}
