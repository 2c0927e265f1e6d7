use super::{Layout, LayoutId, LayoutStrategy};
use crate::model::geometry::Rect;
use crate::model::window::{Tile, WindowState};

/// Leaves windows where the user put them.
#[derive(Debug, Default)]
pub struct FloatingLayout;

impl FloatingLayout {
    pub fn new() -> Self { Self }
}

impl LayoutStrategy for FloatingLayout {
    fn id(&self) -> LayoutId { LayoutId::Floating }

    fn description(&self) -> String { "Floating".to_string() }

    fn apply(&mut self, tiles: &mut [Tile], _area: Rect, _gap: i32) {
        for tile in tiles {
            tile.state = WindowState::TiledAfloat;
        }
    }

    fn clone_layout(&self) -> Layout { FloatingLayout.into() }
}
