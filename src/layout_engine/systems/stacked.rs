use super::{Layout, LayoutId, LayoutStrategy, commit_tiled};
use crate::layout_engine::parts::{
    HalfSplitLayoutPart, LayoutPart, RotateLayoutPart, StackLayoutPart,
};
use crate::layout_engine::{EngineContext, LayoutCommand};
use crate::model::geometry::{Rect, RectDelta, Rotation};
use crate::model::window::{Tile, WindowId, ids_of};

type StackedParts = RotateLayoutPart<HalfSplitLayoutPart<StackLayoutPart, StackLayoutPart>>;

/// The first window on top, the others in bands underneath.
#[derive(Debug)]
pub struct StackedLayout {
    parts: StackedParts,
}

impl StackedLayout {
    pub fn new() -> Self {
        let mut split =
            HalfSplitLayoutPart::new(StackLayoutPart::default(), StackLayoutPart::default());
        split.angle = Rotation::R90;
        Self { parts: RotateLayoutPart::new(split) }
    }

    pub fn angle(&self) -> Rotation { self.parts.angle }
}

impl Default for StackedLayout {
    fn default() -> Self { Self::new() }
}

impl LayoutStrategy for StackedLayout {
    fn id(&self) -> LayoutId { LayoutId::Stacked }

    fn description(&self) -> String { "Stacked".to_string() }

    fn apply(&mut self, tiles: &mut [Tile], area: Rect, gap: i32) {
        let rects = self.parts.apply(area, &ids_of(tiles), gap);
        commit_tiled(tiles, rects);
    }

    fn adjust(&mut self, area: Rect, tiles: &[Tile], basis: WindowId, delta: RectDelta, gap: i32) {
        self.parts.adjust(area, &ids_of(tiles), basis, delta, gap);
    }

    fn handle_command(&mut self, _ctx: &mut dyn EngineContext, command: LayoutCommand) -> bool {
        match command {
            LayoutCommand::Rotate => {
                self.parts.rotate(90);
                true
            }
            _ => false,
        }
    }

    fn set_screen_rotation(&mut self, rotation: Rotation) { self.parts.set_angle(rotation); }

    fn clone_layout(&self) -> Layout {
        let mut other = StackedLayout::new();
        other.parts.inner.ratio = self.parts.inner.ratio;
        other.into()
    }
}
