use tracing::trace;

use super::{Layout, LayoutId, LayoutStrategy, commit_tiled};
use crate::layout_engine::parts::{
    HalfSplitLayoutPart, LayoutPart, RotateLayoutPart, StackLayoutPart,
};
use crate::layout_engine::utils::clip;
use crate::layout_engine::{EngineContext, LayoutCommand};
use crate::model::geometry::{Rect, RectDelta, Rotation};
use crate::model::window::{Tile, WindowId, ids_of};

type TileParts =
    RotateLayoutPart<HalfSplitLayoutPart<RotateLayoutPart<StackLayoutPart>, StackLayoutPart>>;

/// Master area on one side, the remaining windows stacked on the other.
#[derive(Debug)]
pub struct TileLayout {
    parts: TileParts,
    initial_angle: Rotation,
    capacity: Option<usize>,
}

impl TileLayout {
    pub const MIN_MASTER_RATIO: f64 = 0.2;
    pub const MAX_MASTER_RATIO: f64 = 0.8;
    pub const MASTER_RATIO_STEP: f64 = 0.05;
    pub const MAX_MASTERS: usize = 10;

    pub fn new(initial_angle: Rotation) -> Self {
        let split = HalfSplitLayoutPart::new(
            RotateLayoutPart::new(StackLayoutPart::default()),
            StackLayoutPart::default(),
        );
        Self {
            parts: RotateLayoutPart::with_angle(split, initial_angle),
            initial_angle,
            capacity: None,
        }
    }

    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn master_ratio(&self) -> f64 { self.parts.inner.ratio }

    pub fn num_master(&self) -> usize { self.parts.inner.primary_size }

    pub fn angle(&self) -> Rotation { self.parts.angle }

    pub fn master_angle(&self) -> Rotation { self.parts.inner.primary.angle }

    fn set_master_ratio(&mut self, ratio: f64) {
        self.parts.inner.ratio = clip(ratio, Self::MIN_MASTER_RATIO, Self::MAX_MASTER_RATIO);
    }
}

impl LayoutStrategy for TileLayout {
    fn id(&self) -> LayoutId { LayoutId::Tile }

    fn capacity(&self) -> Option<usize> { self.capacity }

    fn description(&self) -> String { format!("Tile [{}]", self.num_master()) }

    fn apply(&mut self, tiles: &mut [Tile], area: Rect, gap: i32) {
        let rects = self.parts.apply(area, &ids_of(tiles), gap);
        commit_tiled(tiles, rects);
    }

    fn adjust(&mut self, area: Rect, tiles: &[Tile], basis: WindowId, delta: RectDelta, gap: i32) {
        self.parts.adjust(area, &ids_of(tiles), basis, delta, gap);
    }

    fn handle_command(&mut self, ctx: &mut dyn EngineContext, command: LayoutCommand) -> bool {
        match command {
            LayoutCommand::DwmLeft => {
                self.set_master_ratio(self.master_ratio() - Self::MASTER_RATIO_STEP)
            }
            LayoutCommand::DwmRight => {
                self.set_master_ratio(self.master_ratio() + Self::MASTER_RATIO_STEP)
            }
            LayoutCommand::Increase => {
                if self.num_master() < Self::MAX_MASTERS {
                    self.parts.inner.primary_size += 1;
                }
                ctx.show_notification(&self.description());
            }
            LayoutCommand::Decrease => {
                if self.num_master() > 0 {
                    self.parts.inner.primary_size -= 1;
                }
                ctx.show_notification(&self.description());
            }
            LayoutCommand::Rotate => self.parts.rotate(90),
            LayoutCommand::RotatePart => self.parts.inner.primary.rotate(90),
            _ => return false,
        }
        trace!(?command, ratio = self.master_ratio(), masters = self.num_master(), "tile layout updated");
        true
    }

    fn set_screen_rotation(&mut self, rotation: Rotation) { self.parts.set_angle(rotation); }

    fn clone_layout(&self) -> Layout {
        let mut other = TileLayout::new(self.initial_angle).with_capacity(self.capacity);
        other.parts.inner.ratio = self.master_ratio();
        other.parts.inner.primary_size = self.num_master();
        other.into()
    }
}
