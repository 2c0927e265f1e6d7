//! Composable building blocks that partition an area among windows.
//!
//! Parts nest by ownership: a strategy owns one root part, composites own
//! their children. None of them hold window handles beyond per-window
//! weights keyed by [`WindowId`].

use crate::model::geometry::{Rect, RectDelta};
use crate::model::window::WindowId;

mod half_split;
mod rotate;
mod stack;

pub use half_split::HalfSplitLayoutPart;
pub use rotate::RotateLayoutPart;
pub use stack::{StackLayoutPart, StackMode};

pub trait LayoutPart {
    /// One rectangle per window, in input order.
    fn apply(&self, area: Rect, windows: &[WindowId], gap: i32) -> Vec<Rect>;

    /// Folds an interactive resize of `basis` into the part's tunables.
    fn adjust(
        &mut self,
        area: Rect,
        windows: &[WindowId],
        basis: WindowId,
        delta: RectDelta,
        gap: i32,
    );
}

#[cfg(test)]
pub(crate) fn window_ids(count: u64) -> Vec<WindowId> { (1..=count).map(WindowId::new).collect() }
