use super::LayoutPart;
use crate::layout_engine::Orientation;
use crate::layout_engine::utils::{clip, split_area_half};
use crate::model::geometry::{Rect, RectDelta, Rotation};
use crate::model::window::WindowId;

/// Gives the first `primary_size` windows to `primary` and the rest to
/// `secondary`, splitting the area between them at `ratio`.
#[derive(Clone, Debug)]
pub struct HalfSplitLayoutPart<P, S> {
    pub primary: P,
    pub secondary: S,
    /// 0/180 split side by side, 90/270 on top of each other; 180/270 put the
    /// primary side second.
    pub angle: Rotation,
    pub primary_size: usize,
    pub ratio: f64,
}

impl<P, S> HalfSplitLayoutPart<P, S> {
    pub const MIN_RATIO: f64 = 0.05;
    pub const MAX_RATIO: f64 = 0.95;

    pub fn new(primary: P, secondary: S) -> Self {
        Self {
            primary,
            secondary,
            angle: Rotation::R0,
            primary_size: 1,
            ratio: 0.5,
        }
    }

    pub fn orientation(&self) -> Orientation {
        if self.angle.is_transposing() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    fn reversed(&self) -> bool { self.angle.is_mirrored() }

    /// (primary area, secondary area)
    pub fn split(&self, area: Rect, gap: i32) -> (Rect, Rect) {
        let orientation = self.orientation();
        if self.reversed() {
            let (secondary, primary) = split_area_half(area, 1.0 - self.ratio, gap, orientation);
            (primary, secondary)
        } else {
            split_area_half(area, self.ratio, gap, orientation)
        }
    }

    /// The edge of a window on the given side that faces the split boundary.
    fn boundary_movement(&self, delta: RectDelta, on_primary: bool) -> i32 {
        let leading = on_primary != self.reversed();
        match (self.orientation(), leading) {
            (Orientation::Horizontal, true) => delta.right,
            (Orientation::Horizontal, false) => delta.left,
            (Orientation::Vertical, true) => delta.bottom,
            (Orientation::Vertical, false) => delta.top,
        }
    }

    fn without_boundary(&self, delta: RectDelta, on_primary: bool) -> RectDelta {
        let leading = on_primary != self.reversed();
        let mut delta = delta;
        match (self.orientation(), leading) {
            (Orientation::Horizontal, true) => delta.right = 0,
            (Orientation::Horizontal, false) => delta.left = 0,
            (Orientation::Vertical, true) => delta.bottom = 0,
            (Orientation::Vertical, false) => delta.top = 0,
        }
        delta
    }
}

impl<P: LayoutPart, S: LayoutPart> LayoutPart for HalfSplitLayoutPart<P, S> {
    fn apply(&self, area: Rect, windows: &[WindowId], gap: i32) -> Vec<Rect> {
        if windows.len() <= self.primary_size {
            return self.primary.apply(area, windows, gap);
        }
        if self.primary_size == 0 {
            return self.secondary.apply(area, windows, gap);
        }
        let (primary_area, secondary_area) = self.split(area, gap);
        let (primary_windows, secondary_windows) = windows.split_at(self.primary_size);
        let mut rects = self.primary.apply(primary_area, primary_windows, gap);
        rects.extend(self.secondary.apply(secondary_area, secondary_windows, gap));
        rects
    }

    fn adjust(
        &mut self,
        area: Rect,
        windows: &[WindowId],
        basis: WindowId,
        delta: RectDelta,
        gap: i32,
    ) {
        let Some(index) = windows.iter().position(|w| *w == basis) else {
            return;
        };
        if windows.len() <= self.primary_size {
            self.primary.adjust(area, windows, basis, delta, gap);
            return;
        }
        if self.primary_size == 0 {
            self.secondary.adjust(area, windows, basis, delta, gap);
            return;
        }

        let (primary_area, secondary_area) = self.split(area, gap);
        let on_primary = index < self.primary_size;

        let moved = self.boundary_movement(delta, on_primary);
        let line = area.extent(self.orientation()) - gap;
        if moved != 0 && line > 0 {
            let growth = if on_primary { moved } else { -moved };
            self.ratio = clip(
                self.ratio + f64::from(growth) / f64::from(line),
                Self::MIN_RATIO,
                Self::MAX_RATIO,
            );
        }

        let delta = self.without_boundary(delta, on_primary);
        let (primary_windows, secondary_windows) = windows.split_at(self.primary_size);
        if on_primary {
            self.primary.adjust(primary_area, primary_windows, basis, delta, gap);
        } else {
            self.secondary.adjust(secondary_area, secondary_windows, basis, delta, gap);
        }
    }
}
