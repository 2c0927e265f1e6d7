use super::LayoutPart;
use crate::model::geometry::{Rect, RectDelta, Rotation};
use crate::model::window::WindowId;

/// Runs the inner part in a rotated frame.
///
/// 90 and 270 transpose the frame, 180 and 270 additionally mirror the
/// frame's x axis. With a master/stack split this puts the primary side on
/// the left (0), top (90), right (180) and bottom (270).
#[derive(Clone, Debug, Default)]
pub struct RotateLayoutPart<T> {
    pub inner: T,
    pub angle: Rotation,
}

impl<T> RotateLayoutPart<T> {
    pub fn new(inner: T) -> Self { Self { inner, angle: Rotation::R0 } }

    pub fn with_angle(inner: T, angle: Rotation) -> Self { Self { inner, angle } }

    pub fn rotate(&mut self, step_degrees: i32) { self.angle = self.angle.rotated_by(step_degrees); }

    pub fn set_angle(&mut self, angle: Rotation) { self.angle = angle; }

    /// The area the inner part sees.
    pub fn frame(&self, area: Rect) -> Rect {
        if self.angle.is_transposing() { area.transpose() } else { area }
    }

    /// Maps a rectangle from the rotated `frame` back to screen space.
    pub fn restore(&self, frame: Rect, rect: Rect) -> Rect {
        let rect = if self.angle.is_mirrored() { mirror_x(frame, rect) } else { rect };
        if self.angle.is_transposing() { rect.transpose() } else { rect }
    }

    /// Inverse of [`Self::restore`].
    pub fn project(&self, frame: Rect, rect: Rect) -> Rect {
        let rect = if self.angle.is_transposing() { rect.transpose() } else { rect };
        if self.angle.is_mirrored() { mirror_x(frame, rect) } else { rect }
    }

    /// Expresses a screen-space delta in the rotated frame.
    pub fn project_delta(&self, delta: RectDelta) -> RectDelta {
        let RectDelta { left, right, top, bottom } = delta;
        match self.angle {
            Rotation::R0 => delta,
            Rotation::R90 => RectDelta::new(top, bottom, left, right),
            Rotation::R180 => RectDelta::new(right, left, top, bottom),
            Rotation::R270 => RectDelta::new(bottom, top, left, right),
        }
    }
}

fn mirror_x(frame: Rect, rect: Rect) -> Rect {
    Rect::new(2 * frame.x + frame.width - rect.max_x(), rect.y, rect.width, rect.height)
}

impl<T: LayoutPart> LayoutPart for RotateLayoutPart<T> {
    fn apply(&self, area: Rect, windows: &[WindowId], gap: i32) -> Vec<Rect> {
        if self.angle == Rotation::R0 {
            return self.inner.apply(area, windows, gap);
        }
        let frame = self.frame(area);
        self.inner
            .apply(frame, windows, gap)
            .into_iter()
            .map(|rect| self.restore(frame, rect))
            .collect()
    }

    fn adjust(
        &mut self,
        area: Rect,
        windows: &[WindowId],
        basis: WindowId,
        delta: RectDelta,
        gap: i32,
    ) {
        let frame = self.frame(area);
        let delta = self.project_delta(delta);
        self.inner.adjust(frame, windows, basis, delta, gap);
    }
}
