use serde::{Deserialize, Serialize};

use crate::layout_engine::Orientation;

/// Axis-aligned rectangle in screen pixels.
///
/// Width and height are never negative; every constructor clamps them to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn max_x(&self) -> i32 { self.x + self.width }

    pub fn max_y(&self) -> i32 { self.y + self.height }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }

    /// Length of the rectangle along `orientation`.
    pub fn extent(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Swaps the x and y axes.
    pub fn transpose(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            width: self.height,
            height: self.width,
        }
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    /// Clamps the size into `[min, max]` and centers the result inside `self`.
    ///
    /// A minimum larger than the allotted rectangle wins; the window then
    /// overflows its slot symmetrically.
    pub fn fit(self, min: Size, max: Option<Size>) -> Self {
        let (mut width, mut height) = (self.width, self.height);
        if let Some(max) = max {
            if max.width > 0 {
                width = width.min(max.width);
            }
            if max.height > 0 {
                height = height.min(max.height);
            }
        }
        width = width.max(min.width);
        height = height.max(min.height);
        Rect::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self { Self { width, height } }
}

/// How far each edge of a window moved during an interactive resize.
///
/// Positive values mean the edge moved outward, i.e. the window grew on that
/// side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectDelta {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl RectDelta {
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Delta that turns `old` into `new`.
    pub fn between(old: Rect, new: Rect) -> Self {
        Self {
            left: old.x - new.x,
            right: new.max_x() - old.max_x(),
            top: old.y - new.y,
            bottom: new.max_y() - old.max_y(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left == 0 && self.right == 0 && self.top == 0 && self.bottom == 0
    }
}

/// Clockwise rotation applied to a coordinate frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// Normalizes any multiple of 90 degrees, negative values included.
    pub fn from_degrees(degrees: i32) -> Self {
        debug_assert!(degrees % 90 == 0, "rotation must be a multiple of 90, got {degrees}");
        Self::from_quarter_turns(degrees.div_euclid(90))
    }

    pub fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    pub fn quarter_turns(self) -> i32 { self.degrees() / 90 }

    pub fn rotated_by(self, step_degrees: i32) -> Self {
        Self::from_degrees(self.degrees() + step_degrees)
    }

    /// 90 and 270 swap the axes of the frame.
    pub fn is_transposing(self) -> bool { matches!(self, Rotation::R90 | Rotation::R270) }

    /// 180 and 270 mirror the primary axis of the frame.
    pub fn is_mirrored(self) -> bool { matches!(self, Rotation::R180 | Rotation::R270) }
}
