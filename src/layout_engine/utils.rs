use crate::common::config::GapSettings;
use crate::layout_engine::Orientation;
use crate::model::geometry::Rect;

pub fn compute_tiling_area(screen: Rect, gaps: &GapSettings) -> Rect {
    if gaps.outer.top == 0 && gaps.outer.left == 0 && gaps.outer.bottom == 0 && gaps.outer.right == 0
    {
        screen
    } else {
        Rect::new(
            screen.x + gaps.outer.left,
            screen.y + gaps.outer.top,
            screen.width - gaps.outer.left - gaps.outer.right,
            screen.height - gaps.outer.top - gaps.outer.bottom,
        )
    }
}

/// Splits `area` along `orientation` into one piece per weight, separated by
/// `gap`.
///
/// The last piece absorbs rounding so that pieces and gaps always add up to
/// the full extent (as long as the extent can hold the gaps at all).
pub fn split_area_weighted(
    area: Rect,
    weights: &[f64],
    gap: i32,
    orientation: Orientation,
) -> Vec<Rect> {
    if weights.is_empty() {
        return Vec::new();
    }
    let count = weights.len();
    let line = area.extent(orientation);
    let usable = (line - gap * (count as i32 - 1)).max(0);

    let sum: f64 = weights.iter().filter(|w| w.is_finite() && **w > 0.0).sum();
    let share = |w: f64| {
        if sum > 0.0 {
            if w.is_finite() && w > 0.0 { w / sum } else { 0.0 }
        } else {
            1.0 / count as f64
        }
    };

    let mut pieces = Vec::with_capacity(count);
    let mut offset = 0;
    let mut used = 0;
    for (i, &weight) in weights.iter().enumerate() {
        let size = if i + 1 == count {
            usable - used
        } else {
            ((usable as f64 * share(weight) + 1e-6).floor() as i32).clamp(0, usable - used)
        };
        pieces.push(match orientation {
            Orientation::Horizontal => Rect::new(area.x + offset, area.y, size, area.height),
            Orientation::Vertical => Rect::new(area.x, area.y + offset, area.width, size),
        });
        used += size;
        offset += size + gap;
    }
    pieces
}

/// Splits `area` into two pieces; `ratio` is the share of the first one.
pub fn split_area_half(area: Rect, ratio: f64, gap: i32, orientation: Orientation) -> (Rect, Rect) {
    let pieces = split_area_weighted(area, &[ratio, 1.0 - ratio], gap, orientation);
    (pieces[0], pieces[1])
}

pub fn clip(value: f64, min: f64, max: f64) -> f64 { value.max(min).min(max) }
