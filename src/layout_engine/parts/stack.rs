use super::LayoutPart;
use crate::common::collections::HashMap;
use crate::layout_engine::Orientation;
use crate::layout_engine::utils::split_area_weighted;
use crate::model::geometry::{Rect, RectDelta};
use crate::model::window::WindowId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackMode {
    /// Proportional bands from top to bottom.
    #[default]
    Split,
    /// Every window covers the whole area; only z-order tells them apart.
    Overlap,
}

/// Leaf part arranging a bucket of windows along the vertical axis.
#[derive(Clone, Debug, Default)]
pub struct StackLayoutPart {
    pub mode: StackMode,
    weights: HashMap<WindowId, f64>,
}

impl StackLayoutPart {
    /// Smallest share a band can be squeezed to by dragging.
    pub const MIN_SHARE: f64 = 0.05;

    pub fn new(mode: StackMode) -> Self {
        Self {
            mode,
            weights: HashMap::default(),
        }
    }

    /// Shares of `windows`, summing to 1. Unknown windows get an equal share.
    pub fn shares(&self, windows: &[WindowId]) -> Vec<f64> {
        if windows.is_empty() {
            return Vec::new();
        }
        let fallback = 1.0 / windows.len() as f64;
        let raw: Vec<f64> = windows
            .iter()
            .map(|w| self.weights.get(w).copied().unwrap_or(fallback))
            .collect();
        let sum: f64 = raw.iter().sum();
        if sum > 0.0 {
            raw.into_iter().map(|w| w / sum).collect()
        } else {
            vec![fallback; windows.len()]
        }
    }
}

/// Moves `amount` of share from `from` to `to`, keeping both above the minimum.
fn transfer(shares: &mut [f64], to: usize, from: usize, amount: f64) {
    let upper = (shares[from] - StackLayoutPart::MIN_SHARE).max(0.0);
    let lower = -(shares[to] - StackLayoutPart::MIN_SHARE).max(0.0);
    let amount = amount.clamp(lower, upper);
    shares[to] += amount;
    shares[from] -= amount;
}

impl LayoutPart for StackLayoutPart {
    fn apply(&self, area: Rect, windows: &[WindowId], gap: i32) -> Vec<Rect> {
        match self.mode {
            StackMode::Overlap => vec![area; windows.len()],
            StackMode::Split => {
                split_area_weighted(area, &self.shares(windows), gap, Orientation::Vertical)
            }
        }
    }

    fn adjust(
        &mut self,
        area: Rect,
        windows: &[WindowId],
        basis: WindowId,
        delta: RectDelta,
        gap: i32,
    ) {
        if self.mode == StackMode::Overlap || windows.len() < 2 {
            return;
        }
        let Some(index) = windows.iter().position(|w| *w == basis) else {
            return;
        };
        let usable = area.height - gap * (windows.len() as i32 - 1);
        if usable <= 0 {
            return;
        }
        let usable = f64::from(usable);

        let mut shares = self.shares(windows);
        if index > 0 && delta.top != 0 {
            transfer(&mut shares, index, index - 1, f64::from(delta.top) / usable);
        }
        if index + 1 < windows.len() && delta.bottom != 0 {
            transfer(&mut shares, index, index + 1, f64::from(delta.bottom) / usable);
        }

        let sum: f64 = shares.iter().sum();
        self.weights.clear();
        for (window, share) in windows.iter().zip(shares) {
            self.weights.insert(*window, share / sum);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::layout_engine::parts::window_ids;

    #[test]
    fn bands_default_to_equal_shares() {
        let part = StackLayoutPart::default();
        let rects = part.apply(Rect::new(0, 0, 300, 600), &window_ids(3), 0);
        assert_eq!(rects, vec![
            Rect::new(0, 0, 300, 200),
            Rect::new(0, 200, 300, 200),
            Rect::new(0, 400, 300, 200),
        ]);
    }

    #[test]
    fn overlap_mode_stacks_every_window_on_the_area() {
        let part = StackLayoutPart::new(StackMode::Overlap);
        let area = Rect::new(10, 10, 300, 600);
        assert_eq!(part.apply(area, &window_ids(3), 8), vec![area; 3]);
    }

    #[test]
    fn dragging_an_edge_trades_with_the_neighbour() {
        let area = Rect::new(0, 0, 300, 600);
        let windows = window_ids(3);
        let mut part = StackLayoutPart::default();

        part.adjust(area, &windows, windows[1], RectDelta::new(0, 0, 60, 0), 0);
        let rects = part.apply(area, &windows, 0);
        assert_eq!(rects.iter().map(|r| r.height).collect::<Vec<_>>(), vec![140, 260, 200]);

        let total: f64 = part.shares(&windows).iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bands_never_collapse_below_the_minimum_share() {
        let area = Rect::new(0, 0, 100, 1000);
        let windows = window_ids(2);
        let mut part = StackLayoutPart::default();

        part.adjust(area, &windows, windows[0], RectDelta::new(0, 0, 0, 10_000), 0);
        let shares = part.shares(&windows);
        assert!((shares[1] - StackLayoutPart::MIN_SHARE).abs() < 1e-9);
    }

    #[test]
    fn a_new_window_joins_with_an_equal_share() {
        let area = Rect::new(0, 0, 100, 1000);
        let mut windows = window_ids(2);
        let mut part = StackLayoutPart::default();
        part.adjust(area, &windows, windows[0], RectDelta::new(0, 0, 0, 100), 0);

        windows.push(WindowId::new(3));
        let shares = part.shares(&windows);
        // 0.6 and 0.4 recorded, the newcomer brings 1/3 before normalization.
        assert!((shares[2] - (1.0 / 3.0) / (1.0 + 1.0 / 3.0)).abs() < 1e-9);
        assert!(shares[0] > shares[1]);
    }

    #[test]
    fn overlap_mode_ignores_adjust() {
        let area = Rect::new(0, 0, 100, 1000);
        let windows = window_ids(2);
        let mut part = StackLayoutPart::new(StackMode::Overlap);
        part.adjust(area, &windows, windows[0], RectDelta::new(0, 0, 0, 100), 0);
        assert_eq!(part.shares(&windows), vec![0.5, 0.5]);
    }
}
