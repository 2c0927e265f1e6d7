use tracing::{debug, instrument, trace};

use crate::common::config::LayoutConfig;
use crate::layout_engine::store::LayoutStore;
use crate::layout_engine::utils::compute_tiling_area;
use crate::layout_engine::{Direction, Layout, LayoutCommand, LayoutStrategy};
use crate::model::geometry::{Rect, RectDelta};
use crate::model::surface::Surface;
use crate::model::window::{Tile, WindowId};

/// Host side effects available to layouts.
pub trait EngineContext {
    fn show_notification(&mut self, text: &str);
}

/// Entry point the host drives: owns the configuration and the per-surface
/// layout state.
#[derive(Debug)]
pub struct LayoutEngine {
    config: LayoutConfig,
    store: LayoutStore,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config, store: LayoutStore::new() }
    }

    pub fn config(&self) -> &LayoutConfig { &self.config }

    pub fn current_layout(&mut self, surface: &Surface) -> &mut Layout {
        self.store.current_layout(&self.config, surface)
    }

    /// Lays out `tiles` inside `working_area` and returns how many of them
    /// were tiled; tiles past the layout's capacity are left untouched.
    pub fn arrange(&mut self, surface: &Surface, working_area: Rect, tiles: &mut [Tile]) -> usize {
        let area = compute_tiling_area(working_area, &self.config.gaps);
        let gap = self.config.gaps.between;
        let layout = self.store.current_layout(&self.config, surface);
        let count = tiled_count(layout, tiles.len());
        layout.apply(&mut tiles[..count], area, gap);
        trace!(layout = %layout.id(), count, ?area, "arranged");
        count
    }

    /// Records an interactive resize of `basis` so the next `arrange` keeps it.
    pub fn adjust(
        &mut self,
        surface: &Surface,
        working_area: Rect,
        tiles: &[Tile],
        basis: WindowId,
        delta: RectDelta,
    ) {
        let area = compute_tiling_area(working_area, &self.config.gaps);
        let gap = self.config.gaps.between;
        let layout = self.store.current_layout(&self.config, surface);
        let count = tiled_count(layout, tiles.len());
        layout.adjust(area, &tiles[..count], basis, delta, gap);
    }

    #[instrument(level = "debug", skip(self, ctx, tiles), fields(output = %surface.output))]
    pub fn handle_command(
        &mut self,
        ctx: &mut dyn EngineContext,
        surface: &Surface,
        working_area: Rect,
        tiles: &[Tile],
        focused: Option<WindowId>,
        command: LayoutCommand,
    ) -> bool {
        if !command.is_engine_level() {
            return self.store.current_layout(&self.config, surface).handle_command(ctx, command);
        }
        let switched = match command {
            LayoutCommand::NextLayout => self.store.cycle_layout(&self.config, surface, 1),
            LayoutCommand::PreviousLayout => self.store.cycle_layout(&self.config, surface, -1),
            LayoutCommand::SetLayout(target) => {
                self.store.set_layout(&self.config, surface, target)
            }
            _ => return self.resize_focused(surface, working_area, tiles, focused, command),
        };
        match switched {
            Some(layout) => {
                ctx.show_notification(&layout.description());
                true
            }
            None => false,
        }
    }

    /// Grows or shrinks the focused tile by `resize_step`, measured against the
    /// tiling area. The right (bottom) edge moves unless the tile already
    /// touches that side of the area.
    fn resize_focused(
        &mut self,
        surface: &Surface,
        working_area: Rect,
        tiles: &[Tile],
        focused: Option<WindowId>,
        command: LayoutCommand,
    ) -> bool {
        let Some(tile) = focused.and_then(|id| tiles.iter().find(|t| t.id == id)) else {
            debug!(?command, "no focused tile to resize");
            return false;
        };
        let (edge, grow) = match command {
            LayoutCommand::GrowWidth => (Direction::Right, true),
            LayoutCommand::ShrinkWidth => (Direction::Right, false),
            LayoutCommand::GrowHeight => (Direction::Down, true),
            LayoutCommand::ShrinkHeight => (Direction::Down, false),
            _ => return false,
        };

        let area = compute_tiling_area(working_area, &self.config.gaps);
        let step = self.config.resize_step.to_pixels(area.extent(edge.orientation()));
        let at_boundary = match edge {
            Direction::Right => tile.geometry.max_x() >= area.max_x(),
            Direction::Down => tile.geometry.max_y() >= area.max_y(),
            Direction::Left | Direction::Up => false,
        };
        let edge = if at_boundary { edge.opposite() } else { edge };
        let amount = if grow { step } else { -step };

        let delta = match edge {
            Direction::Left => RectDelta::new(amount, 0, 0, 0),
            Direction::Right => RectDelta::new(0, amount, 0, 0),
            Direction::Up => RectDelta::new(0, 0, amount, 0),
            Direction::Down => RectDelta::new(0, 0, 0, amount),
        };
        self.adjust(surface, working_area, tiles, tile.id, delta);
        true
    }
}

fn tiled_count(layout: &Layout, available: usize) -> usize {
    layout.capacity().map_or(available, |capacity| capacity.min(available))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::common::config::OuterGaps;
    use crate::layout_engine::systems::testing::{RecordingContext, geometries, tiles};
    use crate::layout_engine::{LayoutId, ResizeValue, TileLayout};
    use crate::model::geometry::Rotation;
    use crate::model::surface::VirtualDesktop;
    use crate::model::window::WindowState;

    fn surface() -> Surface { Surface::new("eDP-1", "work", VirtualDesktop::new("d1", "Desktop 1")) }

    fn engine_with_pixel_step() -> LayoutEngine {
        LayoutEngine::new(LayoutConfig {
            resize_step: ResizeValue::Pixels(100),
            ..LayoutConfig::default()
        })
    }

    #[test]
    fn arrange_honours_outer_and_inner_gaps() {
        let mut config = LayoutConfig::default();
        config.gaps.outer = OuterGaps { top: 10, left: 10, bottom: 10, right: 10 };
        config.gaps.between = 10;
        let mut engine = LayoutEngine::new(config);

        let mut tiles = tiles(2);
        let count = engine.arrange(&surface(), Rect::new(0, 0, 1020, 820), &mut tiles);
        assert_eq!(count, 2);
        assert_eq!(geometries(&tiles), vec![
            Rect::new(10, 10, 495, 800),
            Rect::new(515, 10, 495, 800),
        ]);
    }

    #[test]
    fn zero_windows_and_zero_areas_are_harmless() {
        let mut engine = LayoutEngine::new(LayoutConfig::default());
        assert_eq!(engine.arrange(&surface(), Rect::new(0, 0, 1000, 800), &mut []), 0);

        let mut tiles = tiles(3);
        engine.arrange(&surface(), Rect::new(0, 0, 0, 0), &mut tiles);
        assert!(tiles.iter().all(|t| t.geometry.is_empty()));
    }

    #[test]
    fn capacity_limits_the_tiled_windows() {
        let layout: Layout = TileLayout::new(Rotation::R0).with_capacity(Some(2)).into();
        assert_eq!(tiled_count(&layout, 5), 2);
        assert_eq!(tiled_count(&layout, 1), 1);
        let unbounded: Layout = TileLayout::new(Rotation::R0).into();
        assert_eq!(tiled_count(&unbounded, 5), 5);
    }

    #[test]
    fn switching_layouts_announces_the_new_one() {
        let mut engine = LayoutEngine::new(LayoutConfig::default());
        let mut ctx = RecordingContext::default();
        let area = Rect::new(0, 0, 1000, 800);
        let mut tiles = tiles(2);

        assert!(engine.handle_command(&mut ctx, &surface(), area, &tiles, None, LayoutCommand::NextLayout));
        assert_eq!(ctx.notifications, vec!["Monocle"]);

        engine.arrange(&surface(), area, &mut tiles);
        assert_eq!(geometries(&tiles), vec![area, area]);

        let set = LayoutCommand::SetLayout(LayoutId::Monocle);
        assert!(engine.handle_command(&mut ctx, &surface(), area, &tiles, None, set));
        assert_eq!(engine.current_layout(&surface()).id(), LayoutId::Tile);
        assert_eq!(ctx.notifications.last().map(String::as_str), Some("Tile [1]"));
    }

    #[test]
    fn ignored_surfaces_do_not_switch() {
        let mut engine = LayoutEngine::new(LayoutConfig::default());
        let mut ctx = RecordingContext::default();
        let ignored = surface().ignored();
        let area = Rect::new(0, 0, 1000, 800);

        assert!(!engine.handle_command(&mut ctx, &ignored, area, &[], None, LayoutCommand::NextLayout));
        assert!(ctx.notifications.is_empty());

        let mut tiles = tiles(1);
        engine.arrange(&ignored, area, &mut tiles);
        assert_eq!(tiles[0].state, WindowState::TiledAfloat);
    }

    #[test]
    fn other_commands_reach_the_layout() {
        let mut engine = LayoutEngine::new(LayoutConfig::default());
        let mut ctx = RecordingContext::default();
        let area = Rect::new(0, 0, 1000, 800);

        assert!(engine.handle_command(&mut ctx, &surface(), area, &[], None, LayoutCommand::DwmRight));
        let ratio = engine.current_layout(&surface()).as_tile().map(|t| t.master_ratio());
        assert!((ratio.unwrap() - 0.55).abs() < 1e-9);

        engine.handle_command(&mut ctx, &surface(), area, &[], None, LayoutCommand::NextLayout);
        assert!(!engine.handle_command(&mut ctx, &surface(), area, &[], None, LayoutCommand::Rotate));
    }

    #[test]
    fn growing_moves_the_inner_edge() {
        let mut engine = engine_with_pixel_step();
        let mut ctx = RecordingContext::default();
        let area = Rect::new(0, 0, 1000, 800);
        let mut tiles = tiles(2);
        engine.arrange(&surface(), area, &mut tiles);

        let master = Some(tiles[0].id);
        assert!(engine.handle_command(&mut ctx, &surface(), area, &tiles, master, LayoutCommand::GrowWidth));
        engine.arrange(&surface(), area, &mut tiles);
        assert_eq!(tiles[0].geometry.width, 600);

        // The stack touches the right edge, so its left edge moves instead.
        let stack = Some(tiles[1].id);
        assert!(engine.handle_command(&mut ctx, &surface(), area, &tiles, stack, LayoutCommand::GrowWidth));
        engine.arrange(&surface(), area, &mut tiles);
        assert_eq!(tiles[0].geometry.width, 500);
        assert_eq!(tiles[1].geometry, Rect::new(500, 0, 500, 800));
    }

    #[test]
    fn percentage_steps_follow_the_tiling_area() {
        let mut config = LayoutConfig {
            resize_step: ResizeValue::Percent(0.1),
            ..LayoutConfig::default()
        };
        config.gaps.outer = OuterGaps { top: 0, left: 100, bottom: 0, right: 100 };
        let mut engine = LayoutEngine::new(config);
        let mut ctx = RecordingContext::default();
        let working_area = Rect::new(0, 0, 1200, 800);
        let mut tiles = tiles(2);
        engine.arrange(&surface(), working_area, &mut tiles);

        let master = Some(tiles[0].id);
        assert!(engine.handle_command(
            &mut ctx,
            &surface(),
            working_area,
            &tiles,
            master,
            LayoutCommand::GrowWidth
        ));
        engine.arrange(&surface(), working_area, &mut tiles);
        assert_eq!(tiles[0].geometry, Rect::new(100, 0, 600, 800));
        assert_eq!(tiles[1].geometry, Rect::new(700, 0, 400, 800));
    }

    #[test]
    fn shrinking_height_trades_with_the_band_below() {
        let mut engine = engine_with_pixel_step();
        let mut ctx = RecordingContext::default();
        let area = Rect::new(0, 0, 1000, 800);
        let mut tiles = tiles(3);
        engine.arrange(&surface(), area, &mut tiles);

        let focused = Some(tiles[1].id);
        assert!(engine.handle_command(&mut ctx, &surface(), area, &tiles, focused, LayoutCommand::ShrinkHeight));
        engine.arrange(&surface(), area, &mut tiles);
        assert_eq!(tiles[1].geometry.height, 300);
        assert_eq!(tiles[2].geometry, Rect::new(500, 300, 500, 500));
    }

    #[test]
    fn resizing_needs_a_focused_tile() {
        let mut engine = engine_with_pixel_step();
        let mut ctx = RecordingContext::default();
        let area = Rect::new(0, 0, 1000, 800);
        let tiles = tiles(2);

        assert!(!engine.handle_command(&mut ctx, &surface(), area, &tiles, None, LayoutCommand::GrowWidth));
        let stranger = Some(WindowId::new(42));
        assert!(!engine.handle_command(&mut ctx, &surface(), area, &tiles, stranger, LayoutCommand::GrowHeight));
    }
}
