use tracing::{debug, warn};

use super::ScreenLayoutRule;
use crate::common::collections::HashMap;
use crate::common::config::LayoutConfig;
use crate::layout_engine::{Layout, LayoutId, LayoutStrategy};
use crate::model::geometry::Rotation;
use crate::model::surface::Surface;

/// Layout selection state of one surface.
///
/// Layout instances are built on first use and kept for the lifetime of the
/// entry, so tunables survive switching away and back.
#[derive(Debug)]
pub struct LayoutStoreEntry {
    current_index: Option<usize>,
    current: LayoutId,
    previous: LayoutId,
    layouts: HashMap<LayoutId, Layout>,
    screen_rotation: Option<Rotation>,
}

impl LayoutStoreEntry {
    pub fn new(config: &LayoutConfig, surface: &Surface) -> Self {
        let mut current_index = (!config.layout_order.is_empty()).then_some(0);
        let mut current = config.layout_order.first().copied().unwrap_or(LayoutId::Tile);
        let mut screen_rotation = None;

        for raw in &config.screen_default_layout {
            let rule = match raw.parse::<ScreenLayoutRule>() {
                Ok(rule) => rule,
                Err(err) => {
                    warn!(rule = %raw, %err, "skipping malformed default layout rule");
                    continue;
                }
            };
            if !rule.matches(surface) {
                continue;
            }
            let Some(index) = rule.resolve(&config.layout_order) else {
                continue;
            };
            current_index = Some(index);
            current = config.layout_order[index];
            screen_rotation = rule.rotation;
            break;
        }

        debug!(
            output = %surface.output,
            activity = %surface.activity,
            desktop = %surface.desktop.name,
            layout = %current,
            rotation = ?screen_rotation,
            "creating layout entry"
        );

        let mut entry = LayoutStoreEntry {
            current_index,
            current,
            previous: current,
            layouts: HashMap::default(),
            screen_rotation,
        };
        entry.load(config, current);
        entry
    }

    pub fn current_id(&self) -> LayoutId { self.current }

    pub fn previous_id(&self) -> LayoutId { self.previous }

    pub fn current_index(&self) -> Option<usize> { self.current_index }

    pub fn screen_rotation(&self) -> Option<Rotation> { self.screen_rotation }

    /// A layout built earlier, if any.
    pub fn cached(&self, id: LayoutId) -> Option<&Layout> { self.layouts.get(&id) }

    pub fn current_layout(&mut self, config: &LayoutConfig) -> &mut Layout {
        let current = self.current;
        self.load(config, current)
    }

    /// Moves `step` positions through `layout_order`, wrapping around.
    pub fn cycle_layout(&mut self, config: &LayoutConfig, step: i32) -> &mut Layout {
        let len = config.layout_order.len();
        if len == 0 {
            return self.current_layout(config);
        }
        let index = match self.current_index {
            Some(index) => (index as i64 + i64::from(step)).rem_euclid(len as i64) as usize,
            None => 0,
        };
        self.previous = self.current;
        self.current = config.layout_order[index];
        self.current_index = Some(index);
        debug!(from = %self.previous, to = %self.current, "cycled layout");
        self.current_layout(config)
    }

    /// Switches to `target`. Selecting an exclusive layout while one is
    /// already shown returns to whatever was active before it.
    pub fn set_layout(&mut self, config: &LayoutConfig, target: LayoutId) -> &mut Layout {
        let target_exclusive = self.load(config, target).is_exclusive();
        let current_exclusive = self.current_layout(config).is_exclusive();

        if target_exclusive && current_exclusive {
            self.current = self.previous;
            self.previous = target;
        } else if self.current != target {
            self.previous = self.current;
            self.current = target;
        }
        self.current_index = config.layout_index(self.current);
        debug!(current = %self.current, previous = %self.previous, "set layout");
        self.current_layout(config)
    }

    fn load(&mut self, config: &LayoutConfig, id: LayoutId) -> &mut Layout {
        let rotation = self.screen_rotation;
        self.layouts.entry(id).or_insert_with(|| {
            let mut layout = id.build(config);
            if let Some(rotation) = rotation {
                layout.set_screen_rotation(rotation);
            }
            layout
        })
    }
}
