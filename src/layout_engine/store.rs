//! Which layout each surface shows.

use tracing::{debug, instrument};

use crate::common::collections::{HashMap, hash_map};
use crate::common::config::LayoutConfig;
use crate::layout_engine::{FloatingLayout, Layout, LayoutId};
use crate::model::surface::{Surface, SurfaceKey};

mod entry;
mod rules;

pub use entry::LayoutStoreEntry;
pub use rules::{LayoutSpecifier, RuleError, ScreenLayoutRule};

#[derive(Debug)]
pub struct LayoutStore {
    entries: HashMap<SurfaceKey, LayoutStoreEntry>,
    floating: Layout,
}

impl Default for LayoutStore {
    fn default() -> Self { Self::new() }
}

impl LayoutStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::default(),
            floating: FloatingLayout::new().into(),
        }
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Ignored surfaces always get the shared floating layout.
    pub fn current_layout(&mut self, config: &LayoutConfig, surface: &Surface) -> &mut Layout {
        if surface.ignore {
            return &mut self.floating;
        }
        self.entry(config, surface).current_layout(config)
    }

    #[instrument(level = "debug", skip(self, config), fields(output = %surface.output))]
    pub fn cycle_layout(
        &mut self,
        config: &LayoutConfig,
        surface: &Surface,
        step: i32,
    ) -> Option<&mut Layout> {
        if surface.ignore {
            return None;
        }
        Some(self.entry(config, surface).cycle_layout(config, step))
    }

    #[instrument(level = "debug", skip(self, config), fields(output = %surface.output))]
    pub fn set_layout(
        &mut self,
        config: &LayoutConfig,
        surface: &Surface,
        target: LayoutId,
    ) -> Option<&mut Layout> {
        if surface.ignore {
            return None;
        }
        Some(self.entry(config, surface).set_layout(config, target))
    }

    /// The entry of a surface, without creating it.
    pub fn get(&self, config: &LayoutConfig, surface: &Surface) -> Option<&LayoutStoreEntry> {
        self.entries.get(&surface.layout_key(config))
    }

    fn entry(&mut self, config: &LayoutConfig, surface: &Surface) -> &mut LayoutStoreEntry {
        let key = surface.layout_key(config);
        // Surfaces can show up before their activity is known; adopt the entry
        // created back then instead of starting over.
        let legacy = key.without_activity();
        let migrated = if legacy != key && !self.entries.contains_key(&key) {
            self.entries.remove(&legacy)
        } else {
            None
        };

        match self.entries.entry(key) {
            hash_map::Entry::Occupied(entry) => entry.into_mut(),
            hash_map::Entry::Vacant(slot) => {
                let entry = match migrated {
                    Some(entry) => {
                        debug!(key = %slot.key(), "moving layout entry to its activity");
                        entry
                    }
                    None => LayoutStoreEntry::new(config, surface),
                };
                slot.insert(entry)
            }
        }
    }
}
