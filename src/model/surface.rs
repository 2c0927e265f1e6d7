use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::config::LayoutConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VirtualDesktop {
    pub id: String,
    pub name: String,
}

impl VirtualDesktop {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// One output/activity/desktop combination owning an independent layout state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub output: String,
    pub activity: String,
    pub desktop: VirtualDesktop,
    /// Ignored surfaces never tile; they always report the floating layout.
    #[serde(default)]
    pub ignore: bool,
}

impl Surface {
    pub fn new(output: impl Into<String>, activity: impl Into<String>, desktop: VirtualDesktop) -> Self {
        Self {
            output: output.into(),
            activity: activity.into(),
            desktop,
            ignore: false,
        }
    }

    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Key of the layout state this surface uses.
    ///
    /// With `layout_per_activity`/`layout_per_desktop` switched off the
    /// corresponding component is blanked, so surfaces differing only there
    /// share one entry.
    pub fn layout_key(&self, config: &LayoutConfig) -> SurfaceKey {
        SurfaceKey {
            output: self.output.clone(),
            activity: if config.layout_per_activity {
                self.activity.clone()
            } else {
                String::new()
            },
            desktop: if config.layout_per_desktop {
                self.desktop.id.clone()
            } else {
                String::new()
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceKey {
    pub output: String,
    pub activity: String,
    pub desktop: String,
}

impl SurfaceKey {
    /// The key this surface had before its activity was known.
    pub fn without_activity(&self) -> SurfaceKey {
        SurfaceKey {
            output: self.output.clone(),
            activity: String::new(),
            desktop: self.desktop.clone(),
        }
    }
}

impl fmt::Display for SurfaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.output, self.activity, self.desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_key_respects_sharing_flags() {
        let surface = Surface::new("eDP-1", "work", VirtualDesktop::new("d1", "Desktop 1"));
        let mut config = LayoutConfig::default();

        let key = surface.layout_key(&config);
        assert_eq!(key.to_string(), "eDP-1_work_d1");

        config.layout_per_activity = false;
        assert_eq!(surface.layout_key(&config).activity, "");

        config.layout_per_desktop = false;
        assert_eq!(surface.layout_key(&config).desktop, "");
    }

    #[test]
    fn key_without_activity_keeps_output_and_desktop() {
        let key = SurfaceKey {
            output: "HDMI-1".into(),
            activity: "a".into(),
            desktop: "d".into(),
        };
        let legacy = key.without_activity();
        assert_eq!(legacy.output, "HDMI-1");
        assert_eq!(legacy.activity, "");
        assert_eq!(legacy.desktop, "d");
    }
}
