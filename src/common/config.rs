use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::layout_engine::LayoutId;
use crate::layout_engine::ResizeValue;
use crate::layout_engine::store::ScreenLayoutRule;
use crate::model::geometry::Rotation;

pub fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tiling-core.toml"))
}

/// Layout selection and geometry settings.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Layouts in cycling order. The first one is the fallback for surfaces
    /// no default-layout rule matches.
    #[serde_as(as = "Vec<DisplayFromStr>")]
    #[serde(default = "default_layout_order")]
    pub layout_order: Vec<LayoutId>,
    /// Rules of the form `output:layout`, `output:desktop:layout` or
    /// `output:activity:desktop:layout`, each layout optionally followed by
    /// `@N` to start rotated by N quarter turns. Empty fields match anything.
    #[serde(default)]
    pub screen_default_layout: Vec<String>,
    /// Quarter turns ("0" to "3") the tile layout starts with.
    #[serde(default = "default_initial_angle")]
    pub tile_layout_initial_angle: String,
    #[serde(default = "yes")]
    pub layout_per_activity: bool,
    #[serde(default = "yes")]
    pub layout_per_desktop: bool,
    /// Step used by the grow/shrink commands.
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub resize_step: ResizeValue,
    #[serde(default)]
    pub gaps: GapSettings,
}

/// Gap configuration for window spacing
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct GapSettings {
    /// Space between windows and the edges of the working area
    #[serde(default)]
    pub outer: OuterGaps,
    /// Space between neighbouring windows
    #[serde(default)]
    pub between: i32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct OuterGaps {
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub left: i32,
    #[serde(default)]
    pub bottom: i32,
    #[serde(default)]
    pub right: i32,
}

impl GapSettings {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = self.outer.validate();
        if self.between < 0 {
            issues.push(format!("gaps.between must be non-negative, got {}", self.between));
        }
        issues
    }

    pub fn auto_fix_values(&mut self) -> usize {
        let mut fixes = self.outer.auto_fix_values();
        if self.between < 0 {
            self.between = 0;
            fixes += 1;
        }
        fixes
    }
}

impl OuterGaps {
    pub fn validate(&self) -> Vec<String> {
        [
            ("top", self.top),
            ("left", self.left),
            ("bottom", self.bottom),
            ("right", self.right),
        ]
        .into_iter()
        .filter(|(_, value)| *value < 0)
        .map(|(side, value)| format!("gaps.outer.{side} must be non-negative, got {value}"))
        .collect()
    }

    pub fn auto_fix_values(&mut self) -> usize {
        let mut fixes = 0;
        for side in [&mut self.top, &mut self.left, &mut self.bottom, &mut self.right] {
            if *side < 0 {
                *side = 0;
                fixes += 1;
            }
        }
        fixes
    }
}

fn yes() -> bool { true }

fn default_initial_angle() -> String { "0".to_string() }

fn default_layout_order() -> Vec<LayoutId> {
    vec![LayoutId::Tile, LayoutId::Monocle, LayoutId::Stacked]
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layout_order: default_layout_order(),
            screen_default_layout: Vec::new(),
            tile_layout_initial_angle: default_initial_angle(),
            layout_per_activity: true,
            layout_per_desktop: true,
            resize_step: ResizeValue::default(),
            gaps: GapSettings::default(),
        }
    }
}

impl LayoutConfig {
    pub fn read(path: &Path) -> anyhow::Result<LayoutConfig> {
        let buf = std::fs::read_to_string(path)?;
        Self::parse(&buf)
    }

    pub fn parse(buf: &str) -> anyhow::Result<LayoutConfig> { Ok(toml::from_str(buf)?) }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, toml_string.as_bytes())?;
        Ok(())
    }

    /// Rotation the tile layout starts with. Anything but "1", "2" or "3"
    /// means no rotation.
    pub fn tile_initial_rotation(&self) -> Rotation {
        match self.tile_layout_initial_angle.trim() {
            "1" => Rotation::R90,
            "2" => Rotation::R180,
            "3" => Rotation::R270,
            _ => Rotation::R0,
        }
    }

    /// Position of `id` in the cycling order.
    pub fn layout_index(&self, id: LayoutId) -> Option<usize> {
        self.layout_order.iter().position(|l| *l == id)
    }

    /// Validates the configuration and returns a list of issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.layout_order.is_empty() {
            issues.push("layout_order must name at least one layout".to_string());
        }
        let mut seen = crate::common::collections::HashSet::default();
        for id in &self.layout_order {
            if !seen.insert(*id) {
                issues.push(format!("layout_order lists {id} more than once"));
            }
        }

        if !matches!(self.tile_layout_initial_angle.trim(), "0" | "1" | "2" | "3") {
            issues.push(format!(
                "tile_layout_initial_angle must be one of \"0\", \"1\", \"2\", \"3\", got {:?}",
                self.tile_layout_initial_angle
            ));
        }

        for (index, rule) in self.screen_default_layout.iter().enumerate() {
            if let Err(err) = rule.parse::<ScreenLayoutRule>() {
                issues.push(format!("screen_default_layout rule {index}: {err}"));
            }
        }

        issues.extend(self.gaps.validate());

        if !self.resize_step.is_positive() {
            issues.push(format!("resize_step must be positive, got {}", self.resize_step));
        }

        issues
    }

    /// Attempts to fix configuration values automatically.
    /// Returns the number of fixes applied.
    pub fn auto_fix_values(&mut self) -> usize {
        let mut fixes = 0;

        if self.layout_order.is_empty() {
            self.layout_order = default_layout_order();
            fixes += 1;
        }
        let before = self.layout_order.len();
        let mut seen = crate::common::collections::HashSet::default();
        self.layout_order.retain(|id| seen.insert(*id));
        fixes += before - self.layout_order.len();

        if !matches!(self.tile_layout_initial_angle.trim(), "0" | "1" | "2" | "3") {
            self.tile_layout_initial_angle = default_initial_angle();
            fixes += 1;
        }

        fixes += self.gaps.auto_fix_values();

        if !self.resize_step.is_positive() {
            self.resize_step = ResizeValue::default();
            fixes += 1;
        }

        fixes
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_file_matches_defaults() {
        let shipped = LayoutConfig::parse(include_str!("../../tiling.default.toml")).unwrap();
        assert_eq!(shipped, LayoutConfig::default());
    }

    #[test]
    fn layout_names_are_resolved_while_parsing() {
        let config = LayoutConfig::parse(
            r#"
            layout_order = ["tile", "StackedLayout", "monocle"]
            screen_default_layout = ["eDP-1::monocle", "HDMI-1:2:tile@1"]
            tile_layout_initial_angle = "2"
            resize_step = "40"

            [gaps]
            between = 8
            outer = { top = 4 }
            "#,
        )
        .unwrap();

        assert_eq!(config.layout_order, vec![
            LayoutId::Tile,
            LayoutId::Stacked,
            LayoutId::Monocle
        ]);
        assert_eq!(config.tile_initial_rotation(), Rotation::R180);
        assert_eq!(config.resize_step, ResizeValue::Pixels(40));
        assert_eq!(config.gaps.between, 8);
        assert_eq!(config.gaps.outer.top, 4);
        assert!(config.layout_per_desktop);
    }

    #[test]
    fn unknown_layouts_and_fields_are_rejected() {
        assert!(LayoutConfig::parse(r#"layout_order = ["spiral"]"#).is_err());
        assert!(LayoutConfig::parse("monocle_maximize = true").is_err());
    }

    #[test]
    fn reads_and_saves_config_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tiling.toml");

        let mut config = LayoutConfig::default();
        config.screen_default_layout.push("eDP-1::stacked@3".to_string());
        config.resize_step = ResizeValue::Percent(0.05);
        config.save(&path).unwrap();

        assert_eq!(LayoutConfig::read(&path).unwrap(), config);
        assert!(LayoutConfig::read(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = LayoutConfig::default();
        assert!(config.validate().is_empty());

        config.tile_layout_initial_angle = "7".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("tile_layout_initial_angle"));

        let fixes = config.auto_fix_values();
        assert_eq!(fixes, 1);
        assert_eq!(config.tile_initial_rotation(), Rotation::R0);

        config.layout_order = vec![LayoutId::Tile, LayoutId::Tile, LayoutId::Monocle];
        config.gaps.between = -3;
        config.screen_default_layout.push("lonely".to_string());
        let issues = config.validate();
        assert_eq!(issues.len(), 3);

        // Rules are skipped at runtime rather than repaired.
        let fixes = config.auto_fix_values();
        assert_eq!(fixes, 2);
        assert_eq!(config.layout_order, vec![LayoutId::Tile, LayoutId::Monocle]);
        assert_eq!(config.gaps.between, 0);
        assert_eq!(config.validate().len(), 1);
    }

    #[test]
    fn empty_layout_order_is_restored() {
        let mut config = LayoutConfig {
            layout_order: Vec::new(),
            ..LayoutConfig::default()
        };
        assert_eq!(config.validate().len(), 1);
        assert_eq!(config.auto_fix_values(), 1);
        assert_eq!(config.layout_order, default_layout_order());
    }
}
