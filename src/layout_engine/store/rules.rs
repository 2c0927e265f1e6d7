use std::str::FromStr;

use thiserror::Error;

use crate::layout_engine::LayoutId;
use crate::model::geometry::Rotation;
use crate::model::surface::Surface;

/// How a rule names its layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutSpecifier {
    /// Position in `layout_order`.
    Index(usize),
    Name(String),
}

/// One `screen_default_layout` entry.
///
/// `output:layout`, `output:desktop:layout` or
/// `output:activity:desktop:layout`; the layout may carry `@N` to start
/// rotated by N quarter turns. Empty fields match anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenLayoutRule {
    pub output: String,
    pub activity: String,
    pub desktop: String,
    pub layout: LayoutSpecifier,
    pub rotation: Option<Rotation>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("expected 2 to 4 ':'-separated fields, found {0}")]
    FieldCount(usize),
    #[error("no layout given")]
    MissingLayout,
}

impl FromStr for ScreenLayoutRule {
    type Err = RuleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = raw.trim().split(':').map(str::trim).collect();
        let (output, activity, desktop, layout) = match fields[..] {
            [output, layout] => (output, "", "", layout),
            [output, desktop, layout] => (output, "", desktop, layout),
            [output, activity, desktop, layout] => (output, activity, desktop, layout),
            _ => return Err(RuleError::FieldCount(fields.len())),
        };

        let (layout, rotation) = match layout.split_once('@') {
            Some((layout, turns)) => (layout.trim(), parse_quarter_turns(turns)),
            None => (layout, None),
        };
        if layout.is_empty() {
            return Err(RuleError::MissingLayout);
        }
        let layout = match layout.parse::<usize>() {
            Ok(index) => LayoutSpecifier::Index(index),
            Err(_) => LayoutSpecifier::Name(layout.to_string()),
        };

        Ok(ScreenLayoutRule {
            output: output.to_string(),
            activity: activity.to_string(),
            desktop: desktop.to_string(),
            layout,
            rotation,
        })
    }
}

fn parse_quarter_turns(raw: &str) -> Option<Rotation> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|turns| (0..=3).contains(turns))
        .map(Rotation::from_quarter_turns)
}

impl ScreenLayoutRule {
    /// Desktops are matched by their display name.
    pub fn matches(&self, surface: &Surface) -> bool {
        (self.output.is_empty() || self.output == surface.output)
            && (self.activity.is_empty() || self.activity == surface.activity)
            && (self.desktop.is_empty() || self.desktop == surface.desktop.name)
    }

    /// Position of the rule's layout in `order`, if it names one that is there.
    pub fn resolve(&self, order: &[LayoutId]) -> Option<usize> {
        match &self.layout {
            LayoutSpecifier::Index(index) => (*index < order.len()).then_some(*index),
            LayoutSpecifier::Name(name) => {
                let id = name.parse::<LayoutId>().ok()?;
                order.iter().position(|l| *l == id)
            }
        }
    }
}
