use std::fmt;
use std::str::FromStr;

use strum::EnumString;
use thiserror::Error;

use crate::layout_engine::LayoutId;

/// Layout related shortcuts the host forwards to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum LayoutCommand {
    #[strum(to_string = "dwm-left", serialize = "DWMLeft")]
    DwmLeft,
    #[strum(to_string = "dwm-right", serialize = "DWMRight")]
    DwmRight,
    Increase,
    Decrease,
    Rotate,
    #[strum(to_string = "rotate-part", serialize = "RotatePart")]
    RotatePart,
    #[strum(to_string = "grow-width", serialize = "GrowWidth")]
    GrowWidth,
    #[strum(to_string = "shrink-width", serialize = "ShrinkWidth")]
    ShrinkWidth,
    #[strum(to_string = "grow-height", serialize = "GrowHeight")]
    GrowHeight,
    #[strum(to_string = "shrink-height", serialize = "ShrinkHeight")]
    ShrinkHeight,
    #[strum(to_string = "next-layout", serialize = "NextLayout")]
    NextLayout,
    #[strum(to_string = "previous-layout", serialize = "PreviousLayout")]
    PreviousLayout,
    #[strum(disabled)]
    SetLayout(LayoutId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("unknown layout {0:?}")]
    UnknownLayout(String),
}

impl LayoutCommand {
    /// Parses a command name, or `set-layout:<layout>` for [`LayoutCommand::SetLayout`].
    pub fn parse(raw: &str) -> Result<Self, ParseCommandError> {
        let raw = raw.trim();
        if let Some((head, layout)) = raw.split_once(':') {
            if head.eq_ignore_ascii_case("set-layout") || head.eq_ignore_ascii_case("SetLayout") {
                return LayoutId::from_str(layout.trim())
                    .map(LayoutCommand::SetLayout)
                    .map_err(|_| ParseCommandError::UnknownLayout(layout.trim().to_string()));
            }
        }
        LayoutCommand::from_str(raw).map_err(|_| ParseCommandError::UnknownCommand(raw.to_string()))
    }

    /// Commands the engine resolves itself instead of forwarding them.
    pub fn is_engine_level(self) -> bool {
        matches!(
            self,
            LayoutCommand::GrowWidth
                | LayoutCommand::ShrinkWidth
                | LayoutCommand::GrowHeight
                | LayoutCommand::ShrinkHeight
                | LayoutCommand::NextLayout
                | LayoutCommand::PreviousLayout
                | LayoutCommand::SetLayout(_)
        )
    }
}

impl fmt::Display for LayoutCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayoutCommand::DwmLeft => "dwm-left",
            LayoutCommand::DwmRight => "dwm-right",
            LayoutCommand::Increase => "increase",
            LayoutCommand::Decrease => "decrease",
            LayoutCommand::Rotate => "rotate",
            LayoutCommand::RotatePart => "rotate-part",
            LayoutCommand::GrowWidth => "grow-width",
            LayoutCommand::ShrinkWidth => "shrink-width",
            LayoutCommand::GrowHeight => "grow-height",
            LayoutCommand::ShrinkHeight => "shrink-height",
            LayoutCommand::NextLayout => "next-layout",
            LayoutCommand::PreviousLayout => "previous-layout",
            LayoutCommand::SetLayout(id) => return write!(f, "set-layout:{id}"),
        };
        f.write_str(name)
    }
}
