use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Size};

/// Opaque handle the host assigns to a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(u64);

impl WindowId {
    pub fn new(raw: u64) -> Self { Self(raw) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    #[default]
    Unmanaged,
    NativeFullscreen,
    NativeMaximized,
    Floating,
    Maximized,
    Tiled,
    TiledAfloat,
    Undecided,
    Dragging,
    Docked,
}

/// A window as seen by a layout strategy.
///
/// Strategies write `geometry` and `state`; the host commits them afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: WindowId,
    pub geometry: Rect,
    pub state: WindowState,
    #[serde(default)]
    pub min_size: Size,
    #[serde(default)]
    pub max_size: Option<Size>,
}

impl Tile {
    pub fn new(id: WindowId) -> Self {
        Self {
            id,
            geometry: Rect::default(),
            state: WindowState::Undecided,
            min_size: Size::default(),
            max_size: None,
        }
    }

    /// Places the tile into `slot`, honouring its size limits.
    pub fn commit(&mut self, slot: Rect) {
        self.geometry = slot.fit(self.min_size, self.max_size);
    }
}

pub(crate) fn ids_of(tiles: &[Tile]) -> Vec<WindowId> { tiles.iter().map(|t| t.id).collect() }
