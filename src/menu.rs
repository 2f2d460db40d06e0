//! Selection menu: the right-click menu's open/closed state and its entries.
//!
//! The controller knows where the menu is and what it looks like. It does not
//! know about the scene or the clipboard; the engine passes in an
//! [`Availability`] computed at render time, and each entry is enabled or not
//! according to its [`Guard`].
//!
//! ```text
//!  Closed ──secondary click──► OpenAt(x, y) ──secondary click──► OpenAt(x', y')
//!    ▲                              │
//!    └── close / action / click outside
//! ```

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::consts::{MENU_DIVIDER_PX, MENU_PADDING_Y_PX};
use crate::geom::{Bounds, Point};
use crate::input::Command;

/// Where the menu is, if anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MenuState {
    /// No menu is shown.
    #[default]
    Closed,
    /// The menu is shown with its top-left corner at `(x, y)` in screen pixels.
    OpenAt { x: f64, y: f64 },
}

/// One entry of the selection menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItem {
    Copy,
    Paste,
    Delete,
    MirrorHorizontally,
    MirrorVertically,
}

/// Condition an entry needs before it can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Something is selected to copy.
    CanCopy,
    /// The clipboard holds something to paste.
    CanPaste,
    /// Something is selected to act on.
    HasActiveObject,
}

impl MenuItem {
    /// Every entry, top to bottom.
    pub const ALL: [MenuItem; 5] =
        [Self::Copy, Self::Paste, Self::Delete, Self::MirrorHorizontally, Self::MirrorVertically];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Copy => "Copy",
            Self::Paste => "Paste",
            Self::Delete => "Delete",
            Self::MirrorHorizontally => "Mirror horizontally",
            Self::MirrorVertically => "Mirror vertically",
        }
    }

    /// Keyboard hint shown at the right edge of the entry.
    #[must_use]
    pub fn shortcut_hint(self) -> Option<&'static str> {
        match self {
            Self::Copy => Some("⌘C"),
            Self::Paste => Some("⌘V"),
            Self::Delete => Some("DELETE"),
            Self::MirrorHorizontally | Self::MirrorVertically => None,
        }
    }

    /// The operation this entry runs.
    #[must_use]
    pub fn command(self) -> Command {
        match self {
            Self::Copy => Command::Copy,
            Self::Paste => Command::Paste,
            Self::Delete => Command::Delete,
            Self::MirrorHorizontally => Command::MirrorHorizontally,
            Self::MirrorVertically => Command::MirrorVertically,
        }
    }

    /// The condition that enables this entry.
    #[must_use]
    pub fn guard(self) -> Guard {
        match self {
            Self::Copy => Guard::CanCopy,
            Self::Paste => Guard::CanPaste,
            Self::Delete | Self::MirrorHorizontally | Self::MirrorVertically => Guard::HasActiveObject,
        }
    }

    /// Offset of the entry's top edge from the menu's top edge, in pixels.
    fn top_offset(self, item_height: f64) -> f64 {
        let index = self as usize;
        // Divider sits between the clipboard group and the mirror group.
        let divider = if index >= 3 { MENU_DIVIDER_PX } else { 0.0 };
        #[allow(clippy::cast_precision_loss)]
        let rows = index as f64;
        MENU_PADDING_Y_PX + rows * item_height + divider
    }
}

/// Engine state the menu entries depend on, sampled when the menu is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Availability {
    /// The scene has a non-empty selection.
    pub has_active_object: bool,
    /// The clipboard holds a snapshot.
    pub can_paste: bool,
}

impl Availability {
    /// Whether `guard` is satisfied.
    #[must_use]
    pub fn allows(self, guard: Guard) -> bool {
        match guard {
            Guard::CanCopy | Guard::HasActiveObject => self.has_active_object,
            Guard::CanPaste => self.can_paste,
        }
    }
}

/// A menu entry as the menu surface should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub item: MenuItem,
    pub label: &'static str,
    pub shortcut: Option<&'static str>,
    /// Disabled entries are drawn de-emphasized and ignore clicks.
    pub enabled: bool,
}

/// Tracks the single selection menu instance.
#[derive(Debug, Clone)]
pub struct MenuController {
    state: MenuState,
    width: f64,
    item_height: f64,
    viewport: Option<(f64, f64)>,
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl MenuController {
    /// Create a closed menu sized from `config`.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self { state: MenuState::Closed, width: config.menu_width, item_height: config.menu_item_height, viewport: None }
    }

    /// Take new sizes from `config`. An open menu stays open where it is.
    pub fn apply_config(&mut self, config: &EngineConfig) {
        self.width = config.menu_width;
        self.item_height = config.menu_item_height;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Returns `true` if the menu is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::OpenAt { .. })
    }

    /// Set the visible area in screen pixels. Menus opened afterwards are kept
    /// inside it. Zero or negative sizes remove the constraint.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = (width > 0.0 && height > 0.0).then_some((width, height));
    }

    /// Show the menu at `(x, y)`, replacing any menu already open.
    ///
    /// Returns the resulting state; the position is pulled back inside the
    /// viewport when the menu would overflow its right or bottom edge.
    pub fn open(&mut self, x: f64, y: f64) -> MenuState {
        let (x, y) = match self.viewport {
            Some((vw, vh)) => ((x.min(vw - self.width)).max(0.0), (y.min(vh - self.height())).max(0.0)),
            None => (x, y),
        };
        self.state = MenuState::OpenAt { x, y };
        self.state
    }

    /// Hide the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = MenuState::Closed;
        was_open
    }

    /// Total menu height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        MenuItem::MirrorVertically.top_offset(self.item_height) + self.item_height + MENU_PADDING_Y_PX
    }

    /// Screen-space rectangle covered by the open menu.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        match self.state {
            MenuState::Closed => None,
            MenuState::OpenAt { x, y } => Some(Bounds::from_rect(x, y, self.width, self.height())),
        }
    }

    /// Whether `pt` falls on the open menu.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.bounds().is_some_and(|b| b.contains(pt))
    }

    /// The entry under `pt`, if the menu is open and `pt` is on an entry
    /// rather than the padding or the divider.
    #[must_use]
    pub fn item_at(&self, pt: Point) -> Option<MenuItem> {
        let bounds = self.bounds()?;
        if !bounds.contains(pt) {
            return None;
        }
        let local_y = pt.y - bounds.min.y;
        MenuItem::ALL.into_iter().find(|item| {
            let top = item.top_offset(self.item_height);
            local_y >= top && local_y < top + self.item_height
        })
    }

    /// Entries to draw, each enabled according to `availability`.
    #[must_use]
    pub fn entries(&self, availability: Availability) -> Vec<MenuEntry> {
        MenuItem::ALL
            .into_iter()
            .map(|item| MenuEntry {
                item,
                label: item.label(),
                shortcut: item.shortcut_hint(),
                enabled: availability.allows(item.guard()),
            })
            .collect()
    }
}
