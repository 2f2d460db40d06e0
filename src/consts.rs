//! Shared numeric constants for the canvas engine.

// ── Clipboard ───────────────────────────────────────────────────

/// Horizontal offset applied to every paste, in canvas units.
pub const PASTE_OFFSET_X: f64 = 20.0;

/// Vertical offset applied to every paste, in canvas units.
pub const PASTE_OFFSET_Y: f64 = 20.0;

// ── Selection menu ──────────────────────────────────────────────

/// Width of the selection menu in CSS pixels.
pub const MENU_WIDTH_PX: f64 = 180.0;

/// Height of a single menu entry in CSS pixels.
pub const MENU_ITEM_HEIGHT_PX: f64 = 32.0;

/// Vertical padding above the first and below the last entry.
pub const MENU_PADDING_Y_PX: f64 = 8.0;

/// Height of the divider between the clipboard and mirror groups.
pub const MENU_DIVIDER_PX: f64 = 1.0;

// ── Transform ───────────────────────────────────────────────────

/// Mirrored group members snap to a grid of this many steps per canvas unit.
pub const MIRROR_STEPS_PER_UNIT: f64 = 1_000_000.0;
