//! Engine-wide constants.
//!
//! Centralizes the tuning values for box geometry, palette and id generation.

// ============================================================================
// Box Geometry
// ============================================================================

/// Minimum width and height of a committed box, in surface units
pub const MIN_BOX_SIZE: f64 = 40.0;

/// A box splits only when both sides exceed this multiple of the minimum size
pub const SPLIT_FACTOR: f64 = 2.0;

/// Number of children produced by a split
pub const SPLIT_CHILDREN: usize = 4;

// ============================================================================
// Palette
// ============================================================================

/// Default palette of colour names handed to the presentation layer
pub const DEFAULT_PALETTE: &[&str] = &[
    "red-300",
    "green-300",
    "blue-300",
    "yellow-300",
    "pink-300",
    "purple-300",
    "cyan-300",
    "orange-300",
];

// ============================================================================
// Ids
// ============================================================================

/// Separator between a parent id and a child's positional suffix
pub const CHILD_ID_SEPARATOR: char = '-';

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "splitboard";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ============================================================================
// Performance
// ============================================================================

/// Handlers slower than this (in milliseconds) are reported with a warning.
/// One frame at 60 FPS.
pub const SLOW_HANDLER_MS: f64 = 16.67;
