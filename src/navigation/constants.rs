//! Layout and styling for the on-screen navigation

/// Width and height of each round step button
pub const BUTTON_SIZE: f32 = 56.0;

/// Distance from the window edge to a step button
pub const BUTTON_EDGE_INSET: f32 = 18.0;

pub const BUTTON_GLYPH_SIZE: f32 = 22.0;

pub const BUTTON_BACKGROUND_ALPHA: f32 = 0.25;

pub const BUTTON_BORDER_ALPHA: f32 = 0.6;

/// Opacity multiplier for a step that is not available
pub const BUTTON_DISABLED_OPACITY: f32 = 0.35;

pub const INDICATOR_FONT_SIZE: f32 = 16.0;

pub const INDICATOR_BOTTOM_INSET: f32 = 24.0;

/// Keeps the controls above the post-processing overlays
pub const NAVIGATION_Z_INDEX: i32 = 10;
