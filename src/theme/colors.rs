//! Colors - REST Grid Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Color palette - All colors are accessed via associated functions
pub struct GridColors;

impl GridColors {
    // Primary colors
    /// Header background - Indigo
    pub fn header_bg() -> Rgba { rgb(0x3f51b5) }
    /// Accent - used for the active nav item and focused inputs
    pub fn accent() -> Rgba { rgb(0x3f51b5) }
    /// Active nav item background
    pub fn accent_soft() -> Rgba { rgba(0x3f51b522) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    /// Error banner background
    pub fn danger_bg() -> Rgba { rgb(0xfef2f2) }
    /// Error banner border
    pub fn danger_border() -> Rgba { rgb(0xfca5a5) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x3f51b5) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x3f51b5) }
    /// Primary button hover
    pub fn button_primary_hover() -> Rgba { rgb(0x303f9f) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary button hover
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }
    /// Ghost button hover
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xeef2ff) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xf9fafb) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
}
