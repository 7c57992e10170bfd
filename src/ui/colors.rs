//! Centralized color constants for the UI.
//!
//! This module provides consistent colors across all UI panels.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for secondary labels.
    pub const LABEL: Color32 = Color32::from_rgb(120, 120, 130);
    /// Slightly brighter for values.
    pub const VALUE: Color32 = Color32::from_rgb(170, 170, 180);
    /// Warning text, e.g. unknown airport codes.
    pub const WARNING: Color32 = Color32::from_rgb(255, 180, 50);
}

/// Colors for the globe canvas.
pub mod globe {
    use super::Color32;

    /// Canvas background around the globe.
    pub const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 35);
    /// Ocean, sampled from the center of the SVG ocean gradient.
    pub const OCEAN: Color32 = Color32::from_rgb(0x55, 0x80, 0x90);
    /// Ocean rim.
    pub const OCEAN_EDGE: Color32 = Color32::from_rgb(0x33, 0x66, 0x88);
    /// Land outline.
    pub const LAND: Color32 = Color32::from_rgb(0x77, 0x66, 0x55);
    /// Label text.
    pub const LABEL: Color32 = Color32::from_rgb(240, 240, 240);

    /// Graticule lines - requires alpha, use function.
    pub fn graticule() -> Color32 {
        Color32::from_rgba_unmultiplied(255, 255, 255, 50)
    }
}
