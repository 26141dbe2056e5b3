// SentryView - ui/theme.rs
//
// Theme application, tone colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::{Label, ThemePreference, Tone};
use egui::Color32;

/// Apply the given preference to the egui context. `System` defers to the
/// window system's reported preference.
pub fn apply(ctx: &egui::Context, pref: ThemePreference) {
    let egui_pref = match pref {
        ThemePreference::Light => egui::ThemePreference::Light,
        ThemePreference::Dark => egui::ThemePreference::Dark,
        ThemePreference::System => egui::ThemePreference::System,
    };
    ctx.set_theme(egui_pref);
}

/// Colour for a given accent tone.
pub fn tone_colour(tone: Tone) -> Color32 {
    match tone {
        Tone::Ok => Color32::from_rgb(34, 197, 94),       // Green 500
        Tone::Info => Color32::from_rgb(59, 130, 246),    // Blue 500
        Tone::Warning => Color32::from_rgb(234, 179, 8),  // Yellow 500
        Tone::Alert => Color32::from_rgb(220, 38, 38),    // Red 600
        Tone::Accent => Color32::from_rgb(168, 85, 247),  // Purple 500
    }
}

/// Foreground colour for the Alert/Safe status badge.
pub fn label_colour(label: &Label) -> Color32 {
    match label {
        Label::Alert => Color32::from_rgb(220, 38, 38),  // Red 600
        Label::Benign => Color32::from_rgb(22, 163, 74), // Green 600
    }
}

/// Background tint for the Alert/Safe status badge.
pub fn label_bg_colour(label: &Label) -> Color32 {
    match label {
        Label::Alert => Color32::from_rgba_premultiplied(220, 38, 38, 25),
        Label::Benign => Color32::from_rgba_premultiplied(22, 163, 74, 25),
    }
}

/// Bar colour for the charts.
pub const CHART_BAR: Color32 = Color32::from_rgb(136, 132, 216);

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 220.0;
pub const CARD_SPACING: f32 = 12.0;
pub const TABLE_ROW_HEIGHT: f32 = 24.0;
pub const CHART_HEIGHT: f32 = 180.0;
pub const FORM_WIDTH: f32 = 360.0;
