// SentryView - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.

pub mod screens;
pub mod theme;
pub mod toast;
pub mod widgets;
