// SentryView - ui/toast.rs
//
// Timed toast notifications, stacked above the bottom-right corner.
// Toasts are the app's single feedback channel for user actions:
// successes, ingestion failures, and placeholders for features still
// under development.

use crate::util::constants::{MAX_TOASTS, TOAST_DURATION_SECS};
use egui::Color32;
use std::collections::VecDeque;
use std::time::Instant;

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn accent(&self) -> Color32 {
        match self {
            ToastKind::Info => Color32::from_rgb(59, 130, 246),    // Blue 500
            ToastKind::Success => Color32::from_rgb(34, 197, 94),  // Green 500
            ToastKind::Error => Color32::from_rgb(220, 38, 38),    // Red 600
        }
    }
}

/// One queued notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub kind: ToastKind,
    /// Wall-clock stamp shown in the corner of the toast.
    pub stamp: String,
    created: Instant,
}

/// FIFO toast queue. The oldest toast is dropped when the queue is full,
/// and every toast expires after a fixed display duration.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: VecDeque<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: ToastKind, title: impl Into<String>, body: impl Into<String>) {
        if self.queue.len() >= MAX_TOASTS {
            self.queue.pop_front();
        }
        self.queue.push_back(Toast {
            title: title.into(),
            body: body.into(),
            kind,
            stamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            created: Instant::now(),
        });
    }

    pub fn info(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Info, title, body);
    }

    pub fn success(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Success, title, body);
    }

    pub fn error(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Error, title, body);
    }

    /// Standard placeholder for features that only exist as buttons.
    pub fn coming_soon(&mut self) {
        self.info("Coming Soon", "This feature is currently under development");
    }

    /// Drop expired toasts and draw the rest, newest at the bottom.
    pub fn render(&mut self, ctx: &egui::Context) {
        self.queue
            .retain(|t| t.created.elapsed().as_secs_f64() < TOAST_DURATION_SECS);
        if self.queue.is_empty() {
            return;
        }

        // Expiry happens between repaints, so keep the clock ticking while
        // any toast is visible.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));

        let mut offset = -16.0;
        for (i, toast) in self.queue.iter().enumerate() {
            let accent = toast.kind.accent();
            egui::Area::new(egui::Id::new(("toast", i)))
                .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, offset])
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::window(ui.style())
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.set_width(260.0);
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(&toast.title).strong().color(accent));
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(
                                            egui::RichText::new(&toast.stamp).small().weak(),
                                        );
                                    },
                                );
                            });
                            if !toast.body.is_empty() {
                                ui.label(&toast.body);
                            }
                        });
                });
            offset -= 72.0;
        }
    }
}
