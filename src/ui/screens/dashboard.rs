// SentryView - ui/screens/dashboard.rs
//
// Dashboard overview: headline metrics, weekly attack chart, system
// health, and the recent-activity feed. All sample data; the cards
// render what they are given and nothing else.

use crate::app::state::{AppState, Screen};
use crate::core::sample;
use crate::ui::{theme, widgets};

/// Render the dashboard overview screen.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(egui::RichText::new("Welcome, Admin").size(24.0).strong());
    ui.label(
        egui::RichText::new("Real-time overview of your system's security status").weak(),
    );
    ui.label(
        egui::RichText::new(chrono::Local::now().format("%A, %-d %B %Y").to_string())
            .small()
            .weak(),
    );
    ui.add_space(theme::CARD_SPACING);

    // Metric cards in one row.
    let card_width =
        (ui.available_width() - 3.0 * theme::CARD_SPACING) / sample::METRICS.len() as f32 - 26.0;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::CARD_SPACING;
        for metric in sample::METRICS {
            widgets::metric_card(ui, metric, card_width.max(120.0));
        }
    });
    ui.add_space(theme::CARD_SPACING);

    // Charts row: weekly attacks and system health side by side.
    let half = (ui.available_width() - theme::CARD_SPACING) / 2.0 - 14.0;
    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = theme::CARD_SPACING;

        widgets::card(ui, |ui| {
            ui.set_width(half.max(200.0));
            ui.label(egui::RichText::new("Weekly Attack Attempts").strong());
            ui.add_space(6.0);
            widgets::bar_chart(ui, sample::WEEKLY_ATTACKS, theme::CHART_HEIGHT, theme::CHART_BAR);
        });

        widgets::card(ui, |ui| {
            ui.set_width(half.max(200.0));
            ui.label(egui::RichText::new("System Health").strong());
            ui.add_space(6.0);
            egui::Grid::new("health_gauges")
                .num_columns(2)
                .spacing([theme::CARD_SPACING, 8.0])
                .show(ui, |ui| {
                    for pair in sample::SYSTEM_HEALTH.chunks(2) {
                        for g in pair {
                            ui.vertical(|ui| {
                                ui.set_width(half / 2.0 - 20.0);
                                let tone = match g.pct {
                                    p if p >= 60 => crate::core::model::Tone::Warning,
                                    p if p >= 40 => crate::core::model::Tone::Ok,
                                    _ => crate::core::model::Tone::Info,
                                };
                                widgets::gauge(ui, g.label, g.pct, theme::tone_colour(tone));
                            });
                        }
                        ui.end_row();
                    }
                });
            ui.add_space(6.0);
            ui.separator();
            ui.label(egui::RichText::new("System Uptime").strong());
            ui.label(sample::SYSTEM_UPTIME);
        });
    });
    ui.add_space(theme::CARD_SPACING);

    // Recent activity feed.
    widgets::card(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Recent Activity").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("View All").clicked() {
                    state.navigate(Screen::Logs);
                }
            });
        });
        ui.add_space(4.0);

        for (i, event) in sample::RECENT_ACTIVITY.iter().enumerate() {
            if i > 0 {
                ui.separator();
            }
            let colour = theme::tone_colour(event.tone());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("\u{25cf}").color(colour));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(event.name).strong());
                    ui.label(egui::RichText::new(event.status).small().weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(event.time_ago).small());
                        ui.label(egui::RichText::new(event.date).small().weak());
                    });
                });
            });
        }
    });
}
