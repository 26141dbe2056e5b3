// SentryView - ui/widgets.rs
//
// Shared presentation helpers: card frames and painter-drawn charts.
// Used by the dashboard and reports screens.

use crate::core::model::{Metric, NamedCount};
use crate::ui::theme;
use egui::Color32;

/// A bordered card frame with uniform padding, the basic layout unit of
/// the dashboard screens.
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, add_contents)
        .inner
}

/// A metric card with a coloured left accent stripe: bold title, large
/// value in the tone colour, optional small note underneath.
pub fn metric_card(ui: &mut egui::Ui, metric: &Metric, width: f32) {
    let accent = theme::tone_colour(metric.tone);
    let response = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.label(egui::RichText::new(metric.title).strong());
            ui.label(egui::RichText::new(metric.value).size(26.0).color(accent));
            if let Some(note) = metric.note {
                ui.label(egui::RichText::new(note).small().weak());
            }
        })
        .response;

    // 3 px accent stripe along the card's left edge.
    let rect = response.rect;
    let stripe = egui::Rect::from_min_size(rect.min, egui::vec2(3.0, rect.height()));
    ui.painter().rect_filled(stripe, 0.0, accent);
}

/// A vertical bar chart drawn with the painter: one bar per named count,
/// value above each bar, name below.
pub fn bar_chart(ui: &mut egui::Ui, data: &[NamedCount], height: f32, colour: Color32) {
    if data.is_empty() {
        return;
    }
    let max = data.iter().map(|d| d.count).max().unwrap_or(1).max(1) as f32;

    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let text_colour = ui.visuals().text_color();

    let label_band = 16.0;
    let value_band = 14.0;
    let chart_bottom = rect.max.y - label_band;
    let chart_top = rect.min.y + value_band;
    let slot = rect.width() / data.len() as f32;
    let bar_width = (slot * 0.6).min(48.0);

    for (i, item) in data.iter().enumerate() {
        let centre_x = rect.min.x + slot * (i as f32 + 0.5);
        let bar_height = (chart_bottom - chart_top) * item.count as f32 / max;
        let bar = egui::Rect::from_min_max(
            egui::pos2(centre_x - bar_width / 2.0, chart_bottom - bar_height),
            egui::pos2(centre_x + bar_width / 2.0, chart_bottom),
        );
        painter.rect_filled(bar, 2.0, colour);

        painter.text(
            egui::pos2(centre_x, bar.min.y - 2.0),
            egui::Align2::CENTER_BOTTOM,
            item.count.to_string(),
            egui::FontId::proportional(11.0),
            text_colour,
        );
        painter.text(
            egui::pos2(centre_x, rect.max.y),
            egui::Align2::CENTER_BOTTOM,
            item.name,
            egui::FontId::proportional(11.0),
            text_colour,
        );
    }
}

/// A horizontal bar list: one row per named count with the label on the
/// left, a proportional bar, and the count at the end. Stands in for the
/// pie charts of the report aggregates.
pub fn bar_list(ui: &mut egui::Ui, data: &[NamedCount], colour: Color32) {
    let max = data.iter().map(|d| d.count).max().unwrap_or(1).max(1) as f32;
    egui::Grid::new(ui.next_auto_id())
        .num_columns(3)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            for item in data {
                ui.label(item.name);

                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(140.0, 10.0),
                    egui::Sense::hover(),
                );
                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 2.0, ui.visuals().faint_bg_color);
                let filled = egui::Rect::from_min_size(
                    rect.min,
                    egui::vec2(rect.width() * item.count as f32 / max, rect.height()),
                );
                painter.rect_filled(filled, 2.0, colour);

                ui.label(egui::RichText::new(item.count.to_string()).monospace());
                ui.end_row();
            }
        });
}

/// A labelled percentage gauge, as used on the system health card.
pub fn gauge(ui: &mut egui::Ui, label: &str, pct: u8, colour: Color32) {
    ui.label(egui::RichText::new(label).small().weak());
    ui.add(
        egui::ProgressBar::new(f32::from(pct) / 100.0)
            .fill(colour)
            .desired_height(8.0),
    );
    ui.label(egui::RichText::new(format!("{pct}%")).strong());
}
