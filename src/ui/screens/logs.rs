// SentryView - ui/screens/logs.rs
//
// Detailed logs screen: the security-event table with whole-record
// search, CSV upload, and pagination. All table state lives in
// `core::view::LogTable`; this module only renders it and forwards
// user events.

use crate::app::state::AppState;
use crate::ui::{theme, widgets};
use crate::util::constants::PAGE_NAV_NEIGHBOURS;

/// Render the detailed logs screen.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Header row: title on the left, upload/export actions on the right.
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Detailed Logs").size(24.0).strong());
            ui.label(
                egui::RichText::new("View and analyze detailed security event logs").weak(),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Export Logs").clicked() {
                state.toasts.info(
                    "Download initiated",
                    "Your log file is being prepared for download",
                );
            }
            if ui.button("\u{1f4c1} Upload CSV").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .pick_file()
                {
                    state.ingest_from(&path);
                }
            }
        });
    });
    ui.add_space(theme::CARD_SPACING);

    widgets::card(ui, |ui| {
        ui.set_width(ui.available_width());

        // Card header: table title and the search box.
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Security Event Logs").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut term = state.log_table.search_term().to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut term)
                        .hint_text("\u{1f50d} Search logs...")
                        .desired_width(220.0),
                );
                if response.changed() {
                    state.log_table.set_search_term(term);
                }
            });
        });
        ui.add_space(6.0);
        ui.separator();

        if state.log_table.filtered_len() == 0 {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("No logs found").weak());
                ui.label(
                    egui::RichText::new(
                        "Try uploading a CSV file or adjusting your search criteria",
                    )
                    .small()
                    .weak(),
                );
            });
            ui.add_space(24.0);
            return;
        }

        render_table(ui, state);
        render_pagination(ui, state);
    });
}

/// The six-column event table for the current page.
fn render_table(ui: &mut egui::Ui, state: &mut AppState) {
    egui::Grid::new("security_event_logs")
        .num_columns(6)
        .striped(true)
        .min_row_height(theme::TABLE_ROW_HEIGHT)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for heading in [
                "Timestamp",
                "Action",
                "File Extension",
                "Process",
                "Parent Process",
                "Status",
            ] {
                ui.label(egui::RichText::new(heading).strong().small());
            }
            ui.end_row();

            for entry in state.log_table.current_page_entries() {
                ui.label(egui::RichText::new(&entry.timestamp).monospace().small());
                ui.label(&entry.action);
                ui.label(dash_if_empty(&entry.file_extension));
                ui.label(&entry.process);
                ui.label(dash_if_empty(&entry.parent_process));
                ui.label(
                    egui::RichText::new(format!(" {} ", entry.label.badge()))
                        .color(theme::label_colour(&entry.label))
                        .background_color(theme::label_bg_colour(&entry.label))
                        .strong(),
                );
                ui.end_row();
            }
        });
}

/// Previous / numbered / next controls. Numbered buttons collapse into an
/// ellipsis outside the window around the current page.
fn render_pagination(ui: &mut egui::Ui, state: &mut AppState) {
    let total = state.log_table.page_count();
    if total <= 1 {
        return;
    }
    let current = state.log_table.current_page();

    ui.add_space(8.0);
    let mut goto: Option<usize> = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(current > 1, egui::Button::new("\u{2039} Previous"))
            .clicked()
        {
            goto = Some(current - 1);
        }

        let mut last_shown = 0usize;
        for page in 1..=total {
            let near = page.abs_diff(current) <= PAGE_NAV_NEIGHBOURS;
            if page != 1 && page != total && !near {
                continue;
            }
            if last_shown != 0 && page != last_shown + 1 {
                ui.label("\u{2026}");
            }
            if ui
                .selectable_label(page == current, page.to_string())
                .clicked()
            {
                goto = Some(page);
            }
            last_shown = page;
        }

        if ui
            .add_enabled(current < total, egui::Button::new("Next \u{203a}"))
            .clicked()
        {
            goto = Some(current + 1);
        }
    });

    if let Some(page) = goto {
        state.log_table.set_page(page);
    }
}

fn dash_if_empty(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
