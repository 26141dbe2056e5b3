// SentryView - ui/screens/reports.rs
//
// Security reports screen: filter form, export actions (placeholders),
// and charts over the sample incident aggregates.

use crate::app::state::{AppState, DateRange, Frequency, ReportScope};
use crate::core::sample;
use crate::ui::{theme, widgets};

/// Render the reports screen.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Security Reports").size(24.0).strong());
            ui.label(
                egui::RichText::new(
                    "Analyze security incidents and generate customized reports",
                )
                .weak(),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for format in ["JSON", "PDF", "CSV"] {
                if ui.button(format!("\u{2913} {format}")).clicked() {
                    state.toasts.info(
                        format!("Exporting as {format}"),
                        "Your report is being prepared for download",
                    );
                }
            }
        });
    });
    ui.add_space(theme::CARD_SPACING);

    render_filters(ui, state);
    ui.add_space(theme::CARD_SPACING);
    render_charts(ui);
}

/// The report parameter form. Scheduling is the only action with any
/// validation: an empty email is rejected with a toast.
fn render_filters(ui: &mut egui::Ui, state: &mut AppState) {
    widgets::card(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Report Filters").strong());
        ui.label(egui::RichText::new("Customize your report parameters").small().weak());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Time Range");
                egui::ComboBox::from_id_salt("report_range")
                    .selected_text(state.reports.date_range.label())
                    .show_ui(ui, |ui| {
                        for range in DateRange::all() {
                            ui.selectable_value(
                                &mut state.reports.date_range,
                                *range,
                                range.label(),
                            );
                        }
                    });
            });
            if state.reports.date_range == DateRange::Custom {
                ui.add_space(16.0);
                ui.vertical(|ui| {
                    ui.label("From / To");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut state.reports.custom_start)
                                .hint_text("2023-06-01")
                                .desired_width(90.0),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut state.reports.custom_end)
                                .hint_text("2023-07-01")
                                .desired_width(90.0),
                        );
                    });
                });
            }
            ui.add_space(16.0);
            ui.vertical(|ui| {
                ui.label("Report Type");
                egui::ComboBox::from_id_salt("report_scope")
                    .selected_text(state.reports.scope.label())
                    .show_ui(ui, |ui| {
                        for scope in ReportScope::all() {
                            ui.selectable_value(&mut state.reports.scope, *scope, scope.label());
                        }
                    });
            });
        });

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        ui.checkbox(&mut state.reports.schedule_enabled, "Email scheduled reports");
        ui.add_enabled_ui(state.reports.schedule_enabled, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut state.reports.email)
                        .hint_text("security-team@example.com")
                        .desired_width(220.0),
                );
                egui::ComboBox::from_id_salt("report_frequency")
                    .selected_text(state.reports.frequency.label())
                    .show_ui(ui, |ui| {
                        for freq in Frequency::all() {
                            ui.selectable_value(
                                &mut state.reports.frequency,
                                *freq,
                                freq.label(),
                            );
                        }
                    });
                if ui.button("Schedule Report").clicked() {
                    if state.reports.email.trim().is_empty() {
                        state.toasts.error(
                            "Email Required",
                            "Please enter an email address for scheduled reports",
                        );
                    } else {
                        state.toasts.success(
                            "Report Scheduled",
                            format!(
                                "Reports will be sent {} to {}",
                                state.reports.frequency.label(),
                                state.reports.email
                            ),
                        );
                    }
                }
            });
        });
    });
}

/// The four aggregate charts, two per row.
fn render_charts(ui: &mut egui::Ui) {
    let half = (ui.available_width() - theme::CARD_SPACING) / 2.0 - 14.0;

    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = theme::CARD_SPACING;
        widgets::card(ui, |ui| {
            ui.set_width(half.max(200.0));
            ui.label(egui::RichText::new("Incidents by Severity").strong());
            ui.add_space(6.0);
            widgets::bar_list(
                ui,
                sample::SEVERITY_DISTRIBUTION,
                theme::tone_colour(crate::core::model::Tone::Alert),
            );
        });
        widgets::card(ui, |ui| {
            ui.set_width(half.max(200.0));
            ui.label(egui::RichText::new("Incidents by Type").strong());
            ui.add_space(6.0);
            widgets::bar_list(
                ui,
                sample::INCIDENT_TYPES,
                theme::tone_colour(crate::core::model::Tone::Accent),
            );
        });
    });
    ui.add_space(theme::CARD_SPACING);

    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = theme::CARD_SPACING;
        widgets::card(ui, |ui| {
            ui.set_width(half.max(200.0));
            ui.label(egui::RichText::new("Incident Timeline").strong());
            ui.add_space(6.0);
            widgets::bar_chart(ui, sample::MONTHLY_INCIDENTS, theme::CHART_HEIGHT, theme::CHART_BAR);
        });
        widgets::card(ui, |ui| {
            ui.set_width(half.max(200.0));
            ui.label(egui::RichText::new("Incidents by Country").strong());
            ui.add_space(6.0);
            widgets::bar_list(
                ui,
                sample::GEO_INCIDENTS,
                theme::tone_colour(crate::core::model::Tone::Info),
            );
        });
    });
}
