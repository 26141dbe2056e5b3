// SentryView - gui.rs
//
// Top-level eframe::App implementation.
// Routes between the standalone screens (login, register) and the
// dashboard shell (sidebar + status bar + active screen), renders the
// toast queue, and applies theme changes.

use crate::app::state::{AppState, Screen};
use crate::ui;

/// The SentryView application.
pub struct SentryViewApp {
    pub state: AppState,
}

impl SentryViewApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |panel| {
                panel.add_space(8.0);
                panel.horizontal(|ui| {
                    ui.label(egui::RichText::new("\u{1f6e1}").size(20.0));
                    ui.label(egui::RichText::new("SentryView").size(18.0).strong());
                });
                panel.add_space(8.0);

                // Quick actions: placeholders, matching the toast copy of
                // the rest of the unbuilt surface.
                panel.horizontal(|ui| {
                    if ui.button("\u{1f50d} Search").clicked() {
                        self.state
                            .toasts
                            .info("Search", "Search functionality coming soon");
                    }
                    if ui.button("\u{1f514} Alerts").clicked() {
                        self.state
                            .toasts
                            .info("Notifications", "You have no new notifications");
                    }
                });
                panel.add_space(8.0);
                panel.separator();

                panel.label(egui::RichText::new("Main Navigation").small().weak());
                panel.add_space(4.0);

                for screen in Screen::shell_entries() {
                    let selected = self.state.screen == *screen;
                    if panel
                        .selectable_label(selected, screen.title())
                        .clicked()
                    {
                        self.state.navigate(*screen);
                    }
                    // The Alerts entry sits between Detailed Logs and
                    // Reports but has no screen behind it yet.
                    if *screen == Screen::Logs
                        && panel.selectable_label(false, "Alerts").clicked()
                    {
                        self.state.toasts.coming_soon();
                    }
                }

                panel.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    ui.add_space(8.0);
                    if ui
                        .button(egui::RichText::new("\u{23fb} Logout").color(
                            egui::Color32::from_rgb(239, 68, 68),
                        ))
                        .clicked()
                    {
                        self.state.logout();
                    }
                });
            });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |panel| {
            panel.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.screen == Screen::Logs {
                        let total = self.state.log_table.total_len();
                        let filtered = self.state.log_table.filtered_len();
                        if total > 0 {
                            ui.label(format!("{filtered}/{total} entries"));
                        }
                    }
                    ui.label(
                        egui::RichText::new(format!(
                            "v{}",
                            crate::util::constants::APP_VERSION
                        ))
                        .small()
                        .weak(),
                    );
                });
            });
        });
    }
}

impl eframe::App for SentryViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.theme_dirty {
            ui::theme::apply(ctx, self.state.theme);
            self.state.theme_dirty = false;
        }

        if self.state.screen.in_shell() {
            self.render_status_bar(ctx);
            self.render_sidebar(ctx);
            egui::CentralPanel::default().show(ctx, |panel| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(panel, |ui| match self.state.screen {
                        Screen::Overview => ui::screens::dashboard::render(ui, &mut self.state),
                        Screen::Logs => ui::screens::logs::render(ui, &mut self.state),
                        Screen::Reports => ui::screens::reports::render(ui, &mut self.state),
                        Screen::Settings => ui::screens::settings::render(ui, &mut self.state),
                        Screen::Login | Screen::Register => {}
                    });
            });
        } else {
            egui::CentralPanel::default().show(ctx, |panel| match self.state.screen {
                Screen::Register => ui::screens::register::render(panel, &mut self.state),
                _ => ui::screens::login::render(panel, &mut self.state),
            });
        }

        self.state.toasts.render(ctx);
    }
}
