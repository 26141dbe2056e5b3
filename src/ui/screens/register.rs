// SentryView - ui/screens/register.rs
//
// Account creation screen. Validates only that the passwords match and
// the fields are filled; no account is actually created.

use crate::app::state::{AppState, Screen};
use crate::ui::theme;

/// Render the registration screen (standalone, outside the dashboard shell).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.12);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(theme::FORM_WIDTH);

                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Create a SentryView account")
                            .size(22.0)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new("Enter your information to get started").weak(),
                    );
                });
                ui.add_space(12.0);

                ui.label("Name");
                ui.add(
                    egui::TextEdit::singleline(&mut state.register.name)
                        .hint_text("Enter your name")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.label("Email");
                ui.add(
                    egui::TextEdit::singleline(&mut state.register.email)
                        .hint_text("Enter your email")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.label("Password");
                ui.add(
                    egui::TextEdit::singleline(&mut state.register.password)
                        .hint_text("Create a password")
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.label("Confirm Password");
                ui.add(
                    egui::TextEdit::singleline(&mut state.register.confirm)
                        .hint_text("Confirm your password")
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(12.0);

                if ui
                    .add_sized([ui.available_width(), 28.0], egui::Button::new("Sign Up"))
                    .clicked()
                {
                    state.attempt_register();
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Already have an account?").weak());
                    if ui.link("Sign in").clicked() {
                        state.navigate(Screen::Login);
                    }
                });
            });
    });
}
