// SentryView - ui/screens/login.rs
//
// Sign-in screen. There is no real authentication: any non-empty
// email/password pair is accepted.

use crate::app::state::{AppState, Screen};
use crate::ui::theme;

/// Render the login screen (standalone, outside the dashboard shell).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(theme::FORM_WIDTH);

                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("Welcome back").size(24.0).strong());
                    ui.label(
                        egui::RichText::new("Enter your credentials to access your account")
                            .weak(),
                    );
                });
                ui.add_space(12.0);

                ui.label("Email");
                ui.add(
                    egui::TextEdit::singleline(&mut state.login.email)
                        .hint_text("Enter your email")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.label("Password");
                let password = ui.add(
                    egui::TextEdit::singleline(&mut state.login.password)
                        .hint_text("Enter your password")
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(12.0);

                let submit = ui
                    .add_sized(
                        [ui.available_width(), 28.0],
                        egui::Button::new("Sign In"),
                    )
                    .clicked();
                let entered =
                    password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if submit || entered {
                    state.attempt_login();
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Don't have an account?").weak());
                    if ui.link("Sign up").clicked() {
                        state.navigate(Screen::Register);
                    }
                });
            });
    });
}
