// SentryView - ui/screens/settings.rs
//
// Settings screen: category chooser plus the three sections. Theme is
// the only functional section; password and profile are placeholder
// forms.

use crate::app::state::{AppState, SettingsSection};
use crate::core::model::ThemePreference;
use crate::ui::{theme, widgets};

/// Render the settings screen.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Settings").size(24.0).strong());
            ui.label(
                egui::RichText::new("Manage your account settings and preferences.").weak(),
            );
        });
        if state.settings_section.is_some() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Back to Settings").clicked() {
                    state.settings_section = None;
                }
            });
        }
    });
    ui.add_space(theme::CARD_SPACING);

    match state.settings_section {
        None => render_chooser(ui, state),
        Some(section) => render_section(ui, state, section),
    }
}

/// The three large category buttons.
fn render_chooser(ui: &mut egui::Ui, state: &mut AppState) {
    let width = (ui.available_width() - 2.0 * theme::CARD_SPACING) / 3.0 - 10.0;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::CARD_SPACING;
        for section in [
            SettingsSection::Password,
            SettingsSection::Theme,
            SettingsSection::Profile,
        ] {
            if ui
                .add_sized(
                    [width.max(140.0), 72.0],
                    egui::Button::new(section.title()),
                )
                .clicked()
            {
                state.settings_section = Some(section);
            }
        }
    });
}

fn render_section(ui: &mut egui::Ui, state: &mut AppState, section: SettingsSection) {
    widgets::card(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(section.title()).strong());
        ui.label(egui::RichText::new(section.description()).small().weak());
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        match section {
            SettingsSection::Password => render_password(ui, state),
            SettingsSection::Theme => render_theme(ui, state),
            SettingsSection::Profile => render_profile(ui, state),
        }
    });
}

/// Placeholder: validates the confirmation locally, then defers to the
/// coming-soon toast. No credential store exists.
fn render_password(ui: &mut egui::Ui, state: &mut AppState) {
    ui.set_max_width(theme::FORM_WIDTH);

    ui.label("Current Password");
    ui.add(
        egui::TextEdit::singleline(&mut state.password_form.current)
            .password(true)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    ui.label("New Password");
    ui.add(
        egui::TextEdit::singleline(&mut state.password_form.new)
            .password(true)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    ui.label("Confirm New Password");
    ui.add(
        egui::TextEdit::singleline(&mut state.password_form.confirm)
            .password(true)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(10.0);

    if ui.button("Update Password").clicked() {
        if state.password_form.new != state.password_form.confirm {
            state.toasts.error("Error", "New passwords do not match");
        } else {
            state.toasts.coming_soon();
        }
    }
}

/// The functional section: pick light/dark/system, applied immediately
/// and persisted as the app's only saved state.
fn render_theme(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        for pref in ThemePreference::all() {
            if ui
                .selectable_label(state.theme == *pref, pref.label())
                .clicked()
            {
                state.set_theme(*pref);
            }
        }
    });
    ui.add_space(8.0);

    let blurb = match state.theme {
        ThemePreference::Light => {
            "Light theme applies a bright color scheme, ideal for use during daytime."
        }
        ThemePreference::Dark => {
            "Dark theme uses a darker color palette, reducing eye strain in low-light environments."
        }
        ThemePreference::System => {
            "System automatically switches between light and dark themes based on your device settings."
        }
    };
    ui.label(egui::RichText::new(blurb).weak());
}

/// Placeholder profile form.
fn render_profile(ui: &mut egui::Ui, state: &mut AppState) {
    ui.set_max_width(theme::FORM_WIDTH);

    ui.label("Name");
    ui.add(
        egui::TextEdit::singleline(&mut state.profile_form.name)
            .hint_text("Admin")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    ui.label("Email");
    ui.add(
        egui::TextEdit::singleline(&mut state.profile_form.email)
            .hint_text("admin@example.com")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(10.0);

    if ui.button("Save Changes").clicked() {
        state.toasts.coming_soon();
    }
}
