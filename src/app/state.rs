// SentryView - app/state.rs
//
// Application state management. Holds the current screen, the log table,
// form buffers, the toast queue, and the active theme.
// Owned by the eframe::App implementation.

use crate::core::ingest;
use crate::core::model::ThemePreference;
use crate::core::view::LogTable;
use crate::platform::prefs::{self, Preferences};
use crate::ui::toast::Toasts;
use std::path::{Path, PathBuf};

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Overview,
    Logs,
    Reports,
    Settings,
}

impl Screen {
    /// Sidebar entries of the dashboard shell, in display order.
    pub fn shell_entries() -> &'static [Screen] {
        &[Screen::Overview, Screen::Logs, Screen::Reports, Screen::Settings]
    }

    /// Whether this screen renders inside the dashboard shell
    /// (sidebar + status bar) rather than as a standalone page.
    pub fn in_shell(&self) -> bool {
        !matches!(self, Screen::Login | Screen::Register)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Register => "Create Account",
            Screen::Overview => "Overview",
            Screen::Logs => "Detailed Logs",
            Screen::Reports => "Reports",
            Screen::Settings => "Settings",
        }
    }
}

/// Settings categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    Password,
    Theme,
    Profile,
}

impl SettingsSection {
    pub fn title(&self) -> &'static str {
        match self {
            SettingsSection::Password => "Change Password",
            SettingsSection::Theme => "Theme",
            SettingsSection::Profile => "Manage Profile",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SettingsSection::Password => "Update your password to keep your account secure.",
            SettingsSection::Theme => "Customize your interface theme preferences.",
            SettingsSection::Profile => "Manage your personal information and account details.",
        }
    }
}

/// Time range selector on the reports screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    Last7Days,
    #[default]
    Last30Days,
    Custom,
}

impl DateRange {
    pub fn all() -> &'static [DateRange] {
        &[DateRange::Last7Days, DateRange::Last30Days, DateRange::Custom]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 days",
            DateRange::Last30Days => "Last 30 days",
            DateRange::Custom => "Custom range",
        }
    }
}

/// Scheduled-report frequency selector on the reports screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn all() -> &'static [Frequency] {
        &[Frequency::Daily, Frequency::Weekly, Frequency::Monthly]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }
}

/// Incident scope selector on the reports screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportScope {
    #[default]
    All,
    AlertsOnly,
    BlockedThreats,
}

impl ReportScope {
    pub fn all() -> &'static [ReportScope] {
        &[ReportScope::All, ReportScope::AlertsOnly, ReportScope::BlockedThreats]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportScope::All => "All incidents",
            ReportScope::AlertsOnly => "Alerts only",
            ReportScope::BlockedThreats => "Blocked threats",
        }
    }
}

/// Text buffers for the login form.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Text buffers for the registration form.
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Report filter form state.
#[derive(Debug, Default)]
pub struct ReportsForm {
    pub date_range: DateRange,
    /// Custom range bounds, used only when `date_range` is `Custom`.
    pub custom_start: String,
    pub custom_end: String,
    pub scope: ReportScope,
    pub email: String,
    pub schedule_enabled: bool,
    pub frequency: Frequency,
}

/// Placeholder form buffers for the password settings section.
#[derive(Debug, Default)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

/// Placeholder form buffers for the profile settings section.
#[derive(Debug, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

/// Top-level application state.
pub struct AppState {
    /// Active screen.
    pub screen: Screen,

    /// The security-event log table (collection + search + pagination).
    pub log_table: LogTable,

    /// Toast notification queue.
    pub toasts: Toasts,

    /// Status message for the status bar.
    pub status_message: String,

    /// Active theme preference.
    pub theme: ThemePreference,

    /// Set when the theme changed and must be re-applied to the context.
    pub theme_dirty: bool,

    /// Where the preferences file lives.
    prefs_path: PathBuf,

    // -- Form buffers --
    pub login: LoginForm,
    pub register: RegisterForm,
    pub reports: ReportsForm,
    pub password_form: PasswordForm,
    pub profile_form: ProfileForm,

    /// Selected settings category (None = category chooser).
    pub settings_section: Option<SettingsSection>,
}

impl AppState {
    /// Create initial state: sample data loaded, login screen active.
    pub fn new(theme: ThemePreference, prefs_path: PathBuf) -> Self {
        Self {
            screen: Screen::Login,
            log_table: LogTable::with_entries(crate::core::sample::initial_log_entries()),
            toasts: Toasts::new(),
            status_message: "Ready.".to_string(),
            theme,
            theme_dirty: true,
            prefs_path,
            login: LoginForm::default(),
            register: RegisterForm::default(),
            reports: ReportsForm::default(),
            password_form: PasswordForm::default(),
            profile_form: ProfileForm::default(),
            settings_section: None,
        }
    }

    /// Switch to another screen.
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        self.status_message = format!("{}.", screen.title());
    }

    /// Sign-in handler. Succeeds whenever both fields are non-empty;
    /// there is no real authentication behind this form.
    pub fn attempt_login(&mut self) {
        if self.login.email.trim().is_empty() || self.login.password.is_empty() {
            self.toasts
                .error("Missing credentials", "Enter your email and password");
            return;
        }
        self.navigate(Screen::Overview);
        self.toasts.success("Success", "Logged in successfully");
        self.login.password.clear();
    }

    /// Registration handler. Validates only that the passwords match and
    /// the fields are filled; no account is created.
    pub fn attempt_register(&mut self) {
        if self.register.password != self.register.confirm {
            self.toasts.error("Error", "Passwords do not match");
            return;
        }
        if self.register.name.trim().is_empty()
            || self.register.email.trim().is_empty()
            || self.register.password.is_empty()
        {
            self.toasts
                .error("Missing details", "Fill in every field to get started");
            return;
        }
        self.toasts.success("Success", "Account created successfully");
        self.register = RegisterForm::default();
        self.navigate(Screen::Login);
    }

    pub fn logout(&mut self) {
        self.toasts
            .success("Logged out", "You have been successfully logged out");
        self.login.password.clear();
        self.navigate(Screen::Login);
    }

    /// Change the theme preference, persist it, and confirm with a toast.
    pub fn set_theme(&mut self, theme: ThemePreference) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        self.theme_dirty = true;

        let prefs = Preferences {
            version: prefs::PREFS_VERSION,
            theme,
        };
        if let Err(e) = prefs::save(&prefs, &self.prefs_path) {
            tracing::warn!(error = %e, "Could not persist theme preference");
        }

        let mode = match theme {
            ThemePreference::System => "system default".to_string(),
            other => other.label().to_lowercase(),
        };
        self.toasts
            .success("Theme updated", format!("Theme set to {mode} mode."));
    }

    /// Ingest a user-selected file into the log table.
    ///
    /// On failure the table is untouched: `ingest_file` only returns a
    /// new collection, and we install it on the success path alone.
    pub fn ingest_from(&mut self, path: &Path) {
        match ingest::ingest_file(path, None) {
            Ok(entries) => {
                let count = entries.len();
                self.log_table.replace(entries);
                self.toasts.success(
                    "CSV file loaded",
                    format!("Successfully loaded {count} log entries"),
                );
                self.status_message = format!(
                    "Loaded {count} entries from {}.",
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("upload")
                );
            }
            Err(e) => {
                self.toasts.error("Upload failed", e.to_string());
                let err = crate::util::error::SentryViewError::from(e);
                tracing::warn!(file = %path.display(), error = %err, "Ingestion failed");
            }
        }
    }
}
