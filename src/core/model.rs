// SentryView - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies (core depends on std only).
//
// These types are the shared vocabulary across all layers.

// =============================================================================
// Log Entry (normalised output of ingestion)
// =============================================================================

/// A single ingested security event record.
///
/// This is the core data unit that flows through filtering, pagination,
/// and display. All fields are always present: positions missing from a
/// source row become empty strings during ingestion, never `None`.
///
/// `timestamp` is free-form display text. It is shown verbatim and is
/// never parsed as a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub action: String,
    pub file_extension: String,
    pub process: String,
    pub parent_process: String,
    pub label: Label,
}

impl LogEntry {
    /// All six field values as strings, in column order.
    ///
    /// The whole-record search matches against each of these, including
    /// the label's canonical "0"/"1" value.
    pub fn field_values(&self) -> [&str; 6] {
        [
            &self.timestamp,
            &self.action,
            &self.file_extension,
            &self.process,
            &self.parent_process,
            self.label.as_str(),
        ]
    }
}

// =============================================================================
// Label
// =============================================================================

/// Classification of an ingested event.
///
/// Source data carries this as a string column where "1" means alert and
/// "0" means benign. Normalisation maps any raw value other than "1"
/// (including the empty string from a missing column) to `Benign`, so the
/// stored value is always exactly one of the two literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    #[default]
    Benign,
    Alert,
}

impl Label {
    /// Normalise a raw label column value.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "1" {
            Label::Alert
        } else {
            Label::Benign
        }
    }

    /// Canonical string value, as it appears in source data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Benign => "0",
            Label::Alert => "1",
        }
    }

    /// Human-readable badge text for display.
    pub fn badge(&self) -> &'static str {
        match self {
            Label::Benign => "Safe",
            Label::Alert => "Alert",
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, Label::Alert)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.badge())
    }
}

// =============================================================================
// Theme preference
// =============================================================================

/// The user's interface theme preference.
///
/// `System` resolves against the window system's reported preference at
/// apply time. The active preference is the application's only persisted
/// state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// All variants in display order.
    pub fn all() -> &'static [ThemePreference] {
        &[
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }

    /// Parse a config value. Accepts the lowercase names used in
    /// config.toml; anything else is rejected so the caller can warn.
    pub fn from_config(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            "system" => Some(ThemePreference::System),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Dashboard display data
// =============================================================================

/// Accent tone for metric cards and activity rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Info,
    Warning,
    Alert,
    Accent,
}

/// One headline metric card on the dashboard overview.
#[derive(Debug, Clone)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub note: Option<&'static str>,
    pub tone: Tone,
}

/// One row in the recent-activity feed.
#[derive(Debug, Clone)]
pub struct ActivityEvent {
    pub date: &'static str,
    pub name: &'static str,
    pub status: &'static str,
    pub time_ago: &'static str,
}

impl ActivityEvent {
    /// Tone derived from the event's status text, mirroring how the feed
    /// classifies events for its icon colour.
    pub fn tone(&self) -> Tone {
        if self.name.contains("Check") || self.status.contains("No issues") {
            Tone::Ok
        } else if self.status.contains("Quarantined") || self.status.contains("Detected") {
            Tone::Alert
        } else if self.status.contains("Failed") {
            Tone::Warning
        } else {
            Tone::Info
        }
    }
}

/// A labelled count, used by the charts (weekly attacks, severity
/// distribution, incident types, monthly timeline, incidents by country).
#[derive(Debug, Clone, Copy)]
pub struct NamedCount {
    pub name: &'static str,
    pub count: u32,
}

/// One resource gauge on the system health card (percentage 0-100).
#[derive(Debug, Clone, Copy)]
pub struct HealthGauge {
    pub label: &'static str,
    pub pct: u8,
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_normalisation() {
        assert_eq!(Label::from_raw("1"), Label::Alert);
        assert_eq!(Label::from_raw("0"), Label::Benign);
        // Anything that is not "1" is benign, including junk and empty.
        assert_eq!(Label::from_raw(""), Label::Benign);
        assert_eq!(Label::from_raw("2"), Label::Benign);
        assert_eq!(Label::from_raw("true"), Label::Benign);
    }

    #[test]
    fn test_label_string_value_is_always_a_literal() {
        for raw in ["1", "0", "", "yes", "alert"] {
            let value = Label::from_raw(raw).as_str();
            assert!(value == "0" || value == "1", "unexpected value {value:?}");
        }
    }

    #[test]
    fn test_field_values_includes_label_literal() {
        let entry = LogEntry {
            timestamp: "2023-07-12 14:30:45".to_string(),
            action: "File created".to_string(),
            file_extension: ".exe".to_string(),
            process: "explorer.exe".to_string(),
            parent_process: "System".to_string(),
            label: Label::Alert,
        };
        assert_eq!(entry.field_values()[5], "1");
    }

    #[test]
    fn test_activity_tone_classification() {
        let quarantined = ActivityEvent {
            date: "Today",
            name: "Suspicious File Activity",
            status: "Quarantined",
            time_ago: "3 hours ago",
        };
        assert_eq!(quarantined.tone(), Tone::Alert);

        let failed_login = ActivityEvent {
            date: "Yesterday",
            name: "User Login Attempt",
            status: "Failed (IP: 192.168.1.105)",
            time_ago: "12 hours ago",
        };
        assert_eq!(failed_login.tone(), Tone::Warning);
    }
}
