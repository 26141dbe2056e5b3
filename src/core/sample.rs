// SentryView - core/sample.rs
//
// Built-in sample data. The log collection starts from this fixed set
// before any upload; the dashboard and report screens render these
// aggregates directly (there is no backing service).

use crate::core::model::{ActivityEvent, HealthGauge, Label, LogEntry, Metric, NamedCount, Tone};

/// The initial security-event collection shown before any upload.
pub fn initial_log_entries() -> Vec<LogEntry> {
    const ROWS: &[(&str, &str, &str, &str, &str, &str)] = &[
        ("2023-07-12 14:30:45", "File created", ".exe", "explorer.exe", "System", "1"),
        ("2023-07-12 14:35:22", "File modified", ".dll", "svchost.exe", "services.exe", "0"),
        ("2023-07-12 14:40:10", "File deleted", ".tmp", "chrome.exe", "explorer.exe", "0"),
        ("2023-07-12 15:05:33", "Registry modified", "", "unknown.exe", "explorer.exe", "1"),
        ("2023-07-12 15:30:45", "File created", ".doc", "winword.exe", "explorer.exe", "0"),
        ("2023-07-12 16:02:18", "File accessed", ".pdf", "acrobat.exe", "explorer.exe", "0"),
        ("2023-07-12 16:15:40", "Network connection", "", "malware.exe", "unknown", "1"),
        ("2023-07-12 16:30:22", "File modified", ".js", "node.exe", "cmd.exe", "0"),
        ("2023-07-12 17:05:11", "File created", ".bat", "cmd.exe", "explorer.exe", "1"),
        ("2023-07-12 17:20:33", "Process started", ".exe", "powershell.exe", "explorer.exe", "0"),
        ("2023-07-12 17:45:19", "File accessed", ".sys", "system", "", "0"),
        ("2023-07-12 18:10:05", "Registry accessed", "", "regedit.exe", "explorer.exe", "0"),
    ];

    ROWS.iter()
        .map(
            |&(timestamp, action, file_extension, process, parent_process, label)| LogEntry {
                timestamp: timestamp.to_string(),
                action: action.to_string(),
                file_extension: file_extension.to_string(),
                process: process.to_string(),
                parent_process: parent_process.to_string(),
                label: Label::from_raw(label),
            },
        )
        .collect()
}

/// Headline metric cards on the dashboard overview.
pub const METRICS: &[Metric] = &[
    Metric {
        title: "System Status",
        value: "Protected",
        note: None,
        tone: Tone::Ok,
    },
    Metric {
        title: "Monitored Files",
        value: "23,541",
        note: None,
        tone: Tone::Info,
    },
    Metric {
        title: "Recent Alerts",
        value: "7",
        note: Some("Last 24 hours"),
        tone: Tone::Warning,
    },
    Metric {
        title: "Active Users",
        value: "5",
        note: Some("Currently online"),
        tone: Tone::Accent,
    },
];

/// Recent-activity feed on the dashboard overview.
pub const RECENT_ACTIVITY: &[ActivityEvent] = &[
    ActivityEvent {
        date: "Today",
        name: "System Check Completed",
        status: "No issues found",
        time_ago: "1 hour ago",
    },
    ActivityEvent {
        date: "Today",
        name: "Suspicious File Activity",
        status: "Quarantined",
        time_ago: "3 hours ago",
    },
    ActivityEvent {
        date: "Yesterday",
        name: "User Login Attempt",
        status: "Failed (IP: 192.168.1.105)",
        time_ago: "12 hours ago",
    },
    ActivityEvent {
        date: "Yesterday",
        name: "System Update",
        status: "Completed",
        time_ago: "18 hours ago",
    },
    ActivityEvent {
        date: "Jul 10",
        name: "Ransomware Signature",
        status: "Detected and blocked",
        time_ago: "2 days ago",
    },
];

/// Attack attempts per weekday for the dashboard bar chart.
pub const WEEKLY_ATTACKS: &[NamedCount] = &[
    NamedCount { name: "Mon", count: 4 },
    NamedCount { name: "Tue", count: 3 },
    NamedCount { name: "Wed", count: 7 },
    NamedCount { name: "Thu", count: 2 },
    NamedCount { name: "Fri", count: 5 },
    NamedCount { name: "Sat", count: 1 },
    NamedCount { name: "Sun", count: 2 },
];

/// Resource gauges on the system health card.
pub const SYSTEM_HEALTH: &[HealthGauge] = &[
    HealthGauge { label: "CPU Usage", pct: 24 },
    HealthGauge { label: "Memory Usage", pct: 42 },
    HealthGauge { label: "Disk Usage", pct: 67 },
    HealthGauge { label: "Network", pct: 18 },
];

/// Uptime line on the system health card.
pub const SYSTEM_UPTIME: &str = "14 days, 6 hours, 32 minutes";

/// Incident counts by severity for the reports screen.
pub const SEVERITY_DISTRIBUTION: &[NamedCount] = &[
    NamedCount { name: "Critical", count: 12 },
    NamedCount { name: "High", count: 18 },
    NamedCount { name: "Medium", count: 27 },
    NamedCount { name: "Low", count: 43 },
];

/// Incident counts by type for the reports screen.
pub const INCIDENT_TYPES: &[NamedCount] = &[
    NamedCount { name: "Malware", count: 22 },
    NamedCount { name: "Ransomware", count: 10 },
    NamedCount { name: "Phishing", count: 15 },
    NamedCount { name: "Unauthorized Access", count: 8 },
    NamedCount { name: "Other", count: 13 },
];

/// Incidents per month for the reports timeline chart.
pub const MONTHLY_INCIDENTS: &[NamedCount] = &[
    NamedCount { name: "Jan", count: 18 },
    NamedCount { name: "Feb", count: 12 },
    NamedCount { name: "Mar", count: 25 },
    NamedCount { name: "Apr", count: 15 },
    NamedCount { name: "May", count: 20 },
    NamedCount { name: "Jun", count: 30 },
    NamedCount { name: "Jul", count: 22 },
    NamedCount { name: "Aug", count: 17 },
    NamedCount { name: "Sep", count: 29 },
    NamedCount { name: "Oct", count: 32 },
    NamedCount { name: "Nov", count: 24 },
    NamedCount { name: "Dec", count: 21 },
];

/// Incidents by source country for the reports screen.
pub const GEO_INCIDENTS: &[NamedCount] = &[
    NamedCount { name: "United States", count: 45 },
    NamedCount { name: "China", count: 38 },
    NamedCount { name: "Russia", count: 32 },
    NamedCount { name: "Germany", count: 15 },
    NamedCount { name: "India", count: 20 },
    NamedCount { name: "Brazil", count: 12 },
    NamedCount { name: "United Kingdom", count: 18 },
    NamedCount { name: "Japan", count: 9 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_collection_shape() {
        let entries = initial_log_entries();
        assert_eq!(entries.len(), 12);

        let alerts = entries.iter().filter(|e| e.label.is_alert()).count();
        assert_eq!(alerts, 4);

        // Optional columns are empty strings, never placeholders.
        let registry = &entries[3];
        assert_eq!(registry.action, "Registry modified");
        assert_eq!(registry.file_extension, "");
    }
}
