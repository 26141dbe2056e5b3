// SentryView - ui/screens/mod.rs

pub mod dashboard;
pub mod login;
pub mod logs;
pub mod register;
pub mod reports;
pub mod settings;
