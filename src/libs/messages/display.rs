//! Display implementation for devtrack messages.
//!
//! This is the single source of truth for user-facing text. Every variant of
//! [`Message`] is matched explicitly, so adding a variant forces a wording
//! decision here.
//!
//! ```rust
//! use devtrack::libs::messages::Message;
//!
//! assert_eq!(Message::RowsReturned(3).to_string(), "(3 rows)");
//! assert_eq!(
//!     Message::ReportSessionsByLanguage("Go".to_string(), 30).to_string(),
//!     "Go sessions of at least 30 minutes:"
//! );
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONNECTION MESSAGES ===
            Message::Connecting(descriptor) => format!("Connecting to: {}...", descriptor),
            Message::Connected => "Connected to database successfully.".to_string(),
            Message::ConnectionFailed(error) => format!("Connection to database failed: {}", error),
            Message::ConnectionUsageHint => {
                "Make sure the database exists and holds the activity schema.\nUsage: devtrack --db \"path/to/activity.db\" [COMMAND]".to_string()
            }

            // === REPORT HEADERS ===
            Message::ReportProjects => "Projects and total coding time:".to_string(),
            Message::ReportRecentSessions => "Last 10 coding sessions:".to_string(),
            Message::ReportSessionsByLanguage(language, min_minutes) => {
                format!("{} sessions of at least {} minutes:", language, min_minutes)
            }
            Message::ReportProjectTotals => "Total coding time and session count per project:".to_string(),
            Message::ReportAverageSession(nickname) => format!("Average session length for {}:", nickname),
            Message::ReportTopLanguages(limit) => format!("Top {} languages by coding time:", limit),
            Message::ReportEditorShare => "Editor usage (share of coding time):".to_string(),
            Message::ReportBusyDays(min_minutes) => format!("Days with at least {} coding minutes:", min_minutes),
            Message::ReportProjectLeaderboard(nickname) => format!("Project leaderboard for {}:", nickname),

            // === QUERY MESSAGES ===
            Message::RowsReturned(count) => match count {
                1 => "(1 row)".to_string(),
                _ => format!("({} rows)", count),
            },
            Message::QueryFailed(error) => format!("Query failed: {}", error),

            // === SESSION MESSAGES ===
            Message::RecordingSession => "Adding a new session...".to_string(),
            Message::SessionRecorded => "Session added successfully!".to_string(),
            Message::SessionRecordFailed(error) => format!("Failed to add session: {}", error),

            // === MENU MESSAGES ===
            Message::MenuTitle => "Developer activity tracker".to_string(),
            Message::MenuProjects => "Projects and total time".to_string(),
            Message::MenuRecentSessions => "Last 10 sessions".to_string(),
            Message::MenuSessionsByLanguage => "Sessions by language".to_string(),
            Message::MenuProjectTotals => "Time and session count per project".to_string(),
            Message::MenuAverageSession => "Average session length for a developer".to_string(),
            Message::MenuTopLanguages => "Top languages by time".to_string(),
            Message::MenuEditorShare => "Editor usage share".to_string(),
            Message::MenuBusyDays => "Busy days".to_string(),
            Message::MenuProjectLeaderboard => "Project leaderboard for a developer".to_string(),
            Message::MenuRecordSession => "Add a new session".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::MenuGoodbye => "Bye!".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "Configuration file not found, nothing to remove".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::ConfigModuleOutput => "Output settings".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),

            // === PROMPTS ===
            Message::PromptLanguage => "Programming language (e.g. Python)".to_string(),
            Message::PromptMinMinutes => "Minimum minutes".to_string(),
            Message::PromptDailyMinMinutes => "Minimum coding minutes per day".to_string(),
            Message::PromptNickname => "Developer nickname (e.g. alice)".to_string(),
            Message::PromptTopLanguagesLimit => "How many languages".to_string(),
            Message::PromptProject => "Project".to_string(),
            Message::PromptDeveloper => "Developer (nickname)".to_string(),
            Message::PromptEditor => "Editor".to_string(),
            Message::PromptDuration => "Duration (minutes)".to_string(),
            Message::PromptBranch => "Branch".to_string(),
            Message::PromptOs => "OS".to_string(),
            Message::PromptConnection => "Database connection (path or SQLite URI)".to_string(),
            Message::PromptOutputFormat => "Output format".to_string(),
            Message::PromptColumnWidth => "Column width".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),
        };
        write!(f, "{}", text)
    }
}
