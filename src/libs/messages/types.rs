#[derive(Debug, Clone)]
pub enum Message {
    // === CONNECTION MESSAGES ===
    Connecting(String), // descriptor
    Connected,
    ConnectionFailed(String), // driver diagnostic
    ConnectionUsageHint,

    // === REPORT HEADERS ===
    ReportProjects,
    ReportRecentSessions,
    ReportSessionsByLanguage(String, i64), // language, min minutes
    ReportProjectTotals,
    ReportAverageSession(String), // nickname
    ReportTopLanguages(i64),      // limit
    ReportEditorShare,
    ReportBusyDays(i64),              // min minutes
    ReportProjectLeaderboard(String), // nickname

    // === QUERY MESSAGES ===
    RowsReturned(usize),
    QueryFailed(String), // driver diagnostic

    // === SESSION MESSAGES ===
    RecordingSession,
    SessionRecorded,
    SessionRecordFailed(String), // error

    // === MENU MESSAGES ===
    MenuTitle,
    MenuProjects,
    MenuRecentSessions,
    MenuSessionsByLanguage,
    MenuProjectTotals,
    MenuAverageSession,
    MenuTopLanguages,
    MenuEditorShare,
    MenuBusyDays,
    MenuProjectLeaderboard,
    MenuRecordSession,
    MenuExit,
    MenuGoodbye,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleDatabase,
    ConfigModuleOutput,
    ConfigParseError(String), // error

    // === PROMPTS ===
    PromptLanguage,
    PromptMinMinutes,
    PromptDailyMinMinutes,
    PromptNickname,
    PromptTopLanguagesLimit,
    PromptProject,
    PromptDeveloper,
    PromptEditor,
    PromptDuration,
    PromptBranch,
    PromptOs,
    PromptConnection,
    PromptOutputFormat,
    PromptColumnWidth,
    PromptSelectModules,
}
