/// A coding session to be recorded.
///
/// Developer, project, language and editor are given by their human-readable
/// names; the recorder resolves them to keys. The start time is not part of
/// the request: it is stamped at the moment of insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub project: String,
    pub developer: String,
    pub language: String,
    pub editor: String,
    pub duration_minutes: i64,
    pub branch: String,
    pub os: String,
}

impl NewSession {
    pub fn new(project: &str, developer: &str, language: &str, editor: &str, duration_minutes: i64, branch: &str, os: &str) -> Self {
        NewSession {
            project: project.to_string(),
            developer: developer.to_string(),
            language: language.to_string(),
            editor: editor.to_string(),
            duration_minutes,
            branch: branch.to_string(),
            os: os.to_string(),
        }
    }
}
