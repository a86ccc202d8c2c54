use crate::{
    db::{db::Db, sessions::Sessions},
    libs::{messages::Message, session::NewSession},
    msg_error, msg_print, msg_success,
};
use clap::Args;

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Project name
    #[arg(long)]
    project: String,
    /// Developer nickname
    #[arg(long)]
    developer: String,
    /// Language name
    #[arg(long)]
    language: String,
    /// Editor name
    #[arg(long)]
    editor: String,
    /// Session length in minutes
    #[arg(long)]
    minutes: i64,
    /// Branch the work happened on
    #[arg(long, default_value = "main")]
    branch: String,
    /// Operating system label
    #[arg(long, default_value = std::env::consts::OS)]
    os: String,
}

impl From<RecordArgs> for NewSession {
    fn from(args: RecordArgs) -> Self {
        NewSession {
            project: args.project,
            developer: args.developer,
            language: args.language,
            editor: args.editor,
            duration_minutes: args.minutes,
            branch: args.branch,
            os: args.os,
        }
    }
}

pub fn cmd(db: &Db, args: RecordArgs) -> bool {
    record(db, &args.into())
}

/// Records a session and reports the outcome. Returns `false` on failure.
pub fn record(db: &Db, session: &NewSession) -> bool {
    msg_print!(Message::RecordingSession);
    match Sessions::new(db).record(session) {
        Ok(()) => {
            msg_success!(Message::SessionRecorded);
            true
        }
        Err(e) => {
            msg_error!(Message::SessionRecordFailed(e.to_string()));
            false
        }
    }
}
