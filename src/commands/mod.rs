pub mod init;
pub mod menu;
pub mod record;
pub mod report;

use crate::db::{db::Db, error::DbError, reports::Report};
use crate::libs::config::Config;
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::libs::view::OutputFormat;
use crate::{msg_debug, msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Interactive menu (default)")]
    Menu,
    #[command(about = "Projects and total coding time")]
    Projects,
    #[command(about = "Last 10 coding sessions")]
    Recent,
    #[command(about = "Sessions in a language lasting at least N minutes")]
    ByLanguage {
        /// Language name, matched exactly
        language: String,
        /// Minimum session length in minutes
        #[arg(long, default_value_t = 0)]
        min: i64,
    },
    #[command(about = "Total coding time and session count per project")]
    ProjectTotals,
    #[command(about = "Average session length for a developer")]
    Avg {
        /// Developer nickname
        nickname: String,
    },
    #[command(about = "Top languages by coding time")]
    TopLanguages {
        /// Number of languages to show
        #[arg(short, long)]
        limit: Option<i64>,
    },
    #[command(about = "Editor usage share")]
    Editors,
    #[command(about = "Days with at least N coding minutes")]
    BusyDays {
        /// Minimum coding minutes per day
        #[arg(long, default_value_t = 0)]
        min: i64,
    },
    #[command(about = "Project leaderboard for a developer")]
    Leaderboard {
        /// Developer nickname
        nickname: String,
    },
    #[command(about = "Add a new coding session")]
    Record(record::RecordArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database connection: SQLite file path or file: URI
    #[arg(long, global = true, value_name = "DESCRIPTOR")]
    db: Option<String>,

    /// Output format for report results
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// What a run does once it holds a connection.
enum Action {
    Menu,
    Report(Report),
    TopLanguages(Option<i64>),
    Record(record::RecordArgs),
}

impl Cli {
    pub fn menu() -> Result<ExitCode> {
        let _ = dotenv();
        init_tracing();

        let cli = Self::parse();
        let action = match cli.command.unwrap_or(Commands::Menu) {
            Commands::Init(args) => {
                init::cmd(args)?;
                return Ok(ExitCode::SUCCESS);
            }
            Commands::Menu => Action::Menu,
            Commands::Projects => Action::Report(Report::Projects),
            Commands::Recent => Action::Report(Report::RecentSessions),
            Commands::ByLanguage { language, min } => Action::Report(Report::SessionsByLanguage {
                language,
                min_minutes: min,
            }),
            Commands::ProjectTotals => Action::Report(Report::ProjectTotals),
            Commands::Avg { nickname } => Action::Report(Report::AverageSession { nickname }),
            Commands::TopLanguages { limit } => Action::TopLanguages(limit),
            Commands::Editors => Action::Report(Report::EditorShare),
            Commands::BusyDays { min } => Action::Report(Report::BusyDays { min_minutes: min }),
            Commands::Leaderboard { nickname } => Action::Report(Report::ProjectLeaderboard { nickname }),
            Commands::Record(args) => Action::Record(args),
        };

        let config = Config::read()?;
        let mut output = config.output();
        if let Some(format) = cli.format {
            output.format = format;
        }

        let interactive = matches!(action, Action::Menu);
        let descriptor = config.connection(cli.db.as_deref());
        if interactive {
            msg_print!(Message::Connecting(descriptor.clone()));
        } else {
            msg_debug!(Message::Connecting(descriptor.clone()));
        }

        let mut db = match Db::open(&descriptor) {
            Ok(db) => db,
            Err(e) => {
                let mut messages = connection_failure(&e, interactive).into_iter();
                if let Some(failure) = messages.next() {
                    msg_error!(failure);
                }
                for hint in messages {
                    msg_info!(hint);
                }
                return Ok(ExitCode::FAILURE);
            }
        };
        if interactive {
            msg_success!(Message::Connected);
        }

        let succeeded = match action {
            Action::Menu => {
                menu::cmd(&db, &output)?;
                true
            }
            Action::Report(report) => report::cmd(&db, &report, &output)?,
            Action::TopLanguages(limit) => report::cmd(
                &db,
                &Report::TopLanguages {
                    limit: limit.unwrap_or(output.top_languages),
                },
                &output,
            )?,
            Action::Record(args) => record::cmd(&db, args),
        };

        db.disconnect();
        Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }
}

/// Lines printed when the connection cannot be opened.
///
/// The first is the diagnostic. One-shot runs get nothing else so scripts see a
/// single line on stderr; the menu adds a usage hint.
fn connection_failure(error: &DbError, interactive: bool) -> Vec<Message> {
    let mut messages = vec![Message::ConnectionFailed(error.to_string())];
    if interactive {
        messages.push(Message::ConnectionUsageHint);
    }
    messages
}

/// Installs the tracing subscriber when debug mode is on.
///
/// `RUST_LOG` drives the filter when set; `DEVTRACK_DEBUG` alone enables
/// debug output for this crate.
fn init_tracing() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devtrack=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
