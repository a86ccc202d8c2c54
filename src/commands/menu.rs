//! Interactive menu loop.
//!
//! Collects report parameters with prompts and hands them to the report
//! catalog or the session recorder. Numeric prompts only accept integers and
//! re-ask otherwise. A failed report or recording is reported and the loop
//! continues; only Exit, Esc or `q` leave it.

use super::{record, report};
use crate::{
    db::{db::Db, reports::Report},
    libs::{config::OutputConfig, messages::Message, session::NewSession},
    msg_print,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuEntry {
    Projects,
    RecentSessions,
    SessionsByLanguage,
    ProjectTotals,
    AverageSession,
    TopLanguages,
    EditorShare,
    BusyDays,
    ProjectLeaderboard,
    RecordSession,
    Exit,
}

impl MenuEntry {
    const ALL: [MenuEntry; 11] = [
        MenuEntry::Projects,
        MenuEntry::RecentSessions,
        MenuEntry::SessionsByLanguage,
        MenuEntry::ProjectTotals,
        MenuEntry::AverageSession,
        MenuEntry::TopLanguages,
        MenuEntry::EditorShare,
        MenuEntry::BusyDays,
        MenuEntry::ProjectLeaderboard,
        MenuEntry::RecordSession,
        MenuEntry::Exit,
    ];

    fn label(&self) -> Message {
        match self {
            MenuEntry::Projects => Message::MenuProjects,
            MenuEntry::RecentSessions => Message::MenuRecentSessions,
            MenuEntry::SessionsByLanguage => Message::MenuSessionsByLanguage,
            MenuEntry::ProjectTotals => Message::MenuProjectTotals,
            MenuEntry::AverageSession => Message::MenuAverageSession,
            MenuEntry::TopLanguages => Message::MenuTopLanguages,
            MenuEntry::EditorShare => Message::MenuEditorShare,
            MenuEntry::BusyDays => Message::MenuBusyDays,
            MenuEntry::ProjectLeaderboard => Message::MenuProjectLeaderboard,
            MenuEntry::RecordSession => Message::MenuRecordSession,
            MenuEntry::Exit => Message::MenuExit,
        }
    }
}

pub fn cmd(db: &Db, output: &OutputConfig) -> Result<()> {
    let labels: Vec<String> = MenuEntry::ALL.iter().map(|entry| entry.label().to_string()).collect();
    let mut last = 0;

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::MenuTitle.to_string())
            .items(&labels)
            .default(last)
            .interact_opt()?;

        let Some(index) = selection else { break };
        last = index;

        let report = match MenuEntry::ALL[index] {
            MenuEntry::Projects => Report::Projects,
            MenuEntry::RecentSessions => Report::RecentSessions,
            MenuEntry::SessionsByLanguage => Report::SessionsByLanguage {
                language: prompt_text(Message::PromptLanguage)?,
                min_minutes: prompt_number(Message::PromptMinMinutes, None)?,
            },
            MenuEntry::ProjectTotals => Report::ProjectTotals,
            MenuEntry::AverageSession => Report::AverageSession {
                nickname: prompt_text(Message::PromptNickname)?,
            },
            MenuEntry::TopLanguages => Report::TopLanguages {
                limit: prompt_number(Message::PromptTopLanguagesLimit, Some(output.top_languages))?,
            },
            MenuEntry::EditorShare => Report::EditorShare,
            MenuEntry::BusyDays => Report::BusyDays {
                min_minutes: prompt_number(Message::PromptDailyMinMinutes, None)?,
            },
            MenuEntry::ProjectLeaderboard => Report::ProjectLeaderboard {
                nickname: prompt_text(Message::PromptNickname)?,
            },
            MenuEntry::RecordSession => {
                let session = prompt_session()?;
                record::record(db, &session);
                continue;
            }
            MenuEntry::Exit => break,
        };

        report::cmd(db, &report, output)?;
    }

    msg_print!(Message::MenuGoodbye);
    Ok(())
}

fn prompt_text(prompt: Message) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .interact_text()?)
}

fn prompt_number(prompt: Message, default: Option<i64>) -> Result<i64> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<i64>::with_theme(&theme).with_prompt(prompt.to_string());
    if let Some(default) = default {
        input = input.default(default);
    }
    Ok(input.interact_text()?)
}

fn prompt_session() -> Result<NewSession> {
    Ok(NewSession {
        project: prompt_text(Message::PromptProject)?,
        developer: prompt_text(Message::PromptDeveloper)?,
        language: prompt_text(Message::PromptLanguage)?,
        editor: prompt_text(Message::PromptEditor)?,
        duration_minutes: prompt_number(Message::PromptDuration, None)?,
        branch: prompt_text(Message::PromptBranch)?,
        os: prompt_text(Message::PromptOs)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_ends_with_exit() {
        assert_eq!(MenuEntry::ALL.last(), Some(&MenuEntry::Exit));
        assert_eq!(MenuEntry::ALL[0].label().to_string(), "Projects and total time");
    }
}
