//! Interactive schedule session.
//!
//! Each input line is parsed as a command with clap. Local edits only mark
//! the session dirty; nothing reaches the server until `save`.

use std::io::Write;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use shiftsync_core::calendar::Scope;
use shiftsync_core::session::{FetchOutcome, SaveOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{DaySpec, EntryArgs, OutputFormat};
use crate::controller::SyncController;
use crate::error::{ClientError, Result};
use crate::output::{render_day, render_month, render_stats};
use crate::remote::ScheduleRemote;

const DISCARD_PROMPT: &str = "Есть несохраненные изменения. Продолжить без сохранения?";

/// Asks the user yes/no questions.
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Terminal prompt backed by dialoguer. Anything but an explicit yes is a no.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

#[derive(Debug, Parser)]
#[command(name = "shiftsync", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Commands accepted by the shell.
#[derive(Debug, Clone, Subcommand)]
pub enum ShellCommand {
    /// Show the month calendar.
    Show,
    /// Go to the next month.
    Next,
    /// Go to the previous month.
    Prev,
    /// Go to a month given as YYYY-MM.
    Goto { month: Scope },
    /// Show the details of a day.
    Day { day: u32 },
    /// Set one day.
    Set {
        day: u32,
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Toggle days in the selection: `all`, or a list like `1,2,5-9`.
    #[command(alias = "select")]
    Toggle { days: DaySpec },
    /// Empty the selection.
    Unselect,
    /// Apply a status to every selected day.
    Bulk {
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Remove the entries of every selected day.
    Delete {
        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },
    /// Show day counts.
    Stats,
    /// Save the month to the server.
    Save,
    /// Fetch the month again.
    Reload,
    /// Hide the error banner.
    Dismiss,
    /// Leave the shell.
    #[command(aliases = ["exit", "q"])]
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> std::result::Result<Option<ShellCommand>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    ShellLine::try_parse_from(words).map(|line| Some(line.command))
}

/// What the shell does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(Option<String>),
    Quit,
}

/// Runs one command against the controller.
pub async fn execute<R, P>(
    controller: &mut SyncController<R>,
    command: ShellCommand,
    prompt: &mut P,
    format: OutputFormat,
    today: NaiveDate,
) -> Result<Flow>
where
    R: ScheduleRemote,
    P: Prompt,
{
    let output = match command {
        ShellCommand::Show => render_month(controller.session(), today, format),
        ShellCommand::Next => {
            let outcome = controller
                .next_month(|| prompt.confirm(DISCARD_PROMPT))
                .await?;
            after_navigation(controller, outcome, today, format)
        }
        ShellCommand::Prev => {
            let outcome = controller
                .prev_month(|| prompt.confirm(DISCARD_PROMPT))
                .await?;
            after_navigation(controller, outcome, today, format)
        }
        ShellCommand::Goto { month } => {
            let outcome = controller
                .navigate(month, || prompt.confirm(DISCARD_PROMPT))
                .await?;
            after_navigation(controller, outcome, today, format)
        }
        ShellCommand::Day { day } => {
            let scope = controller.session().scope();
            let date = scope.date_key(day).ok_or_else(|| {
                ClientError::InvalidInput(format!("{} has no day {}", scope, day))
            })?;
            render_day(controller.session(), date, format)
        }
        ShellCommand::Set { day, entry } => {
            controller.session_mut().edit_day(day, &entry.day_edit())?;
            let date = controller.session().scope().date_key(day);
            match date {
                Some(date) => render_day(controller.session(), date, format),
                None => String::new(),
            }
        }
        ShellCommand::Toggle { days } => {
            let session = controller.session_mut();
            if days == DaySpec::All {
                session.select_all()?;
            } else {
                for day in days.resolve(session.scope().days_in_month()) {
                    session.toggle_day(day)?;
                }
            }
            let selected: Vec<String> = session.selection().days().map(|d| d.to_string()).collect();
            format!("Выбрано: {}", selected.join(", "))
        }
        ShellCommand::Unselect => {
            controller.session_mut().clear_selection();
            "Выбор очищен".to_string()
        }
        ShellCommand::Bulk { entry } => {
            let applied = controller.session_mut().apply_bulk(&entry.template())?;
            format!("Изменено дней: {}", applied)
        }
        ShellCommand::Delete { yes } => {
            let removed = controller.session_mut().delete_selected(|count| {
                yes || prompt.confirm(&format!("Удалить данные для {} выбранных дней?", count))
            })?;
            match removed {
                Some(removed) => format!("Удалено записей: {}", removed),
                None => "Отменено".to_string(),
            }
        }
        ShellCommand::Stats => render_stats(controller.session(), format),
        ShellCommand::Save => match controller.save().await? {
            SaveOutcome::Saved => "Сохранено".to_string(),
            SaveOutcome::SavedWithPendingChanges => {
                "Сохранено, но есть новые несохраненные изменения".to_string()
            }
        },
        ShellCommand::Reload => {
            if controller.session().is_dirty() && !prompt.confirm(DISCARD_PROMPT) {
                return Ok(Flow::Continue(None));
            }
            controller.reload().await?;
            render_month(controller.session(), today, format)
        }
        ShellCommand::Dismiss => {
            controller.session_mut().dismiss_banner();
            return Ok(Flow::Continue(None));
        }
        ShellCommand::Quit => {
            if controller.session().is_dirty() && !prompt.confirm(DISCARD_PROMPT) {
                return Ok(Flow::Continue(None));
            }
            return Ok(Flow::Quit);
        }
    };

    Ok(Flow::Continue(Some(output)))
}

fn after_navigation<R: ScheduleRemote>(
    controller: &SyncController<R>,
    outcome: Option<FetchOutcome>,
    today: NaiveDate,
    format: OutputFormat,
) -> String {
    match outcome {
        Some(_) => render_month(controller.session(), today, format),
        None => format!("Остаемся на {}", controller.session().scope()),
    }
}

/// Reads commands from stdin until `quit` or end of input.
///
/// Auth failures end the shell. Every other error is printed and the shell
/// keeps going.
pub async fn run<R, P>(
    controller: &mut SyncController<R>,
    prompt: &mut P,
    format: OutputFormat,
) -> Result<()>
where
    R: ScheduleRemote,
    P: Prompt,
{
    println!(
        "{}",
        render_month(controller.session(), Local::now().date_naive(), format)
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}> ", controller.session().scope());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                eprintln!("{}", error.render());
                continue;
            }
        };

        let today = Local::now().date_naive();
        match execute(controller, command, prompt, format, today).await {
            Ok(Flow::Continue(Some(output))) => println!("{}", output),
            Ok(Flow::Continue(None)) => {}
            Ok(Flow::Quit) => break,
            Err(ClientError::Session(error)) if error.is_terminal() => {
                return Err(ClientError::Session(error));
            }
            Err(error) => eprintln!("Error: {}", error),
        }
    }
    Ok(())
}
