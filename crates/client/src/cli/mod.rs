//! CLI command definitions.

pub mod days;
pub mod shell;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shiftsync_core::access::credential_from_link;
use shiftsync_core::calendar::{DateKey, Scope};
use shiftsync_core::schedule::{BulkTemplate, DayEdit, Location, PartnerCode, WorkStatus};

use crate::client::DEFAULT_BASE_URL;
use crate::error::Result;

pub use days::DaySpec;

/// CLI client for the shiftsync schedule API.
#[derive(Debug, Parser)]
#[command(name = "shiftsync-client")]
#[command(about = "View and edit shared shift schedules", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "SHIFTSYNC_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Access key.
    #[arg(long, env = "SHIFTSYNC_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Access link containing the key (`?key=` or `?k=`). Overrides --key.
    #[arg(long)]
    pub link: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The credential to present, taken from `--link` first, then `--key`.
    pub fn credential(&self) -> Result<Option<String>> {
        if let Some(link) = &self.link {
            return Ok(Some(credential_from_link(link)?));
        }
        Ok(self.key.clone().filter(|key| !key.trim().is_empty()))
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the month calendar.
    Show {
        /// Month as YYYY-MM (defaults to the current month).
        #[arg(long)]
        month: Option<Scope>,
    },
    /// Show the details of one day.
    Day {
        /// Date as YYYY-MM-DD.
        date: DateKey,
    },
    /// Show work and off day counts for a month.
    Stats {
        /// Month as YYYY-MM (defaults to the current month).
        #[arg(long)]
        month: Option<Scope>,
    },
    /// Set one day and save.
    Set {
        /// Date as YYYY-MM-DD.
        date: DateKey,
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Apply the same status to several days and save.
    Bulk {
        /// Month as YYYY-MM (defaults to the current month).
        #[arg(long)]
        month: Option<Scope>,
        /// Days to change: `all`, or a list like `1,2,5-9`.
        #[arg(long)]
        days: DaySpec,
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Remove the entries of several days and save.
    Clear {
        /// Month as YYYY-MM (defaults to the current month).
        #[arg(long)]
        month: Option<Scope>,
        /// Days to clear: `all`, or a list like `1,2,5-9`.
        #[arg(long)]
        days: DaySpec,
        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },
    /// Interactive session with navigation, editing and explicit save.
    Shell {
        /// Month to start in, as YYYY-MM (defaults to the current month).
        #[arg(long)]
        month: Option<Scope>,
    },
    /// Check that the server is up.
    Health,
}

/// Status, site and partner for edited days.
#[derive(Debug, Clone, Args)]
pub struct EntryArgs {
    /// `work` or `off`.
    #[arg(long, default_value = "work")]
    pub status: WorkStatus,
    /// Site for working days: `tastak` (A) or `saryarka` (B).
    #[arg(long, default_value = "tastak")]
    pub location: Location,
    /// Partner for working days: `man`, `a`, `md` or `g`.
    #[arg(long, default_value = "man")]
    pub partner: PartnerCode,
}

impl EntryArgs {
    pub fn day_edit(&self) -> DayEdit {
        DayEdit {
            status: self.status,
            location: self.location,
            partner: self.partner,
        }
    }

    pub fn template(&self) -> BulkTemplate {
        BulkTemplate {
            status: self.status,
            location: Some(self.location),
            partner: Some(self.partner),
        }
    }
}
