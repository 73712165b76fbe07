//! shiftsync-client CLI entry point.

use chrono::Local;
use clap::Parser;
use shiftsync_client::cli::shell::{self, Prompt, TerminalPrompt};
use shiftsync_client::cli::{Cli, Commands, DaySpec, OutputFormat};
use shiftsync_client::client::ShiftsyncClient;
use shiftsync_client::controller::SyncController;
use shiftsync_client::error::ClientError;
use shiftsync_client::output::{format_output, render_day, render_month, render_stats};
use shiftsync_core::calendar::Scope;
use shiftsync_core::session::{FetchOutcome, LoadState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shiftsync_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let credential = cli.credential()?;
    let client = ShiftsyncClient::new(&cli.base_url, credential.clone().unwrap_or_default());
    let today = Local::now().date_naive();
    let mut prompt = TerminalPrompt;

    match cli.command {
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!("Server status: {}", health.status),
            }
        }
        Commands::Show { month } => {
            let controller = open(client, credential, month_or_current(month)).await?;
            println!("{}", render_month(controller.session(), today, cli.format));
        }
        Commands::Day { date } => {
            let controller = open(client, credential, date.scope()).await?;
            println!("{}", render_day(controller.session(), date, cli.format));
        }
        Commands::Stats { month } => {
            let controller = open(client, credential, month_or_current(month)).await?;
            println!("{}", render_stats(controller.session(), cli.format));
        }
        Commands::Set { date, entry } => {
            let mut controller = open_online(client, credential, date.scope()).await?;
            controller
                .session_mut()
                .edit_day(date.day(), &entry.day_edit())?;
            controller.save().await?;
            if !cli.quiet {
                println!("{}", render_day(controller.session(), date, cli.format));
            }
        }
        Commands::Bulk {
            month,
            days,
            entry,
        } => {
            let mut controller = open_online(client, credential, month_or_current(month)).await?;
            select_days(&mut controller, &days)?;
            let applied = controller.session_mut().apply_bulk(&entry.template())?;
            controller.save().await?;
            if !cli.quiet {
                println!("Изменено дней: {}", applied);
            }
        }
        Commands::Clear { month, days, yes } => {
            let mut controller = open_online(client, credential, month_or_current(month)).await?;
            select_days(&mut controller, &days)?;
            let removed = controller.session_mut().delete_selected(|count| {
                yes || prompt.confirm(&format!("Удалить данные для {} выбранных дней?", count))
            })?;
            match removed {
                Some(removed) => {
                    controller.save().await?;
                    if !cli.quiet {
                        println!("Удалено записей: {}", removed);
                    }
                }
                None => {
                    if !cli.quiet {
                        println!("Отменено");
                    }
                }
            }
        }
        Commands::Shell { month } => {
            let mut controller = open(client, credential, month_or_current(month)).await?;
            shell::run(&mut controller, &mut prompt, cli.format).await?;
        }
    }

    Ok(())
}

fn month_or_current(month: Option<Scope>) -> Scope {
    month.unwrap_or_else(Scope::current)
}

async fn open(
    client: ShiftsyncClient,
    credential: Option<String>,
    scope: Scope,
) -> Result<SyncController<ShiftsyncClient>, ClientError> {
    let mut controller = SyncController::new(client, credential, scope);
    controller.open().await?;
    Ok(controller)
}

/// Opens a month for a one-shot edit. Refuses to continue on fallback data
/// after a failed fetch, since saving it would overwrite the stored month.
async fn open_online(
    client: ShiftsyncClient,
    credential: Option<String>,
    scope: Scope,
) -> Result<SyncController<ShiftsyncClient>, ClientError> {
    let mut controller = SyncController::new(client, credential, scope);
    if controller.open().await? == FetchOutcome::Offline {
        if let LoadState::Error(error) = controller.session().state() {
            return Err(error.clone().into());
        }
    }
    Ok(controller)
}

fn select_days(
    controller: &mut SyncController<ShiftsyncClient>,
    days: &DaySpec,
) -> Result<(), ClientError> {
    let session = controller.session_mut();
    match days {
        DaySpec::All => session.select_all()?,
        DaySpec::Days(_) => {
            for day in days.resolve(session.scope().days_in_month()) {
                session.toggle_day(day)?;
            }
        }
    }
    Ok(())
}
