use clap::Parser;
use climatter_core::*;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod display;
mod notify;

#[derive(Parser)]
#[command(name = "climatter")]
#[command(about = "Event notifier and lister", long_about = None)]
#[command(after_help = "The user config is read from ~/.config/climatter/config.toml \
(or $XDG_CONFIG_HOME/climatter/config.toml). It is TOML; an older config.yaml \
must be rewritten with the same [option] and [event_lists] sections.")]
struct Cli {
    /// Path to a TOML config file, applied on top of the user config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Notify today's events instead of listing them
    #[arg(short, long)]
    notify: bool,

    /// List mode: nearest (default), furthest, or all
    #[arg(short, long, value_parser = ["nearest", "furthest", "all"])]
    mode: Option<String>,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long)]
    dev_today: Option<String>,

    /// Print the list as JSON instead of a table
    #[arg(long, conflicts_with = "notify")]
    json: bool,
}

/// Runs the command and prints any fatal error with its `Display` message.
fn main() -> ExitCode {
    // Initialize logging
    climatter_core::logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mode = cli.mode.as_deref().map(str::parse::<ListMode>).transpose()?;
    let config = Config::load(cli.config.as_deref())?
        .with_overrides(mode, cli.dev_today.as_deref())?;
    let today = config.today();

    tracing::debug!("Reference date: {}", today);

    if cli.notify {
        cmd_notify(&config, today)
    } else {
        cmd_list(&config, today, cli.json)
    }
}

fn cmd_list(config: &Config, today: chrono::NaiveDate, json: bool) -> Result<()> {
    let events = list_events(config, today);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        display::render_json(&events, &mut out)?;
    } else {
        display::render_table(&events, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn cmd_notify(config: &Config, today: chrono::NaiveDate) -> Result<()> {
    let events = collect_events(config, today);
    let mut notifier = notify::DesktopNotifier::default();
    let sent = notify::notify_today(&events, &mut notifier);

    if sent == 0 {
        tracing::info!("No events today ({})", today);
    } else {
        tracing::info!("Sent {} notification(s)", sent);
    }
    Ok(())
}
