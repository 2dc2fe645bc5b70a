//! The command line interface for the calculator.
use crate::aggregate::{Footprint, aggregate};
use crate::budget::{monthly_credits, total_credits};
use crate::factors::MONTHLY_BUDGET_KG;
use crate::input::load_session;
use crate::ledger::{append_records, read_ledger, records_for_footprint};
use crate::log;
use crate::output::metadata::write_metadata;
use crate::output::{create_output_directory, get_output_dir, write_results};
use crate::recommend::{detailed_tips, rank_history, top_history_category};
use crate::settings::Settings;
use ::log::{info, warn};
use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

pub mod example;
use example::ExampleSubcommands;
pub mod settings;
use settings::SettingsSubcommands;

/// The command line interface for the calculator.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Options for the run command
#[derive(Args)]
pub struct RunOpts {
    /// Directory for output files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Whether to overwrite the output directory if it already exists
    #[arg(long)]
    pub overwrite: bool,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Calculate the footprint for a session.
    Run {
        /// Path to the session directory.
        session_dir: PathBuf,
        /// Other run options
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Manage example sessions.
    Example {
        /// The available subcommands for managing example sessions.
        #[command(subcommand)]
        subcommand: ExampleSubcommands,
    },
    /// Validate a session.
    Validate {
        /// The path to the session directory.
        session_dir: PathBuf,
    },
    /// Summarise the emissions and credits recorded in a ledger.
    History {
        /// Path to the ledger (defaults to the one in the settings file).
        ledger_path: Option<PathBuf>,
    },
    /// Manage settings file.
    Settings {
        /// The subcommands for managing the settings file
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Run { session_dir, opts } => handle_run_command(&session_dir, &opts, None),
            Self::Example { subcommand } => subcommand.execute(),
            Self::Validate { session_dir } => handle_validate_command(&session_dir, None),
            Self::History { ledger_path } => handle_history_command(ledger_path.as_deref(), None),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and start the program
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ footprint --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        // Output program help
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Load program settings, if not provided
fn load_settings(settings: Option<Settings>) -> Result<Settings> {
    if let Some(settings) = settings {
        Ok(settings)
    } else {
        Settings::load().context("Failed to load settings.")
    }
}

/// Log the headline figures for a footprint
fn log_footprint(footprint: &Footprint) {
    for entry in &footprint.breakdown {
        info!(
            "{}: {:.2} kg CO2e/month",
            entry.label(),
            entry.monthly().value()
        );
    }
    if !footprint.direct.readings.is_empty() {
        info!(
            "Direct readings: {:.2} kg CO2e",
            footprint.direct.total.value()
        );
    }

    let status = footprint.status(MONTHLY_BUDGET_KG);
    info!(
        "Total: {:.2} kg CO2e/month ({:.0}% of budget)",
        status.total, status.percent_used
    );
    if status.is_over {
        warn!("Monthly budget exceeded by {:.2} kg CO2e", status.surplus);
    } else {
        info!("Credits earned: {:.2}", status.credits);
    }

    for tip in footprint.tips() {
        info!("Tip: {tip}");
    }
}

/// Handle the `run` command.
pub fn handle_run_command(
    session_path: &Path,
    opts: &RunOpts,
    settings: Option<Settings>,
) -> Result<()> {
    let settings = load_settings(settings)?;
    let timestamp = Utc::now();

    // Get path to output folder
    let pathbuf: PathBuf;
    let output_path = if let Some(p) = opts.output_dir.as_deref() {
        p
    } else {
        pathbuf = get_output_dir(session_path)?;
        &pathbuf
    };

    // The overwrite setting can be enabled by command-line argument
    let overwrite = create_output_directory(output_path, opts.overwrite || settings.overwrite)
        .with_context(|| {
            format!(
                "Failed to create output directory: {}",
                output_path.display()
            )
        })?;

    // Initialise program logger
    log::init(Some(settings.log_level.as_str()), Some(output_path))
        .context("Failed to initialise logging.")?;

    // Load the session
    let session = load_session(session_path).context("Failed to load session.")?;
    info!("Loaded session from {}", session_path.display());
    info!("Output folder: {}", output_path.display());

    // NB: We have to wait until the logger is initialised to display this warning
    if overwrite {
        warn!("Output folder will be overwritten");
    }

    let footprint = aggregate(&session.answers, &session.readings, session.household_size);
    log_footprint(&footprint);

    write_results(output_path, &footprint).context("Failed to write results.")?;
    write_metadata(output_path, session_path, timestamp)
        .context("Failed to save metadata.")?;

    if let Some(ledger_path) = &settings.ledger_path {
        let records = records_for_footprint(&footprint, timestamp);
        append_records(ledger_path, &records).context("Failed to update ledger.")?;
        info!(
            "Recorded {} entries in {}",
            records.len(),
            ledger_path.display()
        );
    }

    info!("Calculation complete!");

    Ok(())
}

/// Handle the `validate` command.
pub fn handle_validate_command(session_path: &Path, settings: Option<Settings>) -> Result<()> {
    let settings = load_settings(settings)?;

    // Initialise program logger (we won't save log files when running the validate command)
    log::init(Some(settings.log_level.as_str()), None).context("Failed to initialise logging.")?;

    // Load/validate the session
    load_session(session_path).context("Failed to validate session.")?;
    info!("Session validation successful!");

    Ok(())
}

/// Handle the `history` command.
pub fn handle_history_command(ledger_path: Option<&Path>, settings: Option<Settings>) -> Result<()> {
    let settings = load_settings(settings)?;
    log::init(Some(settings.log_level.as_str()), None).context("Failed to initialise logging.")?;

    let ledger_path = ledger_path
        .or(settings.ledger_path.as_deref())
        .context("No ledger specified. Pass a path or set ledger_path in the settings file.")?;
    let records = read_ledger(ledger_path).context("Failed to load ledger.")?;

    let months = monthly_credits(&records, MONTHLY_BUDGET_KG);
    for month in &months {
        let marker = if month.is_over { " (over budget)" } else { "" };
        println!(
            "{}-{:02}: {:.2} kg CO2e, {:.2} credits{marker}",
            month.year, month.month, month.total, month.credits
        );
    }
    println!("Total credits: {:.2}", total_credits(&months));

    for tip in rank_history(&records) {
        println!("Tip: {tip}");
    }
    if let Some(category) = top_history_category(&records) {
        println!("More ways to cut {} emissions:", category.label());
        for advice in detailed_tips(category) {
            println!("  - {advice}");
        }
    }

    Ok(())
}
