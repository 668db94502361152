use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_expense_command, handle_export_command, ExpenseCommands, ExportArgs};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal expense tracker",
    long_about = "Record what you spend, see totals for this month and overall, \
                  and chart the last few months. Data lives in a local SQLite file."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export all expenses to CSV, JSON or YAML
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new().context("Failed to resolve data directory")?;
    let first_run = !paths.is_initialized();
    paths.ensure_directories()?;

    let tui = matches!(cli.command, None | Some(Commands::Tui));
    init_logging(cli.verbose, tui.then_some(&paths));
    let settings = Settings::load_or_create(&paths).context("Failed to load settings")?;
    if first_run && !paths.settings_file().exists() {
        settings.save(&paths).context("Failed to write default settings")?;
        log::info!("Created {}", paths.settings_file().display());
    }
    let storage = Storage::from_paths(&paths).context("Failed to open expense database")?;

    match cli.command {
        None | Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Database file:   {}", paths.database_file().display());
            println!("TUI log file:    {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Chart months:    {}", settings.chart_months);
            println!();
            println!("Database:");
            println!("  Schema version:  {}", storage.schema_version()?);
            println!("  Expenses:        {}", storage.expenses().count()?);
        }
    }

    storage.close()?;
    Ok(())
}

/// Default `warn`; each `-v` raises it one step. `RUST_LOG` wins when set.
///
/// With `log_to` set, records go to that directory's log file instead of
/// stderr, since stderr would draw over the TUI. If the file cannot be
/// opened, no logger is installed.
fn init_logging(verbose: u8, log_to: Option<&ExpensePaths>) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_target(false);

    if let Some(paths) = log_to {
        match paths.open_log() {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => return,
        }
    }

    builder.init();
}
