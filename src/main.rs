use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use expense_dashboard::cli::{
    handle_add_command, handle_chart_command, handle_export_command, handle_list_command,
    handle_summary_command, ExportFormat,
};
use expense_dashboard::config::{paths::ExpensePaths, settings::Settings};
use expense_dashboard::logging::init_logging;
use expense_dashboard::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal expense tracker dashboard",
    long_about = "Records expenses in a local SQLite database and shows total \
                  income, total expenses, remaining income and an expenses-over-time \
                  chart. Set EXPENSE_DASHBOARD_DIR to choose where data is kept."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Dashboard,

    /// Record an expense
    Add {
        /// What the money was spent on
        title: String,
        /// Amount spent
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all expenses, newest first
    #[command(alias = "ls")]
    List,

    /// Show income, expenses and remaining income
    Summary,

    /// Print the expenses-over-time chart as JSON
    Chart {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export all expenses to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Write default settings and create the database schema
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings.log_level, &paths.log_dir())?;

    let storage = Storage::new(paths.clone());

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => {
            expense_dashboard::tui::run_tui(&storage, &settings)?;
        }
        Commands::Add {
            title,
            amount,
            date,
        } => {
            handle_add_command(&storage, &settings, &title, amount, date)?;
        }
        Commands::List => {
            handle_list_command(&storage, &settings)?;
        }
        Commands::Summary => {
            handle_summary_command(&storage, &settings)?;
        }
        Commands::Chart { output, pretty } => {
            handle_chart_command(&storage, &settings, output, pretty)?;
        }
        Commands::Export {
            output,
            format,
            pretty,
        } => {
            handle_export_command(&storage, &output, format, pretty)?;
        }
        Commands::Init => {
            println!("Initializing expense dashboard at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.expenses.ensure_schema()?;
            println!("Database: {}", paths.database_file().display());
            println!("Initialization complete!");
        }
        Commands::Config => {
            println!("Expense Dashboard Configuration");
            println!("===============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Database:       {}", paths.database_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log directory:  {}", paths.log_dir().display());
            println!("Initialized:    {}", if paths.is_initialized() { "yes" } else { "no" });
            println!();
            println!("Settings:");
            println!("  Fixed income:    {}", settings.fixed_income);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
            println!("  Tick rate (ms):  {}", settings.tick_rate_ms);
        }
    }

    Ok(())
}
