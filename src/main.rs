use anyhow::Result;
use clap::{Parser, Subcommand};

use pulse_cli::cli::{
    handle_calculate_command, handle_loan_command, handle_report_command, BudgetArgs, LoanArgs,
};
use pulse_cli::config::{PulsePaths, Settings};
use pulse_cli::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "pulse",
    version,
    about = "Terminal-based budget health and loan EMI calculator",
    long_about = "PulseCLI evaluates a monthly budget against a simple-interest loan \
                  estimate, classifies your financial health, and renders a proportional \
                  breakdown chart with an on-demand narrative analysis. All numeric \
                  fields are parsed defensively: anything unreadable counts as zero."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Run one budget calculation and print the summary, loan panel, and chart
    #[command(alias = "calc")]
    Calculate {
        #[command(flatten)]
        budget: BudgetArgs,

        #[command(flatten)]
        loan: LoanArgs,

        /// Print the structured results as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Estimate the loan schedule on its own
    Loan {
        #[command(flatten)]
        loan: LoanArgs,

        /// Print the structured result as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate the narrative analysis for the given figures
    Report {
        #[command(flatten)]
        budget: BudgetArgs,

        #[command(flatten)]
        loan: LoanArgs,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PulsePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            run_tui(&settings)?;
        }
        Some(Commands::Calculate { budget, loan, json }) => {
            handle_calculate_command(&settings, &budget, &loan, json)?;
        }
        Some(Commands::Loan { loan, json }) => {
            handle_loan_command(&settings, &loan, json)?;
        }
        Some(Commands::Report { budget, loan }) => {
            handle_report_command(&settings, &budget, &loan)?;
        }
        Some(Commands::Config) => {
            println!("PulseCLI Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Savings target:      {}%", settings.savings_target_percent);
            println!("  Date format:         {}", settings.date_format);
            println!("  Chart width:         {}", settings.chart_width);
        }
        None => {
            println!("PulseCLI - Terminal-based budget health and loan EMI calculator");
            println!();
            println!("Run 'pulse --help' for usage information.");
            println!("Run 'pulse tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
