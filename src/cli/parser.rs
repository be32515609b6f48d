use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkHours
#[derive(Parser)]
#[command(
    name = "rworkhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily working hours and compute the monthly payroll (base, overtime, bonuses, advances)",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Show or change the hourly rate and the on-account advance
    Settings {
        #[arg(long = "rate", help = "Hourly rate (invalid values count as 0)")]
        rate: Option<String>,

        #[arg(
            long = "on-account",
            help = "Advance already paid this month, subtracted from the payout"
        )]
        on_account: Option<String>,
    },

    /// Add a work entry
    Add {
        #[arg(long, help = "Work date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "start", help = "Start time (HH:MM), default from config")]
        start: Option<String>,

        #[arg(long = "end", help = "End time (HH:MM), default next half hour")]
        end: Option<String>,

        #[arg(long, help = "Free-text note")]
        note: Option<String>,

        #[arg(long, help = "Bonus amount for this entry")]
        bonus: Option<String>,
    },

    /// Change fields of an existing entry
    Edit {
        /// Entry id (see `list`)
        id: i64,

        #[arg(long)]
        date: Option<String>,

        #[arg(long = "start")]
        start: Option<String>,

        #[arg(long = "end")]
        end: Option<String>,

        #[arg(long)]
        note: Option<String>,

        #[arg(long)]
        bonus: Option<String>,
    },

    /// Delete an entry
    Del {
        /// Entry id (see `list`)
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List the entries of a month followed by its payroll summary
    List {
        #[arg(long, short, help = "Month to show (YYYY-MM), default the selected one")]
        month: Option<String>,
    },

    /// Show the payroll summary of a month
    Summary {
        #[arg(long, short, help = "Month to show (YYYY-MM), default the selected one")]
        month: Option<String>,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },

    /// List months with entries, or select the month to display
    Months {
        #[arg(long, value_name = "YYYY-MM")]
        select: Option<String>,
    },

    /// Export entries to CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Month to export (YYYY-MM), default the selected one")]
        month: Option<String>,

        #[arg(long, conflicts_with = "month", help = "Export every entry")]
        all: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
