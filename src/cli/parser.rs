use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rBMIlogger
/// CLI application to record body measurements with SQLite
#[derive(Parser)]
#[command(
    name = "rbmilogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple BMI logging CLI: record weight and height measurements using SQLite",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check config and database paths and report stored record count"
        )]
        check: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new measurement
    Add {
        /// Name of the measured person
        name: String,

        /// Weight in kilograms
        weight: String,

        /// Height in meters
        height: String,
    },

    /// List all stored measurements
    List,

    /// Show BMI progression per subject as a chart
    History {
        #[arg(long, help = "Restrict the chart to one subject (exact name)")]
        subject: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export measurement data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: the configured export file)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
