use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for qrclock
/// CLI application to track employee attendance with SQLite
#[derive(Parser)]
#[command(
    name = "qrclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: record clock-ins/outs, reconstruct weekly attendance, rotate QR presence tokens",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a clock event (entrance or exit)
    Clock {
        /// Event kind: "in" (entrance) or "out" (exit)
        kind: String,

        /// Date of the event (YYYY-MM-DD, default today)
        #[arg(long = "date", help = "Event date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        /// Time of the event (HH:MM, default now)
        #[arg(long = "at", help = "Event time (HH:MM, default now)")]
        at: Option<String>,

        /// Employee recorded on the event (default from config)
        #[arg(long = "employee", help = "Employee the event belongs to")]
        employee: Option<String>,

        /// Free-text note stored with the event
        #[arg(long = "note", help = "Free-text note")]
        note: Option<String>,

        /// Tag the event as geolocation-gated
        #[arg(long = "geo", conflicts_with = "qr_payload")]
        geo: bool,

        /// Presence token payload scanned from the on-site QR;
        /// the clock event is rejected if the payload is not valid
        #[arg(long = "qr-payload", value_name = "PAYLOAD")]
        qr_payload: Option<String>,
    },

    /// Insert a compensating entrance/exit pair for a day
    Adjust {
        /// Date of the pair (YYYY-MM-DD)
        date: String,

        /// Entrance time (HH:MM)
        #[arg(long = "in", value_name = "HH:MM")]
        start: String,

        /// Exit time (HH:MM), must be after the entrance
        #[arg(long = "out", value_name = "HH:MM")]
        end: String,

        #[arg(long = "employee", help = "Employee the pair belongs to")]
        employee: Option<String>,

        #[arg(long = "note", help = "Reason for the adjustment")]
        note: Option<String>,
    },

    /// Show the reconstructed attendance for one week
    Week {
        /// Any date inside the week to show (YYYY-MM-DD, default today)
        #[arg(long = "date", help = "Reference date inside the week")]
        date: Option<String>,

        #[arg(long = "employee", help = "Employee to reconstruct")]
        employee: Option<String>,
    },

    /// List raw clock events (newest first)
    List {
        #[arg(long = "employee", help = "Employee to list events for")]
        employee: Option<String>,

        #[arg(long = "limit", default_value = "100", help = "Maximum events to show")]
        limit: usize,
    },

    /// Show or check the rotating QR presence token
    Qr {
        /// Print the current payload and window information
        #[arg(long = "show", conflicts_with = "check")]
        show: bool,

        /// Check a presented payload against the valid window set
        #[arg(long = "check", value_name = "PAYLOAD")]
        check: Option<String>,
    },

    /// Export clock events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "employee", help = "Employee to export events for")]
        employee: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
