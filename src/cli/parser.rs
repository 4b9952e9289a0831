use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for classroll
#[derive(Parser)]
#[command(
    name = "classroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "Schedule classes, mark attendance and follow attendance statistics",
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
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Schedule a new class and notify its students
    Add {
        /// Subject, e.g. "Advanced Mathematics"
        subject: String,
        /// Date (YYYY-MM-DD)
        date: String,
        /// Start time (HH:MM)
        time: String,
        /// Room number or location
        location: String,

        /// Duration in minutes (15-300)
        #[arg(long, short = 'd', default_value_t = 60)]
        duration: u32,

        /// Student name (repeat for each student)
        #[arg(long = "student", short = 's', conflicts_with_all = ["from", "to"])]
        students: Vec<String>,

        /// First roll number of a roll range (inclusive)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Last roll number of a roll range (inclusive)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// List classes
    List {
        /// Only classes this student is enrolled in
        #[arg(long)]
        student: Option<String>,

        /// Only classes on this date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "upcoming")]
        date: Option<String>,

        /// Only classes after today
        #[arg(long)]
        upcoming: bool,
    },

    /// Delete a class by id
    Del {
        /// Class id
        id: i64,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Mark attendance for a class and complete it
    Attendance {
        /// Class id
        id: i64,

        /// NAME=STATUS where STATUS is present|absent|late|excused (or p/a/l/e)
        #[arg(long = "mark", short = 'm')]
        marks: Vec<String>,

        /// Start from "everybody present"; --mark entries override it
        #[arg(long = "all-present")]
        all_present: bool,
    },

    /// Show attendance statistics (teacher view, or one student)
    Stats {
        /// Student name; falls back to `student_name` from the configuration
        #[arg(long)]
        student: Option<String>,

        /// Teacher view even when a default student is configured
        #[arg(long, conflicts_with = "student")]
        all: bool,
    },

    /// Show the student notification log
    Notifications {
        /// Mark every notification as read
        #[arg(long)]
        read: bool,
    },

    /// Print the student directory
    Students,

    /// Export the attendance report
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Only rows for this student
        #[arg(long)]
        student: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz elsewhere)
        #[arg(long)]
        compress: bool,

        /// Overwrite an existing backup without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal operation log
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
