use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rFitlogger
/// CLI application to track daily calories and workouts with SQLite
#[derive(Parser)]
#[command(
    name = "rfitlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple fitness logging CLI: compute calorie/workout targets and track daily progress using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the user id from the configuration file
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

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
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show or update the user profile (biometrics and goal)
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Show the daily target computed from the current profile
    Target,

    /// Show the macronutrient breakdown of the daily target
    Macros {
        /// Use this calorie target instead of the one computed from the profile
        #[arg(long = "calories", allow_negative_numbers = true)]
        calories: Option<f64>,
    },

    /// Start tracking a day, freezing its targets
    Start {
        /// Date of the day (YYYY-MM-DD, default today)
        date: Option<String>,
    },

    /// Log consumed calories
    Eat {
        /// Calories (kcal)
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        #[arg(long = "date", help = "Date of the day (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Log completed workout minutes
    Workout {
        /// Minutes
        #[arg(allow_negative_numbers = true)]
        minutes: f64,

        #[arg(long = "date", help = "Date of the day (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Reset the counters of a day (targets are kept)
    Reset {
        /// Date of the day (YYYY-MM-DD, default today)
        date: Option<String>,
    },

    /// Show the progress of a single day
    Status {
        /// Date of the day (YYYY-MM-DD, default today)
        date: Option<String>,
    },

    /// List tracked days
    List {
        #[arg(long, short, help = "Filter by year/month/day, a custom range or 'all'")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's record")]
        now: bool,
    },

    /// Delete a tracked day
    Del {
        date: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export tracked days
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Create or update the profile (unspecified fields keep their value)
    Set {
        #[arg(long, help = "Age in years")]
        age: Option<u32>,

        #[arg(long, help = "Body weight in kg", allow_negative_numbers = true)]
        weight: Option<f64>,

        #[arg(long, help = "Height in cm", allow_negative_numbers = true)]
        height: Option<f64>,

        #[arg(long, help = "Biological sex: M/male or F/female")]
        sex: Option<String>,

        #[arg(
            long,
            help = "Activity level: sedentary, light, moderate, active, very_active"
        )]
        activity: Option<String>,

        #[arg(long, help = "Fitness goal: fat_loss, muscle_gain, maintenance")]
        goal: Option<String>,
    },

    /// Print the profile with BMR, TDEE and daily target
    Show,
}
