use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version = get_version())]
#[command(about = "Keep a roster of students in a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Roster file to use (overrides config)
    #[arg(short, long, global = true, env = "ROSTER_FILE")]
    pub file: Option<PathBuf>,

    /// Use the per-user roster instead of the current directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new student
    Add {
        /// Unique student ID
        id: i64,
        /// Full name
        name: String,
        /// Age (1-149)
        age: i32,
        /// Grade or class label
        grade: String,
        /// Email address
        email: String,
    },

    /// List all students
    #[command(alias = "ls")]
    List,

    /// Show one student
    Show { id: i64 },

    /// Search students by name (case-insensitive, partial match)
    Search { text: String },

    /// Change one or more fields of a student
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<i32>,

        #[arg(long)]
        grade: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a student
    #[command(alias = "rm")]
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the number of students
    Count,

    /// Create an empty roster file
    Init,

    /// Interactive menu (default)
    Menu,
}

pub fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
