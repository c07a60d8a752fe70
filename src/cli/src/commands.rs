use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(
    name = "exlog",
    about = "Report errors to the exception log service",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Path to a TOML config file; falls back to EXLOG_CONFIG
    #[clap(long, global = true)]
    pub config: Option<String>,

    /// Write records to the log output instead of sending them
    #[clap(long, global = true)]
    pub dry_run: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report a single error built from the command line
    Report {
        /// Error message
        #[clap(long, short)]
        message: String,
        /// Error name, used as the context type
        #[clap(long, short, default_value = "Error")]
        name: String,
        /// Stack trace
        #[clap(long, short)]
        stack: Option<String>,
        #[clap(flatten)]
        options: ReportOptions,
    },

    /// Report an error read as JSON from a file, or `-` for stdin. Accepts a
    /// native error (`name`, `message`, `stack`) or a response error (`body`).
    ReportJson {
        #[clap(long, short)]
        file: String,
        #[clap(flatten)]
        options: ReportOptions,
    },

    /// Shows the effective configuration
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct ReportOptions {
    /// Log at High severity instead of Med
    #[clap(long)]
    pub high: bool,
    /// Component name; the context of response errors
    #[clap(long, default_value = "exlog")]
    pub context_type: String,
    /// Record type the error relates to
    #[clap(long)]
    pub object_type: Option<String>,
}
