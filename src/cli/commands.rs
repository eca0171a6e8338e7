use clap::{Parser, Subcommand, Args, ValueEnum};

const LONG_VERSION: &str = env!("DETECTOR_LONG_VERSION");

#[derive(Parser)]
#[command(
    name = "traversal-detector",
    version,
    long_version = LONG_VERSION,
    about = "Confirm generic path traversal on crawled web services"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run detection against services and crawl results from a scan input file
    Scan(ScanArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// JSON file with the target and its services, crawl results included
    #[arg(short, long)]
    pub input: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: String,
}
