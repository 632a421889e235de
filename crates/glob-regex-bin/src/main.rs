use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::{filter::LevelFilter, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

/// Compile and test shell-style glob patterns
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the regular expression a glob compiles to
    Compile(commands::compile::Opt),

    /// Check which paths are matched by a glob
    Match(commands::matches::Opt),

    /// Check whether a string contains glob syntax
    IsGlob(commands::is_glob::Opt),

    /// Normalize a glob without changing what `**` matches
    Normalize(commands::normalize::Opt),

    /// Join globs into a single normalized glob
    Join(commands::join::Opt),
}

/// Entry point of the `glob-regex` cli.
fn main() -> miette::Result<()> {
    // Parse the command line arguments
    let cli = Cli::parse();

    // Setup default logging level
    let default_filter = LevelFilter::WARN;

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_filter.into())
        .from_env()
        .into_diagnostic()?;

    // Setup the tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .finish()
        .try_init()
        .into_diagnostic()?;

    // Dispatch the selected command
    match cli.command {
        Commands::Compile(opt) => commands::compile::compile(opt),
        Commands::Match(opt) => commands::matches::matches(opt),
        Commands::IsGlob(opt) => commands::is_glob::is_glob(opt),
        Commands::Normalize(opt) => commands::normalize::normalize(opt),
        Commands::Join(opt) => commands::join::join(opt),
    }
}
