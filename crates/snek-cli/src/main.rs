//! The `snek` command-line entry point.
//!
//! Grounded on `crates/cadenza/src/main.rs`'s `clap::Parser` +
//! `tracing_subscriber::fmt()` bootstrap, reduced to a single `run` command
//! since the CLI/REPL framing is a collaborator interface, not part of the
//! runtime core this workspace specifies.

use clap::Parser;
use miette::IntoDiagnostic;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snek", about = "Run a Snek source file")]
struct Cli {
    /// The entry-point source file.
    source: PathBuf,

    /// Additional module search roots, searched in order for non-relative
    /// imports.
    #[arg(long = "root")]
    roots: Vec<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(cli: &Cli) -> miette::Result<()> {
    tracing::info!(source = %cli.source.display(), "loading entry module");

    let loader = snek_cli::FsLoader;
    let interpreter = snek_eval::Interpreter::new(cli.roots.clone(), Box::new(loader));
    let body = snek_cli::load_entry(&cli.source).into_diagnostic()?;
    let scope = interpreter.fresh_scope();
    interpreter.run(&body, scope)?;
    Ok(())
}
