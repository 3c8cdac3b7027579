//! Generates the C shims for CPython's variadic call API.
//!
//! ```text
//! cpy-variadic -o variadic.c -n 6
//! ```

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use cpy::generate::write_c_artifact;
use cpy::shim::MAX_VARIADIC_LENGTH;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cpy-variadic")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Generate fixed-arity dispatch shims for CPython's variadic call API",
    long_about = None
)]
struct Cli {
    /// Output file
    #[arg(short = 'o', value_name = "PATH", default_value = "variadic.c")]
    output: PathBuf,
    /// Number of cases in the switch statement, minus one
    #[arg(short = 'n', value_name = "COUNT", default_value_t = MAX_VARIADIC_LENGTH)]
    cases: usize,
}

fn init_logging() {
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(err) = write_c_artifact(&cli.output, cli.cases) {
        eprintln!("{err}");
        process::exit(1);
    }
}
