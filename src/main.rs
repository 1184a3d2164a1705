use std::{
    fs::read_to_string,
    io,
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use basic_lang::{
    display_error, errors::errors::Error, interpreter::interpreter::evaluate,
    lexer::lexer::tokenize, parser::parser::parse, type_checker::type_checker::type_check,
};
use clap::Parser;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Type checks and runs a program
#[derive(Parser)]
#[command(name = "basic")]
#[command(version = "0.1.0")]
#[command(about = "Interpreter for a small statically typed language", long_about = None)]
struct Cli {
    /// Path to the source file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Stop after type checking
    #[arg(long)]
    check: bool,

    /// Print every scope after type checking
    #[arg(long)]
    dump_scopes: bool,
}

fn main() -> ExitCode {
    // Logging is off unless BASIC_LOG holds a filter, e.g. BASIC_LOG=debug
    if let Ok(filter) = EnvFilter::try_from_env("BASIC_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Some(error)) => {
            display_error(&error, cli.file.clone());
            ExitCode::FAILURE
        }
        Err(None) => ExitCode::FAILURE,
    }
}

/// `Err(None)` means the failure was already reported.
fn run(cli: &Cli) -> Result<(), Option<Error>> {
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let file_contents = match read_to_string(&cli.file) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", cli.file.display(), error);
            return Err(None);
        }
    };

    let start = Instant::now();

    let tokens = tokenize(file_contents, Some(file_name.clone()))?;
    tracing::info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    let parse_start = Instant::now();
    let program = parse(tokens, Rc::new(file_name))?;
    tracing::info!(elapsed = ?parse_start.elapsed(), "parsed");

    let type_check_start = Instant::now();
    let type_checker = type_check(&program)?;
    tracing::info!(elapsed = ?type_check_start.elapsed(), scopes = type_checker.scopes.len(), "type checked");

    if cli.dump_scopes {
        print!("{}", type_checker.scopes);
    }

    if cli.check {
        return Ok(());
    }

    let evaluate_start = Instant::now();
    let stdin = io::stdin();
    let stdout = io::stdout();
    evaluate(&program, type_checker, stdin.lock(), stdout.lock())?;
    tracing::info!(elapsed = ?evaluate_start.elapsed(), total = ?start.elapsed(), "evaluated");

    Ok(())
}
