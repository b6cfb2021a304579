use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use toylang::{
    format_error,
    lexer::{
        lexer::{tokenize, tokenize_strict},
        tokens::Token,
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_SOURCE: &str = "function ok() { let 1 = 2; return 3 - 1 == 1; }";

#[derive(Parser)]
#[command(name = "toylang", about = "Scan toy language source and print its tokens", version)]
struct Cli {
    /// Source file to scan
    #[arg(value_name = "FILE", conflicts_with = "source")]
    file: Option<PathBuf>,

    /// Inline source text to scan instead of a file
    #[arg(short = 'e', long)]
    source: Option<String>,

    /// Stop at the first unrecognised character
    #[arg(long)]
    strict: bool,

    /// Tracing filter, e.g. "debug" or "toylang::lexer=trace" (defaults to RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let (source, file_name) = match (&cli.file, &cli.source) {
        (Some(path), _) => match read_to_string(path) {
            Ok(contents) => (contents, path.display().to_string()),
            Err(e) => {
                eprintln!("Error: Cannot read '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        (None, Some(text)) => (text.clone(), String::from("shell")),
        (None, None) => (String::from(DEMO_SOURCE), String::from("shell")),
    };

    let start = Instant::now();

    let tokens = if cli.strict {
        match tokenize_strict(&source, Some(file_name)) {
            Ok(tokens) => tokens,
            Err(error) => {
                eprint!("{}", format_error(&error, &source));
                process::exit(1);
            }
        }
    } else {
        tokenize(&source)
    };

    info!(target: "toylang::lexer", count = tokens.len(), elapsed = ?start.elapsed(), "Tokenized");

    print_tokens(&tokens);
    println!("Tokenized in {:?}", start.elapsed());
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}
