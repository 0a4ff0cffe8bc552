use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use decaf_lexer::{
    config::{LexerConfig, DEFAULT_MAX_LEXEME_LEN, DEFAULT_MAX_SOURCE_LEN},
    lexer::lexer::tokenize_with,
    read_source, render_error,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "decaf-lexer")]
#[command(about = "Tokenize a Decaf source file and print its tokens")]
#[command(version)]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// Longest token accepted, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_LEXEME_LEN)]
    max_lexeme_len: usize,

    /// Largest source file accepted, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_SOURCE_LEN)]
    max_source_len: usize,

    /// Log each lexing step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "decaf_lexer=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = LexerConfig::default()
        .with_max_lexeme_len(cli.max_lexeme_len)
        .with_max_source_len(cli.max_source_len);

    let source = match read_source(&cli.file, &config) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    match tokenize_with(&source, config) {
        Ok(tokens) => {
            debug!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");
            print!("{}", tokens.render());
            ExitCode::SUCCESS
        }
        Err(error) => {
            let file_name = cli.file.display().to_string();
            eprint!("{}", render_error(&error, &source, &file_name));
            ExitCode::FAILURE
        }
    }
}
