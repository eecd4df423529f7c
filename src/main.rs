// minic: lexical scanner and syntax checker for a small C-like language

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;

use minic::parser::{tokenize, Parser, DEFAULT_MAX_DEPTH};
use minic::report::{read_source, write_tokens, Summary};

#[derive(ClapParser, Debug)]
#[command(name = "minic", version, about = "Tokenize and syntax-check mini-C source files")]
struct Args {
    /// Source file to check
    input: PathBuf,

    /// Write the token stream as JSON to this file (must end in .json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stop after tokenizing; skip the syntax check
    #[arg(long)]
    tokens_only: bool,

    /// Do not print the token summary
    #[arg(short, long)]
    quiet: bool,

    /// Maximum nesting depth accepted by the parser
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .init();

    let source = match read_source(&args.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if !args.quiet {
        print!("{}", Summary::new(&tokens));
    }

    // Tokens are written even if the syntax check fails below
    if let Some(output) = &args.output {
        if let Err(e) = write_tokens(&tokens, output) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
        eprintln!("Tokens written to {}", output.display());
    }

    if args.tokens_only {
        return ExitCode::SUCCESS;
    }

    let mut parser = Parser::with_max_depth(&tokens, args.max_depth);
    match parser.parse_program() {
        Ok(()) => {
            println!("Syntax OK");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
