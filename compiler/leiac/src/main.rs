//! Leia CLI
//!
//! Inspect how the Leia tokenizer sees a source file.

use leiac::commands::{check_file, highlight_file, lex_file, CliError, HighlightFormat};

fn main() {
    leiac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: leia lex <file.leia>");
                std::process::exit(1);
            }
            lex_file(&args[2])
        }
        "highlight" => {
            let mut format = HighlightFormat::Text;
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--json" {
                    format = HighlightFormat::Json;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: leia highlight <file.leia> [--json]");
                std::process::exit(1);
            };
            highlight_file(path, format)
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: leia check <file.leia>");
                std::process::exit(1);
            }
            check(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("Leia tokenizer {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn check(path: &str) -> Result<(), CliError> {
    let errors = check_file(path)?;
    if errors > 0 {
        let plural = if errors == 1 { "" } else { "s" };
        eprintln!("{path}: {errors} lexical error{plural}");
        std::process::exit(1);
    }
    println!("{path}: no lexical errors");
    Ok(())
}

fn print_usage() {
    println!("Leia tokenizer");
    println!();
    println!("Usage: leia <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.leia>        Tokenize and display every token");
    println!("  highlight <file.leia>  Display highlight spans with scope names");
    println!("  check <file.leia>      Report lexical errors (exit 1 if any)");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Highlight options:");
    println!("  --json              Emit spans as a JSON array");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=leia_lexer=trace   Trace mode pushes and pops");
    println!();
    println!("Examples:");
    println!("  leia lex fib.leia");
    println!("  leia highlight fib.leia --json");
    println!("  leia check fib.leia");
}
