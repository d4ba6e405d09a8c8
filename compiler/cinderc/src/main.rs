//! Cinder compiler CLI.

use cinderc::commands::{check_file, lex_file};
use cinderc::{init_tracing, parse_args, CompileError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "lex" | "check" => {
            let (config, files) = match parse_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };
            let [path] = files.as_slice() else {
                eprintln!("Usage: cinder {command} <file.cin> [options]");
                eprintln!();
                print_options();
                std::process::exit(1);
            };

            let result = if command == "lex" {
                lex_file(path, config)
            } else {
                check_file(path, config)
            };
            exit_with(result);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("cinder {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn exit_with(result: Result<bool, CompileError>) {
    match result {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Cinder Compiler");
    println!();
    println!("Usage: cinder <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.cin>     Print the token stream");
    println!("  check <file.cin>   Report lexical errors");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    print_options();
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=cinder_lexer=trace) for tracing output.");
}

fn print_options() {
    println!("Options:");
    println!("  --error-limit=<n>          Stop collecting after n errors (0 = unlimited)");
    println!("  --color=auto|always|never  Colorize diagnostics");
    println!("  --no-dedup                 Keep repeated diagnostics on the same line");
}
