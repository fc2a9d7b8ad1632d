//! Scripter CLI

use scripterc::commands::{lex_file, parse_file, parse_run_options, run_file, RunOptions};

fn main() {
    scripterc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                print_run_usage();
                std::process::exit(1);
            }
            match parse_run_options(&args[2..]) {
                Ok(options) => run_file(&options),
                Err(msg) => {
                    eprintln!("error: {msg}");
                    print_run_usage();
                    std::process::exit(1);
                }
            }
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: scripter lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: scripter parse <file>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Scripter {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a script, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("js") || ext.eq_ignore_ascii_case("scr"))
            {
                run_file(&RunOptions::new(command.as_str()));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_run_usage() {
    eprintln!("Usage: scripter run <file> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --module <name>=<path>  Declare a module (repeatable)");
    eprintln!("  --times <n>             Evaluate n times; statics persist");
    eprintln!("  --max-depth <n>         Maximum call depth (default: 1024)");
    eprintln!("  --step-limit <n>        Abort after n statements");
}

fn print_usage() {
    println!("Scripter");
    println!();
    println!("Usage: scripter <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Run a script");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  parse <file>         Parse and display program info");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --module <name>=<path>  Declare a module (repeatable)");
    println!("  --times <n>             Evaluate n times; statics persist");
    println!("  --max-depth <n>         Maximum call depth (default: 1024)");
    println!("  --step-limit <n>        Abort after n statements");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=scripter_eval=debug) for tracing output.");
}
