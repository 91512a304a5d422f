use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::{ArgAction, Parser, ValueEnum};
use treelox::{Lox, Outcome, diagnostics::Console};

/// treelox runs scripts written in a small dynamically-typed language, or
/// starts an interactive prompt when no script is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells treelox to read `contents` as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the token sequence or the parsed program instead of running it.
    #[arg(long, value_enum)]
    emit: Option<Emit>,

    /// Logs pipeline activity to stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The script, or its path with `--file`. Omit to start the prompt.
    contents: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Emit {
    /// One token per line.
    Tokens,
    /// One statement per line, in prefix form.
    Ast,
}

const EXIT_STATIC_ERROR: u8 = 65;
const EXIT_RUNTIME_ERROR: u8 = 70;
const EXIT_IO_ERROR: u8 = 74;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let Some(contents) = args.contents else {
        repl();
        return ExitCode::SUCCESS;
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::from(EXIT_IO_ERROR);
            },
        }
    } else {
        contents
    };

    match args.emit {
        Some(Emit::Tokens) => {
            let scanned = Lox::tokens(&script, &mut Console);
            for token in &scanned.tokens {
                println!("{token}");
            }
            static_exit_code(scanned.is_clean())
        },
        Some(Emit::Ast) => {
            let program = Lox::parse(&script, &mut Console);
            for statement in &program.statements {
                println!("{statement}");
            }
            static_exit_code(program.is_clean())
        },
        None => run_exit_code(Lox::new().run(&script, &mut Console)),
    }
}

fn static_exit_code(clean: bool) -> ExitCode {
    if clean { ExitCode::SUCCESS } else { ExitCode::from(EXIT_STATIC_ERROR) }
}

fn run_exit_code(outcome: Outcome) -> ExitCode {
    if outcome.had_error {
        ExitCode::from(EXIT_STATIC_ERROR)
    } else if outcome.had_runtime_error {
        ExitCode::from(EXIT_RUNTIME_ERROR)
    } else {
        ExitCode::SUCCESS
    }
}

/// Reads one line at a time and runs it in a single session, so variables
/// persist between lines. Errors are reported and the prompt continues.
fn repl() {
    let mut lox = Lox::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let outcome = lox.run(&line, &mut Console);
                tracing::trace!(?outcome, "line finished");
            },
            Err(e) => {
                eprintln!("Failed to read from stdin: {e}");
                break;
            },
        }
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{filter, prelude::*};

    let level = match verbose {
        0 => filter::LevelFilter::WARN,
        1 => filter::LevelFilter::DEBUG,
        _ => filter::LevelFilter::TRACE,
    };
    let targets = filter::Targets::new().with_target("treelox", level);
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr)
                                                    .with_target(true);

    tracing_subscriber::registry().with(fmt_layer)
                                  .with(targets)
                                  .init();
}
