use std::{fs, path::Path, process};

use clap::Parser;
use jpp::interpreter::{
    evaluator::{core::Session, function::core::BUILTIN_FUNCTIONS},
    host::{InputSource, StdinSource},
};

/// jpp is a small line-oriented scripting language: variables, printing,
/// input, one-line conditionals and single-expression functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A `.jpp` program to run. Without it (and without --command) jpp
    /// starts an interactive prompt.
    file: Option<String>,

    /// Runs the given program text instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    command: Option<String>,

    /// Seeds the random source so `random`, `randint` and `choice` repeat
    /// across runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut session = Session::stdio();
    if let Some(seed) = args.seed {
        session = session.with_seed(seed);
    }

    if let Some(program) = args.command {
        session.run(&program);
    } else if let Some(path) = args.file {
        let program = load_program(&path);
        session.run(&program);
    } else {
        interactive(&mut session);
    }
}

/// Reads a `.jpp` program, exiting the process if it cannot be used.
fn load_program(path: &str) -> String {
    let is_jpp = Path::new(path).extension()
                                .and_then(|ext| ext.to_str())
                                .is_some_and(|ext| ext.eq_ignore_ascii_case("jpp"));
    if !is_jpp {
        eprintln!("Error: Only .jpp files are supported!");
        process::exit(1);
    }

    fs::read_to_string(path).unwrap_or_else(|_| {
                                eprintln!("Error: File '{path}' not found!");
                                process::exit(1);
                            })
}

/// Runs lines typed at the `JPP> ` prompt until `exit` or end of input.
fn interactive(session: &mut Session) {
    println!("JPP Language Interpreter - Type 'exit' to quit");
    println!("Supported functions: {}", BUILTIN_FUNCTIONS.join(", "));

    let mut terminal = StdinSource;
    while let Ok(line) = terminal.read_line(Some("JPP> ")) {
        if line.trim() == "exit" {
            break;
        }
        session.execute(&line);
    }
}
