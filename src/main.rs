use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process,
};

use lox::{errors::errors::Reporter, run};

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_prompt(),
        2 => run_file(&args[1]),
        _ => {
            println!("Usage: lox [script]");
            process::exit(64);
        }
    }
}

fn run_file(path: &str) {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", path, error);
            process::exit(66);
        }
    };

    let mut reporter = Reporter::new();
    let stdout = io::stdout();

    if let Err(error) = run(&source, &mut reporter, &mut stdout.lock()) {
        eprintln!("Failed to write tokens: {}", error);
        process::exit(74);
    }

    if reporter.had_error() {
        process::exit(65);
    }
}

fn run_prompt() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reporter = Reporter::new();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if stdout.lock().flush().is_err() {
            return;
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };

        if let Err(error) = run(&line, &mut reporter, &mut stdout.lock()) {
            eprintln!("Failed to write tokens: {}", error);
            return;
        }

        reporter.reset();
    }
}
