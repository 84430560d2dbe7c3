//! Top-N selection over a stream of integers
//!
//! Reads one integer per line from a file, or stdin when no file is given,
//! and prints the N largest (or smallest) values, most extreme first.
//!
//! ## Running
//!
//! ```bash
//! seq 1 1000 | shuf | cargo run --example top_n -- 5
//! cargo run --example top_n -- 3 --smallest numbers.txt
//! RUST_LOG=debug cargo run --example top_n -- 10 numbers.txt
//! ```
//!
//! Blank lines are skipped; lines that do not parse are reported and skipped.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use log::{info, warn};
use rust_array_heaps::top_n::TopNSelector;

fn usage() -> ExitCode {
    eprintln!("usage: top_n <n> [--smallest] [file]");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut n = None;
    let mut keep_largest = true;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--smallest" => keep_largest = false,
            "--largest" => keep_largest = true,
            _ if n.is_none() => match arg.parse::<usize>() {
                Ok(value) => n = Some(value),
                Err(e) => {
                    eprintln!("invalid count {arg:?}: {e}");
                    return usage();
                }
            },
            _ => path = Some(arg),
        }
    }
    let Some(n) = n else {
        return usage();
    };

    let reader: Box<dyn BufRead> = match &path {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("cannot open {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    let mut selector = TopNSelector::new(n, keep_largest);
    for (lineno, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("read error: {e}");
                return ExitCode::FAILURE;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.parse::<i64>() {
            Ok(value) => selector.push(value),
            Err(e) => warn!("line {}: skipping {trimmed:?}: {e}", lineno + 1),
        }
    }

    info!(
        "read {} values from {}",
        selector.seen(),
        path.as_deref().unwrap_or("stdin")
    );
    for value in selector.into_vec() {
        println!("{value}");
    }
    ExitCode::SUCCESS
}
