//! Tristore CLI — run a concurrent insertion batch and print the report.
//!
//! By default runs the built-in demo batch (10 users, 10 products, 10
//! orders, four of them invalid) against three fresh in-memory stores:
//!
//! ```text
//! tristore                    # demo batch, human report
//! tristore --clear-data       # truncate stores before inserting
//! tristore --json             # report as JSON
//! tristore --input batch.json # caller-supplied batches
//! ```
//!
//! Individual record failures are report lines, not process failures: the
//! exit code is nonzero only when the run itself could not proceed.

use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;
use tristore::{BatchSet, RunOptions, Tristore};

fn build_cli() -> Command {
    Command::new("tristore")
        .about("Concurrent validated insertion across three isolated stores")
        .arg(
            Arg::new("clear-data")
                .long("clear-data")
                .action(ArgAction::SetTrue)
                .help("Truncate all stores before inserting"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit the report as JSON instead of the human layout"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("FILE")
                .help("Load candidate batches from a JSON file instead of the demo set"),
        )
}

fn load_batches(matches: &ArgMatches) -> Result<BatchSet, String> {
    match matches.get_one::<String>("input") {
        None => Ok(BatchSet::demo()),
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path, e))?;
            serde_json::from_str(&raw).map_err(|e| format!("Failed to parse {}: {}", path, e))
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let batches = match load_batches(&matches) {
        Ok(batches) => batches,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let db = Tristore::new();
    let options = RunOptions {
        clear_first: matches.get_flag("clear-data"),
    };

    // Infrastructure failure is the only fatal path; rejected records are
    // lines in the report and still exit zero.
    let report = match db.run(batches, options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("fatal: {}", e);
            process::exit(1);
        }
    };

    if matches.get_flag("json") {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("fatal: failed to encode report: {}", e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", report.render());
    }
}
