use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use colored::*;

use listbench::{BenchError, MergeSort, Pattern, Runner, CSV_HEADER};

/// listbench - times one in-place linked-list sort per key distribution
#[derive(Parser)]
#[command(name = "listbench")]
#[command(version)]
#[command(
    about = "Times an in-place doubly-linked-list sort across synthetic key distributions",
    long_about = None
)]
struct Cli {
    /// Number of nodes per distribution
    #[arg(value_name = "N")]
    n: usize,

    /// Modulus for the sawtooth/staggered patterns (0 means the default 32)
    #[arg(value_name = "PARAM")]
    param: Option<u64>,

    /// Run a single named distribution instead of the full set
    #[arg(long, value_name = "NAME")]
    pattern: Option<String>,

    /// Emit one JSON object per run instead of CSV
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    // Usage errors exit with 1; clap's default usage code is 2, which is
    // reserved for unknown distribution names.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = run_bench(&cli) {
        eprintln!("{}: {}", "error".red().bold(), err);
        process::exit(err.exit_code());
    }
}

fn run_bench(cli: &Cli) -> Result<(), BenchError> {
    let param = cli.param.unwrap_or(0);
    let patterns: Vec<Pattern> = match cli.pattern.as_deref() {
        Some(name) => vec![name.parse()?],
        None => Pattern::ALL.to_vec(),
    };

    let mut runner = Runner::new(MergeSort);
    if !cli.json {
        println!("{CSV_HEADER}");
    }
    for &pattern in &patterns {
        let record = runner.run(pattern, cli.n, param)?;
        if cli.json {
            let line = serde_json::to_string(&record).map_err(|err| BenchError::Emit {
                detail: err.to_string(),
            })?;
            println!("{line}");
        } else {
            println!("{}", record.csv_row());
        }
    }
    Ok(())
}
