//! RV32 data-memory model CLI.
//!
//! This binary drives the data memory from an access script. It performs:
//! 1. **Setup:** Loads an optional JSON config and an optional memory image (hex or binary).
//! 2. **Run:** Executes one cycle per script line and prints `read_data` or the fault.
//! 3. **Report:** Checks `=> value` expectations, dumps words, and prints statistics.

use clap::{Parser, Subcommand};
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

use rvmem_core::config::Config;
use rvmem_core::sim::loader;
use rvmem_core::sim::script::{self, StepOutcome};
use rvmem_core::DataMemory;

#[derive(Parser, Debug)]
#[command(
    name = "rvmem",
    author,
    version,
    about = "RV32 data-memory model",
    long_about = "Drive the byte-enable data memory from an access script.\n\nExamples:\n  rvmem run scripts/smoke.mem\n  rvmem run accesses.txt --image init.hex --dump 0x10:4 --stats\n  RUST_LOG=debug rvmem run accesses.txt --config mem.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an access script, one cycle per line.
    Run {
        /// Access script path.
        script: String,

        /// JSON configuration file (defaults are used when omitted).
        #[arg(short, long)]
        config: Option<String>,

        /// Initial memory image (`.hex`/`.mem`/`.txt` as $readmemh text, otherwise raw little-endian).
        #[arg(short, long)]
        image: Option<String>,

        /// Words to print after the run, as `<first word index>:<count>`.
        #[arg(long, value_parser = parse_dump_range)]
        dump: Option<(usize, usize)>,

        /// Print the statistics report after the run.
        #[arg(long)]
        stats: bool,

        /// Print the statistics as JSON instead of the text report.
        #[arg(long)]
        stats_json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            script,
            config,
            image,
            dump,
            stats,
            stats_json,
        }) => cmd_run(&script, config.as_deref(), image.as_deref(), dump, stats, stats_json),
        None => {
            eprintln!("RV32 data-memory model: pass a subcommand");
            eprintln!();
            eprintln!("  rvmem run <script>                 Run an access script");
            eprintln!("  rvmem run <script> --image <hex>   Preload memory first");
            eprintln!();
            eprintln!("  rvmem --help  for full options");
            process::exit(1);
        }
    }
}

/// Installs the stderr `tracing` subscriber; `RUST_LOG` overrides the default level.
fn init_tracing(trace_accesses: bool) {
    let default = if trace_accesses { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs a script against a fresh data memory and reports the results.
///
/// Exits with code 1 if setup fails or any `=> value` expectation is not met.
fn cmd_run(
    script_path: &str,
    config_path: Option<&str>,
    image_path: Option<&str>,
    dump: Option<(usize, usize)>,
    show_stats: bool,
    stats_json: bool,
) {
    let config = match config_path {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| fatal(&e)),
        None => Config::default(),
    };
    init_tracing(config.general.trace_accesses);

    let mut memory = DataMemory::new(&config).unwrap_or_else(|e| fatal(&e));
    println!(
        "Configuration: {} words ({} bytes), misaligned={:?}, conflicting_enables={:?}",
        config.memory.size_words,
        config.memory.size_bytes().unwrap_or_default(),
        config.memory.misaligned,
        config.memory.conflicting_enables
    );

    if let Some(path) = image_path {
        let image = loader::load_image_file(path).unwrap_or_else(|e| fatal(&e));
        memory.load_image(&image).unwrap_or_else(|e| fatal(&e));
        println!("[*] Image: {} ({} words)", path, image.word_count());
    }

    let text = fs::read_to_string(script_path).unwrap_or_else(|e| {
        eprintln!("Error reading script {}: {}", script_path, e);
        process::exit(1);
    });
    let steps = script::parse_script(&text).unwrap_or_else(|e| fatal(&e));
    println!("[*] Script: {} ({} cycles)", script_path, steps.len());
    println!();

    let outcomes = script::run_script(&mut memory, &steps);
    for outcome in &outcomes {
        print_outcome(outcome);
    }
    let failures = outcomes.iter().filter(|o| !o.passed()).count();

    if let Some((start, count)) = dump {
        println!();
        for (addr, word) in memory.dump(start..start.saturating_add(count)) {
            println!("  {addr}: {word:#010x}");
        }
    }

    if stats_json {
        match memory.stats().to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => fatal(&e),
        }
    } else if show_stats {
        println!();
        println!("{}", memory.stats());
    }

    if failures > 0 {
        eprintln!("\n[!] {failures} expectation(s) failed");
        process::exit(1);
    }
}

fn print_outcome(outcome: &StepOutcome) {
    let step = &outcome.step;
    let result = match &outcome.result {
        Ok(value) => format!("{value:#010x}"),
        Err(e) => format!("FAULT {e}"),
    };
    let verdict = match step.expect {
        Some(want) if !outcome.passed() => format!("  MISMATCH (expected {want:#010x})"),
        Some(_) => "  ok".to_owned(),
        None => String::new(),
    };
    println!("{:>4}  {:<44} {}{}", step.line, step.text, result, verdict);
}

/// Parses `<start>:<count>`; both parts accept `0x` hex.
fn parse_dump_range(text: &str) -> Result<(usize, usize), String> {
    let parse = |s: &str| {
        let s = s.trim();
        let parsed = match s.strip_prefix("0x") {
            Some(hex) => usize::from_str_radix(hex, 16),
            None => s.parse(),
        };
        parsed.map_err(|e| format!("'{s}': {e}"))
    };
    let (start, count) = text
        .split_once(':')
        .ok_or_else(|| format!("expected <start>:<count>, got '{text}'"))?;
    Ok((parse(start)?, parse(count)?))
}

fn fatal(err: &dyn std::error::Error) -> ! {
    eprintln!("\n[!] FATAL: {err}");
    process::exit(1);
}
