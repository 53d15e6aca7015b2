//! MIPS pipeline simulator CLI.
//!
//! Runs a MIPS ELF executable on the five-stage pipeline until a given number of
//! instructions has retired. It supports:
//! 1. **Cycle trace:** The default; one five-line block per cycle on stdout.
//! 2. **Retirement trace:** With `-d`, one line per retiring jump or register-touching instruction.
//! 3. **Configuration:** Memory geometry and port timing from a JSON file (`--config`).
//! 4. **Statistics:** The report, or selected sections of it, on stderr (`--stats`).
//!
//! Any error is reported on stderr and the process exits with status 1.

mod logging;

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::builder::PossibleValuesParser;
use tracing::debug;

use mipsim_core::common::error::Result;
use mipsim_core::config::Config;
use mipsim_core::sim::{ElfImage, Simulator, TraceMode};
use mipsim_core::stats::STATS_SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "simulator",
    author,
    version,
    about = "Cycle-level MIPS pipeline simulator",
    long_about = "Run a MIPS ELF executable on a five-stage in-order pipeline until the given number of instructions has retired.\n\nExamples:\n  simulator tests/fib.elf 100\n  simulator tests/fib.elf 100 -d\n  simulator tests/fib.elf 100 --config mem.json --stats=summary,core"
)]
struct Cli {
    /// MIPS ELF executable to run.
    executable: PathBuf,

    /// Number of instructions to retire before stopping.
    count: u64,

    /// Print only retiring jumps and instructions that touch a non-zero register.
    #[arg(short = 'd')]
    disasm: bool,

    /// JSON configuration file (memory geometry, port timing).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the statistics report to stderr after the run, optionally limited to
    /// a comma-separated list of sections (summary, core, instruction_mix).
    #[arg(
        long,
        value_name = "SECTIONS",
        num_args = 0..=1,
        require_equals = true,
        value_delimiter = ',',
        value_parser = PossibleValuesParser::new(STATS_SECTIONS.iter().copied())
    )]
    stats: Option<Vec<String>>,
}

fn main() {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("simulator: {e}");
        process::exit(1);
    }
}

/// Loads the executable, runs it to the requested count and reports statistics.
fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    debug!(?config, "configuration");

    let image = ElfImage::open(&cli.executable)?;
    let mut sim = Simulator::from_source(&image, &config)?;

    let mode = if cli.disasm {
        TraceMode::Retired
    } else {
        TraceMode::Cycles
    };
    {
        let mut out = BufWriter::new(io::stdout().lock());
        let _ = sim.run(cli.count, mode, &mut out)?;
    }

    let stats = sim.finish();
    if let Some(sections) = &cli.stats {
        eprint!("{}", stats.render_sections(sections));
    }
    Ok(())
}
