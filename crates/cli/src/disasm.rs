//! MIPS section disassembler.
//!
//! Prints every instruction word of one section of a MIPS ELF executable, one per
//! line with a four-space indent, in ascending address order. The words are read
//! back through the functional memory, exactly as the simulator would fetch them.

mod logging;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use mipsim_core::common::error::Result;
use mipsim_core::config::Config;
use mipsim_core::isa::disasm::disassemble_section;
use mipsim_core::sim::loader::{SectionSource, find_section};
use mipsim_core::sim::ElfImage;
use mipsim_core::soc::FuncMemory;

#[derive(Parser, Debug)]
#[command(
    name = "disasm",
    author,
    version,
    about = "Disassemble one section of a MIPS ELF executable"
)]
struct Cli {
    /// MIPS ELF executable.
    executable: PathBuf,

    /// Section to list, e.g. `.text`.
    section: String,
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

    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("    {line}");
            }
        }
        Err(e) => {
            eprintln!("disasm: {e}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<Vec<String>> {
    let sections = ElfImage::open(&cli.executable)?.sections()?;
    let section = find_section(&sections, &cli.section)?;

    let mut memory = FuncMemory::new(Config::default().memory.layout()?);
    memory.load_sections(&sections)?;
    disassemble_section(&memory, section)
}
