//! Prints every inclusion-exclusion count for a matrix.
//!
//! Without `--input`, uses the worked example from Table 3-2 of
//! *Combinatorial Mathematics* (5th ed.): 4 attributes, 13 objects.
//!
//! ```bash
//! cargo run --example textbook -- --log-level debug
//! cargo run --example textbook -- --input matrix.txt
//! ```

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use iep_rs::matrix::AttributeMatrix;
use iep_rs::report::IepReport;

const TEXTBOOK: [[u8; 13]; 4] = [
    [1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 0],
    [1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0],
    [1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0],
];

#[derive(Parser)]
#[command(author, version, about = "Inclusion-Exclusion counts of a 0/1 attribute matrix")]
struct Cli {
    /// Matrix file: one attribute per line, entries separated by spaces or commas
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let matrix = match &cli.input {
        Some(path) => fs::read_to_string(path)?.parse::<AttributeMatrix>()?,
        None => AttributeMatrix::from_rows(TEXTBOOK)?,
    };
    println!("A =\n{}", matrix);

    let report = IepReport::new(&matrix)?;
    println!("{}", report);
    println!("consistent: {}", report.is_consistent());

    Ok(())
}
