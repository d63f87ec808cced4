use anyhow::*;
use log::info;
use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

mod error;
mod output;
mod report;

use crate::error::ReportError;
use crate::output::text::TextDocument;
use crate::report::table::AttemptTable;
use crate::report::Report;

const DEFAULT_INPUT: &str = "responses.csv";
const OUTPUT_PATH: &str = "Quiz_Report.txt";

fn main() -> Result<()> {
    env_logger::init();

    let input = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    let table = AttemptTable::open(&input)?;
    info!("Loaded {} attempt rows from {}", table.len(), input.display());

    let report = Report::build(&table);

    let file = File::create(OUTPUT_PATH).context(ReportError::OutputUnavailable)?;
    let mut document = TextDocument::new(BufWriter::new(file));
    report::emit(&report, &mut document)?;

    println!("Generated {}", OUTPUT_PATH);
    Ok(())
}
