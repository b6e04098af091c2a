use std::time::Instant;

use anyhow::{ensure, Context, Result};
use fgoxide::io::Io;
use log::info;

use crate::{
    opts::Opts,
    record::{records_from_lines, FastqRecord},
    sort::sort_records,
};

/// Run the sort.
pub fn run(opts: Opts) -> Result<()> {
    // Preflight checks
    ensure!(
        opts.input.exists(),
        "Input FASTQ does not exist: {}",
        &opts.input.to_string_lossy()
    );
    if let Some(parent) = opts.output.parent() {
        ensure!(
            parent.as_os_str().is_empty() || parent.exists(),
            "Output directory does not exist: {}",
            parent.to_string_lossy()
        );
    }

    let io = Io::default();
    let start = Instant::now();

    info!("Reading {}", opts.input.to_string_lossy());
    let lines = io
        .read_lines(&opts.input)
        .with_context(|| format!("Failed to read input FASTQ: {}", opts.input.to_string_lossy()))?;
    info!("Read {} lines", lines.len());
    let mut records = records_from_lines(lines)
        .with_context(|| format!("Invalid input FASTQ: {}", opts.input.to_string_lossy()))?;
    let num_records = records.len();

    info!("Sorting {} records", num_records);
    sort_records(&mut records);

    info!("Writing {}", opts.output.to_string_lossy());
    let lines: Vec<String> = records.into_iter().flat_map(FastqRecord::into_lines).collect();
    io.write_lines(&opts.output, lines).with_context(|| {
        format!("Failed to write output FASTQ: {}", opts.output.to_string_lossy())
    })?;

    info!("Sorted {} records in {:.2} seconds", num_records, start.elapsed().as_secs_f64());
    Ok(())
}
