#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use crate::utils::built_info;

pub static TOOL_NAME: &str = "fqsort";

static SHORT_USAGE: &str = "Sorts the records of a FASTQ file by their sequence bases.";

static LONG_USAGE: &str = "
Sorts the records of a FASTQ file by their sequence bases.

Records are compared by their sequence line alone, byte by byte, so for the usual uppercase
base alphabet the order is alphabetical.  Records with identical sequences may appear in any
order relative to one another.  The header, separator, and quality lines travel with their
sequence and are written back out unchanged.

The input must contain only complete records: four lines per record, with no trailing partial
record.  The whole file is read into memory before sorting, so memory use is proportional to
the input size.  Files ending in `.gz` are read and written as gzip.

Example invocation:

fqsort in.fastq.gz sorted.fastq.gz
";

#[derive(Parser, Debug, Clone)]
#[clap(name = TOOL_NAME, version = built_info::VERSION.as_str(), about=SHORT_USAGE, long_about=LONG_USAGE, term_width=0)]
pub struct Opts {
    /// Path to the input FASTQ.
    #[clap(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to write the sorted FASTQ to.
    ///
    /// This tool will overwrite an existing file.
    #[clap(value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Parse args and set up logging / tracing
pub fn setup() -> Opts {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    Opts::parse()
}
