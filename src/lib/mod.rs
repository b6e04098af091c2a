//! A library of functionality for sorting FASTQ files.
//!
//! # Overview
//!
//! The flow of data is as follows:
//!
//! - [`record::records_from_lines`] groups the lines of the input file, four at a time, into
//!   [`record::FastqRecord`]s, rejecting any trailing partial record.
//! - [`sort::sort_records`] reorders the records in place by their sequence line.
//! - [`run::run`] ties the two together, reading the input file, sorting, and writing every
//!   line back out unchanged.
#![deny(unsafe_code)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
pub mod opts;
pub mod record;
pub mod run;
pub mod sort;
pub mod utils;
