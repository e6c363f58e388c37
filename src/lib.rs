//! Line oriented filters over H3 cell indexes.
//!
//! Each filter reads hexadecimal cell indexes from standard input (or takes a
//! single one from `--index`) and writes one result per cell, either as plain
//! text or as KML.
pub mod cli;
pub mod kml;

mod filter;

pub use crate::filter::{parse_cell, run, Filter, FilterError, Format, Shape};

/// Longest accepted KML name or description, in bytes.
pub const TEXT_CAPACITY: usize = 255;
