//! Converts H3 indexes to cell center points.
//!
//! ```text
//! h3-to-geo [--index index] [--kml [--kml-name name] [--kml-description desc]]
//! ```
//!
//! Without `--index`, indexes are read from standard input, one per line, until
//! end of input.
fn main() -> anyhow::Result<()> {
    h3_filters::cli::main(h3_filters::cli::H3_TO_GEO)
}
