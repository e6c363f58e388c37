//! Converts H3 indexes to cell boundaries.
//!
//! ```text
//! h3-to-geo-boundary [--index index] [--kml [--kml-name name] [--kml-description desc]]
//! ```
fn main() -> anyhow::Result<()> {
    h3_filters::cli::main(h3_filters::cli::H3_TO_GEO_BOUNDARY)
}
