//! The command line shared by every filter in the family.
use std::io::{self, BufWriter};

use anyhow::Context;
use argscan::Flag;
use tracing_subscriber::EnvFilter;

use crate::{Format, Shape, TEXT_CAPACITY};

/// Static description of one filter binary.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub description: &'static str,
    pub shape: Shape,
    pub kml_name: &'static str,
    pub kml_description: &'static str,
}

pub const H3_TO_GEO: Tool = Tool {
    description: "Converts indexes to latitude/longitude center coordinates in degrees",
    shape: Shape::Center,
    kml_name: "geo from H3",
    kml_description: "from h3ToGeo",
};

pub const H3_TO_GEO_BOUNDARY: Tool = Tool {
    description: "Converts indexes to latitude/longitude cell boundaries in degrees",
    shape: Shape::Boundary,
    kml_name: "h3 cell boundaries from H3",
    kml_description: "from h3ToGeoBoundary",
};

/// Logs go to stderr, filtered by `H3_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("H3_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Entry point of a filter binary.
pub fn main(tool: Tool) -> anyhow::Result<()> {
    init_logging();

    let mut index = 0u64;
    let mut kml_name = String::new();
    let mut kml_description = String::new();

    let mut help = Flag::help(&["-h", "--help"], "Show this help message.");
    let mut index_flag = Flag::hex(
        &["-i", "--index"],
        "index",
        &mut index,
        "Index, or not specified to read indexes from standard in.",
    );
    let mut kml = Flag::switch(&["-k", "--kml"], "Print output in KML format.");
    let mut kml_name_flag = Flag::text(
        &["--kn", "--kml-name"],
        "name",
        &mut kml_name,
        TEXT_CAPACITY,
        "Name of the KML file.",
    );
    let mut kml_description_flag = Flag::text(
        &["--kd", "--kml-description"],
        "description",
        &mut kml_description,
        TEXT_CAPACITY,
        "Description of the KML file.",
    );

    argscan::parse_or_exit(
        &mut [&mut help, &mut index_flag, &mut kml, &mut kml_name_flag, &mut kml_description_flag],
        tool.description,
    );

    let kml = kml.found();
    let single = index_flag.found();
    let (user_name, user_description) = (kml_name_flag.found(), kml_description_flag.found());

    let format = if kml {
        Format::Kml {
            name: if user_name { kml_name } else { tool.kml_name.to_string() },
            description: if user_description {
                kml_description
            } else {
                tool.kml_description.to_string()
            },
        }
    } else {
        Format::Text
    };

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    crate::run(tool.shape, &format, single.then_some(index), stdin, stdout)
        .context("filter failed")?;
    Ok(())
}
