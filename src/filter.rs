use std::io::{self, BufRead, Write};

use h3o::{CellIndex, LatLng};
use tracing::{debug, warn};

use crate::kml;

/// What is written for each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The cell's center point.
    Center,
    /// The cell's boundary vertices.
    Boundary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    Text,
    Kml { name: String, description: String },
}

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("error reading H3 index from stdin")]
    InputRead(#[source] io::Error),
    #[error("error writing output")]
    Output(#[source] io::Error),
}

/// Parses a hexadecimal cell index, as found on one input line.
///
/// Returns `None` for anything that is not a valid cell, which is how the
/// filters recognise input they should skip.
pub fn parse_cell(text: &str) -> Option<CellIndex> {
    let text = text.trim();
    let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|it| it.is_ascii_hexdigit()) {
        return None;
    }
    let raw = u64::from_str_radix(digits, 16).ok()?;
    CellIndex::try_from(raw).ok()
}

/// Writes cells to `out` in one [`Format`].
///
/// KML output is framed by a header, written on construction, and a footer,
/// written by [`Filter::finish`].
pub struct Filter<W: Write> {
    shape: Shape,
    kml: bool,
    out: W,
}

impl<W: Write> Filter<W> {
    pub fn new(shape: Shape, format: &Format, mut out: W) -> Result<Self, FilterError> {
        let kml = match format {
            Format::Text => false,
            Format::Kml { name, description } => {
                kml::header(&mut out, name, description).map_err(FilterError::Output)?;
                true
            }
        };
        Ok(Filter { shape, kml, out })
    }

    pub fn cell(&mut self, cell: CellIndex) -> Result<(), FilterError> {
        self.write_cell(cell).map_err(FilterError::Output)
    }

    fn write_cell(&mut self, cell: CellIndex) -> io::Result<()> {
        let out = &mut self.out;
        match (self.shape, self.kml) {
            (Shape::Center, false) => {
                let ll = LatLng::from(cell);
                writeln!(out, "{:.10} {:.10}", ll.lat(), ll.lng())
            }
            (Shape::Center, true) => kml::point(out, LatLng::from(cell), &cell.to_string()),
            (Shape::Boundary, false) => {
                writeln!(out, "{cell}")?;
                writeln!(out, "{{")?;
                for ll in cell.boundary().iter() {
                    writeln!(out, "   {:.9} {:.9}", ll.lat(), ll.lng())?;
                }
                writeln!(out, "}}")
            }
            (Shape::Boundary, true) => kml::outline(out, &cell.boundary(), &cell.to_string()),
        }
    }

    /// Processes `input` line by line until end of input.
    ///
    /// Blank lines are ignored and lines that are not a cell index are skipped
    /// with a warning. A read error ends the loop. Returns the number of cells
    /// written.
    pub fn lines(&mut self, input: impl BufRead) -> Result<usize, FilterError> {
        let mut written = 0;
        for (lineno, line) in input.lines().enumerate() {
            let line = line.map_err(FilterError::InputRead)?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_cell(&line) {
                Some(cell) => {
                    self.cell(cell)?;
                    written += 1;
                }
                None => warn!(line = lineno + 1, text = %line.trim(), "skipping invalid H3 index"),
            }
        }
        debug!(cells = written, "end of input");
        Ok(written)
    }

    pub fn finish(mut self) -> Result<W, FilterError> {
        if self.kml {
            kml::footer(&mut self.out).map_err(FilterError::Output)?;
        }
        self.out.flush().map_err(FilterError::Output)?;
        Ok(self.out)
    }
}

/// Runs one filter pass: the single `index` if given, `input` otherwise.
pub fn run<W: Write>(
    shape: Shape,
    format: &Format,
    index: Option<u64>,
    input: impl BufRead,
    out: W,
) -> Result<W, FilterError> {
    let mut filter = Filter::new(shape, format, out)?;
    match index {
        Some(raw) => match CellIndex::try_from(raw) {
            Ok(cell) => filter.cell(cell)?,
            Err(err) => warn!(index = %format!("{raw:x}"), %err, "skipping invalid H3 index"),
        },
        None => {
            filter.lines(input)?;
        }
    }
    filter.finish()
}
