//! Flat-file input and output: the place-identifier list and the CSV export.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use placesweep_core::fields::csv_header;

use crate::error::PlacesError;

/// Reads place identifiers from a newline-delimited file.
///
/// # Errors
///
/// Returns [`PlacesError::Io`] if the file cannot be opened or read.
pub fn read_place_ids(path: &Path) -> Result<Vec<String>, PlacesError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    parse_place_ids(BufReader::new(file)).map_err(|e| io_error(path, e))
}

/// Parses one identifier per line, trimming whitespace and skipping blank
/// lines. Identifiers are not validated or deduplicated.
///
/// # Errors
///
/// Returns the underlying I/O error if a line cannot be read.
pub fn parse_place_ids<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            ids.push(trimmed.to_owned());
        }
    }
    Ok(ids)
}

/// Writes identifiers one per line, in the given order.
///
/// # Errors
///
/// Returns [`PlacesError::Io`] if the file cannot be created or written.
pub fn write_place_ids<'a, I>(path: &Path, ids: I) -> Result<usize, PlacesError>
where
    I: IntoIterator<Item = &'a str>,
{
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut out = BufWriter::new(file);
    let mut written = 0usize;
    for id in ids {
        writeln!(out, "{id}").map_err(|e| io_error(path, e))?;
        written += 1;
    }
    out.flush().map_err(|e| io_error(path, e))?;
    Ok(written)
}

/// CSV writer for place rows.
///
/// The header is written on construction. Each row is flushed as soon as it
/// is written so an interrupted batch keeps everything written so far.
pub struct PlaceCsvWriter<W: Write> {
    writer: csv::Writer<W>,
    columns: usize,
    rows: usize,
}

impl PlaceCsvWriter<File> {
    /// Creates (or truncates) `path` and writes the header.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Io`] if the file cannot be created, or
    /// [`PlacesError::Csv`] if the header cannot be written.
    pub fn create(path: &Path, include_coordinates: bool) -> Result<Self, PlacesError> {
        let file = File::create(path).map_err(|e| io_error(path, e))?;
        Self::new(file, include_coordinates)
    }
}

impl<W: Write> PlaceCsvWriter<W> {
    /// Wraps `inner` and writes the header row.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Csv`] if the header cannot be written.
    pub fn new(inner: W, include_coordinates: bool) -> Result<Self, PlacesError> {
        let header = csv_header(include_coordinates);
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(&header)?;
        writer.flush().map_err(|e| io_error(Path::new("csv output"), e))?;
        Ok(Self {
            writer,
            columns: header.len(),
            rows: 0,
        })
    }

    /// Writes and flushes one row.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Csv`] if the row has the wrong number of cells
    /// or cannot be written.
    pub fn write_row(&mut self, row: &[String]) -> Result<(), PlacesError> {
        if row.len() != self.columns {
            return Err(PlacesError::Csv(csv::Error::from(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("row has {} cells, header has {}", row.len(), self.columns),
            ))));
        }
        self.writer.write_record(row)?;
        self.writer
            .flush()
            .map_err(|e| io_error(Path::new("csv output"), e))?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far, excluding the header.
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flushes and returns the inner writer.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Io`] if the final flush fails.
    pub fn into_inner(self) -> Result<W, PlacesError> {
        self.writer
            .into_inner()
            .map_err(|e| io_error(Path::new("csv output"), e.into_error()))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PlacesError {
    PlacesError::Io {
        path: path.display().to_string(),
        source,
    }
}
