//! CSV output backend.
//!
//! One row per marina per step, under the header
//! `marina,step,time_secs,x,y`.

use std::io;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, PositionRow};

pub const CSV_HEADER: [&str; 5] = ["marina", "step", "time_secs", "x", "y"];

/// Writes position rows as CSV to any `io::Write` sink.
pub struct CsvWriter<W: io::Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl<W: io::Write> CsvWriter<W> {
    /// Wrap `sink` and write the header row.
    pub fn new(sink: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(sink);
        rows.write_record(CSV_HEADER)?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.rows
            .into_inner()
            .map_err(|e| OutputError::Io(io::Error::new(e.error().kind(), e.to_string())))
    }
}

impl<W: io::Write> OutputWriter for CsvWriter<W> {
    fn write_rows(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.rows.write_record(&[
                row.marina.to_string(),
                row.step.to_string(),
                row.time_secs.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
