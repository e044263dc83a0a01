//! `SnapshotOutputObserver<W>` — bridges `TrajectoryObserver` to an
//! `OutputWriter`.

use marina_motion::{GridSnapshot, TrajectoryObserver};

use crate::row::rows_for_snapshot;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TrajectoryObserver`] that writes every emitted snapshot to any
/// [`OutputWriter`] backend as it is produced.
///
/// Errors from the writer are stored internally because observer callbacks
/// have no return value.  After `walk()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SnapshotOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SnapshotOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `walk()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TrajectoryObserver for SnapshotOutputObserver<W> {
    fn on_snapshot(&mut self, step: u64, snapshot: &GridSnapshot) {
        let rows = rows_for_snapshot(step, snapshot);
        if rows.is_empty() {
            return;
        }
        let result = self.writer.write_rows(&rows);
        if result.is_ok() {
            self.rows += rows.len() as u64;
        }
        self.store_err(result);
    }

    fn on_walk_end(&mut self, _total_steps: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
