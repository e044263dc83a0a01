//! The `OutputWriter` trait and sequence-level helpers.

use marina_core::MarinaId;
use marina_motion::GridSnapshot;

use crate::{OutputError, OutputResult, PositionRow};

/// Trait implemented by every backend writer.
pub trait OutputWriter {
    /// Write a batch of rows.
    fn write_rows(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write the full series of one marina.
pub fn write_track<W: OutputWriter + ?Sized>(
    writer:    &mut W,
    snapshots: &[GridSnapshot],
    marina:    MarinaId,
) -> OutputResult<()> {
    let rows = snapshots
        .iter()
        .enumerate()
        .map(|(step, s)| PositionRow::new(marina, step as u64, s).ok_or(OutputError::UnknownMarina(marina)))
        .collect::<OutputResult<Vec<_>>>()?;
    writer.write_rows(&rows)
}

/// Write every marina's series, marina-major: all steps of marina 0, then
/// all steps of marina 1, and so on.
pub fn write_tracks<W: OutputWriter + ?Sized>(
    writer:    &mut W,
    snapshots: &[GridSnapshot],
) -> OutputResult<()> {
    let Some(first) = snapshots.first() else {
        return Ok(());
    };
    for marina in MarinaId::all(first.len()) {
        write_track(writer, snapshots, marina)?;
    }
    Ok(())
}
