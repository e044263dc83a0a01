//! `marina-output` — row-oriented writers for marina snapshots.
//!
//! Every backend implements [`OutputWriter`].  Rows can be written either
//! from a finished snapshot sequence ([`write_tracks`], marina-major) or
//! while the trajectory is walked, via [`SnapshotOutputObserver`]
//! (step-major).
//!
//! # Usage
//!
//! ```rust,ignore
//! use marina_output::{CsvWriter, SnapshotOutputObserver};
//!
//! let writer = CsvWriter::new(std::io::stdout().lock())?;
//! let mut obs = SnapshotOutputObserver::new(writer);
//! marina_motion::walk(&trajectory, &config, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::{CSV_HEADER, CsvWriter};
pub use error::{OutputError, OutputResult};
pub use observer::SnapshotOutputObserver;
pub use row::{PositionRow, rows_for_snapshot};
pub use writer::{OutputWriter, write_track, write_tracks};
