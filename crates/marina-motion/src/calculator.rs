//! `MarinasCalculator` — the public entry point: validated inputs plus a
//! lazily computed, memoized snapshot sequence.

use std::cell::OnceCell;

use marina_core::{GridConfig, Point};

use crate::{GridSnapshot, MotionResult, SnapshotCollector, Trajectory, walker};

/// Computes the positions of every marina along a trajectory.
///
/// All inputs are validated in [`new`][Self::new]; once a calculator exists,
/// producing the snapshots cannot fail.  The snapshots are computed on the
/// first call to [`marinas_points`][Self::marinas_points] and cached, so
/// repeated calls return the same sequence.
///
/// # Example
///
/// ```rust,ignore
/// let calc = MarinasCalculator::with_defaults(
///     vec![Point::new(0, 0), Point::new(1000, 0)],
///     vec![25.0],
/// )?;
/// for snapshot in calc.marinas_points() {
///     println!("{}: {}", snapshot.time(), snapshot[MarinaId(0)].position);
/// }
/// ```
#[derive(Debug)]
pub struct MarinasCalculator {
    trajectory: Trajectory,
    config:     GridConfig,
    snapshots:  OnceCell<Vec<GridSnapshot>>,
}

impl MarinasCalculator {
    /// Validate `config`, the speed count, and every segment's step distance.
    pub fn new(points: Vec<Point>, speeds: Vec<f32>, config: GridConfig) -> MotionResult<Self> {
        config.validate()?;
        let trajectory = Trajectory::new(points, speeds)?;
        trajectory.check_step_distances(&config)?;
        Ok(Self {
            trajectory,
            config,
            snapshots: OnceCell::new(),
        })
    }

    /// [`new`][Self::new] with [`GridConfig::default`]: 4 × 4 marinas,
    /// 10 s steps, 125 m apart.
    pub fn with_defaults(points: Vec<Point>, speeds: Vec<f32>) -> MotionResult<Self> {
        Self::new(points, speeds, GridConfig::default())
    }

    pub fn nb_marinas(&self) -> usize {
        self.config.nb_marinas()
    }

    /// The waypoints exactly as supplied.
    pub fn trajectory_points(&self) -> &[Point] {
        self.trajectory.waypoints()
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Every snapshot along the trajectory, in time order.
    pub fn marinas_points(&self) -> &[GridSnapshot] {
        self.snapshots.get_or_init(|| {
            let mut collector = SnapshotCollector::new();
            walker::walk_checked(&self.trajectory, &self.config, &mut collector);
            collector.into_snapshots()
        })
    }

    /// `true` once the snapshots have been computed.
    pub fn is_computed(&self) -> bool {
        self.snapshots.get().is_some()
    }
}
