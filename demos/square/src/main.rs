//! square — sample run of the marinas position calculator.
//!
//! Moves the standard 4 × 4 marina grid around three sides of a roughly
//! square route (UTM-like metre coordinates) at a constant speed of 25, then
//! prints each marina's time/position series and the observed speed between
//! consecutive steps.
//!
//! Pass `--csv` to write every row as CSV to stdout instead.

use std::io;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use marina_core::{GridConfig, MarinaId, Point};
use marina_motion::{MarinasCalculator, step_speeds, track};
use marina_output::{CsvWriter, OutputWriter, write_tracks};

// ── Route ─────────────────────────────────────────────────────────────────────

const WAYPOINTS: [(i32, i32); 4] = [
    (127_197, 3_082_138),
    (127_227, 3_081_824),
    (127_740, 3_081_763),
    (127_771, 3_082_128),
];

const SPEED: f32 = 25.0;

/// Move a 4 × 4 marina grid around a square route and report its positions
#[derive(Parser, Debug)]
#[clap(name = "square")]
#[clap(about, long_about = None)]
struct CmdOptions {
    /// Write every marina row as CSV to stdout instead of the text report
    #[clap(long)]
    csv: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = CmdOptions::parse();

    let points: Vec<Point> = WAYPOINTS.iter().map(|&p| Point::from(p)).collect();
    let speeds = vec![SPEED; points.len() - 1];
    let config = GridConfig::default();

    let calc = MarinasCalculator::new(points, speeds, config)?;

    let t0 = Instant::now();
    let snapshots = calc.marinas_points();
    let elapsed = t0.elapsed();

    if args.csv {
        let mut writer = CsvWriter::new(io::stdout().lock())?;
        write_tracks(&mut writer, snapshots)?;
        writer.finish()?;
        return Ok(());
    }

    println!("=== square — marinas position calculator ===");
    println!(
        "Grid: {} × {} marinas, {} m apart  |  step: {} s  |  speed: {SPEED}",
        config.nodes_per_group, config.nodes_per_line, config.marinas_distance, config.step_duration_secs,
    );
    println!(
        "Waypoints: {}",
        calc.trajectory_points().iter().map(Point::to_string).collect::<Vec<_>>().join(" -> "),
    );
    println!(
        "Computed {} snapshots in {:.3} ms",
        snapshots.len(),
        elapsed.as_secs_f64() * 1e3,
    );
    println!();

    for marina in MarinaId::all(calc.nb_marinas()) {
        println!("──────────────── {marina} ────────────────");
        for node in track(snapshots, marina) {
            println!("Time : {} - Coordinates : {}", node.time.secs(), node.position);
        }
    }
    println!();

    // Observed speed per marina; steps that cross a waypoint include the
    // re-anchoring jump and stand out as outliers.
    println!("{:<8} {:>10} {:>10} {:>10}", "Marina", "Min", "Mean", "Max");
    println!("{}", "-".repeat(41));
    for marina in MarinaId::all(calc.nb_marinas()) {
        let speeds = step_speeds(snapshots, marina, config.step_duration_secs);
        if speeds.is_empty() {
            continue;
        }
        let min = speeds.iter().map(|s| s.speed).fold(f64::INFINITY, f64::min);
        let max = speeds.iter().map(|s| s.speed).fold(f64::NEG_INFINITY, f64::max);
        let mean = speeds.iter().map(|s| s.speed).sum::<f64>() / speeds.len() as f64;
        println!("{:<8} {min:>10.4} {mean:>10.4} {max:>10.4}", marina.0);
    }

    Ok(())
}
