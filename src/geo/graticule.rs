//! Latitude/longitude grid lines.

use geo_types::Coord;

/// Spacing between grid lines, in degrees.
const STEP_DEG: i32 = 10;
/// Minor meridians stop short of the poles to avoid clutter.
const MINOR_EXTENT_DEG: i32 = 80;
/// Sampling interval along each line, in degrees.
const SAMPLE_DEG: f64 = 2.5;

/// Grid lines as geographic polylines.
#[derive(Debug, Clone)]
pub struct Graticule {
    pub lines: Vec<Vec<Coord<f64>>>,
}

impl Default for Graticule {
    fn default() -> Self {
        Self::new()
    }
}

impl Graticule {
    /// Meridians every 10° (pole to pole on multiples of 90°, otherwise
    /// between ±80°) and parallels every 10° between ±80°.
    pub fn new() -> Self {
        let mut lines = Vec::new();

        for lng in (-180..180).step_by(STEP_DEG as usize) {
            let extent = if lng % 90 == 0 { 90 } else { MINOR_EXTENT_DEG };
            lines.push(sample(-extent as f64, extent as f64, |lat| Coord {
                x: lng as f64,
                y: lat,
            }));
        }

        for lat in (-MINOR_EXTENT_DEG..=MINOR_EXTENT_DEG).step_by(STEP_DEG as usize) {
            lines.push(sample(-180.0, 180.0, |lng| Coord {
                x: lng,
                y: lat as f64,
            }));
        }

        Self { lines }
    }
}

fn sample(from: f64, to: f64, at: impl Fn(f64) -> Coord<f64>) -> Vec<Coord<f64>> {
    let steps = ((to - from) / SAMPLE_DEG).ceil() as usize;
    (0..=steps)
        .map(|i| at((from + i as f64 * SAMPLE_DEG).min(to)))
        .collect()
}
