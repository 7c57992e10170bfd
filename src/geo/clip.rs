//! Clipping projected geometry at the globe's horizon.
//!
//! Lines are cut where they pass behind the globe. Polygon rings are kept
//! closed by pulling hidden vertices onto the limb, so land that wraps around
//! the horizon hugs the edge of the disc.

use super::OrthographicProjection;
use geo_types::Coord;
use glam::{DVec2, DVec3};

/// Projects a polyline, splitting it into the runs on the visible hemisphere.
///
/// Each run that touches the horizon starts or ends exactly on the limb.
/// Runs with fewer than two points are dropped.
pub fn clip_line(projection: &OrthographicProjection, coords: &[Coord<f64>]) -> Vec<Vec<DVec2>> {
    let mut runs = Vec::new();
    let mut current: Vec<DVec2> = Vec::new();
    let mut prev: Option<DVec3> = None;

    for coord in coords {
        let v = projection.rotate(*coord);
        let visible = v.x > 0.0;

        if let Some(p) = prev {
            if (p.x > 0.0) != visible {
                current.push(projection.project_rotated(horizon_crossing(p, v)));
                if !visible {
                    flush(&mut runs, &mut current);
                }
            }
        }
        if visible {
            current.push(projection.project_rotated(v));
        }
        prev = Some(v);
    }
    flush(&mut runs, &mut current);

    runs
}

/// Projects a closed ring, clamping hidden vertices onto the limb.
///
/// Returns `None` when no vertex of the ring is visible.
pub fn clamp_ring(projection: &OrthographicProjection, ring: &[Coord<f64>]) -> Option<Vec<DVec2>> {
    let rotated: Vec<DVec3> = ring.iter().map(|c| projection.rotate(*c)).collect();
    if !rotated.iter().any(|v| v.x > 0.0) {
        return None;
    }

    let mut points = Vec::with_capacity(rotated.len() + 4);
    let mut prev: Option<DVec3> = None;
    for &v in &rotated {
        if let Some(p) = prev {
            if (p.x > 0.0) != (v.x > 0.0) {
                points.push(projection.project_rotated(horizon_crossing(p, v)));
            }
        }
        if v.x > 0.0 {
            points.push(projection.project_rotated(v));
        } else if let Some(limb) = limb_point(projection, v) {
            points.push(limb);
        }
        prev = Some(v);
    }

    (points.len() >= 3).then_some(points)
}

/// Point on the horizon great circle between a visible and a hidden vector.
fn horizon_crossing(a: DVec3, b: DVec3) -> DVec3 {
    let t = a.x / (a.x - b.x);
    let p = a.lerp(b, t);
    let on_plane = DVec3::new(0.0, p.y, p.z);
    on_plane.try_normalize().unwrap_or(on_plane)
}

/// Radial projection of a hidden vector onto the limb.
fn limb_point(projection: &OrthographicProjection, v: DVec3) -> Option<DVec2> {
    let direction = DVec2::new(v.y, -v.z).try_normalize()?;
    Some(projection.center() + direction * projection.radius())
}

fn flush(runs: &mut Vec<Vec<DVec2>>, current: &mut Vec<DVec2>) {
    if current.len() >= 2 {
        runs.push(std::mem::take(current));
    } else {
        current.clear();
    }
}
