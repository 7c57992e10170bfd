//! Spherical geometry on the unit sphere.
//!
//! Coordinates are `geo_types::Coord` with `x` = longitude and `y` = latitude
//! in degrees. Vectors use the convention x toward (0°, 0°), y toward
//! (90°E, 0°) and z toward the north pole.

use geo_types::Coord;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Converts a geographic coordinate to a unit vector.
pub fn to_unit_vector(coord: Coord<f64>) -> DVec3 {
    let lambda = coord.x.to_radians();
    let phi = coord.y.to_radians();
    let cos_phi = phi.cos();
    DVec3::new(cos_phi * lambda.cos(), cos_phi * lambda.sin(), phi.sin())
}

/// Converts a (not necessarily normalized) vector back to a coordinate.
pub fn from_unit_vector(v: DVec3) -> Coord<f64> {
    let v = v.normalize_or_zero();
    Coord {
        x: v.y.atan2(v.x).to_degrees(),
        y: v.z.clamp(-1.0, 1.0).asin().to_degrees(),
    }
}

/// Great-circle angular distance between two coordinates, in radians.
pub fn geo_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let phi_a = a.y.to_radians();
    let phi_b = b.y.to_radians();
    let d_phi = phi_b - phi_a;
    let d_lambda = (b.x - a.x).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * h.sqrt().min(1.0).asin()
}

/// Great-circle distance in kilometres.
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    geo_distance(a, b) * EARTH_RADIUS_KM
}

/// Point at fraction `t` along the great-circle arc from `a` to `b`.
///
/// Coincident or antipodal endpoints have no unique arc; the nearer endpoint
/// is returned.
pub fn interpolate(a: Coord<f64>, b: Coord<f64>, t: f64) -> Coord<f64> {
    let va = to_unit_vector(a);
    let vb = to_unit_vector(b);
    let omega = va.dot(vb).clamp(-1.0, 1.0).acos();
    let sin_omega = omega.sin();

    if sin_omega.abs() < 1e-12 {
        return if t < 0.5 { a } else { b };
    }

    let wa = ((1.0 - t) * omega).sin() / sin_omega;
    let wb = (t * omega).sin() / sin_omega;
    from_unit_vector(va * wa + vb * wb)
}

/// Samples the great-circle arc from `a` to `b` with at most `max_step_deg`
/// degrees between consecutive samples. Both endpoints are included.
pub fn densify_arc(a: Coord<f64>, b: Coord<f64>, max_step_deg: f64) -> Vec<Coord<f64>> {
    let angle = geo_distance(a, b).to_degrees();
    let steps = if max_step_deg > 0.0 {
        // Tolerance keeps exact multiples of the step from gaining a sample.
        (angle / max_step_deg - 1e-9).ceil().max(1.0) as usize
    } else {
        1
    };

    let mut points = Vec::with_capacity(steps + 1);
    points.push(a);
    for i in 1..steps {
        points.push(interpolate(a, b, i as f64 / steps as f64));
    }
    points.push(b);
    points
}

/// Densifies every edge of a polyline or ring.
pub fn densify_path(coords: &[Coord<f64>], max_step_deg: f64) -> Vec<Coord<f64>> {
    let mut out = Vec::with_capacity(coords.len());
    for (i, pair) in coords.windows(2).enumerate() {
        let arc = densify_arc(pair[0], pair[1], max_step_deg);
        // Skip the shared start point after the first edge.
        let skip = usize::from(i > 0);
        out.extend(arc.into_iter().skip(skip));
    }
    if out.is_empty() {
        out.extend_from_slice(coords);
    }
    out
}

/// Spherical centroid of a set of points, `None` when empty or when the
/// points cancel out (e.g. two antipodes).
pub fn centroid<I>(coords: I) -> Option<Coord<f64>>
where
    I: IntoIterator<Item = Coord<f64>>,
{
    let sum: DVec3 = coords.into_iter().map(to_unit_vector).sum();
    if sum.length() < 1e-9 {
        return None;
    }
    Some(from_unit_vector(sum))
}

/// Units for displaying distances.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
    NauticalMiles,
}

impl DistanceUnit {
    pub fn label(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "Kilometers",
            DistanceUnit::Miles => "Miles",
            DistanceUnit::NauticalMiles => "Nautical miles",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nm",
        }
    }

    pub fn from_km(&self, km: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => km,
            DistanceUnit::Miles => km / 1.609344,
            DistanceUnit::NauticalMiles => km / 1.852,
        }
    }

    /// Formats a kilometre distance in this unit, rounded to whole units.
    pub fn format(&self, km: f64) -> String {
        format!("{:.0} {}", self.from_km(km), self.suffix())
    }

    pub fn all() -> &'static [DistanceUnit] {
        &[
            DistanceUnit::Kilometers,
            DistanceUnit::Miles,
            DistanceUnit::NauticalMiles,
        ]
    }
}
