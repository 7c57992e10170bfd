//! Orthographic globe projection.
//!
//! Converts geographic coordinates (lat/lon) to pixel positions on a globe
//! of a given diameter, looking at the sphere from space. The sphere is
//! rotated so the view center sits at (-lambda, -phi).

use super::sphere::{from_unit_vector, geo_distance, to_unit_vector};
use geo_types::Coord;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Default globe diameter in pixels.
pub const DEFAULT_DIAMETER: f64 = 600.0;

/// Globe rotation angles in degrees.
///
/// `lambda` spins the globe around its axis, `phi` tilts it toward or away
/// from the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub lambda: f64,
    pub phi: f64,
}

impl Default for Rotation {
    fn default() -> Self {
        // Centered on the North Atlantic.
        Self {
            lambda: 30.0,
            phi: -35.0,
        }
    }
}

impl Rotation {
    /// Tilt limit applied to interactive rotation, in degrees.
    pub const PHI_LIMIT: f64 = 65.0;

    pub fn new(lambda: f64, phi: f64) -> Self {
        Self { lambda, phi }
    }

    /// Rotation that puts `coord` at the center of the view, with the tilt
    /// clamped to [`Rotation::PHI_LIMIT`].
    pub fn centered_on(coord: Coord<f64>) -> Self {
        Self {
            lambda: -coord.x,
            phi: (-coord.y).clamp(-Self::PHI_LIMIT, Self::PHI_LIMIT),
        }
        .normalized()
    }

    /// Geographic coordinate at the center of the view.
    pub fn center(&self) -> Coord<f64> {
        Coord {
            x: -self.lambda,
            y: -self.phi,
        }
    }

    /// Same rotation with lambda wrapped into [-180, 180).
    pub fn normalized(&self) -> Self {
        Self {
            lambda: (self.lambda + 180.0).rem_euclid(360.0) - 180.0,
            phi: self.phi,
        }
    }
}

/// Orthographic projection with a 90° clip angle.
#[derive(Debug, Clone)]
pub struct OrthographicProjection {
    diameter: f64,
    rotation: Rotation,
    cos_lambda: f64,
    sin_lambda: f64,
    cos_phi: f64,
    sin_phi: f64,
}

impl Default for OrthographicProjection {
    fn default() -> Self {
        Self::new(DEFAULT_DIAMETER, Rotation::default())
    }
}

impl OrthographicProjection {
    pub fn new(diameter: f64, rotation: Rotation) -> Self {
        let mut projection = Self {
            diameter,
            rotation,
            cos_lambda: 1.0,
            sin_lambda: 0.0,
            cos_phi: 1.0,
            sin_phi: 0.0,
        };
        projection.set_rotation(rotation);
        projection
    }

    /// Updates the rotation used for subsequent projections.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        let lambda = rotation.lambda.to_radians();
        let phi = rotation.phi.to_radians();
        self.rotation = rotation;
        self.cos_lambda = lambda.cos();
        self.sin_lambda = lambda.sin();
        self.cos_phi = phi.cos();
        self.sin_phi = phi.sin();
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Globe radius in pixels (the projection scale).
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Pixel position of the globe center.
    pub fn center(&self) -> DVec2 {
        DVec2::splat(self.radius())
    }

    /// Rotates a coordinate into view space. The returned unit vector has
    /// `x > 0` on the visible hemisphere.
    pub fn rotate(&self, coord: Coord<f64>) -> DVec3 {
        let v = to_unit_vector(coord);
        // Spin around the polar axis by lambda.
        let x = v.x * self.cos_lambda - v.y * self.sin_lambda;
        let y = v.x * self.sin_lambda + v.y * self.cos_lambda;
        let z = v.z;
        // Tilt by phi.
        DVec3::new(
            x * self.cos_phi - z * self.sin_phi,
            y,
            z * self.cos_phi + x * self.sin_phi,
        )
    }

    /// Inverse of [`rotate`](Self::rotate).
    pub fn unrotate(&self, v: DVec3) -> Coord<f64> {
        let x = v.x * self.cos_phi + v.z * self.sin_phi;
        let z = v.z * self.cos_phi - v.x * self.sin_phi;
        let y = v.y;
        let unspun = DVec3::new(
            x * self.cos_lambda + y * self.sin_lambda,
            -x * self.sin_lambda + y * self.cos_lambda,
            z,
        );
        from_unit_vector(unspun)
    }

    /// Screen position of a rotated vector, ignoring visibility.
    pub fn project_rotated(&self, v: DVec3) -> DVec2 {
        let r = self.radius();
        DVec2::new(r + r * v.y, r - r * v.z)
    }

    /// Screen position of `coord`, or `None` on the far hemisphere.
    pub fn project(&self, coord: Coord<f64>) -> Option<DVec2> {
        let v = self.rotate(coord);
        (v.x > 0.0).then(|| self.project_rotated(v))
    }

    /// Screen position of `coord` as if the sphere were transparent.
    pub fn project_unclipped(&self, coord: Coord<f64>) -> DVec2 {
        self.project_rotated(self.rotate(coord))
    }

    /// Whether `coord` lies on the visible hemisphere: its great-circle
    /// distance from the view center is below 90°.
    pub fn is_visible(&self, coord: Coord<f64>) -> bool {
        geo_distance(coord, self.rotation.center()) < FRAC_PI_2
    }

    /// Geographic coordinate under a screen position, `None` outside the disc.
    pub fn invert(&self, pos: DVec2) -> Option<Coord<f64>> {
        let r = self.radius();
        let y = (pos.x - r) / r;
        let z = (r - pos.y) / r;
        let rho_sq = y * y + z * z;
        if rho_sq > 1.0 {
            return None;
        }
        let x = (1.0 - rho_sq).sqrt();
        Some(self.unrotate(DVec3::new(x, y, z)))
    }
}
