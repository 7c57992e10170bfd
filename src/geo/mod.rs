//! Geographic primitives for the globe view.
//!
//! This module provides the orthographic projection, spherical math
//! (distances, great-circle arcs), horizon clipping, the graticule and the
//! landmass layer.

pub mod clip;
mod graticule;
mod layer;
mod projection;
pub mod sphere;

pub use graticule::Graticule;
pub use layer::LandLayer;
pub use projection::{OrthographicProjection, Rotation, DEFAULT_DIAMETER};
pub use sphere::DistanceUnit;
