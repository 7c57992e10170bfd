//! Landmass layer data structures.

use super::sphere::densify_path;
use crate::data::DataError;
use geo_types::Coord;
use geojson::{Feature, GeoJson, Geometry, Value};

/// Maximum spacing between ring vertices after loading, in degrees.
///
/// Ring edges are great-circle arcs; densifying once at load time lets the
/// renderer treat them as short straight segments.
const RING_STEP_DEG: f64 = 2.0;

/// A land polygon with optional holes (lakes, inland seas).
#[derive(Debug, Clone)]
pub struct LandPolygon {
    pub exterior: Vec<Coord<f64>>,
    pub holes: Vec<Vec<Coord<f64>>>,
}

impl LandPolygon {
    /// Exterior followed by holes.
    pub fn rings(&self) -> impl Iterator<Item = &[Coord<f64>]> {
        std::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }
}

/// All landmass polygons drawn on the globe.
#[derive(Debug, Clone, Default)]
pub struct LandLayer {
    pub polygons: Vec<LandPolygon>,
}

impl LandLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads polygons from GeoJSON data.
    ///
    /// Polygon and MultiPolygon geometries are kept; other geometry types
    /// are skipped.
    pub fn from_geojson(geojson_str: &str) -> Result<Self, DataError> {
        let geojson: GeoJson = geojson_str.parse()?;
        let mut layer = Self::new();

        match geojson {
            GeoJson::FeatureCollection(fc) => {
                for feature in &fc.features {
                    layer.add_feature(feature);
                }
            }
            GeoJson::Feature(f) => layer.add_feature(&f),
            GeoJson::Geometry(g) => layer.add_geometry(&g),
        }

        if layer.polygons.is_empty() {
            return Err(DataError::Empty("land polygons"));
        }
        Ok(layer)
    }

    fn add_feature(&mut self, feature: &Feature) {
        if let Some(geometry) = &feature.geometry {
            self.add_geometry(geometry);
        }
    }

    fn add_geometry(&mut self, geometry: &Geometry) {
        match &geometry.value {
            Value::Polygon(rings) => {
                if let Some(polygon) = convert_rings(rings) {
                    self.polygons.push(polygon);
                }
            }
            Value::MultiPolygon(polygons) => {
                for rings in polygons {
                    if let Some(polygon) = convert_rings(rings) {
                        self.polygons.push(polygon);
                    }
                }
            }
            Value::GeometryCollection(geometries) => {
                for g in geometries {
                    self.add_geometry(g);
                }
            }
            _ => log::debug!("Skipping non-polygon land geometry"),
        }
    }
}

fn convert_rings(rings: &[Vec<Vec<f64>>]) -> Option<LandPolygon> {
    let (exterior, holes) = rings.split_first()?;
    let exterior = convert_ring(exterior)?;
    let holes = holes.iter().filter_map(|ring| convert_ring(ring)).collect();
    Some(LandPolygon { exterior, holes })
}

fn convert_ring(ring: &[Vec<f64>]) -> Option<Vec<Coord<f64>>> {
    let coords: Vec<Coord<f64>> = ring
        .iter()
        .filter(|c| c.len() >= 2)
        .map(|c| Coord { x: c[0], y: c[1] })
        .collect();
    if coords.len() < 4 {
        return None;
    }
    Some(densify_path(&coords, RING_STEP_DEG))
}
