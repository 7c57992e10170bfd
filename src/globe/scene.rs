//! Per-frame globe scene.
//!
//! Everything the globe draws, already projected into globe pixels. The
//! same scene feeds the interactive canvas and the SVG export.

use super::labels::{label_airport, LabelField, PlacedLabel};
use crate::data::{Airport, Sector};
use crate::geo::clip::{clamp_ring, clip_line};
use crate::geo::sphere::densify_arc;
use crate::geo::{Graticule, LandLayer, OrthographicProjection};
use glam::DVec2;

/// Point marker radius in pixels.
pub const MARKER_RADIUS: f64 = 3.0;
/// Route arcs are sampled at least this often, in degrees.
const ARC_STEP_DEG: f64 = 1.0;

/// Default route color (`#f80`).
pub const DEFAULT_ROUTE_COLOR: [u8; 3] = [0xff, 0x88, 0x00];

/// Formats an RGB color as `#rrggbb`.
pub fn hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Inputs the scene is built from, besides the projection.
#[derive(Debug, Clone, Copy)]
pub struct SceneInput<'a> {
    pub airports: &'a [Airport],
    /// Indices into `airports` to draw as markers.
    pub shown: &'a [usize],
    pub sectors: &'a [Sector],
    pub land: &'a LandLayer,
    pub graticule: &'a Graticule,
    pub label_field: LabelField,
    pub route_color: [u8; 3],
}

/// A visible airport marker.
#[derive(Debug, Clone)]
pub struct AirportMarker {
    pub airport_id: u32,
    pub position: DVec2,
    pub label: Option<PlacedLabel>,
}

/// A sector arc, split into visible runs.
#[derive(Debug, Clone)]
pub struct RouteArc {
    /// `"{id_a}-{id_b}"`.
    pub key: String,
    pub runs: Vec<Vec<DVec2>>,
}

/// Projected globe contents.
#[derive(Debug, Clone)]
pub struct GlobeScene {
    pub diameter: f64,
    /// Closed land rings, clamped to the disc.
    pub land: Vec<Vec<DVec2>>,
    pub graticule: Vec<Vec<DVec2>>,
    pub markers: Vec<AirportMarker>,
    pub routes: Vec<RouteArc>,
    pub route_color: [u8; 3],
}

impl GlobeScene {
    pub fn build(projection: &OrthographicProjection, input: SceneInput<'_>) -> Self {
        let land = input
            .land
            .polygons
            .iter()
            .flat_map(|polygon| polygon.rings())
            .filter_map(|ring| clamp_ring(projection, ring))
            .collect();

        let graticule = input
            .graticule
            .lines
            .iter()
            .flat_map(|line| clip_line(projection, line))
            .collect();

        let markers = input
            .shown
            .iter()
            .filter_map(|&i| input.airports.get(i))
            .filter_map(|airport| {
                let position = projection.project(airport.coord())?;
                Some(AirportMarker {
                    airport_id: airport.id,
                    position,
                    label: label_airport(projection, airport, input.label_field),
                })
            })
            .collect();

        let routes = input
            .sectors
            .iter()
            .filter_map(|sector| {
                let from = input.airports.get(sector.from)?;
                let to = input.airports.get(sector.to)?;
                let arc = densify_arc(from.coord(), to.coord(), ARC_STEP_DEG);
                let runs = clip_line(projection, &arc);
                (!runs.is_empty()).then(|| RouteArc {
                    key: format!("{}-{}", from.id, to.id),
                    runs,
                })
            })
            .collect();

        Self {
            diameter: projection.diameter(),
            land,
            graticule,
            markers,
            routes,
            route_color: input.route_color,
        }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Rotation;

    fn airport(id: u32, iata: &str, lng: f64, lat: f64) -> Airport {
        Airport {
            id,
            name: format!("{iata} Airport"),
            city: iata.to_string(),
            iata: Some(iata.to_string()),
            icao: format!("X{iata}"),
            lat,
            lng,
        }
    }

    fn airports() -> Vec<Airport> {
        vec![
            airport(10, "ARN", 17.9, 59.6),
            airport(20, "LHR", -0.5, 51.5),
            airport(30, "SYD", 151.2, -33.9),
        ]
    }

    fn build(rotation: Rotation, label_field: LabelField) -> GlobeScene {
        let airports = airports();
        let land = LandLayer::from_geojson(include_str!("../../assets/land.geojson")).unwrap();
        let graticule = Graticule::new();
        let projection = OrthographicProjection::new(600.0, rotation);
        GlobeScene::build(
            &projection,
            SceneInput {
                airports: &airports,
                shown: &[0, 1, 2],
                sectors: &[Sector::new(0, 1), Sector::new(1, 2)],
                land: &land,
                graticule: &graticule,
                label_field,
                route_color: DEFAULT_ROUTE_COLOR,
            },
        )
    }

    #[test]
    fn test_far_side_airports_are_not_drawn() {
        // Centered on Europe: Sydney is on the far side.
        let scene = build(Rotation::new(-10.0, -50.0), LabelField::Iata);
        let ids: Vec<u32> = scene.markers.iter().map(|m| m.airport_id).collect();
        assert_eq!(ids, vec![10, 20]);
        assert!(scene.markers.iter().all(|m| m.label.is_some()));
    }

    #[test]
    fn test_markers_without_labels() {
        let scene = build(Rotation::new(-10.0, -50.0), LabelField::None);
        assert_eq!(scene.markers.len(), 2);
        assert!(scene.markers.iter().all(|m| m.label.is_none()));
    }

    #[test]
    fn test_route_keys_and_clipping() {
        let scene = build(Rotation::new(-10.0, -50.0), LabelField::Iata);
        let keys: Vec<&str> = scene.routes.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["10-20", "20-30"]);
        for route in &scene.routes {
            for run in &route.runs {
                assert!(run.iter().all(|p| p.distance(DVec2::splat(300.0)) <= 300.0 + 1e-6));
            }
        }
    }

    #[test]
    fn test_land_and_graticule_present() {
        let scene = build(Rotation::default(), LabelField::Iata);
        assert!(!scene.land.is_empty());
        assert!(!scene.graticule.is_empty());
        assert_eq!(scene.radius(), 300.0);
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(DEFAULT_ROUTE_COLOR), "#ff8800");
        assert_eq!(hex_color([0, 10, 255]), "#000aff");
    }
}
