//! Application state management.
//!
//! This module contains all state structures used throughout the application.
//! State is organized into logical groupings that correspond to different
//! areas of functionality.

mod globe;
pub mod routes;
mod search;
mod settings;
pub mod url_state;

pub use globe::GlobeState;
pub use routes::{append_route, RouteList};
pub use search::SearchState;
pub use settings::{DisplaySettings, GlobePosition};

use crate::data::AirportDataset;
use crate::geo::{Graticule, LandLayer, Rotation};
use crate::globe::{render_svg, GlobeScene, SceneInput};

/// Root application state containing all sub-states.
#[derive(Debug, Default)]
pub struct AppState {
    /// Airport reference table
    pub airports: AirportDataset,

    /// Landmass polygons
    pub land: LandLayer,

    /// Latitude/longitude grid
    pub graticule: Graticule,

    /// Search box and picked airports
    pub search: SearchState,

    /// Route string as edited by the user
    pub route_input: String,

    /// Routes parsed from the last applied route string
    pub routes: RouteList,

    /// Route string `routes` was parsed from
    applied_routes: String,

    /// Globe rotation and drag interaction
    pub globe: GlobeState,

    /// Persisted display options
    pub settings: DisplaySettings,

    /// Application status message displayed in top bar
    pub status_message: String,

    /// Set when routes or rotation changed and the URL needs updating
    pub url_dirty: bool,
}

impl AppState {
    /// Builds the initial state from loaded data, persisted settings and
    /// URL parameters.
    pub fn new(airports: AirportDataset, land: LandLayer) -> Self {
        let params = url_state::parse_from_url();

        let mut state = Self {
            airports,
            land,
            graticule: Graticule::new(),
            globe: GlobeState::new(GlobePosition::load().rotation),
            settings: DisplaySettings::load(),
            status_message: "Ready".to_string(),
            ..Default::default()
        };

        if let Some(routes) = params.routes.clone() {
            state.route_input = routes;
            state.apply_routes();
        }
        // An explicit rotation in the URL wins over route centering.
        if let Some(rotation) = params.rotation() {
            state.globe.rotation = rotation;
        }
        state.url_dirty = false;

        log::info!(
            "Loaded {} airports and {} land polygons",
            state.airports.len(),
            state.land.polygons.len()
        );
        state
    }

    /// Re-parses the route string if it changed since the last call.
    ///
    /// When the new routes contain at least one sector the globe is
    /// re-centered on them. Returns `true` when the routes were re-parsed.
    pub fn apply_routes(&mut self) -> bool {
        if self.route_input == self.applied_routes {
            return false;
        }
        self.applied_routes.clone_from(&self.route_input);
        self.routes = RouteList::parse(&self.route_input, &self.airports);
        self.url_dirty = true;

        if let Some(center) = self.routes.centroid(&self.airports) {
            self.globe.set_rotation(Rotation::centered_on(center));
        }

        self.status_message = self.route_summary();
        if !self.routes.unknown_codes.is_empty() {
            log::warn!("Unknown airport codes: {}", self.routes.unknown_codes.join(", "));
        }
        true
    }

    /// Appends the picked airports as a new route and applies it.
    pub fn submit_selection(&mut self) {
        let codes = self.search.take_selected_codes();
        if let Some(routes) = append_route(&self.route_input, &codes) {
            self.route_input = routes;
            self.apply_routes();
        }
    }

    /// Removes all routes.
    pub fn clear_routes(&mut self) {
        self.route_input.clear();
        self.apply_routes();
        self.status_message = "Ready".to_string();
    }

    fn route_summary(&self) -> String {
        let count = self.routes.sectors.len();
        if count == 0 {
            return if self.routes.unknown_codes.is_empty() {
                "No routes".to_string()
            } else {
                format!("Unknown: {}", self.routes.unknown_codes.join(", "))
            };
        }
        let total = self.settings.distance_unit.format(self.routes.total_km(&self.airports));
        format!(
            "{} sector{}, {}",
            count,
            if count == 1 { "" } else { "s" },
            total
        )
    }

    /// Projects everything for the current rotation and settings.
    pub fn scene(&self) -> GlobeScene {
        let shown = self.routes.airports();
        GlobeScene::build(
            &self.globe.projection(),
            SceneInput {
                airports: self.airports.as_slice(),
                shown: &shown,
                sectors: &self.routes.sectors,
                land: &self.land,
                graticule: &self.graticule,
                label_field: self.settings.label,
                route_color: self.settings.route_color,
            },
        )
    }

    /// Current globe as a standalone SVG document.
    pub fn export_svg(&self) -> String {
        render_svg(&self.scene())
    }
}
