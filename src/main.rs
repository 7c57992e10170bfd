#![warn(clippy::all)]

//! Flight Globe - A web-based flight route visualization tool.
//!
//! Airports are picked through a ranked search or typed as route strings
//! (`ARN-LHR-JFK, SYD-AKL`). Routes are drawn as great-circle arcs on a
//! draggable orthographic globe, with sector distances and SVG export.

mod data;
mod geo;
mod globe;
mod search;
mod state;
mod ui;

use data::AirportDataset;
use eframe::egui;
use geo::LandLayer;
use state::AppState;

/// Embedded airport table.
const AIRPORTS_CSV: &[u8] = include_bytes!("../assets/airports.csv");
/// Embedded landmass polygons.
const LAND_GEOJSON: &str = include_str!("../assets/land.geojson");

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Flight Globe",
        native_options,
        Box::new(|cc| Ok(Box::new(FlightGlobeApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("app_canvas")
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Failed to find canvas element app_canvas");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(FlightGlobeApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    log::error!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct FlightGlobeApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Last time the URL query string was updated
    last_url_push: web_time::Instant,
}

impl FlightGlobeApp {
    /// Creates a new FlightGlobeApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let airports = AirportDataset::from_csv(AIRPORTS_CSV).unwrap_or_else(|e| {
            log::error!("Failed to load airports: {}", e);
            AirportDataset::default()
        });

        let land = LandLayer::from_geojson(LAND_GEOJSON).unwrap_or_else(|e| {
            log::error!("Failed to load land polygons: {}", e);
            LandLayer::new()
        });

        let mut state = AppState::new(airports, land);
        if state.airports.is_empty() {
            state.status_message = "Airport data unavailable".to_string();
        }

        Self {
            state,
            last_url_push: web_time::Instant::now(),
        }
    }
}

impl eframe::App for FlightGlobeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Render UI panels in the correct order for egui layout
        // Side and top/bottom panels must be rendered before CentralPanel
        ui::render_top_bar(ctx, &mut self.state);
        ui::render_left_panel(ctx, &mut self.state);
        ui::render_right_panel(ctx, &mut self.state);
        ui::render_canvas(ctx, &mut self.state);

        // Push current state to URL (throttled to once per second)
        if self.state.url_dirty {
            let now = web_time::Instant::now();
            if now.duration_since(self.last_url_push).as_secs_f64() >= 1.0 {
                self.last_url_push = now;
                self.state.url_dirty = false;
                state::url_state::push_to_url(&self.state.route_input, self.state.globe.rotation);
            } else {
                ctx.request_repaint_after(std::time::Duration::from_secs(1));
            }
        }
    }
}
