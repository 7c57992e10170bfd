//! The interactive globe.
//!
//! ## Scene
//! - `scene`: projects land, graticule, airports and route arcs for one frame
//! - `labels`: label text selection and collision-free placement
//! - `svg`: standalone SVG document for export
//!
//! ## Input
//! - `interaction`: drag-to-rotate state machine

pub mod interaction;
pub mod labels;
pub mod scene;
pub mod svg;

pub use interaction::{DragOutcome, GlobeInteraction, PointerEvent};
pub use labels::{LabelField, TextAnchor};
pub use scene::{GlobeScene, SceneInput, DEFAULT_ROUTE_COLOR, MARKER_RADIUS};
pub use svg::render_svg;
