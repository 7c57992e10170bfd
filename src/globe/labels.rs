//! Airport label text and placement.

use crate::data::Airport;
use crate::geo::OrthographicProjection;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Estimated label advance per character, in pixels.
const CHAR_WIDTH: f64 = 7.0;
/// Estimated label height, in pixels.
const LINE_HEIGHT: f64 = 12.0;

/// Which airport field is drawn next to each marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelField {
    #[default]
    Iata,
    Icao,
    City,
    Name,
    None,
}

impl LabelField {
    pub fn label(&self) -> &'static str {
        match self {
            LabelField::Iata => "IATA code",
            LabelField::Icao => "ICAO code",
            LabelField::City => "City",
            LabelField::Name => "Airport name",
            LabelField::None => "None",
        }
    }

    pub fn all() -> &'static [LabelField] {
        &[
            LabelField::Iata,
            LabelField::Icao,
            LabelField::City,
            LabelField::Name,
            LabelField::None,
        ]
    }

    /// Label text for `airport`: the chosen field when non-empty, else the
    /// IATA code, else the ICAO code. `None` for [`LabelField::None`].
    pub fn text_for<'a>(&self, airport: &'a Airport) -> Option<&'a str> {
        let field = match self {
            LabelField::None => return None,
            LabelField::Iata => airport.iata.as_deref(),
            LabelField::Icao => Some(airport.icao.as_str()),
            LabelField::City => Some(airport.city.as_str()),
            LabelField::Name => Some(airport.name.as_str()),
        };
        field
            .filter(|s| !s.is_empty())
            .or(airport.iata.as_deref())
            .or(Some(airport.icao.as_str()))
    }
}

/// Horizontal text anchor relative to the label position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text extends to the right of the position.
    Start,
    /// Text extends to the left of the position.
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::End => "end",
        }
    }
}

/// A label ready to draw. `position` is the baseline anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub text: String,
    pub position: DVec2,
    pub anchor: TextAnchor,
}

/// Candidate offsets from the marker, in preference order.
const CANDIDATES: [(TextAnchor, f64, f64); 4] = [
    (TextAnchor::Start, 6.0, -6.0),
    (TextAnchor::End, -6.0, -6.0),
    (TextAnchor::Start, 6.0, 14.0),
    (TextAnchor::End, -6.0, 14.0),
];

fn corners(position: DVec2, anchor: TextAnchor, width: f64) -> [DVec2; 4] {
    let (left, right) = match anchor {
        TextAnchor::Start => (position.x, position.x + width),
        TextAnchor::End => (position.x - width, position.x),
    };
    let top = position.y - LINE_HEIGHT;
    let bottom = position.y;
    [
        DVec2::new(left, top),
        DVec2::new(right, top),
        DVec2::new(left, bottom),
        DVec2::new(right, bottom),
    ]
}

/// Chooses where to draw `text` next to the marker at `point`.
///
/// The first candidate whose box fits inside the disc wins; otherwise the
/// one whose farthest corner is nearest the center.
pub fn place_label(projection: &OrthographicProjection, point: DVec2, text: &str) -> PlacedLabel {
    let center = projection.center();
    let radius = projection.radius();
    let width = text.chars().count() as f64 * CHAR_WIDTH;

    let farthest = |position: DVec2, anchor: TextAnchor| {
        corners(position, anchor, width)
            .iter()
            .map(|c| c.distance(center))
            .fold(0.0, f64::max)
    };

    let mut best: Option<(f64, DVec2, TextAnchor)> = None;
    for (anchor, dx, dy) in CANDIDATES {
        let position = point + DVec2::new(dx, dy);
        let reach = farthest(position, anchor);
        if reach <= radius {
            best = Some((reach, position, anchor));
            break;
        }
        if best.is_none_or(|(r, _, _)| reach < r) {
            best = Some((reach, position, anchor));
        }
    }

    let (position, anchor) = match best {
        Some((_, position, anchor)) => (position, anchor),
        None => (point, TextAnchor::Start),
    };
    PlacedLabel {
        text: text.to_string(),
        position,
        anchor,
    }
}

/// Projects and labels an airport. `None` when the airport is on the far
/// side of the globe or labels are turned off.
pub fn label_airport(
    projection: &OrthographicProjection,
    airport: &Airport,
    field: LabelField,
) -> Option<PlacedLabel> {
    if !projection.is_visible(airport.coord()) {
        return None;
    }
    let text = field.text_for(airport)?;
    let point = projection.project_unclipped(airport.coord());
    Some(place_label(projection, point, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Rotation;

    fn airport(iata: Option<&str>, icao: &str, city: &str, lng: f64, lat: f64) -> Airport {
        Airport {
            id: 1,
            name: format!("{city} Airport"),
            city: city.to_string(),
            iata: iata.map(str::to_string),
            icao: icao.to_string(),
            lat,
            lng,
        }
    }

    fn projection() -> OrthographicProjection {
        OrthographicProjection::new(600.0, Rotation::new(0.0, 0.0))
    }

    #[test]
    fn test_text_fallbacks() {
        let arn = airport(Some("ARN"), "ESSA", "Stockholm", 17.9, 59.6);
        let eskb = airport(None, "ESKB", "", 17.9, 59.4);

        assert_eq!(LabelField::Iata.text_for(&arn), Some("ARN"));
        assert_eq!(LabelField::Icao.text_for(&arn), Some("ESSA"));
        assert_eq!(LabelField::City.text_for(&arn), Some("Stockholm"));
        assert_eq!(LabelField::None.text_for(&arn), None);

        assert_eq!(LabelField::Iata.text_for(&eskb), Some("ESKB"));
        assert_eq!(LabelField::City.text_for(&eskb), Some("ESKB"));
    }

    #[test]
    fn test_prefers_right_above() {
        let label = place_label(&projection(), DVec2::new(300.0, 300.0), "ARN");
        assert_eq!(label.anchor, TextAnchor::Start);
        assert_eq!(label.position, DVec2::new(306.0, 294.0));
    }

    #[test]
    fn test_flips_left_near_right_edge() {
        // Close to the right limb the label has to go on the left.
        let label = place_label(&projection(), DVec2::new(580.0, 300.0), "ARN");
        assert_eq!(label.anchor, TextAnchor::End);
        assert_eq!(label.position, DVec2::new(574.0, 294.0));
    }

    #[test]
    fn test_drops_below_near_top_edge() {
        // Near the top just right of center: above would leave the disc.
        let label = place_label(&projection(), DVec2::new(310.0, 4.0), "ARN");
        assert_eq!(label.position.y, 18.0);
    }

    #[test]
    fn test_fallback_picks_nearest_farthest_corner() {
        // Just outside the limb no candidate fits; left-below reaches least far.
        let label = place_label(&projection(), DVec2::new(610.0, 300.0), "ARN");
        assert_eq!(label.anchor, TextAnchor::End);
        assert_eq!(label.position, DVec2::new(604.0, 314.0));
    }

    #[test]
    fn test_label_shown_iff_within_quarter_circle() {
        let projection = OrthographicProjection::new(600.0, Rotation::new(-20.0, -40.0));
        let center = Rotation::new(-20.0, -40.0).center();
        for lng in (-180..180).step_by(20) {
            for lat in (-80..=80).step_by(20) {
                let a = airport(Some("XYZ"), "XXYZ", "Town", lng as f64 + 0.3, lat as f64 + 0.3);
                let distance = crate::geo::sphere::geo_distance(a.coord(), center);
                assert_eq!(
                    label_airport(&projection, &a, LabelField::Iata).is_some(),
                    distance < std::f64::consts::FRAC_PI_2,
                    "{lng},{lat}"
                );
            }
        }
    }

    #[test]
    fn test_no_label_when_disabled() {
        let a = airport(Some("ARN"), "ESSA", "Stockholm", 0.0, 0.0);
        assert!(label_airport(&projection(), &a, LabelField::None).is_none());
    }
}
