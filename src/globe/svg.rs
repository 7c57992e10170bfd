//! SVG export of a [`GlobeScene`].

use super::scene::{hex_color, GlobeScene, MARKER_RADIUS};
use glam::DVec2;
use std::fmt::{self, Write};

/// Margin around the disc in the viewBox, in pixels.
const MARGIN: f64 = 25.0;

const OCEAN_STOPS: (&str, &str) = ("#799", "#368");
const LAND_STOPS: (&str, &str) = ("#765", "#543");

/// Renders the scene as a standalone SVG document.
pub fn render_svg(scene: &GlobeScene) -> String {
    let mut out = String::new();
    // Formatting into a String does not fail.
    let _ = write_svg(&mut out, scene);
    out
}

/// Writes the scene as SVG into `out`.
pub fn write_svg(out: &mut impl Write, scene: &GlobeScene) -> fmt::Result {
    let d = scene.diameter;
    let r = scene.radius();
    let color = hex_color(scene.route_color);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="svg" viewBox="{} {} {} {}">"#,
        num(-MARGIN),
        num(-MARGIN),
        num(d + 2.0 * MARGIN),
        num(d + 2.0 * MARGIN)
    )?;

    writeln!(out, "<defs>")?;
    write_gradient(out, "ocean-gradient", OCEAN_STOPS)?;
    write_gradient(out, "land-gradient", LAND_STOPS)?;
    writeln!(out, "</defs>")?;

    writeln!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="url(#ocean-gradient)"/>"#,
        num(r),
        num(r),
        num(r)
    )?;

    let mut land = String::new();
    for ring in &scene.land {
        push_path(&mut land, ring, true);
    }
    writeln!(
        out,
        r#"<path class="svg-land" d="{land}" fill="url(#land-gradient)" fill-rule="evenodd"/>"#
    )?;

    let mut graticule = String::new();
    for line in &scene.graticule {
        push_path(&mut graticule, line, false);
    }
    writeln!(
        out,
        r##"<path id="graticule" d="{graticule}" fill="none" stroke="#fff" stroke-opacity="0.2"/>"##
    )?;

    writeln!(out, "<g>")?;
    for route in &scene.routes {
        let mut d = String::new();
        for run in &route.runs {
            push_path(&mut d, run, false);
        }
        writeln!(
            out,
            r#"<path data-key="{}" d="{d}" fill="none" stroke="{color}" stroke-width="2"/>"#,
            escape(&route.key)
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, "<g>")?;
    for marker in &scene.markers {
        writeln!(out, r#"<g data-id="{}">"#, marker.airport_id)?;
        writeln!(
            out,
            r#"<path d="{}" fill="{color}"/>"#,
            circle_path(marker.position, MARKER_RADIUS)
        )?;
        if let Some(label) = &marker.label {
            writeln!(
                out,
                r##"<text class="svg-label" x="{}" y="{}" text-anchor="{}" font-size="12" fill="#fff">{}</text>"##,
                num(label.position.x),
                num(label.position.y),
                label.anchor.as_svg(),
                escape(&label.text)
            )?;
        }
        writeln!(out, "</g>")?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, "</svg>")
}

fn write_gradient(out: &mut impl Write, id: &str, (inner, outer): (&str, &str)) -> fmt::Result {
    writeln!(
        out,
        r#"<radialGradient id="{id}" cx="65%" cy="20%"><stop offset="0%" stop-color="{inner}"/><stop offset="100%" stop-color="{outer}"/></radialGradient>"#
    )
}

/// Appends `M x,y L x,y ...` for `points`, closing with `Z` when asked.
fn push_path(d: &mut String, points: &[DVec2], close: bool) {
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{},{}", num(p.x), num(p.y));
    }
    if close && !points.is_empty() {
        d.push('Z');
    }
}

/// Two arcs drawing a circle of radius `r` centered at `c`.
fn circle_path(c: DVec2, r: f64) -> String {
    format!(
        "M{},{}m0,{r}a{r},{r} 0 1,1 0,{}a{r},{r} 0 1,1 0,{}z",
        num(c.x),
        num(c.y),
        num(-2.0 * r),
        num(2.0 * r),
        r = num(r)
    )
}

/// One decimal, without a trailing `.0`.
fn num(v: f64) -> String {
    let rounded = (v * 10.0).round() / 10.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
