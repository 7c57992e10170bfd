//! Central canvas UI: the interactive globe.

use super::colors;
use crate::globe::{DragOutcome, GlobeScene, PointerEvent, TextAnchor, MARKER_RADIUS};
use crate::state::AppState;
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Shape, Stroke, Vec2};
use glam::DVec2;

/// Space kept free around the globe, in screen points.
const MARGIN: f32 = 20.0;

/// Maps globe pixels onto the canvas rect, keeping the globe square and
/// centered.
struct ScreenTransform {
    origin: Pos2,
    scale: f32,
}

impl ScreenTransform {
    fn new(rect: Rect, diameter: f64) -> Self {
        let side = (rect.width().min(rect.height()) - 2.0 * MARGIN).max(1.0);
        Self {
            origin: rect.center() - Vec2::splat(side / 2.0),
            scale: side / diameter as f32,
        }
    }

    fn to_screen(&self, p: DVec2) -> Pos2 {
        self.origin + Vec2::new(p.x as f32, p.y as f32) * self.scale
    }

    fn to_globe(&self, pos: Pos2) -> DVec2 {
        let v = (pos - self.origin) / self.scale;
        DVec2::new(v.x as f64, v.y as f64)
    }

    fn points(&self, run: &[DVec2]) -> Vec<Pos2> {
        run.iter().map(|p| self.to_screen(*p)).collect()
    }
}

pub fn render_canvas(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();

        // Allocate the full available space for the canvas
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, colors::globe::BACKGROUND);

        let scene = state.scene();
        let transform = ScreenTransform::new(rect, scene.diameter);
        draw_scene(&painter, &scene, &transform);

        draw_overlay_info(ui, &rect, &response, &transform, state);

        handle_canvas_interaction(&response, &transform, state);
    });
}

fn draw_scene(painter: &egui::Painter, scene: &GlobeScene, transform: &ScreenTransform) {
    let center = transform.to_screen(DVec2::splat(scene.radius()));
    let radius = scene.radius() as f32 * transform.scale;

    painter.circle_filled(center, radius, colors::globe::OCEAN);

    let graticule_stroke = Stroke::new(1.0, colors::globe::graticule());
    for line in &scene.graticule {
        painter.add(Shape::line(transform.points(line), graticule_stroke));
    }

    // egui only fills convex shapes, so land is outlined.
    let land_stroke = Stroke::new(1.2, colors::globe::LAND);
    for ring in &scene.land {
        painter.add(Shape::closed_line(transform.points(ring), land_stroke));
    }

    painter.circle_stroke(center, radius, Stroke::new(1.5, colors::globe::OCEAN_EDGE));

    let [r, g, b] = scene.route_color;
    let route_color = Color32::from_rgb(r, g, b);
    let route_stroke = Stroke::new(2.0, route_color);
    for route in &scene.routes {
        for run in &route.runs {
            painter.add(Shape::line(transform.points(run), route_stroke));
        }
    }

    for marker in &scene.markers {
        painter.circle_filled(
            transform.to_screen(marker.position),
            MARKER_RADIUS as f32,
            route_color,
        );
        if let Some(label) = &marker.label {
            let align = match label.anchor {
                TextAnchor::Start => Align2::LEFT_BOTTOM,
                TextAnchor::End => Align2::RIGHT_BOTTOM,
            };
            painter.text(
                transform.to_screen(label.position),
                align,
                &label.text,
                FontId::proportional(12.0),
                colors::globe::LABEL,
            );
        }
    }
}

fn draw_overlay_info(
    ui: &mut egui::Ui,
    rect: &Rect,
    response: &egui::Response,
    transform: &ScreenTransform,
    state: &AppState,
) {
    let overlay_pos = rect.left_top() + Vec2::new(10.0, 10.0);
    let overlay_rect = Rect::from_min_size(overlay_pos, Vec2::new(180.0, 40.0));

    let cursor = response
        .hover_pos()
        .and_then(|pos| state.globe.projection().invert(transform.to_globe(pos)));

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            let text = match cursor {
                Some(coord) => format!("{:>7.2}°, {:>7.2}°", coord.y, coord.x),
                None => "--".to_string(),
            };
            ui.label(
                RichText::new(text)
                    .monospace()
                    .size(12.0)
                    .color(Color32::from_rgb(200, 200, 220)),
            );
        });
    });
}

fn handle_canvas_interaction(
    response: &egui::Response,
    transform: &ScreenTransform,
    state: &mut AppState,
) {
    let pointer = response.interact_pointer_pos().map(|pos| transform.to_globe(pos));

    let event = if response.drag_started() {
        pointer.map(PointerEvent::Down)
    } else if response.dragged() {
        pointer.map(PointerEvent::Move)
    } else if response.drag_stopped() {
        Some(PointerEvent::Up)
    } else {
        None
    };

    if let Some(event) = event {
        if state.globe.handle_pointer(event) == DragOutcome::Ended {
            state.url_dirty = true;
        }
    }

    if state.globe.interaction.is_dragging() {
        response.ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if response.hovered() {
        response.ctx.set_cursor_icon(egui::CursorIcon::Grab);
    }
}
