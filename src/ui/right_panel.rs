//! Right panel UI: display settings, view and export controls.

use crate::geo::{DistanceUnit, Rotation};
use crate::globe::LabelField;
use crate::state::AppState;
use eframe::egui::{self, RichText, ScrollArea};
use egui_phosphor::regular as icons;

pub fn render_right_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::right("right_panel")
        .resizable(true)
        .default_width(220.0)
        .min_width(180.0)
        .max_width(350.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Controls");
                ui.separator();

                let before = state.settings.clone();

                render_labels_section(ui, state);
                ui.add_space(5.0);

                render_style_section(ui, state);
                ui.add_space(5.0);

                if state.settings != before {
                    state.settings.save();
                }

                render_view_section(ui, state);
                ui.add_space(5.0);

                render_export_section(ui, state);
            });
        });
}

fn render_labels_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Labels").strong())
        .default_open(true)
        .show(ui, |ui| {
            egui::ComboBox::from_id_salt("label_selector")
                .selected_text(state.settings.label.label())
                .width(150.0)
                .show_ui(ui, |ui| {
                    for field in LabelField::all() {
                        ui.selectable_value(&mut state.settings.label, *field, field.label());
                    }
                });
        });
}

fn render_style_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Style").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Route color");
                ui.color_edit_button_srgb(&mut state.settings.route_color);
            });

            ui.label("Distance unit");
            egui::ComboBox::from_id_salt("unit_selector")
                .selected_text(state.settings.distance_unit.label())
                .width(150.0)
                .show_ui(ui, |ui| {
                    for unit in DistanceUnit::all() {
                        ui.selectable_value(
                            &mut state.settings.distance_unit,
                            *unit,
                            unit.label(),
                        );
                    }
                });
        });
}

fn render_view_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("View").strong())
        .default_open(true)
        .show(ui, |ui| {
            let rotation = state.globe.rotation.normalized();
            ui.label(
                RichText::new(format!("λ {:.1}°  φ {:.1}°", rotation.lambda, rotation.phi))
                    .monospace(),
            );

            ui.horizontal(|ui| {
                if ui
                    .button(format!("{} Reset", icons::ARROW_COUNTER_CLOCKWISE))
                    .clicked()
                {
                    state.globe.set_rotation(Rotation::default());
                    state.url_dirty = true;
                }
                let center = state.routes.centroid(&state.airports);
                if ui
                    .add_enabled(center.is_some(), egui::Button::new("Fit routes"))
                    .clicked()
                {
                    if let Some(center) = center {
                        state.globe.set_rotation(Rotation::centered_on(center));
                        state.url_dirty = true;
                    }
                }
            });
        });
}

fn render_export_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Export").strong())
        .default_open(true)
        .show(ui, |ui| {
            if ui
                .button(format!("{} Copy SVG", icons::CLIPBOARD_TEXT))
                .on_hover_text("Copy the globe as an SVG document")
                .clicked()
            {
                let svg = state.export_svg();
                log::info!("Copied SVG export ({} bytes)", svg.len());
                ui.ctx().copy_text(svg);
                state.status_message = "SVG copied to clipboard".to_string();
            }
        });
}
