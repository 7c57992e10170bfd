//! Left panel UI: airport search and route list.

use super::colors;
use crate::search::MIN_QUERY_CHARS;
use crate::state::AppState;
use eframe::egui::{self, RichText, ScrollArea};
use egui_phosphor::regular as icons;

pub fn render_left_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("left_panel")
        .resizable(true)
        .default_width(280.0)
        .min_width(220.0)
        .max_width(420.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Routes");
                ui.label(
                    RichText::new(
                        "Enter two or more airports to draw a route between them \
                         on the globe and calculate the distance.",
                    )
                    .small()
                    .color(colors::ui::LABEL),
                );
                ui.separator();

                render_search_section(ui, state);
                ui.add_space(10.0);

                render_route_section(ui, state);
                ui.add_space(10.0);

                render_sectors_section(ui, state);
            });
        });
}

fn render_search_section(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(icons::MAGNIFYING_GLASS);
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.search.query)
                .hint_text("City, airport or code")
                .desired_width(f32::INFINITY),
        );

        // Enter with an empty query submits the picked airports.
        if response.lost_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter))
            && state.search.query.trim().is_empty()
        {
            state.submit_selection();
        }
    });

    state.search.refresh(state.airports.as_slice());

    if state.search.query.trim().chars().count() >= MIN_QUERY_CHARS {
        if state.search.options.is_empty() {
            ui.label(RichText::new("No airports found").small().color(colors::ui::LABEL));
        }
        let mut picked = None;
        for option in &state.search.options {
            let mut response = ui.selectable_label(false, &option.label);
            if let Some(airport) = state.airports.get(option.index) {
                response = response.on_hover_text(format!(
                    "{} / {}  {:.2}, {:.2}",
                    airport.iata.as_deref().unwrap_or("-"),
                    airport.icao,
                    airport.lat,
                    airport.lng
                ));
            }
            if response.clicked() {
                picked = Some(option.clone());
            }
        }
        if let Some(option) = picked {
            state.search.select(option);
        }
    }

    if !state.search.selected.is_empty() {
        ui.add_space(5.0);
        let mut removed = None;
        ui.horizontal_wrapped(|ui| {
            for (i, option) in state.search.selected.iter().enumerate() {
                let chip = format!("{} {}", option.value, icons::X);
                if ui
                    .button(RichText::new(chip).monospace())
                    .on_hover_text(&option.label)
                    .clicked()
                {
                    removed = Some(i);
                }
            }
        });
        if let Some(i) = removed {
            state.search.remove(i);
        }
    }

    ui.add_space(5.0);
    ui.add_enabled_ui(!state.search.selected.is_empty(), |ui| {
        if ui
            .button(format!("{} Go", icons::AIRPLANE_TILT))
            .on_hover_text("Add the picked airports as a route")
            .clicked()
        {
            state.submit_selection();
        }
    });
}

fn render_route_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Route string").strong())
        .default_open(true)
        .show(ui, |ui| {
            let response = ui.add(
                egui::TextEdit::multiline(&mut state.route_input)
                    .hint_text("ARN-LHR-JFK, SYD-AKL")
                    .font(egui::TextStyle::Monospace)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            if response.lost_focus() {
                state.apply_routes();
            }

            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    state.apply_routes();
                }
                if ui.button(format!("{} Clear", icons::TRASH)).clicked() {
                    state.clear_routes();
                }
            });
        });
}

fn render_sectors_section(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.routes.unknown_codes.is_empty() {
        ui.label(
            RichText::new(format!(
                "{} Unknown: {}",
                icons::WARNING,
                state.routes.unknown_codes.join(", ")
            ))
            .color(colors::ui::WARNING),
        );
        ui.add_space(5.0);
    }

    if state.routes.is_empty() {
        return;
    }

    let unit = state.settings.distance_unit;
    egui::CollapsingHeader::new(RichText::new("Sectors").strong())
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("sector_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (sector, km) in state.routes.sector_distances_km(&state.airports) {
                        let (Some(from), Some(to)) =
                            (state.airports.get(sector.from), state.airports.get(sector.to))
                        else {
                            continue;
                        };
                        ui.label(RichText::new(format!("{}-{}", from.code(), to.code())).monospace())
                            .on_hover_text(format!("{} - {}", from.name, to.name));
                        ui.label(RichText::new(unit.format(km)).color(colors::ui::VALUE));
                        ui.end_row();
                    }

                    ui.label(RichText::new("Total").strong());
                    ui.label(
                        RichText::new(unit.format(state.routes.total_km(&state.airports))).strong(),
                    );
                    ui.end_row();
                });
        });
}
