// src/gui/components/action_buttons.rs

use eframe::egui;
use crate::{
    config::options::OutputFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();

    ui.horizontal(|ui| {
        let format = &mut app.state.options.format;
        let prev = *format;

        ui.label("Copy as:");
        ui.selectable_value(format, OutputFormat::Tsv, "TSV");
        ui.selectable_value(format, OutputFormat::Csv, "CSV");
        if *format != prev {
            logf!("UI: Copy format → {:?}", format);
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, &ctx);
        }

        ui.separator();
        ui.label(format!("{} row(s)", app.rows.len()));
    });
}
