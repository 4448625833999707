// src/gui/components/error_dialog.rs
//
// Blocking notice for a failed fetch. Everything behind it is dimmed and
// unclickable until dismissed.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(failure) = app.fetch_error.clone() else { return };

    let modal = egui::Modal::new(egui::Id::new("fetch_error")).show(ctx, |ui| {
        ui.set_max_width(420.0);
        ui.heading("Network error");
        ui.add_space(4.0);
        ui.label(format!("Unable to reach {}", failure.url));
        ui.label(egui::RichText::new(&failure.cause).weak());
        ui.add_space(8.0);
        ui.button("OK").clicked()
    });

    if modal.inner || modal.should_close() {
        logd!("UI: error dialog dismissed");
        app.fetch_error = None;
    }
}
