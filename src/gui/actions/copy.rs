// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let format = app.state.options.format;
    let txt = csv::contacts_to_string(&app.rows, true, format.delim());
    logf!("Copy: rows={}, format={:?}", app.rows.len(), format);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
