// src/gui/components/data_table.rs
//
// Draws the contact table. Purely a view over App::rows.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, specs::contacts::HEADERS};

// Name, Title, Email, Extension
const WIDTHS: [f32; 4] = [150.0, 150.0, 200.0, 100.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.rows.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No contacts yet. Press Scrape.").weak());
        });
        return;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0);
    for (i, w) in WIDTHS.iter().enumerate() {
        let col = if i + 1 == WIDTHS.len() {
            Column::remainder().at_least(60.0)
        } else {
            Column::initial(*w).resizable(true).clip(true).at_least(40.0)
        };
        table = table.column(col);
    }

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.rows.len(), |mut row| {
                let c = &app.rows[row.index()];
                for field in c.fields() {
                    row.col(|ui| {
                        ui.label(field);
                    });
                }
            });
        });
}
