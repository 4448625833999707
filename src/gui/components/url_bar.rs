// src/gui/components/url_bar.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Target URL:");

        let width = (ui.available_width() - 80.0).max(120.0);
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.url_text)
                .desired_width(width)
                .hint_text(crate::config::consts::DEFAULT_URL),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Scrape").clicked() || submitted {
            actions::scrape(app);
        }
    });
}
