// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    error::NetworkFailure,
    specs::contacts::Contact,
    store,
};

use super::components::{action_buttons, data_table, error_dialog, url_bar};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Contact Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // what the table shows; replaced wholesale by each scrape
    pub rows: Vec<Contact>,

    pub status: String,

    // set by a failed fetch; the modal clears it
    pub fetch_error: Option<NetworkFailure>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let db_path = &state.options.scrape.db_path;

        // Ensures the schema as a side effect, then shows what we already have.
        let (rows, status) = match store::load_contacts(db_path) {
            Ok(recs) if !recs.is_empty() => {
                logf!("Init: {} stored contact(s) in {}", recs.len(), db_path.display());
                let n = recs.len();
                (recs.into_iter().map(|r| r.contact).collect(), format!("Loaded {n} stored contact(s)"))
            }
            Ok(_) => (Vec::new(), s!("Idle")),
            Err(e) => {
                loge!("Init: could not open {}: {e}", db_path.display());
                (Vec::new(), s!("Idle"))
            }
        };

        Self { state, rows, status, fetch_error: None }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("url_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            url_bar::draw(ui, self);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            action_buttons::draw(ui, self);
            ui.separator();
            data_table::draw(ui, self);
        });

        error_dialog::draw(ctx, self);
    }
}
