// src/gui/actions/scrape.rs
use crate::{
    gui::app::App,
    gui::progress::GuiProgress,
    scrape::Pipeline,
};

/// Blocks the UI until the run finishes (at most the fetch timeout).
pub fn scrape(app: &mut App) {
    // Align scrape options with the form
    app.state.options.scrape.set_url(&app.state.gui.url_text);
    app.state.gui.url_text = app.state.options.scrape.url.clone();

    let pipeline = Pipeline::new(app.state.options.scrape.clone());
    app.fetch_error = None;

    // → This is where the scrape happens ←
    let found = {
        let mut prog = GuiProgress::new(&mut app.status, &mut app.fetch_error);
        pipeline.run_default(Some(&mut prog))
    };

    logf!("Scrape: UI rows {} → {}", app.rows.len(), found.len());

    // Full replace, even when empty
    app.rows = found;
}
