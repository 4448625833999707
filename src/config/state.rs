// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Text in the URL field (mapped into options.scrape.url on scrape)
    pub url_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 800,
            window_h: 600,
            url_text: s!(super::consts::DEFAULT_URL),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
