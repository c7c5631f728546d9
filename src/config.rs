//! Page contract: element ids, selectors and timings.
//!
//! Defaults match the stock page markup. A page may override any subset by
//! embedding `<script type="application/json" id="game-cards-config">`.

use log::LevelFilter;
use serde::Deserialize;
use web_sys::Document;

use crate::error::ConfigError;

pub const CONFIG_SCRIPT_ID: &str = "game-cards-config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    pub catalog_url: String,
    /// Widths at or below this many CSS pixels switch card4line blocks to the carousel.
    pub grid_breakpoint: u32,
    pub resize_debounce_ms: u32,
    pub card4line_selector: String,
    pub carousel_wrapper_class: String,
    pub carousel_wrapper_id: String,
    pub cardwide_section_id: String,
    pub menu_trigger_id: String,
    pub menu_panel_id: String,
    pub menu_close_id: String,
    pub menu_open_class: String,
    pub log_level: String,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            catalog_url: "data/games.json".into(),
            grid_breakpoint: 1024,
            resize_debounce_ms: 180,
            card4line_selector: ".card4line, #card4line".into(),
            carousel_wrapper_class: "card4lineCarouselWrapper".into(),
            carousel_wrapper_id: "card4lineCarouselWrapper".into(),
            cardwide_section_id: "cardwide-section".into(),
            menu_trigger_id: "menu-hamburger".into(),
            menu_panel_id: "menu-mobile-aberto".into(),
            menu_close_id: "menu-mobile__fechar".into(),
            menu_open_class: "ativo".into(),
            log_level: "info".into(),
        }
    }
}

impl CardsConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the optional config script from the page, falling back to defaults.
    pub fn from_page(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {e}");
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
