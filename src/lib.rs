#![forbid(unsafe_code)]

pub mod bootstrap;
pub mod catalog;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod menu;
pub mod model;
pub mod mount;
pub mod normalize;
pub mod state;
pub mod util;

use std::rc::Rc;

use crate::catalog::{Catalog, fetch_catalog};
use crate::config::CardsConfig;
use crate::menu::HamburgerMenu;

/// Browser entry point: install logging, then load the catalog and render.
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    // Logger first so config parse warnings reach the console.
    util::init_logging();
    let config = CardsConfig::from_page(&document);
    log::set_max_level(config.level_filter());
    wasm_bindgen_futures::spawn_local(boot(Rc::new(config)));
}

/// Fetch the catalog once, then mount every renderer the page contains.
pub async fn boot(config: Rc<CardsConfig>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document; nothing to render");
        return;
    };

    attach_menu(&document, &config);

    let catalog = match fetch_catalog(&config.catalog_url).await {
        Ok(catalog) => Rc::new(catalog),
        Err(e) => {
            log::error!("could not load {}: {e}", config.catalog_url);
            return;
        }
    };

    mount_card4line_blocks(&document, &catalog, &config);

    match document.get_element_by_id(&config.cardwide_section_id) {
        Some(section) => {
            match mount::mount_cardwide_section(&section, &catalog) {
                Ok(cards) => log::debug!("cardwide: rendered {} cards", cards.len()),
                Err(e) => log::error!("cardwide: {e}"),
            }
        }
        None => log::error!("cardwide: section #{} not found", config.cardwide_section_id),
    }
}

fn mount_card4line_blocks(document: &web_sys::Document, catalog: &Rc<Catalog>, config: &Rc<CardsConfig>) {
    let grids = match dom::query_all(document, &config.card4line_selector) {
        Ok(grids) => grids,
        Err(e) => {
            log::error!("card4line: bad selector {:?}: {}", config.card4line_selector, dom::js_error_message(&e));
            return;
        }
    };
    for (index, grid) in grids.into_iter().enumerate() {
        if let Err(e) = mount::mount_card4line_block(grid, index, catalog.clone(), config.clone()) {
            log::error!("card4line block {index}: {e}");
        }
    }
}

fn attach_menu(document: &web_sys::Document, config: &CardsConfig) {
    let trigger = document.get_element_by_id(&config.menu_trigger_id);
    let panel = document.get_element_by_id(&config.menu_panel_id);
    let close = document.get_element_by_id(&config.menu_close_id);
    match (trigger, panel, close) {
        (Some(trigger), Some(panel), Some(close)) => {
            HamburgerMenu::attach(&trigger, panel, &close, &config.menu_open_class).forget();
        }
        _ => log::debug!("hamburger menu elements not present"),
    }
}
