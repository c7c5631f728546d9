//! Attach the card components to page elements.
//!
//! Each function takes the root element it renders into; only
//! [`crate::boot`] looks elements up in the document.

use std::rc::Rc;

use web_sys::Element;
use yew::{AppHandle, Renderer};

use crate::catalog::Catalog;
use crate::components::card4line_block::{Card4LineBlock, Card4LineBlockProps};
use crate::components::cardwide::{CardWide, CardWideProps};
use crate::config::CardsConfig;
use crate::dom;
use crate::error::MountError;
use crate::util::row_gap_for;

/// Render one card4line block. Slots are the grid's `div[id]` descendants;
/// the carousel wrapper is the grid's next sibling, created when missing.
pub fn mount_card4line_block(
    grid: Element,
    index: usize,
    catalog: Rc<Catalog>,
    config: Rc<CardsConfig>,
) -> Result<AppHandle<Card4LineBlock>, MountError> {
    let slots = dom::id_slots(&grid)?;
    dom::set_style(&grid, "--card4line-row-gap", row_gap_for(slots.len()));

    let wrapper = carousel_wrapper_for(&grid, &config)?;
    for slot in &slots {
        let id = slot.id();
        if catalog.get(&id).is_none() {
            log::warn!("card4line block {index}: game {id:?} not found in catalog");
        }
        slot.set_inner_html("");
    }
    wrapper.set_inner_html("");

    let props = Card4LineBlockProps {
        index,
        grid,
        wrapper: wrapper.clone(),
        slots,
        catalog,
        config,
    };
    Ok(Renderer::<Card4LineBlock>::with_root_and_props(wrapper, props).render())
}

fn carousel_wrapper_for(grid: &Element, config: &CardsConfig) -> Result<Element, MountError> {
    if let Some(sibling) = grid.next_element_sibling() {
        if dom::is_carousel_wrapper(&sibling, &config.carousel_wrapper_class, &config.carousel_wrapper_id) {
            return Ok(sibling);
        }
    }
    let document = grid
        .owner_document()
        .ok_or_else(|| MountError::MissingElement("document of card4line block".into()))?;
    let parent = grid
        .parent_node()
        .ok_or_else(|| MountError::MissingElement("parent of card4line block".into()))?;
    let created = document.create_element("div")?;
    created.set_class_name(&format!("{} d-none", config.carousel_wrapper_class));
    parent.insert_before(&created, grid.next_sibling().as_ref())?;
    Ok(created)
}

/// Render the cardwide section, one app per matched slot. Mounting clears
/// its host, so each card is hosted by its own slot and the section's other
/// children stay in place. Slots without a catalog entry are left untouched.
pub fn mount_cardwide_section(
    section: &Element,
    catalog: &Catalog,
) -> Result<Vec<AppHandle<CardWide>>, MountError> {
    let slots = dom::id_slots(section)?;
    if slots.is_empty() {
        log::warn!("cardwide: no <div id=\"...\"> inside #{}", section.id());
        return Ok(Vec::new());
    }

    let mut handles = Vec::with_capacity(slots.len());
    for slot in slots {
        let id = slot.id();
        let Some(game) = catalog.view(&id) else {
            log::warn!("cardwide: game {id:?} not found in catalog, skipping");
            continue;
        };
        slot.class_list().add_1("cardwide-item-wrapper")?;
        dom::set_style(&slot, "padding", "0");
        let props = CardWideProps { game: Rc::new(game) };
        handles.push(Renderer::<CardWide>::with_root_and_props(slot, props).render());
    }
    Ok(handles)
}
