use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Element;
use yew::prelude::*;

use super::card4line_carousel::Card4LineCarousel;
use super::game_card::{GameCard, MissingGame};
use crate::catalog::Catalog;
use crate::config::CardsConfig;
use crate::dom;
use crate::model::GameView;
use crate::state::RenderMode;
use crate::util::Debouncer;

#[derive(Properties, PartialEq, Clone)]
pub struct Card4LineBlockProps {
    /// Position of the block on the page; makes carousel ids unique.
    pub index: usize,
    pub grid: Element,
    /// Carousel wrapper; the component itself is mounted here.
    pub wrapper: Element,
    /// `div[id]` slots of the grid, in DOM order.
    pub slots: Vec<Element>,
    pub catalog: Rc<Catalog>,
    pub config: Rc<CardsConfig>,
}

pub fn carousel_id(index: usize) -> String {
    format!("card4lineBootstrapCarousel_{index}")
}

fn current_mode(breakpoint: u32) -> RenderMode {
    let width = dom::viewport_width().unwrap_or_else(|| breakpoint.saturating_add(1));
    RenderMode::for_width(width, breakpoint)
}

/// One `.card4line` block: a static grid filled slot by slot on wide
/// viewports, a carousel in the wrapper on narrow ones.
#[function_component(Card4LineBlock)]
pub fn card4line_block(props: &Card4LineBlockProps) -> Html {
    let breakpoint = props.config.grid_breakpoint;
    let mode = use_state_eq(|| current_mode(breakpoint));

    // Re-evaluate the mode on resize, debounced per block
    {
        let mode = mode.clone();
        let delay_ms = props.config.resize_debounce_ms;
        use_effect_with(breakpoint, move |&breakpoint| {
            let debouncer = Rc::new(Debouncer::new(delay_ms));
            let listener = web_sys::window().map(|window| {
                let debouncer = debouncer.clone();
                EventListener::new(&window, "resize", move |_| {
                    let mode = mode.clone();
                    debouncer.schedule(move || mode.set(current_mode(breakpoint)));
                })
            });
            move || {
                drop(listener);
                debouncer.cancel();
            }
        });
    }

    // Show exactly one of grid / wrapper
    {
        let grid = props.grid.clone();
        let wrapper = props.wrapper.clone();
        use_effect_with(*mode, move |mode| {
            match mode {
                RenderMode::Grid => {
                    dom::set_style(&grid, "display", "");
                    let _ = wrapper.class_list().add_1("d-none");
                }
                RenderMode::Carousel => {
                    dom::set_style(&grid, "display", "none");
                    let _ = wrapper.class_list().remove_1("d-none");
                }
            }
            || ()
        });
    }

    match *mode {
        RenderMode::Grid => html! {
            <>
                { for props.slots.iter().map(|slot| {
                    let content = match props.catalog.view(&slot.id()) {
                        Some(game) => html! { <GameCard game={Rc::new(game)} /> },
                        None => html! { <MissingGame /> },
                    };
                    yew::create_portal(content, slot.clone())
                }) }
            </>
        },
        RenderMode::Carousel => {
            let games: Vec<Rc<GameView>> = props
                .slots
                .iter()
                .filter_map(|slot| props.catalog.view(&slot.id()))
                .map(Rc::new)
                .collect();
            html! { <Card4LineCarousel carousel_id={carousel_id(props.index)} {games} /> }
        }
    }
}
