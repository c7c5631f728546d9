use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Element, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::game_card::GameCard;
use crate::bootstrap;
use crate::model::GameView;
use crate::state::DragScroll;

#[derive(Properties, PartialEq, Clone)]
pub struct Card4LineCarouselProps {
    pub carousel_id: AttrValue,
    pub games: Vec<Rc<GameView>>,
}

/// Swipeable strip shown instead of the grid on narrow viewports.
#[function_component(Card4LineCarousel)]
pub fn card4line_carousel(props: &Card4LineCarouselProps) -> Html {
    let strip_ref = use_node_ref();
    let drag = use_mut_ref(DragScroll::default);

    // Mount: optional Bootstrap init, window-level mouseup ends any drag
    {
        let drag = drag.clone();
        use_effect_with(props.carousel_id.clone(), move |carousel_id| {
            match bootstrap::init_carousel(carousel_id) {
                Ok(true) => log::debug!("bootstrap carousel initialized for #{carousel_id}"),
                Ok(false) => {}
                Err(e) => log::debug!(
                    "bootstrap carousel init failed for #{carousel_id}: {}",
                    crate::dom::js_error_message(&e)
                ),
            }
            let mouseup = web_sys::window().map(|window| {
                EventListener::new(&window, "mouseup", move |_| drag.borrow_mut().end())
            });
            move || drop(mouseup)
        });
    }

    let onmousedown = {
        let strip_ref = strip_ref.clone();
        let drag = drag.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(strip) = strip_ref.cast::<Element>() {
                drag.borrow_mut().begin(e.page_x() as f64, strip.scroll_left() as f64);
            }
        })
    };
    let onmousemove = {
        let strip_ref = strip_ref.clone();
        let drag = drag.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(left) = drag.borrow().drag_to(e.page_x() as f64) else {
                return;
            };
            e.prevent_default();
            if let Some(strip) = strip_ref.cast::<Element>() {
                strip.set_scroll_left(left.round() as i32);
            }
        })
    };
    let ontouchstart = {
        let strip_ref = strip_ref.clone();
        let drag = drag.clone();
        Callback::from(move |e: TouchEvent| {
            let (Some(touch), Some(strip)) = (e.touches().get(0), strip_ref.cast::<Element>()) else {
                return;
            };
            drag.borrow_mut().begin(touch.page_x() as f64, strip.scroll_left() as f64);
        })
    };
    let ontouchmove = {
        let strip_ref = strip_ref.clone();
        let drag = drag.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.touches().get(0) else { return };
            let Some(left) = drag.borrow().drag_to(touch.page_x() as f64) else {
                return;
            };
            if let Some(strip) = strip_ref.cast::<Element>() {
                strip.set_scroll_left(left.round() as i32);
            }
        })
    };
    let ontouchend = {
        let drag = drag.clone();
        Callback::from(move |_e: TouchEvent| drag.borrow_mut().end())
    };

    html! {
        <div id={props.carousel_id.clone()} class="carousel slide card4line-carousel" data-ride="carousel" data-interval="false">
            <div ref={strip_ref} class="carousel-inner" {onmousedown} {onmousemove} {ontouchstart} {ontouchmove} {ontouchend}>
                { for props.games.iter().enumerate().map(|(i, game)| html! {
                    <div class={classes!("card4line-carousel-item", (i == 0).then_some("active"))}>
                        <GameCard game={game.clone()} />
                    </div>
                }) }
            </div>
        </div>
    }
}
