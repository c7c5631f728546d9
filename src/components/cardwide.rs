use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::model::GameView;
use crate::util::escape_css_url;

#[derive(Properties, PartialEq, Clone)]
pub struct CardWideProps {
    pub game: Rc<GameView>,
}

/// Large horizontal card. The background image is applied to the article
/// after render, never interpolated into markup.
#[function_component(CardWide)]
pub fn card_wide(props: &CardWideProps) -> Html {
    let g = &props.game;
    let article_ref = use_node_ref();

    {
        let article_ref = article_ref.clone();
        use_effect_with(g.image.clone(), move |image| {
            if !image.is_empty() {
                if let Some(article) = article_ref.cast::<HtmlElement>() {
                    let value = format!("url('{}')", escape_css_url(image));
                    let _ = article.style().set_property("background-image", &value);
                }
            }
            || ()
        });
    }

    let title_id = format!("{}-title", g.id);
    let show_old = g.show_old_price();
    let flag = |on: bool| if on { "1" } else { "0" };

    html! {
        <a class="cardwide-link" href={g.store_url.clone()}>
            <article ref={article_ref} class="cardwide-item" role="article" aria-labelledby={title_id.clone()}
                data-cardwide-isfree={flag(g.is_free)} data-cardwide-showold={flag(show_old)}>
                if let Some(label) = &g.discount_label {
                    <div class="cardwide-discount-badge">{ label.clone() }</div>
                }
                <div class="cardwide-body">
                    <div class="cardwide-content">
                        <h3 class="cardwide-title" id={title_id}>{ g.title.clone() }</h3>
                        <p class="cardwide-desc">{ g.description.clone() }</p>
                        <div class="cardwide-genre-wrap">
                            { for g.genres.iter().map(|word| html! { <span class="cardwide-genre-badge">{ word.clone() }</span> }) }
                        </div>
                        <div class="cardwide-price-block">
                            if show_old {
                                <div class="preco-antigo">{ g.old_price.clone() }</div>
                            }
                            <div class="preco-desconto">{ g.final_price.clone() }</div>
                        </div>
                    </div>
                    <span class="cardwide-sr-only" role="img" aria-label={g.alt_text.clone()}></span>
                </div>
            </article>
        </a>
    }
}
