use std::rc::Rc;

use yew::prelude::*;

use crate::model::GameView;

pub const NOT_FOUND_TEXT: &str = "Jogo não encontrado";

#[derive(Properties, PartialEq, Clone)]
pub struct GameCardProps {
    pub game: Rc<GameView>,
}

/// Card used by card4line grids and carousels.
#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let g = &props.game;
    let badge = match &g.discount_label {
        Some(label) if !g.is_free => html! {
            <span class="badge badge-success mb-2 align-self-start card4line-jogo-desconto">{ label.clone() }</span>
        },
        _ => html! {},
    };
    let old_price = if g.show_old_price() {
        html! { <span class="text-muted text-line-through mr-2 card4line-jogo-preco">{ g.old_price.clone() }</span> }
    } else {
        html! {}
    };
    html! {
        <a href={g.store_url.clone()} class="card4line-link-wrapper" aria-label={format!("Abrir página de {}", g.title)}>
            <div class="card4line-card card shadow bg-dark text-light border-0">
                <img src={g.image.clone()} alt={g.alt_text.clone()} class="card-img-top card4line-imagem" loading="lazy" />
                <div class="card-body p-3 d-flex flex-column card4line-conteudo">
                    <div class="card4line-jogo-titulo h5 font-weight-bold mb-2">{ g.title.clone() }</div>
                    { badge }
                    <div class="d-flex align-items-center card4line-jogo-precos">
                        { old_price }
                        <span class="font-weight-bold h5 mb-0 card4line-jogo-preco-desconto">{ g.final_price.clone() }</span>
                    </div>
                </div>
            </div>
        </a>
    }
}

#[function_component(MissingGame)]
pub fn missing_game() -> Html {
    html! { <div class="text-danger text-center">{ NOT_FOUND_TEXT }</div> }
}
