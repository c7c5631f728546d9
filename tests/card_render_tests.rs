use std::rc::Rc;

use futures::executor::block_on;
use game_cards::catalog::Catalog;
use game_cards::components::card4line_carousel::Card4LineCarouselProps;
use game_cards::components::cardwide::CardWideProps;
use game_cards::components::game_card::{GameCardProps, NOT_FOUND_TEXT};
use game_cards::components::{Card4LineCarousel, CardWide, GameCard, MissingGame};
use game_cards::model::GameView;
use yew::LocalServerRenderer;

const CATALOG: &str = r#"{
  "games": [
    {"id": "a", "titulo": "Aventura A", "preco": "59,90", "preco_com_desconto": "29,90", "desconto": "50",
     "genero": "RPG, Ação/Aventura", "descricao_curta": "Curta", "imagem_header": "img/a.jpg", "pagina_loja": "/loja/a"},
    {"id": "b", "titulo": "Bônus B", "preco": "0", "desconto": "30%", "genero": ["Indie"]},
    {"id": "c", "titulo": "<script>alert(\"x\")</script> & co", "preco": 19.9, "alt": "\"quoted\" alt"},
    {"id": "d", "titulo": "Dupla", "preco": "R$ 49,90", "preco_com_desconto": "49,90", "desconto": "15%"}
  ]
}"#;

fn view(id: &str) -> Rc<GameView> {
    let catalog = Catalog::from_json(CATALOG).expect("catalog parses");
    Rc::new(catalog.view(id).expect("game present"))
}

fn render_card(id: &str) -> String {
    block_on(LocalServerRenderer::<GameCard>::with_props(GameCardProps { game: view(id) }).render())
}

fn render_wide(id: &str) -> String {
    block_on(LocalServerRenderer::<CardWide>::with_props(CardWideProps { game: view(id) }).render())
}

#[test]
fn discounted_card_shows_badge_old_and_final_price() {
    let html = render_card("a");
    assert!(html.contains("card4line-jogo-desconto"));
    assert!(html.contains("50%"));
    assert!(html.contains("text-line-through"));
    assert!(html.contains("R$ 59,90"));
    assert!(html.contains("R$ 29,90"));
    assert!(html.contains("href=\"/loja/a\""));
    assert!(html.contains("loading=\"lazy\""));
}

#[test]
fn free_card_has_no_discount_ui() {
    let html = render_card("b");
    assert!(html.contains("Grátis"));
    assert!(!html.contains("card4line-jogo-desconto"));
    assert!(!html.contains("text-line-through"));
    assert!(!html.contains("30%"));
}

#[test]
fn equal_prices_hide_discount_even_with_desconto() {
    let html = render_card("d");
    assert!(html.contains("R$ 49,90"));
    assert!(!html.contains("15%"));
    assert!(!html.contains("text-line-through"));
}

#[test]
fn record_text_is_escaped() {
    let html = render_wide("c");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&amp; co"));
    assert!(html.contains("&quot;quoted&quot; alt"));
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(render_card("a"), render_card("a"));
    assert_eq!(render_wide("a"), render_wide("a"));
}

#[test]
fn missing_game_placeholder() {
    let html = block_on(LocalServerRenderer::<MissingGame>::new().render());
    assert!(html.contains(NOT_FOUND_TEXT));
    assert!(html.contains("text-danger"));
}

#[test]
fn carousel_marks_only_first_slide_active() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let games: Vec<Rc<GameView>> = ["a", "missing", "b"]
        .iter()
        .filter_map(|id| catalog.view(id))
        .map(Rc::new)
        .collect();
    let props = Card4LineCarouselProps {
        carousel_id: "card4lineBootstrapCarousel_0".into(),
        games,
    };
    let html = block_on(LocalServerRenderer::<Card4LineCarousel>::with_props(props).render());
    assert!(html.contains("id=\"card4lineBootstrapCarousel_0\""));
    assert!(html.contains("data-interval=\"false\""));
    assert_eq!(html.matches("card4line-carousel-item").count(), 2);
    assert_eq!(html.matches("card4line-carousel-item active").count(), 1);
    let first = html.find("Aventura A").unwrap();
    let second = html.find("Bônus B").unwrap();
    assert!(first < second);
}

#[test]
fn wide_card_discount_scenario() {
    let html = render_wide("a");
    assert!(html.contains("cardwide-discount-badge"));
    assert!(html.contains("50%"));
    assert!(html.contains("preco-antigo"));
    assert!(html.contains("R$ 59,90"));
    assert!(html.contains("preco-desconto"));
    assert!(html.contains("R$ 29,90"));
    assert!(html.contains("data-cardwide-isfree=\"0\""));
    assert!(html.contains("data-cardwide-showold=\"1\""));
    assert!(html.contains("id=\"a-title\""));
    assert!(html.contains("Curta"));
}

#[test]
fn wide_card_genre_badges() {
    let html = render_wide("a");
    assert_eq!(html.matches("cardwide-genre-badge").count(), 3);
    for word in ["RPG", "Ação", "Aventura"] {
        assert!(html.contains(&format!(">{word}<")), "{word}");
    }
}

#[test]
fn wide_card_free_scenario() {
    let html = render_wide("b");
    assert!(html.contains("data-cardwide-isfree=\"1\""));
    assert!(html.contains("data-cardwide-showold=\"0\""));
    assert!(!html.contains("preco-antigo"));
    assert!(!html.contains("cardwide-discount-badge"));
    assert!(html.contains("Grátis"));
}

#[test]
fn background_image_stays_out_of_markup() {
    let html = render_wide("a");
    assert!(!html.contains("background-image"));
    assert!(!html.contains("img/a.jpg"));
    assert!(html.contains("aria-label=\"Capa do jogo Aventura A\""));
}
