#![cfg(target_arch = "wasm32")]

use game_cards::menu::HamburgerMenu;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn element(id: &str) -> Element {
    let doc = web_sys::window().unwrap().document().unwrap();
    let el = doc.create_element("div").unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn trigger_opens_and_close_button_closes() {
    let trigger = element("menu-hamburger");
    let panel = element("menu-mobile-aberto");
    let close = element("menu-mobile__fechar");
    let _menu = HamburgerMenu::attach(&trigger, panel.clone(), &close, "ativo");

    trigger.unchecked_ref::<HtmlElement>().click();
    assert!(panel.class_list().contains("ativo"));
    trigger.unchecked_ref::<HtmlElement>().click();
    assert!(panel.class_list().contains("ativo"));

    close.unchecked_ref::<HtmlElement>().click();
    assert!(!panel.class_list().contains("ativo"));
}
