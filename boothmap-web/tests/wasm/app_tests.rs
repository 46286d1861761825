#![cfg(target_arch = "wasm32")]

use boothmap_core::constants::CART_STORAGE_KEY;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::Renderer;

use boothmap_web::app::App;
use boothmap_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        let _ = root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app(saved: Option<&str>) {
    let storage = dom::local_storage().expect("localStorage");
    match saved {
        Some(raw) => storage.set_item(CART_STORAGE_KEY, raw).expect("seed cart"),
        None => storage.remove_item(CART_STORAGE_KEY).expect("clear cart"),
    }
    boothmap_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle(20).await;
}

async fn settle(ms: i32) {
    dom::sleep_ms(ms).await.expect("timer");
}

fn element(selector: &str) -> HtmlElement {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} exists"))
        .dyn_into()
        .expect("html element")
}

fn text(selector: &str) -> String {
    element(selector).text_content().unwrap_or_default()
}

fn press(target: &HtmlElement, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
    target.dispatch_event(&event).expect("dispatch");
}

#[wasm_bindgen_test]
async fn main_landmark_and_live_region_exist() {
    render_app(None).await;
    let main = element("#main");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(main.get_attribute("role").unwrap_or_default(), "main");
    assert!(element("#booth-status").class_list().contains("sr-only"));
    let tiles = dom::document()
        .expect("document")
        .query_selector_all("[role='gridcell']")
        .expect("tiles");
    assert_eq!(tiles.length(), 24);
}

#[wasm_bindgen_test]
async fn adding_a_booth_updates_cart_total_and_storage() {
    render_app(None).await;
    element("[data-id='A1'] .add-btn").click();
    settle(500).await;

    assert!(text("#cart-items").contains("A1"));
    assert_eq!(text("#total-price"), "53 KWD");
    assert_eq!(text("[data-id='A1'] .add-btn"), "Added");
    let saved = dom::local_storage()
        .expect("localStorage")
        .get_item(CART_STORAGE_KEY)
        .expect("read")
        .unwrap_or_default();
    assert!(saved.contains("\"A1\""));
}

#[wasm_bindgen_test]
async fn saved_cart_is_restored_on_load() {
    render_app(Some(r#"[{"id":"B1","price":58},{"id":"A2","price":56}]"#)).await;
    assert!(text("#cart-items").contains("B1"));
    assert!(!text("#cart-items").contains("A2"));
    assert_eq!(text("#total-price"), "58 KWD");
}

#[wasm_bindgen_test]
async fn clearing_an_empty_cart_raises_a_notice() {
    render_app(None).await;
    element("#clear-cart").click();
    settle(20).await;
    assert_eq!(text("#notice .notice-text"), "Cart is already empty.");
    assert_eq!(text("#booth-status"), "Cart is already empty.");
}

#[wasm_bindgen_test]
async fn arrow_keys_skip_booked_booths() {
    render_app(None).await;
    let a1 = element("[data-id='A1']");
    a1.focus().expect("focus A1");
    press(&a1, "ArrowRight");
    settle(20).await;
    let active = dom::document()
        .expect("document")
        .active_element()
        .and_then(|el| el.get_attribute("data-id"));
    assert_eq!(active.as_deref(), Some("A3"));
    assert_eq!(
        element("[data-id='A3']").get_attribute("tabindex").as_deref(),
        Some("0")
    );
}

#[wasm_bindgen_test]
async fn enter_toggles_the_focused_booth() {
    render_app(None).await;
    let b1 = element("[data-id='B1']");
    b1.focus().expect("focus B1");
    press(&b1, "Enter");
    settle(500).await;
    assert_eq!(text("#total-price"), "58 KWD");
    press(&element("[data-id='B1']"), " ");
    settle(500).await;
    assert_eq!(text("#total-price"), "0 KWD");
}

#[wasm_bindgen_test]
async fn quick_add_then_remove_settles_on_the_real_total() {
    render_app(None).await;
    element("[data-id='A1'] .add-btn").click();
    // Let the cart render, but stay inside the first tween frame.
    settle(0).await;
    element("#cart-items .remove-btn").click();
    settle(500).await;
    assert_eq!(text("#total-price"), "0 KWD");
    assert!(text(".empty-cart").contains("No booths selected"));
}

#[wasm_bindgen_test]
async fn total_pulses_once_the_count_finishes() {
    render_app(None).await;
    element("[data-id='B1'] .add-btn").click();
    settle(50).await;
    assert!(!element("#total-price").class_list().contains("pulse"));
    settle(400).await;
    assert_eq!(text("#total-price"), "58 KWD");
    assert!(element("#total-price").class_list().contains("pulse"));
    settle(400).await;
    assert!(!element("#total-price").class_list().contains("pulse"));
}
