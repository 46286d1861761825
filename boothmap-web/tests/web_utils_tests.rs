use boothmap_core::CartStorage;
use boothmap_web::dom;
use boothmap_web::i18n;
use boothmap_web::storage::{WebCartStorage, WebStorageError};
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_find_the_browser() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn dom_helpers_handle_missing_window() {
    assert!(dom::window().is_none());
    assert!(dom::document().is_none());
    assert!(dom::now_ms().abs() < f64::EPSILON);
    assert!(!dom::focus_selector("[data-index='0']"));
}

#[test]
fn i18n_resolves_and_interpolates() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert_eq!(i18n::t("booth.add"), "Add Booth");
    assert_eq!(i18n::t("booth.added"), "Added");

    let mut vars = BTreeMap::new();
    vars.insert("count", "20");
    vars.insert("total", "24");
    assert_eq!(i18n::tr("header.available", Some(&vars)), "20 of 24 available");
    assert_eq!(i18n::t("missing.key"), "missing.key");
}

#[test]
fn cart_count_pluralizes() {
    let mut vars = BTreeMap::new();
    vars.insert("count", "1");
    assert_eq!(i18n::tr("cart.count", Some(&vars)), "1 booth");
    vars.insert("count", "4");
    assert_eq!(i18n::tr("cart.count", Some(&vars)), "4 booths");
}

#[test]
fn prices_render_as_whole_units_with_currency() {
    assert_eq!(i18n::fmt_price(53, "KWD"), "53 KWD");
    assert_eq!(i18n::fmt_price(0, "KWD"), "0 KWD");
    assert_eq!(i18n::fmt_price(12_345, "EUR"), "12345 EUR");
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn web_storage_is_unavailable_off_browser() {
    let storage = WebCartStorage::default();
    let err = storage.load_cart().expect_err("no localStorage on host");
    assert!(matches!(err, WebStorageError::Unavailable(_)));
    assert!(err.to_string().contains("localStorage unavailable"));
}
