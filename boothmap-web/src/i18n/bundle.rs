use serde_json::Value;
use std::cell::RefCell;

const DEFAULT_LANG: &str = "en";
const EN_STRINGS: &str = include_str!("../../static/assets/i18n/en.json");

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
}

fn load_translations(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::error!("Failed to parse UI strings: {err}");
        Value::Object(serde_json::Map::new())
    })
}

fn build_bundle(lang: &str) -> I18nBundle {
    I18nBundle {
        lang: lang.to_string(),
        translations: load_translations(EN_STRINGS),
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new(build_bundle(DEFAULT_LANG));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Set the document language
///
/// Only English strings ship today; other codes keep the English table but
/// still update `<html lang>`.
pub fn set_lang(lang: &str) {
    CURRENT.with(|cell| cell.borrow_mut().lang = lang.to_string());
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            let _ = el.set_attribute("lang", lang);
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_strings_parse() {
        let bundle = build_bundle("en");
        assert_eq!(bundle.lang, "en");
        assert!(bundle.translations.get("notice").is_some());
        assert!(bundle.translations.get("cart").is_some());
    }

    #[test]
    fn malformed_strings_fall_back_to_empty_table() {
        assert!(load_translations("{not json").as_object().is_some_and(serde_json::Map::is_empty));
    }
}
