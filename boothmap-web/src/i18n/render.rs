//! Key lookup for the UI string table.
//!
//! Entries are either plain strings with `{var}` slots or plural objects
//! keyed by `one` / `other`, with `_` as the catch-all.
use crate::i18n::bundle::with_bundle;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

type Vars<'a> = BTreeMap<&'a str, &'a str>;

fn lookup<'a>(table: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(table, |node, part| node.get(part))
}

/// English has one singular form; everything else, zero included, is plural.
fn plural_form<'a>(forms: &'a Map<String, Value>, count: Option<&str>) -> Option<&'a str> {
    let category = match count.and_then(|raw| raw.parse::<u64>().ok()) {
        Some(1) => Some("one"),
        Some(_) => Some("other"),
        None => None,
    };
    category
        .and_then(|c| forms.get(c))
        .or_else(|| forms.get("_"))
        .and_then(Value::as_str)
}

fn fill(template: &str, vars: Option<&Vars<'_>>) -> String {
    vars.into_iter()
        .flatten()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

fn render(entry: &Value, vars: Option<&Vars<'_>>) -> Option<String> {
    let template = match entry {
        Value::String(s) => s.as_str(),
        Value::Object(forms) => {
            plural_form(forms, vars.and_then(|v| v.get("count")).copied())?
        }
        _ => return None,
    };
    Some(fill(template, vars))
}

/// Translate a key without variable substitution.
///
/// Unknown keys render as the key itself so gaps show up in the UI.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, filling `{name}` slots from `vars`.
#[must_use]
pub fn tr(key: &str, vars: Option<&BTreeMap<&str, &str>>) -> String {
    with_bundle(|bundle| lookup(&bundle.translations, key).and_then(|entry| render(entry, vars)))
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_keys_resolve() {
        let table = json!({"cart": {"title": "Your booths"}});
        assert_eq!(lookup(&table, "cart.title"), Some(&json!("Your booths")));
        assert_eq!(lookup(&table, "cart.missing"), None);
        assert_eq!(lookup(&table, "cart.title.deeper"), None);
    }

    #[test]
    fn plural_forms_follow_the_count() {
        let entry = json!({"one": "{count} booth", "_": "{count} booths"});
        let mut vars = BTreeMap::new();
        vars.insert("count", "1");
        assert_eq!(render(&entry, Some(&vars)).as_deref(), Some("1 booth"));
        vars.insert("count", "0");
        assert_eq!(render(&entry, Some(&vars)).as_deref(), Some("0 booths"));
        vars.insert("count", "7");
        assert_eq!(render(&entry, Some(&vars)).as_deref(), Some("7 booths"));
    }

    #[test]
    fn plural_entry_without_count_uses_catch_all() {
        let entry = json!({"one": "a booth", "_": "booths"});
        assert_eq!(render(&entry, None).as_deref(), Some("booths"));
        assert_eq!(render(&json!({"one": "a booth"}), None), None);
    }

    #[test]
    fn slots_are_filled_and_unknown_slots_kept() {
        let mut vars = BTreeMap::new();
        vars.insert("id", "A2");
        let entry = json!("Booth {id} is booked ({reason}).");
        assert_eq!(
            render(&entry, Some(&vars)).as_deref(),
            Some("Booth A2 is booked ({reason}).")
        );
        assert_eq!(render(&json!(42), Some(&vars)), None);
    }
}
