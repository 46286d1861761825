use crate::app::state::{AppState, Engine};
use crate::components::Notice;
use crate::i18n::{fmt_price, t, tr};
use boothmap_core::{DeskChange, DeskResult};
use std::collections::BTreeMap;
use yew::prelude::*;

/// What the UI should say about a desk result: a visible notice, a
/// screen-reader status line, both, or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub notice: Option<String>,
    pub status: Option<String>,
}

impl Feedback {
    fn status(text: String) -> Self {
        Self {
            notice: None,
            status: Some(text),
        }
    }

    fn notice(text: String) -> Self {
        Self {
            notice: Some(text.clone()),
            status: Some(text),
        }
    }
}

fn booth_status(key: &str, id: &str, total: u64, currency: &str) -> String {
    let total = fmt_price(total, currency);
    let mut vars = BTreeMap::new();
    vars.insert("id", id);
    vars.insert("total", total.as_str());
    tr(key, Some(&vars))
}

fn checkout_text(count: usize, paid: u64, currency: &str) -> String {
    let count = count.to_string();
    let booths = {
        let mut vars = BTreeMap::new();
        vars.insert("count", count.as_str());
        tr("cart.count", Some(&vars))
    };
    let paid = fmt_price(paid, currency);
    let mut vars = BTreeMap::new();
    vars.insert("booths", booths.as_str());
    vars.insert("total", paid.as_str());
    tr("notice.checkout_complete", Some(&vars))
}

/// Map a desk result to user-facing text. `total` is the cart total after
/// the operation. Silent rejections (unknown ids) produce nothing.
#[must_use]
pub fn feedback_for(result: &DeskResult, total: u64, currency: &str) -> Feedback {
    match result {
        Ok(DeskChange::Added { id, .. }) => {
            Feedback::status(booth_status("status.added", id, total, currency))
        }
        Ok(DeskChange::Removed { id, .. }) => {
            Feedback::status(booth_status("status.removed", id, total, currency))
        }
        Ok(DeskChange::Cleared { .. }) => Feedback::status(t("status.cleared")),
        Ok(DeskChange::CheckedOut { count, total: paid }) => {
            Feedback::notice(checkout_text(*count, *paid, currency))
        }
        Ok(DeskChange::Unchanged) => Feedback::default(),
        Err(rejection) => rejection.notice_key().map_or_else(
            || {
                log::debug!("ignored cart request: {rejection}");
                Feedback::default()
            },
            |key| Feedback::notice(t(key)),
        ),
    }
}

/// Show `text` in the toast and the live region, then hide it after the
/// dismissal delay unless a newer notice replaced it.
pub fn show_notice(state: &AppState, text: String) {
    let id = {
        let mut seq = state.notice_seq.borrow_mut();
        *seq = seq.wrapping_add(1);
        *seq
    };
    crate::a11y::set_status(&text);
    state.notice.set(Some(Notice {
        id,
        text: AttrValue::from(text),
    }));

    #[cfg(target_arch = "wasm32")]
    {
        use boothmap_core::constants::NOTICE_DISMISS_MS;

        let notice = state.notice.clone();
        let seq = state.notice_seq.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let delay = i32::try_from(NOTICE_DISMISS_MS).unwrap_or(i32::MAX);
            if crate::dom::sleep_ms(delay).await.is_ok() && *seq.borrow() == id {
                notice.set(None);
            }
        });
    }
}

fn run_desk(state: &AppState, op: impl FnOnce(&mut Engine) -> DeskResult) {
    let mut engine = (*state.engine).clone();
    let result = op(&mut engine);
    let feedback = feedback_for(&result, engine.total(), engine.desk().catalog().currency());
    if matches!(&result, Ok(change) if change.is_mutation()) {
        state.engine.set(engine);
    }
    if let Some(text) = feedback.notice {
        show_notice(state, text);
    } else if let Some(status) = feedback.status {
        crate::a11y::set_status(&status);
    }
}

#[derive(Clone)]
pub struct AppHandlers {
    pub add: Callback<String>,
    pub remove: Callback<String>,
    pub toggle: Callback<String>,
    pub clear: Callback<()>,
    pub checkout: Callback<()>,
    pub focus: Callback<usize>,
    pub dismiss_notice: Callback<u32>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        let add = {
            let state = state.clone();
            Callback::from(move |id: String| run_desk(&state, |engine| engine.add(&id)))
        };
        let remove = {
            let state = state.clone();
            Callback::from(move |id: String| run_desk(&state, |engine| engine.remove(&id)))
        };
        let toggle = {
            let state = state.clone();
            Callback::from(move |id: String| run_desk(&state, |engine| engine.toggle(&id)))
        };
        let clear = {
            let state = state.clone();
            Callback::from(move |()| run_desk(&state, Engine::clear))
        };
        let checkout = {
            let state = state.clone();
            Callback::from(move |()| run_desk(&state, Engine::checkout))
        };
        let focus = {
            let focus_idx = state.focus_idx.clone();
            Callback::from(move |idx: usize| focus_idx.set(idx))
        };
        let dismiss_notice = {
            let notice = state.notice.clone();
            Callback::from(move |id: u32| {
                if (*notice).as_ref().is_some_and(|current| current.id == id) {
                    notice.set(None);
                }
            })
        };

        Self {
            add,
            remove,
            toggle,
            clear,
            checkout,
            focus,
            dismiss_notice,
        }
    }
}
