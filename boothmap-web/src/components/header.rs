use crate::i18n::{t, tr};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub available: usize,
    pub total: usize,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let count = p.available.to_string();
    let total = p.total.to_string();
    let availability = tr(
        "header.available",
        Some(&{
            let mut vars = std::collections::BTreeMap::new();
            vars.insert("count", count.as_str());
            vars.insert("total", total.as_str());
            vars
        }),
    );
    html! {
        <header role="banner">
            <div class="header-content">
                <div class="header-left">
                    <h1 class="app-title">{ t("app.title") }</h1>
                    <p class="app-subtitle">{ t("app.subtitle") }</p>
                </div>
                <div class="header-right">
                    <span class="availability" aria-live="polite">{ availability }</span>
                </div>
            </div>
        </header>
    }
}
