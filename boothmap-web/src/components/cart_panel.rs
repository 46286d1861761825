use crate::components::TotalTicker;
use crate::i18n::{fmt_price, t, tr};
use boothmap_core::CartLine;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CartPanelProps {
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub currency: AttrValue,
    pub on_remove: Callback<String>,
    pub on_clear: Callback<()>,
    pub on_checkout: Callback<()>,
}

fn line_label(line: &CartLine, currency: &str) -> String {
    let price = fmt_price(u64::from(line.price), currency);
    let mut vars = BTreeMap::new();
    vars.insert("id", line.id.as_str());
    vars.insert("price", price.as_str());
    tr("cart.line", Some(&vars))
}

fn booth_count_label(count: usize) -> String {
    let count = count.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("count", count.as_str());
    tr("cart.count", Some(&vars))
}

#[function_component(CartPanel)]
pub fn cart_panel(props: &CartPanelProps) -> Html {
    let empty = props.lines.is_empty();

    let items = props.lines.iter().map(|line| {
        let on_remove = {
            let cb = props.on_remove.clone();
            let id = line.id.clone();
            Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
        };
        let remove_label = {
            let mut vars = BTreeMap::new();
            vars.insert("id", line.id.as_str());
            tr("cart.remove_aria", Some(&vars))
        };
        html! {
            <li key={line.id.clone()} class="cart-line" data-id={line.id.clone()}>
                <span class="cart-line-label">{ line_label(line, &props.currency) }</span>
                <button class="remove-btn" type="button" aria-label={remove_label} onclick={on_remove}>
                    { t("cart.remove") }
                </button>
            </li>
        }
    });

    // Empty-cart buttons stay clickable so the desk can explain why nothing happened.
    let on_clear = {
        let cb = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_checkout = {
        let cb = props.on_checkout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let inactive = empty.then_some("true");

    html! {
        <aside class="panel cart-panel" role="region" aria-labelledby="cart-title">
            <header class="section-header">
                <h2 id="cart-title">{ t("cart.title") }</h2>
                <span class="cart-count">{ booth_count_label(props.lines.len()) }</span>
            </header>
            if empty {
                <p class="empty-cart">{ t("cart.empty") }</p>
            } else {
                <ul id="cart-items" class="cart-items">
                    { for items }
                </ul>
            }
            <div class="cart-total">
                <span class="label">{ t("cart.total") }</span>
                <TotalTicker total={props.total} currency={props.currency.clone()} />
            </div>
            <div class="cart-actions">
                <button
                    id="clear-cart"
                    type="button"
                    class={classes!("btn", empty.then_some("inactive"))}
                    aria-disabled={inactive}
                    onclick={on_clear}
                >
                    { t("cart.clear") }
                </button>
                <button
                    id="checkout"
                    type="button"
                    class={classes!("btn", "btn-primary", empty.then_some("inactive"))}
                    aria-disabled={inactive}
                    onclick={on_checkout}
                >
                    { t("cart.checkout") }
                </button>
            </div>
        </aside>
    }
}
