use crate::i18n::{fmt_price, t, tr};
use boothmap_core::Booth;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoothTileProps {
    pub booth: Booth,
    pub index: usize,
    pub currency: AttrValue,
    /// Holder of the roving tabindex.
    #[prop_or_default]
    pub focused: bool,
    pub on_add: Callback<String>,
    pub on_focus: Callback<usize>,
}

fn aria_label(booth: &Booth, price: &str) -> String {
    let key = if booth.booked {
        "booth.aria_booked"
    } else if booth.selected {
        "booth.aria_selected"
    } else {
        "booth.aria_open"
    };
    let mut vars = BTreeMap::new();
    vars.insert("id", booth.id.as_str());
    vars.insert("price", price);
    tr(key, Some(&vars))
}

#[function_component(BoothTile)]
pub fn booth_tile(props: &BoothTileProps) -> Html {
    let booth = &props.booth;
    let price = fmt_price(u64::from(booth.price), &props.currency);
    let label = aria_label(booth, &price);

    let tabindex = if props.focused && !booth.booked {
        "0"
    } else {
        "-1"
    };

    let on_click = {
        let on_focus = props.on_focus.clone();
        let index = props.index;
        let booked = booth.booked;
        Callback::from(move |_: MouseEvent| {
            if !booked {
                on_focus.emit(index);
            }
        })
    };

    let on_add = {
        let cb = props.on_add.clone();
        let id = booth.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id.clone());
        })
    };

    let button_text = if booth.selected {
        t("booth.added")
    } else {
        t("booth.add")
    };

    html! {
        <div
            class={classes!(
                "booth",
                booth.booked.then_some("booked"),
                booth.selected.then_some("selected"),
            )}
            role="gridcell"
            data-id={booth.id.clone()}
            data-index={props.index.to_string()}
            tabindex={tabindex}
            aria-label={label}
            aria-pressed={booth.selected.to_string()}
            aria-disabled={booth.booked.then_some("true")}
            onclick={on_click}
        >
            <span class="booth-label">{ booth.id.clone() }</span>
            <span class="booth-price">{ price }</span>
            if booth.booked {
                <span class="badge booked-badge">{ t("booth.booked") }</span>
            }
            <button
                class="add-btn"
                type="button"
                tabindex="-1"
                disabled={booth.booked || booth.selected}
                onclick={on_add}
            >
                { button_text }
            </button>
        </div>
    }
}
