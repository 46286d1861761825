use crate::components::BoothTile;
use crate::i18n::{t, tr};
use boothmap_core::{Booth, GridNav, NavKey, is_activation_key};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FloorGridProps {
    pub booths: Vec<Booth>,
    pub columns: usize,
    pub currency: AttrValue,
    pub focus_idx: usize,
    pub on_add: Callback<String>,
    pub on_toggle: Callback<String>,
    pub on_focus: Callback<usize>,
}

/// Index of the tile the event came from, falling back to the tracked focus.
fn event_index(e: &KeyboardEvent, fallback: usize) -> usize {
    e.target_dyn_into::<web_sys::Element>()
        .and_then(|el| el.get_attribute("data-index"))
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(fallback)
}

#[function_component(FloorGrid)]
pub fn floor_grid(props: &FloorGridProps) -> Html {
    let on_keydown = {
        let booths = props.booths.clone();
        let nav = GridNav::new(props.booths.len(), props.columns);
        let focus_idx = props.focus_idx;
        let on_focus = props.on_focus.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            let from = event_index(&e, focus_idx);
            if let Some(dir) = NavKey::from_key(&key) {
                e.prevent_default();
                let focusable = |idx: usize| booths.get(idx).is_some_and(|b| !b.booked);
                if let Some(next) = nav.next_open(from, dir, focusable) {
                    on_focus.emit(next);
                    crate::dom::focus_selector(&crate::a11y::tile_selector(next));
                }
            } else if is_activation_key(&key) {
                e.prevent_default();
                if let Some(booth) = booths.get(from) {
                    on_toggle.emit(booth.id.clone());
                }
            }
        })
    };

    let columns = props.columns.max(1);
    let rows = props.booths.chunks(columns).enumerate().map(|(row, chunk)| {
        let tiles = chunk.iter().enumerate().map(|(col, booth)| {
            let index = row * columns + col;
            html! {
                <BoothTile
                    key={booth.id.clone()}
                    booth={booth.clone()}
                    index={index}
                    currency={props.currency.clone()}
                    focused={index == props.focus_idx}
                    on_add={props.on_add.clone()}
                    on_focus={props.on_focus.clone()}
                />
            }
        });
        let label = chunk.first().map_or_else(String::new, |booth| {
            let mut vars = BTreeMap::new();
            vars.insert("row", booth.id.trim_end_matches(|c: char| c.is_ascii_digit()));
            tr("grid.row", Some(&vars))
        });
        html! {
            <div class="booth-row" role="row" aria-label={label}>
                { for tiles }
            </div>
        }
    });

    html! {
        <section
            id="booth-grid"
            class="booth-grid"
            role="grid"
            aria-label={t("grid.label")}
            style={format!("--booth-columns: {columns}")}
            onkeydown={on_keydown}
        >
            { for rows }
        </section>
    }
}
