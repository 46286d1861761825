//! Running total that counts toward its new value instead of jumping.
use crate::i18n::fmt_price;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TotalTickerProps {
    pub total: u64,
    pub currency: AttrValue,
}

#[function_component(TotalTicker)]
pub fn total_ticker(props: &TotalTickerProps) -> Html {
    let shown = use_state(|| props.total);
    let pulsing = use_state(|| false);
    // Generation counter; a newer target cancels the running tween.
    let generation = use_mut_ref(|| 0_u32);

    {
        let shown = shown.clone();
        let pulsing = pulsing.clone();
        let generation = generation.clone();
        use_effect_with(props.total, move |&target| {
            #[cfg(target_arch = "wasm32")]
            animate(shown, pulsing, generation, target);
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (pulsing, generation);
                shown.set(target);
            }
        });
    }

    html! {
        <span
            id="total-price"
            class={classes!("total-price", pulsing.then_some("pulse"))}
            aria-live="off"
        >
            { fmt_price(*shown, &props.currency) }
        </span>
    }
}

#[cfg(target_arch = "wasm32")]
fn animate(
    shown: UseStateHandle<u64>,
    pulsing: UseStateHandle<bool>,
    generation: std::rc::Rc<std::cell::RefCell<u32>>,
    target: u64,
) {
    use boothmap_core::constants::{TOTAL_PULSE_MS, TOTAL_TWEEN_MS};
    use boothmap_core::interpolate_total;
    use boothmap_core::tween::progress;

    const FRAME_MS: i32 = 16;

    // Every new target cancels the running tween, even one that lands on
    // the value currently shown.
    let run = {
        let mut counter = generation.borrow_mut();
        *counter = counter.wrapping_add(1);
        *counter
    };
    let from = *shown;
    if from == target {
        shown.set(target);
        pulsing.set(false);
        return;
    }
    let duration = f64::from(TOTAL_TWEEN_MS);
    let start = crate::dom::now_ms();
    pulsing.set(false);

    wasm_bindgen_futures::spawn_local(async move {
        loop {
            if crate::dom::sleep_ms(FRAME_MS).await.is_err() || *generation.borrow() != run {
                return;
            }
            let elapsed = crate::dom::now_ms() - start;
            shown.set(interpolate_total(from, target, elapsed, duration));
            if progress(elapsed, duration) >= 1.0 {
                break;
            }
        }
        pulsing.set(true);
        let pulse = i32::try_from(TOTAL_PULSE_MS).unwrap_or(i32::MAX);
        let _ = crate::dom::sleep_ms(pulse).await;
        if *generation.borrow() == run {
            pulsing.set(false);
        }
    });
}
