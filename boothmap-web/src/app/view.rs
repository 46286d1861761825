use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::{CartPanel, FloorGrid, Footer, Header, NoticeToast};
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let desk = state.engine.desk();
    let catalog = desk.catalog();
    let currency = state.currency();

    html! {
        <>
            <Header available={desk.available_count()} total={catalog.len()} />
            <main id="main" role="main" aria-busy={(!*state.boot_ready).then_some("true")}>
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div class="booking-layout">
                    <FloorGrid
                        booths={catalog.booths().to_vec()}
                        columns={catalog.columns()}
                        currency={currency.clone()}
                        focus_idx={*state.focus_idx}
                        on_add={handlers.add.clone()}
                        on_toggle={handlers.toggle.clone()}
                        on_focus={handlers.focus.clone()}
                    />
                    <CartPanel
                        lines={desk.cart().lines().to_vec()}
                        total={desk.total()}
                        currency={currency}
                        on_remove={handlers.remove.clone()}
                        on_clear={handlers.clear.clone()}
                        on_checkout={handlers.checkout.clone()}
                    />
                </div>
                <NoticeToast
                    notice={(*state.notice).clone()}
                    on_dismiss={handlers.dismiss_notice.clone()}
                />
                <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" aria-live="polite"></div>
            </main>
            <Footer />
        </>
    }
}
