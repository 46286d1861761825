use crate::app::state::AppState;
use crate::i18n::tr;
use yew::prelude::*;

/// Text announced once the restored cart is on screen, if anything came back.
#[must_use]
pub fn restored_status(count: usize) -> Option<String> {
    (count > 0).then(|| {
        let count = count.to_string();
        let mut vars = std::collections::BTreeMap::new();
        vars.insert("count", count.as_str());
        tr("status.restored", Some(&vars))
    })
}

#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let restored = app_state.engine.desk().cart().len();
    let boot_ready = app_state.boot_ready.clone();

    use_effect_with((), move |()| {
        if let Some(msg) = restored_status(restored) {
            crate::a11y::set_status(&msg);
        }
        boot_ready.set(true);
        log::debug!("boothmap ready");
    });
}
