use crate::i18n::t;
use yew::prelude::*;

/// A transient message. `id` increases with every notice so a late
/// dismissal timer cannot hide a newer one.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub id: u32,
    pub text: AttrValue,
}

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeToastProps {
    pub notice: Option<Notice>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<u32>>,
}

#[function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return html! { <div id="notice" class="notice" role="status" aria-live="polite"></div> };
    };
    let dismiss_btn = props
        .on_dismiss
        .as_ref()
        .map(|cb| {
            let id = notice.id;
            let cb = cb.clone();
            let on_click = Callback::from(move |_: MouseEvent| cb.emit(id));
            html! {
                <button class="notice-dismiss" aria-label={t("notice.dismiss")} onclick={on_click}>{"✕"}</button>
            }
        })
        .unwrap_or_default();
    html! {
        <div id="notice" class="notice show" role="status" aria-live="polite">
            <span class="notice-text">{ notice.text.clone() }</span>
            { dismiss_btn }
        </div>
    }
}
