use leptos::*;
use shared::{ClickModifiers, LinkAction, LinkAttrs};

use crate::utils::push_history;

/// Anchor primitive used by navigation components.
///
/// Internal links navigate through the history API; external links (absolute
/// URLs, or `external_link = true`) are left to the browser. `pre_on_click`
/// runs before navigation on every click that is not blocked by `disabled`.
#[component]
pub fn Link(
    #[prop(into)] attrs: Signal<LinkAttrs>,
    #[prop(optional)] pre_on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: ev::MouseEvent| {
        let modifiers = ClickModifiers {
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
            button: ev.button(),
        };
        let action = attrs.with_untracked(|a| {
            LinkAction::decide(a.href.as_deref(), a.disabled, a.external_link, modifiers)
        });

        if action.prevents_default() {
            ev.prevent_default();
        }
        if action.runs_hook() {
            if let Some(hook) = pre_on_click {
                hook.call(());
            }
        }
        if let LinkAction::Internal { href } = action {
            push_history(&href);
        }
    };

    let style = move || {
        attrs.with(|a| {
            a.style
                .as_ref()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_css())
        })
    };

    view! {
        <a
            id=move || attrs.with(|a| a.id.clone())
            href=move || attrs.with(|a| a.href.clone())
            target=move || attrs.with(|a| a.target.clone())
            class=move || attrs.with(|a| a.class.clone())
            style=style
            aria-disabled=move || attrs.with(|a| a.disabled.then_some("true"))
            data-dash-is-loading=move || {
                attrs.with(|a| a.data_dash_is_loading.filter(|l| *l).map(|_| "true"))
            }
            on:click=on_click
        >
            {children()}
        </a>
    }
}
