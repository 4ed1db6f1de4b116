use leptos::*;
use shared::{LoadingState, PropPatch, StyleMap};

use crate::components::link::Link;
use crate::utils::{CurrentClock, CurrentLocation};

/// Link inside a `Nav`, counting clicks into the host's state.
///
/// With `active` unset the link marks itself active when its `href` matches
/// the current location, ignoring the protocol. The location comes from the
/// `location` prop, then a `CurrentLocation` context, then the browser.
///
/// Every enabled click sends `{n_clicks: n_clicks + 1, n_clicks_timestamp: now}`
/// through `set_props`. Without `set_props` clicks only navigate.
#[component]
pub fn NavLink(
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] href: MaybeProp<String>,
    #[prop(optional, into)] active: MaybeSignal<Option<bool>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] style: MaybeProp<StyleMap>,
    /// Force a full page load (`true`) or history navigation (`false`).
    #[prop(optional, into)]
    external_link: MaybeProp<bool>,
    #[prop(optional, into)] target: MaybeProp<String>,
    #[prop(optional, into)] n_clicks: MaybeSignal<u64>,
    #[prop(optional, into)] loading_state: MaybeSignal<Option<LoadingState>>,
    #[prop(optional)] set_props: Option<Callback<PropPatch>>,
    #[prop(optional)] location: Option<CurrentLocation>,
    #[prop(optional)] clock: Option<CurrentClock>,
    children: Children,
) -> impl IntoView {
    let location = location
        .or_else(use_context::<CurrentLocation>)
        .unwrap_or_default();
    let clock = clock
        .or_else(use_context::<CurrentClock>)
        .unwrap_or_default();

    let props = Signal::derive(move || shared::NavLinkProps {
        id: id.get(),
        href: href.get(),
        active: active.get(),
        disabled: disabled.get(),
        class_name: class.get(),
        style: style.get(),
        external_link: external_link.get(),
        target: target.get(),
        n_clicks: n_clicks.get(),
        loading_state: loading_state.get(),
        ..shared::NavLinkProps::default()
    });

    let attrs = Signal::derive(move || props.with(|p| p.link_attrs(location.0.as_ref())));

    let increment_clicks = Callback::new(move |_: ()| {
        let Some(set_props) = set_props else {
            return;
        };
        if let Some(update) = props.with_untracked(|p| p.click(clock.now_ms())) {
            log::debug!("nav link clicked, n_clicks={}", update.n_clicks);
            set_props.call(update.into());
        }
    });

    view! {
        <Link attrs=attrs pre_on_click=increment_clicks>
            {children()}
        </Link>
    }
}
