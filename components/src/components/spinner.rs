use leptos::*;
use shared::{
    LoadingState, Overlay, SpinnerColor, SpinnerElement, SpinnerLayout, SpinnerSize,
    SpinnerType, StyleMap, SPINNER_LABEL,
};

fn style_attr(style: &StyleMap) -> Option<String> {
    (!style.is_empty()).then(|| style.to_css())
}

fn spinner_view(spinner: SpinnerElement) -> View {
    let mut el = html::div()
        .attr("role", "status")
        .attr("id", spinner.id)
        .attr("class", spinner.class)
        .attr("style", style_attr(&spinner.style));
    for (name, value) in spinner.attrs {
        el = el.attr(name, value);
    }
    el.child(view! { <span class="visually-hidden">{SPINNER_LABEL}</span> })
        .into_view()
}

fn overlay_view(overlay: Overlay) -> View {
    view! {
        <div class=overlay.class style=style_attr(&overlay.style)>
            {spinner_view(overlay.spinner)}
        </div>
    }
    .into_view()
}

/// Bootstrap style loading spinner rendered with CSS only.
///
/// Without children it renders just the spinner, optionally in a fullscreen
/// overlay. With children it renders them and covers them with the spinner
/// while `loading_state` reports loading.
#[component]
pub fn Spinner(
    #[prop(optional, into)] id: MaybeProp<String>,
    /// Palette token (`primary`, `white-50`, ...) or any CSS color.
    #[prop(optional, into)]
    color: MaybeProp<String>,
    #[prop(optional, into)] spinner_type: MaybeSignal<SpinnerType>,
    #[prop(optional, into)] size: MaybeProp<SpinnerSize>,
    #[prop(optional, into)] spinner_style: MaybeProp<StyleMap>,
    #[prop(optional, into)] fullscreen_style: MaybeProp<StyleMap>,
    #[prop(optional, into)] spinner_class: MaybeProp<String>,
    #[prop(optional, into)] fullscreen_class: MaybeProp<String>,
    #[prop(optional, into)] fullscreen: MaybeSignal<bool>,
    #[prop(optional, into)] loading_state: MaybeSignal<Option<LoadingState>>,
    /// Extra attributes for the spinner element.
    #[prop(optional)]
    attrs: Vec<(String, String)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let has_children = children.is_some();

    let layout = create_memo(move |_| {
        let props = shared::SpinnerProps {
            id: id.get(),
            color: color.get().map(SpinnerColor::from),
            spinner_type: spinner_type.get(),
            size: size.get(),
            spinner_style: spinner_style.get(),
            fullscreen_style: fullscreen_style.get(),
            spinner_class_name: spinner_class.get(),
            fullscreen_class_name: fullscreen_class.get(),
            fullscreen: fullscreen.get(),
            loading_state: loading_state.get(),
            extra: attrs
                .iter()
                .map(|(name, value)| (name.clone(), value.clone().into()))
                .collect(),
        };
        log::debug!("spinner {:?} loading={}", props.id, props.is_loading());
        props.layout(has_children)
    });

    let Some(children) = children else {
        return (move || match layout.get() {
            SpinnerLayout::Fullscreen {
                class,
                style,
                spinner,
            } => view! {
                <div class=class style=style_attr(&style)>
                    {spinner_view(spinner)}
                </div>
            }
            .into_view(),
            SpinnerLayout::Standalone(spinner) => spinner_view(spinner),
            SpinnerLayout::Wrapped { .. } => ().into_view(),
        })
        .into_view();
    };

    let wrapper_style = move || {
        layout.with(|layout| match layout {
            SpinnerLayout::Wrapped { wrapper_style, .. } => style_attr(wrapper_style),
            _ => None,
        })
    };
    let overlay = move || layout.with(|layout| layout.overlay().cloned().map(overlay_view));

    view! {
        <div style=wrapper_style>
            {children()}
            {overlay}
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> web_sys::HtmlElement {
        let parent = document()
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document().body().unwrap().append_child(&parent).unwrap();
        parent
    }

    #[wasm_bindgen_test]
    fn test_standalone_palette_spinner() {
        let parent = container();
        mount_to(parent.clone(), || {
            view! { <Spinner color="primary" size=SpinnerSize::Sm /> }
        });

        let spinner = parent.query_selector("[role=status]").unwrap().unwrap();
        assert_eq!(
            spinner.class_name(),
            "spinner-border spinner-border-sm text-primary"
        );
        assert!(spinner.get_attribute("style").is_none());
        assert_eq!(spinner.text_content().as_deref(), Some(SPINNER_LABEL));
    }

    #[wasm_bindgen_test]
    fn test_literal_color_is_styled() {
        let parent = container();
        mount_to(parent.clone(), || view! { <Spinner color="#ff8800" /> });

        let spinner = parent.query_selector("[role=status]").unwrap().unwrap();
        assert_eq!(spinner.class_name(), "spinner-border");
        assert_eq!(
            spinner.get_attribute("style").as_deref(),
            Some("color: #ff8800;")
        );
    }

    #[wasm_bindgen_test]
    fn test_attrs_reach_spinner_element() {
        let parent = container();
        mount_to(parent.clone(), || {
            let attrs = vec![
                ("title".to_string(), "Busy".to_string()),
                ("data-testid".to_string(), "main-spinner".to_string()),
            ];
            view! { <Spinner id="busy" attrs=attrs /> }
        });

        let spinner = parent.query_selector("[role=status]").unwrap().unwrap();
        assert_eq!(spinner.id(), "busy");
        assert_eq!(spinner.get_attribute("title").as_deref(), Some("Busy"));
        assert_eq!(
            spinner.get_attribute("data-testid").as_deref(),
            Some("main-spinner")
        );
    }

    #[wasm_bindgen_test]
    fn test_color_follows_signal() {
        let parent = container();
        let setter = Rc::new(Cell::new(None));
        let setter_slot = setter.clone();
        mount_to(parent.clone(), move || {
            let (color, set_color) = create_signal(Some("primary".to_string()));
            setter_slot.set(Some(set_color));
            view! { <Spinner color=color /> }
        });

        let spinner = parent.query_selector("[role=status]").unwrap().unwrap();
        assert_eq!(spinner.class_name(), "spinner-border text-primary");

        let set_color = setter.get().unwrap();
        set_color.set(Some("#ff8800".to_string()));
        let spinner = parent.query_selector("[role=status]").unwrap().unwrap();
        assert_eq!(spinner.class_name(), "spinner-border");
        assert_eq!(
            spinner.get_attribute("style").as_deref(),
            Some("color: #ff8800;")
        );
    }

    #[wasm_bindgen_test]
    fn test_fullscreen_container() {
        let parent = container();
        mount_to(parent.clone(), || {
            view! { <Spinner fullscreen=true fullscreen_class="backdrop" /> }
        });

        let backdrop = parent.query_selector(".backdrop").unwrap().unwrap();
        let style = backdrop.get_attribute("style").unwrap();
        assert!(style.contains("position: fixed;"));
        assert!(style.contains("width: 100vw;"));
        assert!(backdrop.query_selector("[role=status]").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    fn test_overlay_follows_loading_signal() {
        let parent = container();
        let setter = Rc::new(Cell::new(None));
        let setter_slot = setter.clone();
        mount_to(parent.clone(), move || {
            let (loading, set_loading) = create_signal(None::<LoadingState>);
            setter_slot.set(Some(set_loading));
            view! {
                <Spinner loading_state=loading>
                    <p id="content">"Content"</p>
                </Spinner>
            }
        });

        assert!(parent.query_selector("#content").unwrap().is_some());
        assert!(parent.query_selector("[role=status]").unwrap().is_none());

        let set_loading = setter.get().unwrap();
        set_loading.set(Some(LoadingState::loading()));
        let spinner = parent.query_selector("[role=status]").unwrap().unwrap();
        assert_eq!(
            spinner.get_attribute("style").as_deref(),
            Some("display: block; margin: 1rem auto;")
        );
        let wrapper = parent.first_element_child().unwrap();
        assert_eq!(
            wrapper.get_attribute("style").as_deref(),
            Some("visibility: hidden; position: relative;")
        );

        set_loading.set(Some(LoadingState::default()));
        assert!(parent.query_selector("[role=status]").unwrap().is_none());
    }
}
