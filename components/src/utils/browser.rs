//! Browser-backed capabilities and their injection points.

use std::rc::Rc;

use shared::{Clock, LocationProvider, SystemClock};
use wasm_bindgen::JsValue;

/// `window.location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl LocationProvider for BrowserLocation {
    fn href(&self) -> Option<String> {
        web_sys::window().and_then(|window| window.location().href().ok())
    }
}

/// Location provider handed to components, as a prop or through context.
#[derive(Clone)]
pub struct CurrentLocation(pub Rc<dyn LocationProvider>);

impl CurrentLocation {
    pub fn new(provider: impl LocationProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn browser() -> Self {
        Self::new(BrowserLocation)
    }

    pub fn href(&self) -> Option<String> {
        self.0.href()
    }
}

impl Default for CurrentLocation {
    fn default() -> Self {
        Self::browser()
    }
}

/// Clock handed to components, as a prop or through context.
#[derive(Clone)]
pub struct CurrentClock(pub Rc<dyn Clock>);

impl CurrentClock {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Rc::new(clock))
    }

    pub fn now_ms(&self) -> i64 {
        self.0.now_ms()
    }
}

impl Default for CurrentClock {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

/// Navigates to `href` without a reload and tells routers about it.
pub fn push_history(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let pushed = window
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(href)));
    if let Err(err) = pushed {
        log::warn!("failed to push history state for {}: {:?}", href, err);
        return;
    }

    match web_sys::PopStateEvent::new("popstate") {
        Ok(event) => {
            if let Err(err) = window.dispatch_event(&event) {
                log::warn!("failed to dispatch popstate: {:?}", err);
            }
        }
        Err(err) => log::warn!("failed to create popstate event: {:?}", err),
    }

    window.scroll_to_with_x_and_y(0.0, 0.0);
}
