//! State of a navigation link: active-state resolution, class composition
//! and click counting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::class_names::ClassNames;
use crate::error::PropError;
use crate::loading::{is_loading, LoadingState};
use crate::location::LocationProvider;
use crate::patch::PropPatch;
use crate::style::StyleMap;

/// Properties of a navigation link as delivered by the host runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLinkProps {
    pub id: Option<String>,
    /// URL of the linked resource.
    pub href: Option<String>,
    /// `None` compares `href` against the current location.
    pub active: Option<bool>,
    pub disabled: bool,
    #[serde(rename = "className", alias = "class_name")]
    pub class_name: Option<String>,
    pub style: Option<StyleMap>,
    pub key: Option<String>,
    /// Forces (or forbids) a full page load on click. Defaults to true for
    /// absolute URLs.
    pub external_link: Option<bool>,
    pub target: Option<String>,
    /// Number of times the link has been clicked. Owned by the host.
    pub n_clicks: u64,
    /// Epoch ms at which `n_clicks` last changed, `-1` before any click.
    pub n_clicks_timestamp: i64,
    pub loading_state: Option<LoadingState>,
}

impl Default for NavLinkProps {
    fn default() -> Self {
        Self {
            id: None,
            href: None,
            active: None,
            disabled: false,
            class_name: None,
            style: None,
            key: None,
            external_link: None,
            target: None,
            n_clicks: 0,
            n_clicks_timestamp: -1,
            loading_state: None,
        }
    }
}

/// How the `active` class is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveState {
    Explicit(bool),
    Auto,
}

impl From<Option<bool>> for ActiveState {
    fn from(active: Option<bool>) -> Self {
        match active {
            Some(active) => ActiveState::Explicit(active),
            None => ActiveState::Auto,
        }
    }
}

/// Update requested when an enabled link is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickUpdate {
    pub n_clicks: u64,
    pub n_clicks_timestamp: i64,
}

impl From<ClickUpdate> for PropPatch {
    fn from(update: ClickUpdate) -> Self {
        PropPatch::new()
            .set("n_clicks", update.n_clicks)
            .set("n_clicks_timestamp", update.n_clicks_timestamp)
    }
}

/// Properties handed to the link primitive.
///
/// Click state (`n_clicks`, `n_clicks_timestamp`) and the loading record are
/// not renderable attributes and have no field here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
    #[serde(rename = "className")]
    pub class: String,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<bool>,
    /// Present only while loading.
    #[serde(
        rename = "data-dash-is-loading",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_dash_is_loading: Option<bool>,
}

/// Strips a leading `scheme://` (or a bare `//`) from `url`.
///
/// Only the protocol is removed; paths, trailing slashes and query strings
/// are left alone.
pub fn strip_protocol(url: &str) -> &str {
    if let Some((scheme, rest)) = url.split_once(':') {
        let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
        if !scheme.is_empty() && scheme.chars().all(is_word) {
            if let Some(stripped) = rest.strip_prefix("//") {
                return stripped;
            }
        }
    }
    url.strip_prefix("//").unwrap_or(url)
}

impl NavLinkProps {
    /// Parses host-supplied JSON properties and validates them.
    pub fn from_json(value: Value) -> Result<Self, PropError> {
        let props: NavLinkProps = serde_json::from_value(value)?;
        props.validate()?;
        Ok(props)
    }

    pub fn validate(&self) -> Result<(), PropError> {
        if self.n_clicks_timestamp < -1 {
            return Err(PropError::InvalidTimestamp(self.n_clicks_timestamp));
        }
        Ok(())
    }

    pub fn active_state(&self) -> ActiveState {
        self.active.into()
    }

    pub fn is_loading(&self) -> bool {
        is_loading(self.loading_state.as_ref())
    }

    /// Resolves the `active` flag.
    ///
    /// In auto mode the link is active when `href` and the current location
    /// are equal once their protocols are stripped. A missing `href` or an
    /// unknown location resolves to inactive.
    pub fn is_active<L: LocationProvider + ?Sized>(&self, location: &L) -> bool {
        match self.active_state() {
            ActiveState::Explicit(active) => active,
            ActiveState::Auto => {
                let Some(href) = self.href.as_deref() else {
                    log::debug!("nav link {:?} has no href, treating as inactive", self.id);
                    return false;
                };
                let Some(current) = location.href() else {
                    log::debug!("current location unavailable, {} is inactive", href);
                    return false;
                };
                let active = strip_protocol(href) == strip_protocol(&current);
                log::debug!("nav link {} active={} (location {})", href, active, current);
                active
            }
        }
    }

    pub fn classes<L: LocationProvider + ?Sized>(&self, location: &L) -> ClassNames {
        ClassNames::new()
            .add(self.class_name.as_deref())
            .add("nav-link")
            .add_if("active", self.is_active(location))
            .add_if("disabled", self.disabled)
    }

    pub fn class<L: LocationProvider + ?Sized>(&self, location: &L) -> String {
        self.classes(location).build()
    }

    /// Update requested by a click at `now_ms`, or `None` when disabled.
    ///
    /// The increment is computed from the counter this props value holds.
    pub fn click(&self, now_ms: i64) -> Option<ClickUpdate> {
        if self.disabled {
            log::debug!("ignoring click on disabled nav link {:?}", self.id);
            return None;
        }
        Some(ClickUpdate {
            n_clicks: self.n_clicks.saturating_add(1),
            n_clicks_timestamp: now_ms,
        })
    }

    pub fn link_attrs<L: LocationProvider + ?Sized>(&self, location: &L) -> LinkAttrs {
        LinkAttrs {
            id: self.id.clone(),
            href: self.href.clone(),
            target: self.target.clone(),
            style: self.style.clone(),
            class: self.class(location),
            disabled: self.disabled,
            external_link: self.external_link,
            data_dash_is_loading: self.is_loading().then_some(true),
        }
    }
}
