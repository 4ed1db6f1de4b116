//! Spinner layout computation.
//!
//! A spinner is either rendered on its own (optionally as a fullscreen
//! overlay) or wraps children and covers them while they load.
//! [`SpinnerProps::layout`] turns the properties into a [`SpinnerLayout`]
//! that the rendering layer only has to walk.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::class_names::ClassNames;
use crate::error::PropError;
use crate::loading::{is_loading, LoadingState};
use crate::style::StyleMap;

/// Accessible label read out while the spinner is shown.
pub const SPINNER_LABEL: &str = "Loading...";

/// Properties that are consumed by the component and never forwarded.
const INTERNAL_PROPS: &[&str] = &["setProps", "children"];

// ============================================================================
// Colors
// ============================================================================

/// Contextual colors understood by the style system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Primary,
    Light,
    Dark,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Body,
    Muted,
    Black50,
    White50,
    White,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 13] = [
        PaletteColor::Primary,
        PaletteColor::Light,
        PaletteColor::Dark,
        PaletteColor::Secondary,
        PaletteColor::Success,
        PaletteColor::Warning,
        PaletteColor::Danger,
        PaletteColor::Info,
        PaletteColor::Body,
        PaletteColor::Muted,
        PaletteColor::Black50,
        PaletteColor::White50,
        PaletteColor::White,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteColor::Primary => "primary",
            PaletteColor::Light => "light",
            PaletteColor::Dark => "dark",
            PaletteColor::Secondary => "secondary",
            PaletteColor::Success => "success",
            PaletteColor::Warning => "warning",
            PaletteColor::Danger => "danger",
            PaletteColor::Info => "info",
            PaletteColor::Body => "body",
            PaletteColor::Muted => "muted",
            PaletteColor::Black50 => "black-50",
            PaletteColor::White50 => "white-50",
            PaletteColor::White => "white",
        }
    }

    /// Text color utility class, e.g. `text-primary`.
    pub fn class(&self) -> String {
        format!("text-{}", self.as_str())
    }
}

impl FromStr for PaletteColor {
    type Err = ();

    // Palette tokens are case sensitive; `Primary` is a literal CSS color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteColor::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// Spinner color: a palette token or any CSS color value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpinnerColor {
    Palette(PaletteColor),
    Literal(String),
}

impl SpinnerColor {
    pub fn parse(color: &str) -> Self {
        match color.parse::<PaletteColor>() {
            Ok(palette) => SpinnerColor::Palette(palette),
            Err(()) => SpinnerColor::Literal(color.to_string()),
        }
    }

    pub fn palette(&self) -> Option<PaletteColor> {
        match self {
            SpinnerColor::Palette(p) => Some(*p),
            SpinnerColor::Literal(_) => None,
        }
    }

    /// Value for the `color` style property, if this is not a palette token.
    pub fn literal(&self) -> Option<&str> {
        match self {
            SpinnerColor::Literal(c) if !c.is_empty() => Some(c),
            _ => None,
        }
    }
}

impl From<String> for SpinnerColor {
    fn from(color: String) -> Self {
        SpinnerColor::parse(&color)
    }
}

impl From<&str> for SpinnerColor {
    fn from(color: &str) -> Self {
        SpinnerColor::parse(color)
    }
}

impl From<SpinnerColor> for String {
    fn from(color: SpinnerColor) -> Self {
        match color {
            SpinnerColor::Palette(p) => p.as_str().to_string(),
            SpinnerColor::Literal(c) => c,
        }
    }
}

// ============================================================================
// Type and size
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerType {
    #[default]
    Border,
    Grow,
}

impl SpinnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinnerType::Border => "border",
            SpinnerType::Grow => "grow",
        }
    }
}

impl FromStr for SpinnerType {
    type Err = PropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "border" => Ok(SpinnerType::Border),
            "grow" => Ok(SpinnerType::Grow),
            _ => Err(PropError::UnknownSpinnerType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerSize {
    Sm,
    Md,
    Lg,
}

impl SpinnerSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinnerSize::Sm => "sm",
            SpinnerSize::Md => "md",
            SpinnerSize::Lg => "lg",
        }
    }
}

impl FromStr for SpinnerSize {
    type Err = PropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sm" => Ok(SpinnerSize::Sm),
            "md" => Ok(SpinnerSize::Md),
            "lg" => Ok(SpinnerSize::Lg),
            _ => Err(PropError::UnknownSpinnerSize(s.to_string())),
        }
    }
}

// ============================================================================
// Lenient field parsing
// ============================================================================

// Malformed spinner props degrade to defaults instead of failing the whole set.

fn lenient_color<'de, D: Deserializer<'de>>(d: D) -> Result<Option<SpinnerColor>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(color) => Some(SpinnerColor::parse(&color)),
        Value::Null => None,
        other => {
            log::warn!("ignoring spinner color {}, expected a string", other);
            None
        }
    })
}

fn lenient_type<'de, D: Deserializer<'de>>(d: D) -> Result<SpinnerType, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(kind) => kind.parse().unwrap_or_else(|err: PropError| {
            log::warn!("{}, using border", err);
            SpinnerType::default()
        }),
        Value::Null => SpinnerType::default(),
        other => {
            log::warn!("ignoring spinner type {}, using border", other);
            SpinnerType::default()
        }
    })
}

fn lenient_size<'de, D: Deserializer<'de>>(d: D) -> Result<Option<SpinnerSize>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(size) => size
            .parse()
            .map_err(|err: PropError| log::warn!("{}, using default size", err))
            .ok(),
        Value::Null => None,
        other => {
            log::warn!("ignoring spinner size {}, using default size", other);
            None
        }
    })
}

// ============================================================================
// Props
// ============================================================================

/// Properties of a spinner as delivered by the host runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerProps {
    pub id: Option<String>,
    /// Palette token or CSS color. Defaults to the text color.
    #[serde(deserialize_with = "lenient_color")]
    pub color: Option<SpinnerColor>,
    #[serde(
        rename = "type",
        alias = "spinner_type",
        deserialize_with = "lenient_type"
    )]
    pub spinner_type: SpinnerType,
    #[serde(deserialize_with = "lenient_size")]
    pub size: Option<SpinnerSize>,
    /// Inline styles applied to the spinner itself.
    pub spinner_style: Option<StyleMap>,
    /// Overrides for the fullscreen container.
    pub fullscreen_style: Option<StyleMap>,
    #[serde(rename = "spinnerClassName", alias = "spinner_class_name")]
    pub spinner_class_name: Option<String>,
    #[serde(rename = "fullscreenClassName", alias = "fullscreen_class_name")]
    pub fullscreen_class_name: Option<String>,
    pub fullscreen: bool,
    pub loading_state: Option<LoadingState>,
    /// Remaining attributes, forwarded to the spinner element.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The spinner element itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerElement {
    pub id: Option<String>,
    pub class: String,
    pub style: StyleMap,
    /// Extra attributes as (name, value) pairs.
    pub attrs: Vec<(String, String)>,
}

/// Covering layer shown over children while they load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub class: Option<String>,
    pub style: StyleMap,
    pub spinner: SpinnerElement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerLayout {
    /// Just the spinner.
    Standalone(SpinnerElement),
    /// The spinner centered in a fixed full-viewport container.
    Fullscreen {
        class: Option<String>,
        style: StyleMap,
        spinner: SpinnerElement,
    },
    /// Children in a wrapper, covered by `overlay` while loading.
    Wrapped {
        wrapper_style: StyleMap,
        overlay: Option<Overlay>,
    },
}

impl SpinnerLayout {
    pub fn overlay(&self) -> Option<&Overlay> {
        match self {
            SpinnerLayout::Wrapped { overlay, .. } => overlay.as_ref(),
            _ => None,
        }
    }
}

fn fullscreen_style() -> StyleMap {
    StyleMap::new()
        .with("position", "fixed")
        .with("width", "100vw")
        .with("height", "100vh")
        .with("top", "0")
        .with("left", "0")
        .with("background-color", "white")
        .with("display", "flex")
        .with("justify-content", "center")
        .with("align-items", "center")
        .with("z-index", "99")
        .with("visibility", "visible")
}

fn covering_style() -> StyleMap {
    StyleMap::new()
        .with("visibility", "visible")
        .with("position", "absolute")
        .with("top", "0")
        .with("height", "100%")
        .with("width", "100%")
        .with("display", "flex")
        .with("justify-content", "center")
        .with("align-items", "center")
}

fn hidden_style() -> StyleMap {
    StyleMap::new()
        .with("visibility", "hidden")
        .with("position", "relative")
}

fn overlay_spinner_style() -> StyleMap {
    StyleMap::new()
        .with("display", "block")
        .with("margin", "1rem auto")
}

fn attr_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some(String::new()),
        Value::Bool(false) | Value::Null => None,
        // Structured values have no attribute form.
        Value::Array(_) | Value::Object(_) => None,
    }
}

impl SpinnerProps {
    /// Parses host-supplied JSON properties, dropping internal entries.
    pub fn from_json(value: Value) -> Result<Self, PropError> {
        let mut props: SpinnerProps = serde_json::from_value(value)?;
        props.extra.retain(|k, _| !INTERNAL_PROPS.contains(&k.as_str()));
        Ok(props)
    }

    pub fn is_loading(&self) -> bool {
        is_loading(self.loading_state.as_ref())
    }

    /// Attributes forwarded to the spinner element.
    pub fn forwarded_attrs(&self) -> Vec<(String, String)> {
        self.extra
            .iter()
            .filter(|(k, _)| !INTERNAL_PROPS.contains(&k.as_str()))
            .filter_map(|(k, v)| attr_value(v).map(|v| (k.clone(), v)))
            .collect()
    }

    pub fn spinner_class(&self) -> String {
        let kind = self.spinner_type.as_str();
        let size = self
            .size
            .filter(|s| *s != SpinnerSize::Md)
            .map(|s| format!("spinner-{}-{}", kind, s.as_str()));
        let color = self
            .color
            .as_ref()
            .and_then(SpinnerColor::palette)
            .map(|p| p.class());

        ClassNames::new()
            .add(self.spinner_class_name.as_deref())
            .add(format!("spinner-{}", kind).as_str())
            .add(size.as_deref())
            .add(color.as_deref())
            .build()
    }

    /// Builds the spinner element with `style` applied after the literal color.
    pub fn spinner(&self, style: Option<&StyleMap>) -> SpinnerElement {
        let mut base = StyleMap::new();
        if let Some(literal) = self.color.as_ref().and_then(SpinnerColor::literal) {
            base.set("color", literal);
        }
        SpinnerElement {
            id: self.id.clone(),
            class: self.spinner_class(),
            style: base.merged(style),
            attrs: self.forwarded_attrs(),
        }
    }

    /// Decides what gets rendered.
    pub fn layout(&self, has_children: bool) -> SpinnerLayout {
        if has_children {
            let overlay = self.is_loading().then(|| {
                let spinner_style = overlay_spinner_style().merged(self.spinner_style.as_ref());
                let (class, style) = if self.fullscreen {
                    (
                        self.fullscreen_class_name.clone(),
                        fullscreen_style().merged(self.fullscreen_style.as_ref()),
                    )
                } else {
                    (None, covering_style())
                };
                Overlay {
                    class,
                    style,
                    spinner: self.spinner(Some(&spinner_style)),
                }
            });
            let wrapper_style = if overlay.is_some() {
                hidden_style()
            } else {
                StyleMap::new()
            };
            return SpinnerLayout::Wrapped {
                wrapper_style,
                overlay,
            };
        }

        let spinner = self.spinner(self.spinner_style.as_ref());
        if self.fullscreen {
            SpinnerLayout::Fullscreen {
                class: self.fullscreen_class_name.clone(),
                style: fullscreen_style().merged(self.fullscreen_style.as_ref()),
                spinner,
            }
        } else {
            SpinnerLayout::Standalone(spinner)
        }
    }
}
