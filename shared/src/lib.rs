pub mod class_names;
pub mod error;
pub mod link;
pub mod loading;
pub mod location;
pub mod nav_link;
pub mod patch;
pub mod spinner;
pub mod style;

pub use class_names::ClassNames;
pub use error::PropError;
pub use link::{is_external, ClickModifiers, LinkAction};
pub use loading::{is_loading, LoadingState};
pub use location::{Clock, FixedClock, LocationProvider, StaticLocation, SystemClock};
pub use nav_link::{strip_protocol, ActiveState, ClickUpdate, LinkAttrs, NavLinkProps};
pub use patch::PropPatch;
pub use spinner::{
    Overlay, PaletteColor, SpinnerColor, SpinnerElement, SpinnerLayout, SpinnerProps, SpinnerSize,
    SpinnerType, SPINNER_LABEL,
};
pub use style::StyleMap;
