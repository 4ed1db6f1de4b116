//! Leptos components for Bootstrap spinners and navigation links.
//!
//! Rendering decisions live in the `shared` crate; the components here walk
//! them and wire DOM events to the host's update channel.

pub mod components;
pub mod utils;

pub use components::{Link, NavLink, Spinner};
pub use utils::{BrowserLocation, CurrentClock, CurrentLocation};
