pub mod browser;

pub use browser::{push_history, BrowserLocation, CurrentClock, CurrentLocation};
