//! Capabilities injected into components instead of read from globals.

/// Source of the current document location.
pub trait LocationProvider {
    /// Full href of the current page, if one is available.
    fn href(&self) -> Option<String>;
}

/// Fixed location, for tests and prerendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLocation(pub String);

impl StaticLocation {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }
}

impl LocationProvider for StaticLocation {
    fn href(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl<T: LocationProvider + ?Sized> LocationProvider for &T {
    fn href(&self) -> Option<String> {
        (**self).href()
    }
}

/// Wall clock in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// System clock through chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
