//! Click semantics of the link primitive used by navigation components.

/// True for `scheme://host` and protocol-relative `//host` URLs.
pub fn is_absolute_url(href: &str) -> bool {
    if href.starts_with("//") {
        return true;
    }
    match href.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Whether a click should leave the single-page app.
///
/// An explicit `external_link` wins; otherwise absolute URLs are external.
pub fn is_external(href: Option<&str>, external_link: Option<bool>) -> bool {
    match external_link {
        Some(external) => external,
        None => href.is_some_and(is_absolute_url),
    }
}

/// Keyboard and mouse state of a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    /// `MouseEvent.button`; 0 is the primary button.
    pub button: i16,
}

impl ClickModifiers {
    pub fn any(&self) -> bool {
        self.ctrl || self.meta || self.shift || self.alt || self.button != 0
    }
}

/// What the link does with a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Disabled: suppress the default action and skip the pre-click hook.
    Blocked,
    /// Let the browser handle the click (new tab, download, ...).
    Browser,
    /// Full navigation to another document.
    External,
    /// Push `href` onto the history stack without reloading.
    Internal { href: String },
}

impl LinkAction {
    pub fn decide(
        href: Option<&str>,
        disabled: bool,
        external_link: Option<bool>,
        modifiers: ClickModifiers,
    ) -> Self {
        if disabled {
            return LinkAction::Blocked;
        }
        if modifiers.any() {
            return LinkAction::Browser;
        }
        match href {
            Some(href) if !is_external(Some(href), external_link) => LinkAction::Internal {
                href: href.to_string(),
            },
            Some(_) => LinkAction::External,
            // No target to navigate to; only the hook matters.
            None => LinkAction::Browser,
        }
    }

    /// Whether the pre-click hook runs for this action.
    pub fn runs_hook(&self) -> bool {
        !matches!(self, LinkAction::Blocked)
    }

    /// Whether the browser's default navigation must be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, LinkAction::Blocked | LinkAction::Internal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com"));
        assert!(is_absolute_url("//cdn.example.com/x.js"));
        assert!(is_absolute_url("git+ssh://host/repo"));
        assert!(!is_absolute_url("/page-1"));
        assert!(!is_absolute_url("page-1?q=http://x"));
        assert!(!is_absolute_url("mailto:someone@example.com"));
    }

    #[test]
    fn test_external_link_override() {
        assert!(is_external(Some("https://example.com"), None));
        assert!(!is_external(Some("https://example.com"), Some(false)));
        assert!(is_external(Some("/local"), Some(true)));
        assert!(!is_external(Some("/local"), None));
        assert!(!is_external(None, None));
    }

    #[test]
    fn test_disabled_link_is_blocked() {
        let action = LinkAction::decide(Some("/a"), true, None, ClickModifiers::default());
        assert_eq!(action, LinkAction::Blocked);
        assert!(!action.runs_hook());
        assert!(action.prevents_default());
    }

    #[test]
    fn test_internal_and_external_navigation() {
        let internal = LinkAction::decide(Some("/a"), false, None, ClickModifiers::default());
        assert_eq!(
            internal,
            LinkAction::Internal {
                href: "/a".to_string()
            }
        );
        assert!(internal.runs_hook());
        assert!(internal.prevents_default());

        let external = LinkAction::decide(
            Some("https://example.com"),
            false,
            None,
            ClickModifiers::default(),
        );
        assert_eq!(external, LinkAction::External);
        assert!(external.runs_hook());
        assert!(!external.prevents_default());
    }

    #[test]
    fn test_modified_click_goes_to_browser() {
        let modifiers = ClickModifiers {
            ctrl: true,
            ..ClickModifiers::default()
        };
        let action = LinkAction::decide(Some("/a"), false, None, modifiers);
        assert_eq!(action, LinkAction::Browser);
        assert!(action.runs_hook());
        assert!(!action.prevents_default());

        let middle = ClickModifiers {
            button: 1,
            ..ClickModifiers::default()
        };
        assert_eq!(
            LinkAction::decide(Some("/a"), false, None, middle),
            LinkAction::Browser
        );
    }
}
