//! Conditional CSS class composition.

/// Collects class tokens, skipping empty ones, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames {
    classes: Vec<String>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every whitespace-separated token of `class`.
    pub fn add<'a>(mut self, class: impl Into<Option<&'a str>>) -> Self {
        if let Some(class) = class.into() {
            self.classes
                .extend(class.split_whitespace().map(str::to_string));
        }
        self
    }

    pub fn add_if(self, class: &str, condition: bool) -> Self {
        if condition {
            self.add(class)
        } else {
            self
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn build(&self) -> String {
        self.classes.join(" ")
    }
}
