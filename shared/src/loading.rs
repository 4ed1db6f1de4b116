use serde::{Deserialize, Serialize};

/// Loading signal supplied by the host runtime for a pending property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingState {
    /// Determines if the component is loading or not.
    pub is_loading: bool,
    /// Which property is loading.
    pub prop_name: Option<String>,
    /// Name of the component that is loading.
    pub component_name: Option<String>,
}

impl LoadingState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }
}

/// Missing loading state means not loading.
pub fn is_loading(state: Option<&LoadingState>) -> bool {
    state.is_some_and(|s| s.is_loading)
}
