use indexmap::IndexMap;
use serde::Deserialize;

/// A finite-state machine attached to a class, driven by one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Lifecycle {
    /// Field that holds the state
    #[serde(default)]
    pub attribute: String,
    #[serde(default)]
    pub states: Vec<LifecycleState>,
    #[serde(default)]
    pub transitions: Vec<LifecycleTransition>,
}

impl Lifecycle {
    /// Returns true if the lifecycle names its driving attribute.
    pub fn is_active(&self) -> bool {
        !self.attribute.is_empty()
    }

    /// Returns true if a state with this name is declared.
    pub fn has_state(&self, name: &str) -> bool {
        self.states.iter().any(|s| s.name == name)
    }
}

/// A named lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LifecycleState {
    pub name: String,
    /// Per-state flags, in input order
    #[serde(default)]
    pub flags: IndexMap<String, bool>,
    /// Highlight token shown for objects in this state
    #[serde(default)]
    pub highlight: String,
}

/// A stimulus-triggered transition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LifecycleTransition {
    pub stimulus: String,
    /// Target state name
    pub target: String,
    /// Action verbs run on transition, in order
    #[serde(default)]
    pub actions: Vec<String>,
}
