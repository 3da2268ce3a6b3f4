use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// Access-control profile granting or denying actions on the class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessProfile {
    pub name: String,
    /// Action name to right, in input order
    #[serde(default)]
    pub rights: IndexMap<String, Right>,
}

/// A single grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Right {
    Allow,
    Deny,
}

impl Right {
    pub fn as_str(&self) -> &'static str {
        match self {
            Right::Allow => "allow",
            Right::Deny => "deny",
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Right::Allow)
    }
}

impl fmt::Display for Right {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Branding overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Branding {
    /// Logo URL
    pub logo: String,
    pub main_color: String,
    pub complementary_color: String,
}

impl Branding {
    /// Returns true if no branding value is set.
    pub fn is_empty(&self) -> bool {
        self.logo.is_empty() && self.main_color.is_empty() && self.complementary_color.is_empty()
    }
}
