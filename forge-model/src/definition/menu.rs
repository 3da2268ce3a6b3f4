use std::fmt;

use serde::Deserialize;

/// Menu entry generated next to the class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuEntry {
    #[serde(rename = "type", default)]
    pub kind: MenuKind,
    #[serde(default)]
    pub parent: String,
    #[serde(default)]
    pub rank: i64,
    /// Query of the menu; only meaningful for [`MenuKind::OqlMenuNode`]
    #[serde(default)]
    pub oql: String,
}

impl MenuEntry {
    /// Returns true if the query is emitted for this entry.
    pub fn has_query(&self) -> bool {
        self.kind.is_query()
    }
}

/// Kind of a menu node
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MenuKind {
    #[default]
    #[serde(rename = "OQLMenuNode")]
    OqlMenuNode,
    NewObjectMenuNode,
    SearchMenuNode,
}

impl MenuKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuKind::OqlMenuNode => "OQLMenuNode",
            MenuKind::NewObjectMenuNode => "NewObjectMenuNode",
            MenuKind::SearchMenuNode => "SearchMenuNode",
        }
    }

    /// Returns true for the query-menu kind.
    pub fn is_query(&self) -> bool {
        matches!(self, MenuKind::OqlMenuNode)
    }
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
