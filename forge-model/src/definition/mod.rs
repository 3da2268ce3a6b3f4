//! Class definition types and parsing for class.toml files.

mod access;
mod deserialize;
mod field;
mod file;
mod lifecycle;
mod menu;
mod parse;
mod properties;
mod structure;

pub use access::{AccessProfile, Branding, Right};
pub use field::{Field, FieldKind, FieldType};
pub use file::DefinitionFile;
pub use lifecycle::{Lifecycle, LifecycleState, LifecycleTransition};
pub use menu::{MenuEntry, MenuKind};
pub use properties::{ClassProperties, PropertyKey};
pub use structure::{Index, Method, MethodType, Relation, RelationKind};

/// Parent class used when a definition does not name one.
pub const DEFAULT_PARENT: &str = "cmdbAbstractObject";

/// A user-authored description of one iTop class.
///
/// Sections are kept in input order; nothing is re-sorted, so serializing the
/// same definition twice yields identical documents.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDefinition {
    /// Class identifier
    pub name: String,
    /// Parent class identifier
    pub parent_name: String,
    /// Recognized class properties
    pub properties: ClassProperties,
    /// Fields in declaration order
    pub fields: Vec<Field>,
    /// Optional state machine driven by one field
    pub lifecycle: Option<Lifecycle>,
    pub methods: Vec<Method>,
    pub indexes: Vec<Index>,
    pub relations: Vec<Relation>,
    pub menu: Option<MenuEntry>,
    pub user_rights: Vec<AccessProfile>,
    pub branding: Option<Branding>,
}

impl ClassDefinition {
    /// Create an empty definition with default properties.
    pub fn new(name: impl Into<String>, parent_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_name: parent_name.into(),
            properties: ClassProperties::default(),
            fields: Vec::new(),
            lifecycle: None,
            methods: Vec::new(),
            indexes: Vec::new(),
            relations: Vec::new(),
            menu: None,
            user_rights: Vec::new(),
            branding: None,
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The lifecycle, if it is driven by an attribute.
    ///
    /// A lifecycle without an attribute is not emitted at all.
    pub fn active_lifecycle(&self) -> Option<&Lifecycle> {
        self.lifecycle.as_ref().filter(|l| l.is_active())
    }

    /// The branding, if at least one of its values is set.
    pub fn active_branding(&self) -> Option<&Branding> {
        self.branding.as_ref().filter(|b| !b.is_empty())
    }

    /// Identifier of the menu entry generated for this class.
    pub fn menu_id(&self) -> String {
        format!("{}_menu", self.name)
    }
}
