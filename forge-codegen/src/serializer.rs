//! Class definition to datamodel document serialization.
//!
//! Sections are emitted in a fixed order and never re-sorted. Every optional
//! section is guarded by its own presence check, so serialization cannot fail.

use itopforge_core::Escaping;
use itopforge_model::{
    AccessProfile, Branding, ClassDefinition, ClassProperties, Field, FieldKind, Index, Lifecycle,
    MenuEntry, Method, Relation,
};
use tracing::debug;

use crate::builder::{Indent, MarkupBuilder};
use crate::lint::lints::is_element_name;

/// Document declaration written on the first line.
pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Root element of every datamodel document.
pub const ROOT_TAG: &str = "itop_design";

/// Datamodel format version written on the root element.
pub const DESIGN_VERSION: &str = "3.0";

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Options controlling the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// How text and attribute values are embedded
    pub escaping: Escaping,
    /// Indentation of one nesting level
    pub indent: Indent,
}

impl SerializeOptions {
    /// Embed values without escaping, byte for byte like the unescaped layout.
    pub fn verbatim() -> Self {
        Self {
            escaping: Escaping::Verbatim,
            ..Default::default()
        }
    }

    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

/// Serialize a definition with default options.
pub fn serialize(def: &ClassDefinition) -> String {
    Serializer::default().serialize(def)
}

/// Renders [`ClassDefinition`]s as datamodel documents.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    options: SerializeOptions,
}

impl Serializer {
    pub fn new(options: SerializeOptions) -> Self {
        Self { options }
    }

    /// Render the full document for one class.
    pub fn serialize(&self, def: &ClassDefinition) -> String {
        debug!(class = %def.name, escaping = ?self.options.escaping, "serializing class");

        MarkupBuilder::new(self.options.indent, self.options.escaping)
            .line(XML_HEADER)
            .element(
                ROOT_TAG,
                &[("xmlns:xsi", XSI_NAMESPACE), ("version", DESIGN_VERSION)],
                |b| {
                    let b = b.element("classes", &[], |b| {
                        b.element("class", &[("id", def.name.as_str())], |b| write_class(b, def))
                    });
                    let b = write_menu(b, def);
                    let b = write_user_rights(b, &def.name, &def.user_rights);
                    write_branding(b, def.active_branding())
                },
            )
            .build()
    }
}

fn write_class(b: MarkupBuilder, def: &ClassDefinition) -> MarkupBuilder {
    let b = b.leaf("parent", &[], &def.parent_name);
    let b = write_properties(b, &def.properties);
    let b = b.element("fields", &[], |b| b.each(&def.fields, write_field));

    let b = match def.active_lifecycle() {
        Some(lifecycle) => write_lifecycle(b, lifecycle),
        None => {
            if def.lifecycle.is_some() {
                debug!(class = %def.name, "omitting lifecycle without attribute");
            }
            b
        }
    };

    b.when(!def.methods.is_empty(), |b| {
        b.element("methods", &[], |b| b.each(&def.methods, write_method))
    })
    .when(!def.indexes.is_empty(), |b| {
        b.element("indexes", &[], |b| b.each(&def.indexes, write_index))
    })
    .when(!def.relations.is_empty(), |b| {
        b.element("relations", &[], |b| b.each(&def.relations, write_relation))
    })
}

fn write_properties(b: MarkupBuilder, properties: &ClassProperties) -> MarkupBuilder {
    b.element("properties", &[], |b| {
        b.each(properties.non_empty(), |b, (key, value)| {
            b.leaf(key.tag(), &[], &value)
        })
    })
}

fn write_field(b: MarkupBuilder, field: &Field) -> MarkupBuilder {
    let attrs = [("id", field.name.as_str()), ("xsi:type", field.field_type().as_str())];

    b.element("field", &attrs, |b| {
        let b = b
            .leaf("sql", &[], field.sql_column())
            .leaf("default_value", &[], &field.default_value)
            .leaf("is_null_allowed", &[], bool_str(field.nullable));

        match &field.kind {
            FieldKind::Enum { values } if !values.is_empty() => b.element("values", &[], |b| {
                b.each(values.iter().enumerate(), |b, (index, value)| {
                    b.leaf("value", &[("id", index.to_string().as_str())], value.trim())
                })
            }),
            FieldKind::ExternalKey { target_class } if !target_class.is_empty() => {
                b.leaf("target_class", &[], target_class)
            }
            _ => b,
        }
    })
}

fn write_lifecycle(b: MarkupBuilder, lifecycle: &Lifecycle) -> MarkupBuilder {
    b.element("lifecycle", &[], |b| {
        b.leaf("attribute", &[], &lifecycle.attribute)
            .element("states", &[], |b| {
                b.each(&lifecycle.states, |b, state| {
                    b.element("state", &[("id", state.name.as_str())], |b| {
                        b.element("flags", &[], |b| {
                            b.each(&state.flags, |b, (flag, value)| {
                                // Flag names become tag names
                                if !is_element_name(flag) {
                                    debug!(
                                        state = %state.name,
                                        flag = %flag,
                                        "skipping flag that is not a valid tag name"
                                    );
                                    return b;
                                }
                                b.leaf(flag, &[], bool_str(*value))
                            })
                        })
                        .leaf("highlight", &[], &state.highlight)
                    })
                })
            })
            .element("transitions", &[], |b| {
                b.each(&lifecycle.transitions, |b, transition| {
                    b.element("transition", &[("id", transition.stimulus.as_str())], |b| {
                        b.leaf("target", &[], &transition.target)
                            .element("actions", &[], |b| {
                                b.each(&transition.actions, |b, verb| {
                                    b.element("action", &[], |b| b.leaf("verb", &[], verb))
                                })
                            })
                    })
                })
            })
    })
}

fn write_method(b: MarkupBuilder, method: &Method) -> MarkupBuilder {
    b.element("method", &[("id", method.name.as_str())], |b| {
        b.leaf("static", &[], "false")
            .leaf("access", &[], "public")
            .leaf("type", &[], method.kind.as_str())
            .cdata_leaf("code", &method.code)
    })
}

fn write_index(b: MarkupBuilder, index: &Index) -> MarkupBuilder {
    b.element("index", &[("id", index.name.as_str())], |b| {
        b.element("attributes", &[], |b| {
            b.each(&index.fields, |b, field| b.empty("attribute", &[("id", field.as_str())]))
        })
    })
}

fn write_relation(b: MarkupBuilder, relation: &Relation) -> MarkupBuilder {
    b.element("relation", &[("id", relation.kind.as_str())], |b| {
        b.element("neighbours", &[], |b| {
            b.element("neighbour", &[("id", relation.neighbour_class.as_str())], |b| {
                b.leaf("query_down", &[], &relation.query_down)
                    .leaf("query_up", &[], &relation.query_up)
            })
        })
    })
}

fn write_menu(b: MarkupBuilder, def: &ClassDefinition) -> MarkupBuilder {
    let Some(menu) = &def.menu else {
        return b;
    };
    let id = def.menu_id();

    b.element("menus", &[], |b| {
        b.element(
            "menu",
            &[("id", id.as_str()), ("xsi:type", menu.kind.as_str())],
            |b| write_menu_body(b, menu),
        )
    })
}

fn write_menu_body(b: MarkupBuilder, menu: &MenuEntry) -> MarkupBuilder {
    b.leaf("rank", &[], &menu.rank.to_string())
        .leaf("parent", &[], &menu.parent)
        .when(menu.has_query(), |b| b.leaf("oql", &[], &menu.oql))
}

fn write_user_rights(
    b: MarkupBuilder,
    class_name: &str,
    profiles: &[AccessProfile],
) -> MarkupBuilder {
    b.when(!profiles.is_empty(), |b| {
        b.element("user_rights", &[], |b| {
            b.element("profiles", &[], |b| {
                b.each(profiles, |b, profile| {
                    b.element("profile", &[("id", profile.name.as_str())], |b| {
                        b.element("groups", &[], |b| {
                            b.element("group", &[("id", class_name)], |b| {
                                b.element("actions", &[], |b| {
                                    b.each(&profile.rights, |b, (action, right)| {
                                        let id = format!("action:{}", action);
                                        b.leaf("action", &[("id", id.as_str())], right.as_str())
                                    })
                                })
                            })
                        })
                    })
                })
            })
        })
    })
}

fn write_branding(b: MarkupBuilder, branding: Option<&Branding>) -> MarkupBuilder {
    match branding {
        Some(branding) => b.element("branding", &[], |b| {
            b.leaf("main_logo", &[], &branding.logo)
                .leaf("main_color", &[], &branding.main_color)
                .leaf("complementary_color", &[], &branding.complementary_color)
        }),
        None => b,
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
