//! Built-in lints for class definitions.

mod field;
mod lifecycle;
mod markup;
mod menu;

pub use field::FieldLint;
pub use lifecycle::LifecycleLint;
pub use markup::MarkupLint;
pub use menu::MenuLint;

/// Returns true if `name` can be written as an element tag name.
pub(crate) fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_element_name() {
        assert!(is_element_name("read_only"));
        assert!(is_element_name("must-change"));
        assert!(!is_element_name(""));
        assert!(!is_element_name("1st"));
        assert!(!is_element_name("a b"));
        assert!(!is_element_name("a<b"));
    }
}
