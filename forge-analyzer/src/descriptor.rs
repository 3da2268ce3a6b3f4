//! Best-effort extraction of extension name and version from a module descriptor.

use itopforge_model::{UNKNOWN_EXTENSION, UNKNOWN_VERSION};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"SetupWebPage::AddModule\([\s\S]*?'label'\s*=>\s*Dict::S\('(.*?)'").unwrap()
});

static VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"SetupWebPage::AddModule\([\s\S]*?'version'\s*=>\s*'(.*?)'").unwrap()
});

/// Display name and version declared by a module descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: String,
    pub version: String,
}

impl ModuleDescriptor {
    /// Extract name and version, substituting placeholders for either that
    /// cannot be found.
    pub fn parse(source: &str) -> Self {
        let name = extract_label(source).unwrap_or_else(|| {
            warn!("module descriptor has no label; using placeholder name");
            UNKNOWN_EXTENSION
        });
        let version = extract_version(source).unwrap_or_else(|| {
            warn!("module descriptor has no version; using placeholder version");
            UNKNOWN_VERSION
        });

        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    /// Placeholder descriptor for bundles without one.
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_EXTENSION.to_string(),
            version: UNKNOWN_VERSION.to_string(),
        }
    }
}

/// The `'label' => Dict::S('...')` value of the module registration.
pub fn extract_label(source: &str) -> Option<&str> {
    capture(&LABEL_REGEX, source)
}

/// The `'version' => '...'` value of the module registration.
pub fn extract_version(source: &str) -> Option<&str> {
    capture(&VERSION_REGEX, source)
}

fn capture<'a>(regex: &Regex, source: &'a str) -> Option<&'a str> {
    regex
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = r#"<?php
SetupWebPage::AddModule(
    __FILE__,
    'itop-server-extension/1.4.2',
    array(
        'label' => Dict::S('Server Extension'),
        'category' => 'business',
        'version' => '1.4.2',
        'dependencies' => array('itop-config-mgmt/2.7.0'),
    )
);
"#;

    #[test]
    fn test_parse_descriptor() {
        let descriptor = ModuleDescriptor::parse(DESCRIPTOR);
        assert_eq!(descriptor.name, "Server Extension");
        assert_eq!(descriptor.version, "1.4.2");
    }

    #[test]
    fn test_plain_label_falls_back() {
        let source = "SetupWebPage::AddModule(__FILE__, 'x/1.0', array('label' => 'Plain', 'version' => '1.0'));";
        let descriptor = ModuleDescriptor::parse(source);
        assert_eq!(descriptor.name, UNKNOWN_EXTENSION);
        assert_eq!(descriptor.version, "1.0");
    }

    #[test]
    fn test_requires_registration_call() {
        assert_eq!(extract_version("'version' => '2.0'"), None);
        assert_eq!(ModuleDescriptor::parse(""), ModuleDescriptor::unknown());
    }

    #[test]
    fn test_empty_values_match() {
        let source = "SetupWebPage::AddModule('label' => Dict::S(''), 'version' => '')";
        assert_eq!(extract_label(source), Some(""));
        assert_eq!(extract_version(source), Some(""));
    }
}
