//! Markup generation building blocks.
//!
//! - [`MarkupBuilder`] - Fluent API for building indented element trees
//! - [`Indent`] - Indentation configuration

mod indent;
mod markup;

pub use indent::Indent;
pub use markup::MarkupBuilder;
