//! Indentation configuration for generated documents.

/// Indentation style for one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the layout the platform ships its own files in.
    pub const TWO: Self = Self::Spaces(2);

    /// 4-space indentation.
    pub const FOUR: Self = Self::Spaces(4);

    /// Append `depth` levels of indentation to `buffer`.
    pub fn write(&self, buffer: &mut String, depth: usize) {
        match self {
            Self::Spaces(width) => {
                let count = depth * usize::from(*width);
                buffer.extend(std::iter::repeat_n(' ', count));
            }
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', depth)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TWO
    }
}
