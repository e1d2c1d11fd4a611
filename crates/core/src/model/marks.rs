//! Text formatting marks.

/// A single boolean formatting attribute of a text leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
}

/// The set of marks carried by a text leaf.
///
/// Marks are independent and may combine in any subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub code: bool,
    pub strikethrough: bool,
}

impl Marks {
    /// The empty mark set.
    pub const NONE: Marks = Marks {
        bold: false,
        italic: false,
        underline: false,
        code: false,
        strikethrough: false,
    };

    /// A set with a single mark enabled.
    pub const fn only(mark: Mark) -> Marks {
        Marks::NONE.with(mark)
    }

    /// Return a copy with the given mark enabled.
    #[must_use]
    pub const fn with(mut self, mark: Mark) -> Marks {
        match mark {
            Mark::Bold => self.bold = true,
            Mark::Italic => self.italic = true,
            Mark::Underline => self.underline = true,
            Mark::Code => self.code = true,
            Mark::Strikethrough => self.strikethrough = true,
        }
        self
    }

    /// True if no mark is set.
    pub const fn is_empty(&self) -> bool {
        !(self.bold || self.italic || self.underline || self.code || self.strikethrough)
    }
}
