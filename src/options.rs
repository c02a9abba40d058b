use crate::{Alphabet, BASE, CHARSET_DEFAULT};

/// Per-call encoding settings.
///
/// `minlen` and `padding` both request a minimum output length, reached by left filling with the
/// alphabet's zero character. When both are set the larger one applies. Output is never truncated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Options<'a> {
    pub charset: &'a Alphabet<BASE>,
    pub minlen: usize,
    pub padding: usize,
}

impl<'a> Options<'a> {
    /// Default charset, no padding.
    pub const DEFAULT: Options<'static> = Options::new(&CHARSET_DEFAULT);

    pub const fn new(charset: &'a Alphabet<BASE>) -> Self {
        Self {
            charset,
            minlen: 0,
            padding: 0,
        }
    }

    pub const fn with_minlen(self, minlen: usize) -> Self {
        Self { minlen, ..self }
    }

    pub const fn with_padding(self, padding: usize) -> Self {
        Self { padding, ..self }
    }

    pub const fn width(&self) -> usize {
        if self.padding > self.minlen {
            self.padding
        } else {
            self.minlen
        }
    }
}

impl Default for Options<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}
