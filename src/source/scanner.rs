/// Cursor over a definition string.
///
/// Hand-written grammars (columns, filters, groups, placeholders) consume
/// their input through this instead of regular expressions.
pub(crate) struct Scanner<'a> {
    pub rest: &'a str,
    pub position: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            position: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// The character after the next one.
    pub fn peek_second(&self) -> Option<char> {
        self.rest.chars().nth(1)
    }

    pub fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    /// Consumes the longest prefix whose characters all satisfy `pred`.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let end = self
            .rest
            .char_indices()
            .find(|(_, ch)| !pred(*ch))
            .map(|(pos, _)| pos)
            .unwrap_or(self.rest.len());

        self.advance(end)
    }

    /// Consumes `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance(expected.len_utf8());
            true
        } else {
            false
        }
    }

    pub fn eat_str(&mut self, expected: &str) -> bool {
        if self.rest.starts_with(expected) {
            self.advance(expected.len());
            true
        } else {
            false
        }
    }

    /// Consumes everything that is left.
    pub fn take_rest(&mut self) -> &'a str {
        self.advance(self.rest.len())
    }

    fn advance(&mut self, bytes: usize) -> &'a str {
        let (taken, rest) = self.rest.split_at(bytes);
        self.position += bytes;
        self.rest = rest;
        taken
    }
}

/// A "word" character: letters and digits of any script, or underscore.
pub(crate) fn is_word(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Characters allowed in field, column and placeholder names.
pub(crate) fn is_name(ch: char) -> bool {
    is_word(ch) || ch.is_whitespace() || ch == '-' || ch == ','
}
