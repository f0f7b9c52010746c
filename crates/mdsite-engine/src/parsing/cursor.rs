/// A forward-only cursor for character-by-character scanning.
///
/// Operates over a borrowed string slice with a byte offset. Reads are
/// char-counted so multi-byte input stays intact. End of input shows up as
/// `None` or an empty slice, never as an error.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    s: &'a str,
    /// Current byte offset into `s`.
    i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte offset.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of input.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Returns the unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Peeks at the next character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peeks at the next `n` characters; shorter at end of input.
    pub fn peek_n(&self, n: usize) -> &'a str {
        &self.rest()[..self.byte_len_of(n)]
    }

    /// Returns the maximal run of characters satisfying `pred` without
    /// consuming it.
    pub fn peek_while(&self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map(|(ix, _)| ix)
            .unwrap_or(rest.len());
        &rest[..end]
    }

    /// Consumes and returns the next character.
    pub fn read(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Consumes and returns the next `n` characters; shorter at end of
    /// input.
    pub fn read_n(&mut self, n: usize) -> &'a str {
        let end = self.byte_len_of(n);
        let out = &self.rest()[..end];
        self.i += end;
        out
    }

    /// Consumes and returns a maximal run of characters satisfying `pred`.
    pub fn read_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let out = self.peek_while(pred);
        self.i += out.len();
        out
    }

    /// Byte length of the next `n` characters of the remainder.
    fn byte_len_of(&self, n: usize) -> usize {
        let rest = self.rest();
        rest.char_indices()
            .nth(n)
            .map(|(ix, _)| ix)
            .unwrap_or(rest.len())
    }
}
