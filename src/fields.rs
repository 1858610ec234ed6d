//! Width-aware helpers shared by the per-tag parsers.
//!
//! All widths are counted in code points, never bytes, so multi-byte
//! characters pass through parsing intact and are rejected later by
//! validation instead of being truncated silently.

/// Byte offset of the `n`th character, or the full length when the input is
/// shorter.
pub(crate) fn char_offset(input: &str, n: usize) -> usize {
    input
        .char_indices()
        .nth(n)
        .map(|(offset, _)| offset)
        .unwrap_or(input.len())
}

/// A cursor over a segment's positional prefix.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub fn new(record: &'a str) -> Self {
        Self { rest: record }
    }

    /// Takes the next `width` characters (fewer at end of input), trimmed.
    pub fn fixed(&mut self, width: usize) -> String {
        let split = char_offset(self.rest, width);
        let (taken, rest) = self.rest.split_at(split);
        self.rest = rest;
        taken.trim().to_string()
    }

    /// Everything not yet consumed.
    pub fn rest(self) -> &'a str {
        self.rest
    }
}

/// The `*`-delimited tail of a segment. Unset fields come back empty;
/// each piece is trimmed.
#[derive(Debug)]
pub(crate) struct Tail<'a> {
    pieces: std::str::Split<'a, char>,
}

impl<'a> Tail<'a> {
    pub fn new(tail: &'a str) -> Self {
        Self {
            pieces: tail.split('*'),
        }
    }

    pub fn field(&mut self) -> String {
        self.pieces
            .next()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }

    /// The next raw piece, untrimmed, when a tail field has internal
    /// positional structure of its own.
    pub fn raw(&mut self) -> &'a str {
        self.pieces.next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_counts_code_points() {
        let mut cursor = Cursor::new("®®abc");
        assert_eq!(cursor.fixed(2), "®®");
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_cursor_short_input() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.fixed(5), "ab");
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_cursor_trims() {
        let mut cursor = Cursor::new("30CORR    TP");
        assert_eq!(cursor.fixed(2), "30");
        assert_eq!(cursor.fixed(8), "CORR");
        assert_eq!(cursor.fixed(1), "T");
        assert_eq!(cursor.fixed(1), "P");
    }

    #[test]
    fn test_tail_unset_fields_are_empty() {
        let mut tail = Tail::new("one*two");
        assert_eq!(tail.field(), "one");
        assert_eq!(tail.field(), "two");
        assert_eq!(tail.field(), "");
        assert_eq!(tail.field(), "");
    }

    #[test]
    fn test_tail_trims_padding() {
        let mut tail = Tail::new("padded   *  spaced  *");
        assert_eq!(tail.field(), "padded");
        assert_eq!(tail.field(), "spaced");
    }
}
