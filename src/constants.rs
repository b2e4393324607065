pub const EQUALS: char = '=';

pub const QUOTE: char = '\'';

pub const ESCAPE: char = '\\';

pub const PAIR_SEPARATOR: char = ' ';

/// Whitespace as understood by the option grammar: the full Unicode
/// `White_Space` set, not only ASCII blanks.
#[inline]
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace()
}

#[inline]
pub fn ends_key(ch: char) -> bool {
    is_space(ch) || ch == EQUALS
}

/// Characters that force a value to be written inside quotes.
#[inline]
pub fn needs_quoting(ch: char) -> bool {
    is_space(ch) || ch == QUOTE || ch == ESCAPE
}
