use crate::constants::is_space;

/// Forward-only cursor over the characters of an option string.
///
/// End of input is an ordinary `None`, never an error.
pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
    offset: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            offset: 0,
        }
    }

    /// Number of characters consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        let bytes = self.input.as_bytes();
        match bytes.get(self.position) {
            Some(&byte) if byte.is_ascii() => Some(byte as char),
            Some(_) => self.input[self.position..].chars().next(),
            None => None,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let bytes = self.input.as_bytes();
        let ch = match bytes.get(self.position) {
            Some(&byte) if byte.is_ascii() => {
                self.position += 1;
                byte as char
            }
            Some(_) => {
                let ch = self.input[self.position..].chars().next()?;
                self.position += ch.len_utf8();
                ch
            }
            None => return None,
        };
        self.offset += 1;
        Some(ch)
    }

    /// Consumes whitespace and returns the first non-whitespace character,
    /// which is consumed as well.
    pub fn skip_spaces(&mut self) -> Option<char> {
        loop {
            match self.next() {
                Some(ch) if is_space(ch) => continue,
                other => return other,
            }
        }
    }
}
