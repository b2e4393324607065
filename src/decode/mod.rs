//! Reading libpq-style option strings.
//!
//! The grammar follows `conninfo_parse` from libpq's `fe-connect.c`:
//! whitespace separated `key=value` pairs, where a value is either a bare
//! run of non-whitespace characters or a single-quoted literal, and a
//! backslash takes the next character literally in both forms.

pub mod scanner;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::constants::{ends_key, is_space, EQUALS, ESCAPE, QUOTE};
use crate::error::{Error, FromStrError};
use crate::map::{OptionMap, Values};
use crate::Result;

use self::scanner::Scanner;

pub fn parse(input: &str) -> Result<Values> {
    let mut values = Values::new();
    parse_into(input, &mut values)?;
    Ok(values)
}

/// Parses `input` into `out`, overwriting values of keys already present.
///
/// On error `out` may hold the pairs read before the failure and should be
/// discarded.
pub fn parse_into<M: OptionMap + ?Sized>(input: &str, out: &mut M) -> Result<()> {
    let mut scanner = Scanner::new(input);
    let mut pairs = 0usize;

    while let Some(first) = scanner.skip_spaces() {
        let key_offset = scanner.offset() - 1;
        let (key, stop) = scan_key(&mut scanner, first);

        let stop = match stop {
            Some(EQUALS) => stop,
            _ => scanner.skip_spaces(),
        };
        if stop != Some(EQUALS) {
            return Err(Error::missing_equals(key, key_offset));
        }

        let Some(first) = scanner.skip_spaces() else {
            // A trailing `key=` is an empty value, not an error.
            tracing::trace!(key = %key, "parsed connection option");
            out.set_option(key, String::new());
            pairs += 1;
            break;
        };

        let value = if first == QUOTE {
            scan_quoted_value(&mut scanner)?
        } else {
            scan_bare_value(&mut scanner, first)?
        };

        tracing::trace!(key = %key, "parsed connection option");
        out.set_option(key, value);
        pairs += 1;
    }

    tracing::debug!(pairs, "parsed connection info string");
    Ok(())
}

/// Returns the key and the character that ended it, or `None` at end of input.
fn scan_key(scanner: &mut Scanner<'_>, first: char) -> (String, Option<char>) {
    let mut key = String::new();
    let mut current = Some(first);
    while let Some(ch) = current {
        if ends_key(ch) {
            break;
        }
        key.push(ch);
        current = scanner.next();
    }
    (key, current)
}

/// A bare value runs to the next unescaped whitespace. `=` is not special.
fn scan_bare_value(scanner: &mut Scanner<'_>, first: char) -> Result<String> {
    let mut value = String::new();
    let mut current = Some(first);
    while let Some(mut ch) = current {
        if is_space(ch) {
            break;
        }
        if ch == ESCAPE {
            let escape_offset = scanner.offset() - 1;
            ch = scanner
                .next()
                .ok_or_else(|| Error::incomplete_escape(escape_offset))?;
        }
        value.push(ch);
        current = scanner.next();
    }
    Ok(value)
}

/// Reads up to the closing quote; the opening quote is already consumed.
fn scan_quoted_value(scanner: &mut Scanner<'_>) -> Result<String> {
    let quote_offset = scanner.offset() - 1;
    let mut value = String::new();
    loop {
        match scanner.next() {
            Some(QUOTE) => return Ok(value),
            Some(ESCAPE) => match scanner.next() {
                Some(ch) => value.push(ch),
                None => return Err(Error::unterminated_quote(quote_offset)),
            },
            Some(ch) => value.push(ch),
            None => return Err(Error::unterminated_quote(quote_offset)),
        }
    }
}

pub fn decode_to_value(input: &str) -> Result<Value> {
    let mut map = Map::new();
    parse_into(input, &mut map)?;
    Ok(Value::Object(map))
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> std::result::Result<T, FromStrError> {
    let value = decode_to_value(input)?;
    Ok(serde_json::from_value(value)?)
}
