use std::io::Write;

use crate::constants::{ends_key, needs_quoting, EQUALS, ESCAPE, PAIR_SEPARATOR, QUOTE};
use crate::error::EncodeError;

pub fn to_string<I, K, V>(pairs: I) -> Result<String, EncodeError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (idx, (key, value)) in pairs.into_iter().enumerate() {
        if idx > 0 {
            out.push(PAIR_SEPARATOR);
        }
        write_pair(&mut out, key.as_ref(), value.as_ref())?;
    }
    Ok(out)
}

pub fn to_writer<W, I, K, V>(mut writer: W, pairs: I) -> Result<(), EncodeError>
where
    W: Write,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let encoded = to_string(pairs)?;
    writer.write_all(encoded.as_bytes())?;
    Ok(())
}

fn write_pair(out: &mut String, key: &str, value: &str) -> Result<(), EncodeError> {
    // Keys have no escape syntax.
    if key.chars().any(ends_key) {
        return Err(EncodeError::InvalidKey {
            key: key.to_string(),
        });
    }
    out.push_str(key);
    out.push(EQUALS);
    write_value(out, value);
    Ok(())
}

fn write_value(out: &mut String, value: &str) {
    if !value.is_empty() && !value.chars().any(needs_quoting) {
        out.push_str(value);
        return;
    }

    out.reserve(value.len() + 2);
    out.push(QUOTE);
    for ch in value.chars() {
        if ch == QUOTE || ch == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
    out.push(QUOTE);
}
