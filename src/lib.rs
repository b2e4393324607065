//! Parse and write libpq-style connection option strings such as
//! `host=localhost port=5432 password='correct horse'`.

pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod map;

use std::io::Write;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use crate::error::{EncodeError, Error, ErrorKind, FromStrError};
pub use crate::map::{OptionMap, Values};

pub type Result<T> = std::result::Result<T, Error>;

pub fn parse(input: &str) -> Result<Values> {
    decode::parse(input)
}

pub fn parse_into<M: OptionMap + ?Sized>(input: &str, out: &mut M) -> Result<()> {
    decode::parse_into(input, out)
}

pub fn decode_to_value(input: &str) -> Result<Value> {
    decode::decode_to_value(input)
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> std::result::Result<T, FromStrError> {
    decode::from_str(input)
}

pub fn to_string<I, K, V>(pairs: I) -> std::result::Result<String, EncodeError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    encode::to_string(pairs)
}

pub fn to_writer<W, I, K, V>(writer: W, pairs: I) -> std::result::Result<(), EncodeError>
where
    W: Write,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    encode::to_writer(writer, pairs)
}
