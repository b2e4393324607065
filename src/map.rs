use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// The map a fresh [`parse`](crate::parse) returns.
pub type Values = HashMap<String, String>;

/// Destination for parsed options.
///
/// `set_option` must insert or overwrite; a key that appears twice in an
/// option string keeps the later value.
pub trait OptionMap {
    fn set_option(&mut self, key: String, value: String);
}

impl<S: BuildHasher> OptionMap for HashMap<String, String, S> {
    fn set_option(&mut self, key: String, value: String) {
        self.insert(key, value);
    }
}

impl OptionMap for BTreeMap<String, String> {
    fn set_option(&mut self, key: String, value: String) {
        self.insert(key, value);
    }
}

impl OptionMap for Map<String, Value> {
    fn set_option(&mut self, key: String, value: String) {
        self.insert(key, Value::String(value));
    }
}

impl<T: OptionMap + ?Sized> OptionMap for &mut T {
    fn set_option(&mut self, key: String, value: String) {
        (**self).set_option(key, value);
    }
}
