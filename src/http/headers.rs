//! Ordered field storage for [`ParsedHeaders`](crate::http::request::ParsedHeaders)
//!
//! This module provides a low-level map used for both header fields and cookies.
//!
//! Fields are stored in an ordered map to preserve insertion order.
//! Names are stored exactly as given: lowercasing header names is the
//! parser's job, cookie names keep their original case.
//!
//! Inserting an existing name overwrites its value but keeps the position of
//! the first occurrence, so the last write wins without reordering the block.
//!
//! No validation is performed on names or values.

use indexmap::IndexMap;
use serde::Serialize;

use crate::http::value::HeaderValue;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldMap {
    fields: IndexMap<String, HeaderValue>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, value: HeaderValue) {
        self.fields.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.fields.get(name)
    }

    /// Value as it appeared in the block, whatever its tag.
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(HeaderValue::raw)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Flattens every value to its raw form. Decoded forms are for
    /// inspection only and are dropped here.
    pub fn to_raw_map(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .map(|(name, value)| (name.clone(), value.raw().to_string()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a HeaderValue);
    type IntoIter = indexmap::map::Iter<'a, String, HeaderValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
