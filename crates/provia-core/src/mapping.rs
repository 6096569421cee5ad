//! Filename-to-document-type mapping and resolution.
//!
//! The mapping is supplied once per intake request as a JSON object keyed by
//! original filename. Entries keep their insertion order, so the
//! normalized-name fallback always matches the first equal key in the order
//! the caller wrote them, independent of any hash or sort order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::validation::normalize_filename;

/// Ordered mapping from original filename to declared document-type label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMapping {
    entries: Vec<(String, String)>,
}

impl DocumentMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Exact lookup by the filename as supplied by the caller.
    pub fn get_exact(&self, filename: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == filename)
            .map(|(_, label)| label.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, label)| (key.as_str(), label.as_str()))
    }
}

impl Serialize for DocumentMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, label) in &self.entries {
            map.serialize_entry(key, label)?;
        }
        map.end()
    }
}

struct DocumentMappingVisitor;

impl<'de> Visitor<'de> for DocumentMappingVisitor {
    type Value = DocumentMapping;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of filename to document-type label")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, label)) = access.next_entry::<String, String>()? {
            entries.push((key, label));
        }
        Ok(DocumentMapping { entries })
    }
}

impl<'de> Deserialize<'de> for DocumentMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentMappingVisitor)
    }
}

/// Resolve the document-type label for one uploaded file.
///
/// Resolution order, first success wins:
/// 1. exact mapping key,
/// 2. normalized-name equality against mapping keys in insertion order,
/// 3. positional fallback `document_<position>`.
///
/// Always yields a non-empty label.
pub fn resolve_document_type(
    filename: &str,
    mapping: &DocumentMapping,
    position: usize,
) -> String {
    if let Some(label) = mapping.get_exact(filename) {
        return label.to_string();
    }

    let normalized = normalize_filename(filename);
    for (key, label) in mapping.iter() {
        if normalize_filename(key) == normalized {
            return label.to_string();
        }
    }

    format!("document_{}", position)
}
