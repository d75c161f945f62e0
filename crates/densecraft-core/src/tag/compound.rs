use crate::tag::{Tag, TagKind, TagList, list::EMPTY_LIST};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shared empty compound returned by lenient reads.
pub(super) static EMPTY_COMPOUND: TagCompound = TagCompound::new();

///
/// TagCompound
///
/// String-keyed node map.
/// Keys are kept in sorted order so equality, hashing, and encoding are canonical.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagCompound {
    entries: BTreeMap<String, Tag>,
}

impl TagCompound {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a node, returning the node previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, tag: impl Into<Tag>) -> Option<Tag> {
        self.entries.insert(key.into(), tag.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    ///
    /// TYPED READS
    ///
    /// A key that is missing or holds another kind reads as `None`.
    ///

    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Tag::as_str)
    }

    #[must_use]
    pub fn get_short(&self, key: &str) -> Option<i16> {
        match self.get(key) {
            Some(Tag::Short(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_long(&self, key: &str) -> Option<i64> {
        match self.get(key) {
            Some(Tag::Long(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_compound(&self, key: &str) -> Option<&TagCompound> {
        self.get(key).and_then(Tag::as_compound)
    }

    /// List stored under `key` whose elements are `kind`.
    ///
    /// Missing keys, non-list nodes, and lists of another element kind all
    /// read as an empty list. An empty stored list matches any kind.
    #[must_use]
    pub fn get_list(&self, key: &str, kind: TagKind) -> &TagList {
        match self.get(key).and_then(Tag::as_list) {
            Some(list) if list.element_kind().is_none_or(|k| k == kind) => list,
            _ => &EMPTY_LIST,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Tag)> for TagCompound {
    fn from_iter<I: IntoIterator<Item = (K, Tag)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
