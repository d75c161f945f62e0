use crate::tag::{Tag, TagCompound, TagError, TagKind, compound::EMPTY_COMPOUND};
use serde::{Deserialize, Deserializer, Serialize};

/// Shared empty list returned by lenient reads.
pub(super) static EMPTY_LIST: TagList = TagList::new();

///
/// TagList
///
/// Ordered list whose elements all share one kind.
/// The kind is fixed by the first element; an empty list has no kind.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagList {
    items: Vec<Tag>,
}

impl TagList {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a list, rejecting any element whose kind differs from the first.
    pub fn try_from_vec(items: Vec<Tag>) -> Result<Self, TagError> {
        if let Some(first) = items.first() {
            let expected = first.kind();
            if let Some((index, found)) = items
                .iter()
                .enumerate()
                .find(|(_, tag)| tag.kind() != expected)
            {
                return Err(TagError::ListKindMismatch {
                    index,
                    expected,
                    found: found.kind(),
                });
            }
        }

        Ok(Self { items })
    }

    /// Build a compound list; infallible because every element shares one kind.
    pub fn from_compounds(compounds: impl IntoIterator<Item = TagCompound>) -> Self {
        Self {
            items: compounds.into_iter().map(Tag::Compound).collect(),
        }
    }

    /// Element kind, or `None` while the list is empty.
    #[must_use]
    pub fn element_kind(&self) -> Option<TagKind> {
        self.items.first().map(Tag::kind)
    }

    pub fn push(&mut self, tag: impl Into<Tag>) -> Result<(), TagError> {
        let tag = tag.into();

        if let Some(expected) = self.element_kind()
            && tag.kind() != expected
        {
            return Err(TagError::ListKindMismatch {
                index: self.items.len(),
                expected,
                found: tag.kind(),
            });
        }

        self.items.push(tag);

        Ok(())
    }

    /// Append a compound; never fails on a list that only holds compounds.
    pub fn push_compound(&mut self, compound: TagCompound) -> Result<(), TagError> {
        self.push(Tag::Compound(compound))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.items.get(index)
    }

    /// Compound at `index`, or an empty compound when out of range or not a compound.
    #[must_use]
    pub fn compound_at(&self, index: usize) -> &TagCompound {
        self.items
            .get(index)
            .and_then(Tag::as_compound)
            .unwrap_or(&EMPTY_COMPOUND)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Tag>> for TagList {
    type Error = TagError;

    fn try_from(items: Vec<Tag>) -> Result<Self, Self::Error> {
        Self::try_from_vec(items)
    }
}

// Persisted lists are re-checked so a payload can never break homogeneity.
impl<'de> Deserialize<'de> for TagList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<Tag>::deserialize(deserializer)?;
        Self::try_from_vec(items).map_err(serde::de::Error::custom)
    }
}
