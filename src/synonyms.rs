//! Synonym normalization.
//!
//! Collapses surface variants of an entity value to one canonical
//! string. Lookup is exact-key and case-sensitive; a miss is the
//! common case, not a failure. Only the `value` field of a record is
//! ever rewritten — spans, tags, ordering and count are untouched, so
//! offsets into the original text stay valid.

use std::collections::HashMap;

use crate::entity::Entity;

/// Static surface-form → canonical-form mapping.
///
/// The table is loaded once at construction and immutable afterward;
/// an empty table is a valid no-op mapper. Because it is read-only, a
/// mapper can be shared by concurrent callers of
/// [`replace_synonyms`](SynonymMapper::replace_synonyms).
#[derive(Debug, Clone, Default)]
pub struct SynonymMapper {
    synonyms: HashMap<String, String>,
}

impl SynonymMapper {
    /// Create a mapper over the given synonym table.
    #[must_use]
    pub fn new(synonyms: HashMap<String, String>) -> Self {
        Self { synonyms }
    }

    /// Number of synonym entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    /// Whether the table is empty (the no-op state).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    /// Rewrite entity values to their canonical forms, in place.
    ///
    /// For each record whose `value` is an exact key in the table, the
    /// value is replaced with the mapped canonical string. Everything
    /// else — `entity`, `start`, `end`, record order and count — is
    /// preserved exactly. Idempotent unless the table maps a canonical
    /// form onward to something else.
    pub fn replace_synonyms(&self, entities: &mut [Entity]) {
        for entity in entities {
            if let Some(canonical) = self.synonyms.get(&entity.value) {
                entity.value = canonical.clone();
            }
        }
    }
}
