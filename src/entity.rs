//! Entity records and training-data types.

use serde::{Deserialize, Serialize};

/// A recognized named entity.
///
/// `start`/`end` are byte offsets into the original input text such
/// that `&text[start..end]` reproduces the entity's surface text
/// before any synonym normalization. Records produced for a single
/// input are ordered left to right and never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Semantic tag (e.g. "city")
    pub entity: String,
    /// Surface or canonical text of the entity
    pub value: String,
    /// Start position (byte offset in original text)
    pub start: usize,
    /// End position (byte offset, exclusive)
    pub end: usize,
}

impl Entity {
    /// Create a new entity record.
    #[must_use]
    pub fn new(
        entity: impl Into<String>,
        value: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            entity: entity.into(),
            value: value.into(),
            start,
            end,
        }
    }

    /// Byte length of the span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if this entity's span overlaps with another.
    #[must_use]
    pub fn overlaps(&self, other: &Entity) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}

/// A training example: text plus its annotated entity spans.
///
/// This is the shape the extractor's trainer consumes: an ordered
/// sequence of examples, each with byte-span annotations into `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Raw example text
    pub text: String,
    /// Annotated entity spans within `text`
    pub entities: Vec<Entity>,
}

impl TrainingExample {
    /// Create a training example.
    #[must_use]
    pub fn new(text: impl Into<String>, entities: Vec<Entity>) -> Self {
        Self {
            text: text.into(),
            entities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_overlap() {
        let e1 = Entity::new("person", "John", 0, 4);
        let e2 = Entity::new("person", "Smith", 5, 10);
        let e3 = Entity::new("person", "John Smith", 0, 10);

        assert!(!e1.overlaps(&e2));
        assert!(e1.overlaps(&e3));
        assert!(e3.overlaps(&e2));
    }

    #[test]
    fn test_entity_len() {
        let e = Entity::new("city", "Berlin", 10, 16);
        assert_eq!(e.len(), 6);
        assert!(!e.is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let e = Entity::new("city", "Berlin", 10, 16);
        let json = serde_json::to_string(&e).unwrap();
        let back: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }

    #[test]
    fn test_training_example_shape() {
        let json = r#"{"text":"show me chinese restaurants",
                       "entities":[{"entity":"cuisine","value":"chinese","start":8,"end":15}]}"#;
        let ex: TrainingExample = serde_json::from_str(json).unwrap();
        assert_eq!(ex.entities.len(), 1);
        assert_eq!(&ex.text[ex.entities[0].start..ex.entities[0].end], "chinese");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            s1 in 0usize..100,
            len1 in 1usize..50,
            s2 in 0usize..100,
            len2 in 1usize..50,
        ) {
            let e1 = Entity::new("a", "a", s1, s1 + len1);
            let e2 = Entity::new("b", "b", s2, s2 + len2);
            prop_assert_eq!(e1.overlaps(&e2), e2.overlaps(&e1));
        }

        #[test]
        fn len_matches_span(s in 0usize..100, len in 1usize..50) {
            let e = Entity::new("a", "a", s, s + len);
            prop_assert_eq!(e.len(), len);
        }
    }
}
