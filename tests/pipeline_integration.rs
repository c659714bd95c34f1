//! End-to-end pipeline tests: train, extract, normalize.

use std::collections::HashMap;

use lexspan::{
    Entity, EntityExtractor, MemoryLabeler, SynonymMapper, TokenLabel, TrainOptions,
    TrainingExample, Tokenizer, WhitespaceTokenizer, resolve_spans,
};

fn tokens(text: &str) -> Vec<String> {
    WhitespaceTokenizer::new().tokenize(text)
}

fn trained_extractor(examples: &[TrainingExample]) -> EntityExtractor<MemoryLabeler> {
    let mut extractor = EntityExtractor::new(MemoryLabeler::new());
    extractor
        .train(examples, &WhitespaceTokenizer::new(), &TrainOptions::default())
        .unwrap();
    extractor
}

#[test]
fn test_train_extract_normalize() {
    let extractor = trained_extractor(&[
        TrainingExample::new(
            "show me chines restaurants",
            vec![Entity::new("cuisine", "chines", 8, 14)],
        ),
        TrainingExample::new(
            "fly to new york",
            vec![Entity::new("city", "new york", 7, 15)],
        ),
    ]);

    let text = "any chines places in new york";
    let mut entities = extractor.process(text, &tokens(text), &()).unwrap();

    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].entity, "cuisine");
    assert_eq!(entities[0].value, "chines");
    assert_eq!(entities[1].entity, "city");
    assert_eq!(entities[1].value, "new york");
    // Span exactness before normalization
    for e in &entities {
        assert_eq!(&text[e.start..e.end], e.value);
    }

    let synonyms = SynonymMapper::new(HashMap::from([
        ("chines".to_string(), "chinese".to_string()),
        ("NYC".to_string(), "New York City".to_string()),
    ]));
    synonyms.replace_synonyms(&mut entities);

    // Values rewritten, spans untouched
    assert_eq!(entities[0].value, "chinese");
    assert_eq!(&text[entities[0].start..entities[0].end], "chines");
    assert_eq!(entities[1].value, "new york");
}

#[test]
fn test_whitespace_heavy_input() {
    let extractor = trained_extractor(&[TrainingExample::new(
        "fly to new york",
        vec![Entity::new("city", "new york", 7, 15)],
    )]);

    let text = "leaving\tfor \n\n  new \t\t york   today";
    let entities = extractor.process(text, &tokens(text), &()).unwrap();

    assert_eq!(entities.len(), 1);
    assert_eq!(&text[entities[0].start..entities[0].end], entities[0].value);
    assert!(entities[0].value.starts_with("new"));
    assert!(entities[0].value.ends_with("york"));
}

#[test]
fn test_entities_ordered_and_non_overlapping() {
    let extractor = trained_extractor(&[
        TrainingExample::new("to paris", vec![Entity::new("city", "paris", 3, 8)]),
        TrainingExample::new("to rome", vec![Entity::new("city", "rome", 3, 7)]),
    ]);

    let text = "paris rome paris rome paris";
    let entities = extractor.process(text, &tokens(text), &()).unwrap();

    assert_eq!(entities.len(), 5);
    for pair in entities.windows(2) {
        assert!(pair[0].end <= pair[1].start, "spans must not overlap: {pair:?}");
    }
    for e in &entities {
        assert_eq!(&text[e.start..e.end], e.value);
    }
}

#[test]
fn test_repeated_tokens_resolve_to_distinct_spans() {
    // Both labeled ranges name the same token text; the cursor must
    // bind the second one to the later occurrence.
    let text = "york street in york";
    let labeled = [TokenLabel::new(0..1, "city"), TokenLabel::new(3..4, "city")];
    let entities = resolve_spans(text, &tokens(text), &labeled).unwrap();
    assert_eq!(entities[0].start, 0);
    assert_eq!(entities[1].start, 15);
}

#[test]
fn test_untrained_extractor_is_inert() {
    let extractor = EntityExtractor::new(MemoryLabeler::new());
    for text in ["", "some words", "new york"] {
        let entities = extractor.process(text, &tokens(text), &()).unwrap();
        assert!(entities.is_empty());
    }
}
