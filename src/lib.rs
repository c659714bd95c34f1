//! # lexspan
//!
//! Entity extraction with exact span resolution and synonym
//! normalization.
//!
//! - **Span resolution**: converts a sequence labeler's token-index
//!   output back into byte-exact offsets in the original, unsegmented
//!   text, robust to arbitrary inter-token whitespace
//! - **Synonym normalization**: collapses surface variants of an
//!   entity value to one canonical string without disturbing spans
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use lexspan::{
//!     EntityExtractor, Entity, MemoryLabeler, SynonymMapper,
//!     Tokenizer, TrainOptions, TrainingExample, WhitespaceTokenizer,
//! };
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let mut extractor = EntityExtractor::new(MemoryLabeler::new());
//! extractor.train(
//!     &[TrainingExample::new(
//!         "fly to new york",
//!         vec![Entity::new("city", "new york", 7, 15)],
//!     )],
//!     &tokenizer,
//!     &TrainOptions::default(),
//! )?;
//!
//! let text = "tickets to  new   york please";
//! let mut entities = extractor.process(text, &tokenizer.tokenize(text), &())?;
//! assert_eq!(&text[entities[0].start..entities[0].end], entities[0].value);
//!
//! let synonyms = SynonymMapper::new(HashMap::from([
//!     ("new   york".to_string(), "New York City".to_string()),
//! ]));
//! synonyms.replace_synonyms(&mut entities);
//! assert_eq!(entities[0].value, "New York City");
//! # Ok::<(), lexspan::Error>(())
//! ```
//!
//! ## Design
//!
//! - **Capability traits at the seams**: tokenization ([`Tokenizer`])
//!   and sequence labeling ([`LabelingBackend`]) are external
//!   collaborators behind traits, so span-resolution logic is
//!   independent of any concrete backend
//! - **Cursor-based re-matching**: labeled token runs are re-located
//!   in the text by a single forward scan, so repeated token runs
//!   earlier in the text are never matched twice
//! - **Exact or nothing**: a token range that cannot be re-located is
//!   an [`Error::Alignment`], never an approximated span — downstream
//!   consumers index into the original text
//! - **Untrained is a state, not an error**: the model handle is an
//!   `Option`; a fresh extractor processes to an empty list and
//!   persists a null descriptor

#![warn(missing_docs)]

pub mod align;
pub mod backend;
mod entity;
mod error;
pub mod extractor;
pub mod synonyms;
pub mod tokenizer;

pub use align::{annotation_token_span, resolve_spans};
pub use backend::{LabelingBackend, MemoryLabeler, MemoryModel, TokenLabel, TrainOptions, TrainingInstance};
pub use entity::{Entity, TrainingExample};
pub use error::{Error, Result};
pub use extractor::{EntityExtractor, ExtractorDescriptor, MODEL_FILE};
pub use synonyms::SynonymMapper;
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    pub use crate::backend::{LabelingBackend, TokenLabel, TrainOptions, TrainingInstance};
    pub use crate::entity::{Entity, TrainingExample};
    pub use crate::error::{Error, Result};
    pub use crate::extractor::{EntityExtractor, ExtractorDescriptor};
    pub use crate::synonyms::SynonymMapper;
    pub use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};
}
