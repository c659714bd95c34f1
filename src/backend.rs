//! Sequence-labeling capability.
//!
//! The extractor never couples to a concrete labeling library. A
//! backend is anything that can (a) train an opaque model from
//! token-range annotated instances and (b) label a token sequence with
//! that model, plus save/load the model as a single binary artifact.
//! Swapping the labeling implementation never touches span-resolution
//! logic.

use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A labeled token range produced by a sequence labeler.
///
/// `range` indexes into the token sequence the labeler was given, not
/// into the text. Backends must return labels ordered by position with
/// non-overlapping ranges; the span resolver relies on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLabel {
    /// Token-index range (end exclusive)
    pub range: Range<usize>,
    /// Label string (the entity tag)
    pub label: String,
}

impl TokenLabel {
    /// Create a labeled token range.
    #[must_use]
    pub fn new(range: Range<usize>, label: impl Into<String>) -> Self {
        Self {
            range,
            label: label.into(),
        }
    }
}

/// One accumulated training instance: a tokenized sentence plus its
/// token-range entity annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingInstance {
    /// Token sequence of the example
    pub tokens: Vec<String>,
    /// Annotated token ranges with their labels
    pub spans: Vec<TokenLabel>,
}

/// Training configuration forwarded to the backend unmodified.
#[derive(Debug, Clone, Default)]
pub struct TrainOptions {
    /// Target location for the backend's raw training artifact
    pub artifact_path: Option<PathBuf>,
    /// Thread-count hint; the backend's internal parallelism is not
    /// otherwise observable or controllable
    pub num_threads: Option<usize>,
}

/// Sequence-labeling capability consumed by [`EntityExtractor`].
///
/// `Model` is the opaque trained handle; `Features` is whatever
/// feature representation the backend needs at inference time, passed
/// through [`EntityExtractor::process`] untouched.
///
/// [`EntityExtractor`]: crate::extractor::EntityExtractor
/// [`EntityExtractor::process`]: crate::extractor::EntityExtractor::process
pub trait LabelingBackend: Send + Sync {
    /// Opaque feature representation required at inference time.
    type Features: ?Sized;
    /// Opaque trained model handle.
    type Model: Send;

    /// Label a token sequence.
    ///
    /// Returns `(token-index-range, label)` pairs ordered by position.
    fn label(
        &self,
        model: &Self::Model,
        tokens: &[String],
        features: &Self::Features,
    ) -> Result<Vec<TokenLabel>>;

    /// Train a model from accumulated instances.
    ///
    /// Callers guarantee at least one instance carries at least one
    /// annotated span; a labeling model cannot be trained on zero
    /// positive examples.
    fn train(&self, instances: &[TrainingInstance], options: &TrainOptions)
        -> Result<Self::Model>;

    /// Serialize a trained model to a single file.
    fn save(&self, model: &Self::Model, path: &Path) -> Result<()>;

    /// Deserialize a trained model from a file.
    fn load(&self, path: &Path) -> Result<Self::Model>;
}

// =============================================================================
// In-memory backend
// =============================================================================

/// Trained state of [`MemoryLabeler`]: annotated token sequences seen
/// during training, with their labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryModel {
    patterns: Vec<(Vec<String>, String)>,
}

/// A labeling backend that memorizes annotated token sequences.
///
/// Training records every annotated token run with its label; labeling
/// scans the input left to right for memorized runs (longest match
/// first) and reports their token ranges. No generalization happens —
/// this backend exists so the extractor can be exercised and tested
/// without a native ML dependency, and as a template for wrapping a
/// real sequence labeler.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryLabeler;

impl MemoryLabeler {
    /// Create a memory labeler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LabelingBackend for MemoryLabeler {
    type Features = ();
    type Model = MemoryModel;

    fn label(
        &self,
        model: &Self::Model,
        tokens: &[String],
        _features: &Self::Features,
    ) -> Result<Vec<TokenLabel>> {
        let mut labels = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            // Longest memorized run starting at i wins. Empty patterns
            // would match everywhere without advancing the scan; train
            // rejects them, and a hand-built or deserialized model that
            // carries one is skipped here for the same reason.
            let best = model
                .patterns
                .iter()
                .filter(|(pattern, _)| !pattern.is_empty() && tokens[i..].starts_with(pattern))
                .max_by_key(|(pattern, _)| pattern.len());
            match best {
                Some((pattern, label)) => {
                    labels.push(TokenLabel::new(i..i + pattern.len(), label.clone()));
                    i += pattern.len();
                }
                None => i += 1,
            }
        }
        Ok(labels)
    }

    fn train(
        &self,
        instances: &[TrainingInstance],
        options: &TrainOptions,
    ) -> Result<Self::Model> {
        if let Some(threads) = options.num_threads {
            log::debug!("memory labeler ignores thread hint ({threads})");
        }
        let mut patterns: Vec<(Vec<String>, String)> = Vec::new();
        for instance in instances {
            for span in &instance.spans {
                if span.range.is_empty() {
                    return Err(Error::training(format!(
                        "empty annotated range {:?} for label {:?}",
                        span.range, span.label
                    )));
                }
                let tokens = instance
                    .tokens
                    .get(span.range.clone())
                    .ok_or_else(|| {
                        Error::training(format!(
                            "annotated range {:?} exceeds {} tokens",
                            span.range,
                            instance.tokens.len()
                        ))
                    })?
                    .to_vec();
                if !patterns.iter().any(|(t, l)| *t == tokens && *l == span.label) {
                    patterns.push((tokens, span.label.clone()));
                }
            }
        }
        if patterns.is_empty() {
            return Err(Error::training(
                "cannot train a labeling model with zero positive instances",
            ));
        }
        Ok(MemoryModel { patterns })
    }

    fn save(&self, model: &Self::Model, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer(std::io::BufWriter::new(file), model)?;
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Self::Model> {
        let file = std::fs::File::open(path)?;
        let model = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(model)
    }
}
