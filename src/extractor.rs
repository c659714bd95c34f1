//! Entity extraction over an opaque sequence labeler.
//!
//! [`EntityExtractor`] owns the trained (or absent) model handle of a
//! [`LabelingBackend`] and turns its token-index output into
//! byte-exact [`Entity`] records via the alignment in [`crate::align`].
//! "Trained" vs "untrained" is an `Option` around the handle, branched
//! on explicitly — an untrained extractor is a valid, inert state that
//! extracts nothing and persists a null descriptor.
//!
//! A single instance must not see `train` concurrently with `process`;
//! callers serialize access per instance. The handle is owned
//! exclusively by its extractor and never shared.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::align::{annotation_token_span, resolve_spans};
use crate::backend::{LabelingBackend, TokenLabel, TrainOptions, TrainingInstance};
use crate::entity::{Entity, TrainingExample};
use crate::error::Result;
use crate::tokenizer::Tokenizer;

/// File name of the persisted model artifact inside the model directory.
pub const MODEL_FILE: &str = "entity_extractor.dat";

/// Persistence descriptor handed to the orchestration layer.
///
/// Serializes as `{"entity_extractor": "<filename>"}` when a trained
/// model was written, `{"entity_extractor": null}` otherwise. The
/// filename is relative to the model directory passed to
/// [`EntityExtractor::persist`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorDescriptor {
    /// Relative path of the model artifact, or `None` if untrained
    pub entity_extractor: Option<String>,
}

/// Entity extractor wrapping an opaque sequence-labeling backend.
pub struct EntityExtractor<B: LabelingBackend> {
    backend: B,
    model: Option<B::Model>,
}

impl<B: LabelingBackend> EntityExtractor<B> {
    /// Create a fresh, untrained extractor.
    ///
    /// Until [`train`](Self::train) or [`load`](Self::load) populates
    /// the handle, [`process`](Self::process) returns an empty list.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            model: None,
        }
    }

    /// Create an extractor around an already-trained model handle.
    pub fn with_model(backend: B, model: B::Model) -> Self {
        Self {
            backend,
            model: Some(model),
        }
    }

    /// Whether a trained model handle is present.
    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Extract entities from `text`.
    ///
    /// `tokens` is the external tokenizer's output over `text` (tokens
    /// must be derivable from the text with only whitespace between
    /// them); `features` is passed through to the backend unmodified.
    /// Without a trained handle this returns `Ok(vec![])` — untrained
    /// is not an error.
    pub fn process(
        &self,
        text: &str,
        tokens: &[String],
        features: &B::Features,
    ) -> Result<Vec<Entity>> {
        let Some(model) = &self.model else {
            return Ok(Vec::new());
        };
        let labeled = self.backend.label(model, tokens, features)?;
        resolve_spans(text, tokens, &labeled)
    }

    /// Train from annotated examples.
    ///
    /// Each example is tokenized and its annotations converted to
    /// token ranges (annotations must start on token boundaries, or
    /// training aborts with [`Error::InvalidAnnotation`]). The backend
    /// is invoked only if at least one example contributed at least
    /// one entity; with zero positives the extractor stays untrained,
    /// since a labeling model cannot be trained on zero positive
    /// instances.
    ///
    /// [`Error::InvalidAnnotation`]: crate::error::Error::InvalidAnnotation
    pub fn train(
        &mut self,
        examples: &[TrainingExample],
        tokenizer: &dyn Tokenizer,
        options: &TrainOptions,
    ) -> Result<()> {
        let mut instances = Vec::with_capacity(examples.len());
        let mut found_one_entity = false;

        for example in examples {
            let tokens = tokenizer.tokenize(&example.text);
            let mut spans = Vec::with_capacity(example.entities.len());
            for annotation in &example.entities {
                let (start, end) = annotation_token_span(annotation, &example.text, tokenizer)?;
                spans.push(TokenLabel::new(start..end, annotation.entity.clone()));
                found_one_entity = true;
            }
            instances.push(TrainingInstance { tokens, spans });
        }

        if !found_one_entity {
            log::info!(
                "no entity annotations in {} examples, extractor left untrained",
                examples.len()
            );
            return Ok(());
        }

        let model = self.backend.train(&instances, options)?;
        log::info!("trained entity extractor from {} instances", instances.len());
        self.model = Some(model);
        Ok(())
    }

    /// Persist the trained model into `dir`.
    ///
    /// Writes [`MODEL_FILE`] and returns a descriptor naming it; with
    /// no trained handle, returns a null descriptor without touching
    /// the filesystem.
    pub fn persist(&self, dir: &Path) -> Result<ExtractorDescriptor> {
        match &self.model {
            Some(model) => {
                let path = dir.join(MODEL_FILE);
                self.backend.save(model, &path)?;
                log::debug!("persisted entity extractor to {}", path.display());
                Ok(ExtractorDescriptor {
                    entity_extractor: Some(MODEL_FILE.to_string()),
                })
            }
            None => Ok(ExtractorDescriptor {
                entity_extractor: None,
            }),
        }
    }

    /// Load an extractor from a persisted descriptor.
    ///
    /// With both a directory and a descriptor naming an artifact, the
    /// model is deserialized from that location. Any missing piece is
    /// the normal "component not configured" path and yields a fresh,
    /// untrained extractor, not an error.
    pub fn load(
        backend: B,
        dir: Option<&Path>,
        descriptor: Option<&ExtractorDescriptor>,
    ) -> Result<Self> {
        match (dir, descriptor.and_then(|d| d.entity_extractor.as_deref())) {
            (Some(dir), Some(file)) => {
                let model = backend.load(&dir.join(file))?;
                Ok(Self::with_model(backend, model))
            }
            _ => Ok(Self::new(backend)),
        }
    }
}
