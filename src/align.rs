//! Token/text span alignment.
//!
//! Sequence labelers speak token indices; annotations and downstream
//! consumers speak byte offsets into the original text. Converting
//! between the two is lossy in the naive direction: tokenization may
//! collapse or normalize whitespace, so re-joining tokens with single
//! spaces does not generally reproduce the original substring.
//!
//! ```text
//! Text:    "fly  to\n New   York"
//! Tokens:  ["fly", "to", "New", "York"]
//! Labeled: (2..4, "city")
//!
//! "New York" != &text[?..?]   // joined with one space: wrong
//! New\s*York                  // escaped literals, any whitespace: exact
//! ```
//!
//! [`resolve_spans`] rebuilds exact byte spans by matching the escaped
//! literal text of each token joined by `\s*`, scanning forward from a
//! cursor so repeated token runs earlier in the text are never matched
//! twice. [`annotation_token_span`] goes the other way during
//! training, mapping a byte-span annotation onto token indices.

use regex::Regex;

use crate::backend::TokenLabel;
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::tokenizer::Tokenizer;

/// Resolve labeled token ranges to exact byte spans in `text`.
///
/// `tokens` must be derivable from `text` by concatenation with only
/// whitespace interspersed (no reordering, no substitution), and
/// `labeled` must be ordered by position. Each resolved span is
/// searched for starting at the end of the previous match, never from
/// the start of `text`; the returned entities satisfy
/// `&text[e.start..e.end] == e.value` and are non-overlapping in input
/// order.
///
/// The pattern is unanchored to token boundaries: the scan assumes
/// the first match at or after the cursor is the labeled occurrence.
/// If an earlier, longer token contains the labeled run's character
/// sequence as a substring (e.g. "york" inside "yorkshire") and no
/// labeled entity has moved the cursor past it, the match binds there
/// instead. Nothing checks this; it is an assumption on the input, on
/// par with the whitespace-only precondition above.
///
/// A range that cannot be re-located is a hard defect (the tokenizer
/// is not offset-consistent with the text) and aborts the whole
/// extraction with [`Error::Alignment`] rather than fabricate a span.
pub fn resolve_spans(text: &str, tokens: &[String], labeled: &[TokenLabel]) -> Result<Vec<Entity>> {
    let mut entities = Vec::with_capacity(labeled.len());
    let mut cursor = 0;

    for tl in labeled {
        let run = tokens.get(tl.range.clone()).ok_or_else(|| {
            Error::alignment(format!(
                "labeled range {:?} exceeds {} tokens",
                tl.range,
                tokens.len()
            ))
        })?;
        if run.is_empty() {
            return Err(Error::alignment(format!("empty labeled range {:?}", tl.range)));
        }

        let pattern = run
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join(r"\s*");
        let re = Regex::new(&pattern)
            .map_err(|e| Error::alignment(format!("bad token pattern: {e}")))?;

        let m = re.find(&text[cursor..]).ok_or_else(|| {
            Error::alignment(format!(
                "tokens {run:?} not found in text after byte {cursor}"
            ))
        })?;

        let (start, end) = (cursor + m.start(), cursor + m.end());
        entities.push(Entity::new(tl.label.clone(), &text[start..end], start, end));
        cursor = end;
    }

    Ok(entities)
}

/// Convert a byte-span annotation into a token-index range.
///
/// Used during training to turn human annotations into labeler input.
/// The annotation's `start` must coincide exactly with a token start
/// as produced by `tokenizer` over the full text — entities must span
/// whole tokens — otherwise this fails with
/// [`Error::InvalidAnnotation`]. Empty annotations (`start >= end`)
/// violate the record invariant and are rejected the same way.
///
/// The token-end index is computed by tokenizing the annotated slice
/// on its own and counting its tokens. This assumes the tokenizer is
/// consistent under slicing: tokenizing `&text[start..end]` in
/// isolation yields the same tokens as that region of the full
/// tokenization. Whitespace tokenizers satisfy this; context-sensitive
/// tokenizers may not.
pub fn annotation_token_span(
    annotation: &Entity,
    text: &str,
    tokenizer: &dyn Tokenizer,
) -> Result<(usize, usize)> {
    let describe = || {
        format!(
            "{}@{}..{} ({:?})",
            annotation.entity, annotation.start, annotation.end, annotation.value
        )
    };

    // start < end is part of the record invariant; an empty span would
    // tokenize to zero tokens and produce an empty token range.
    if annotation.start >= annotation.end {
        return Err(Error::invalid_annotation(describe(), text));
    }

    let slice = text
        .get(annotation.start..annotation.end)
        .ok_or_else(|| Error::invalid_annotation(describe(), text))?;

    let (_, offsets) = tokenizer.tokenize_with_offsets(text);
    let start = offsets
        .iter()
        .position(|&o| o == annotation.start)
        .ok_or_else(|| Error::invalid_annotation(describe(), text))?;

    let end = start + tokenizer.tokenize(slice).len();
    Ok((start, end))
}
