//! Tokenization capability.
//!
//! Tokenization itself is an external concern; the extractor only
//! needs two index-aligned views over the same input: the token
//! strings, and the byte offset at which each token begins. Any
//! tokenizer that never reorders or rewrites token text satisfies the
//! contract (whitespace between tokens may be arbitrary).

/// Tokenization capability consumed by the extractor.
///
/// Both views must be callable from the same input and stay
/// index-aligned: `tokenize(text)[i]` starts at byte
/// `tokenize_with_offsets(text).1[i]` in `text`.
pub trait Tokenizer: Send + Sync {
    /// Split text into an ordered sequence of tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Split text into tokens plus the byte offset each token begins at.
    fn tokenize_with_offsets(&self, text: &str) -> (Vec<String>, Vec<usize>);
}

/// Offset-preserving whitespace tokenizer.
///
/// Splits on Unicode whitespace and keeps every non-whitespace run as
/// one token. This is the reference implementation; production callers
/// typically plug in whatever tokenizer their labeling backend was
/// trained with.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenize_with_offsets(text).0
    }

    fn tokenize_with_offsets(&self, text: &str) -> (Vec<String>, Vec<usize>) {
        let mut tokens = Vec::new();
        let mut offsets = Vec::new();
        let mut start = None;

        for (i, c) in text.char_indices() {
            if c.is_whitespace() {
                if let Some(s) = start.take() {
                    tokens.push(text[s..i].to_string());
                    offsets.push(s);
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            tokens.push(text[s..].to_string());
            offsets.push(s);
        }

        (tokens, offsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        let tk = WhitespaceTokenizer::new();
        let tokens = tk.tokenize("show me chinese restaurants");
        assert_eq!(tokens, vec!["show", "me", "chinese", "restaurants"]);
    }

    #[test]
    fn test_offsets_aligned() {
        let tk = WhitespaceTokenizer::new();
        let text = "  hello   world\tagain\n";
        let (tokens, offsets) = tk.tokenize_with_offsets(text);
        assert_eq!(tokens.len(), offsets.len());
        for (token, &off) in tokens.iter().zip(&offsets) {
            assert_eq!(&text[off..off + token.len()], token);
        }
    }

    #[test]
    fn test_empty_and_blank() {
        let tk = WhitespaceTokenizer::new();
        assert!(tk.tokenize("").is_empty());
        assert!(tk.tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_unicode_text() {
        let tk = WhitespaceTokenizer::new();
        let text = "café  €50";
        let (tokens, offsets) = tk.tokenize_with_offsets(text);
        assert_eq!(tokens, vec!["café", "€50"]);
        assert_eq!(offsets[0], 0);
        assert_eq!(&text[offsets[1]..], "€50");
    }
}
