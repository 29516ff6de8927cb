//! Quote corpus
//!
//! The built-in quote collection and the source trait frontends draw from.

use rand::seq::SliceRandom;

use crate::data::types::Quote;

/// A source of quotes to present
///
/// The core only draws from a source; it never mutates or persists one.
pub trait QuoteSource {
    /// Display name for the source
    fn name(&self) -> &'static str;

    /// All quotes this source can produce
    fn all(&self) -> &[Quote];

    /// Pick one quote at random; `None` only if the source is empty
    fn pick_random(&self) -> Option<Quote> {
        self.all().choose(&mut rand::thread_rng()).cloned()
    }
}

/// The built-in motivational corpus
pub struct BuiltinCorpus {
    quotes: Vec<Quote>,
}

impl BuiltinCorpus {
    pub fn new() -> Self {
        let quotes = [
            "Believe in yourself.",
            "Keep going. You’re getting there.",
            "Small steps every day.",
            "Discipline beats motivation.",
            "You are stronger than you think.",
            "Focus on progress, not perfection.",
            "Start where you are. Use what you have. Do what you can.",
            "Your only limit is you.",
            "Consistency compounds.",
            "Dream big. Start small. Act now.",
        ]
        .into_iter()
        .map(|text| Quote::new(text, "Anonymous"))
        .collect();

        Self { quotes }
    }
}

impl Default for BuiltinCorpus {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSource for BuiltinCorpus {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn all(&self) -> &[Quote] {
        &self.quotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptySource;

    impl QuoteSource for EmptySource {
        fn name(&self) -> &'static str {
            "empty"
        }

        fn all(&self) -> &[Quote] {
            &[]
        }
    }

    #[test]
    fn test_builtin_corpus_is_well_formed() {
        let corpus = BuiltinCorpus::new();

        assert_eq!(corpus.all().len(), 10);
        for quote in corpus.all() {
            assert!(!quote.text.is_empty());
            assert_eq!(quote.author, "Anonymous");
        }
    }

    #[test]
    fn test_pick_random_returns_a_corpus_member() {
        let corpus = BuiltinCorpus::new();

        for _ in 0..20 {
            let picked = corpus.pick_random().unwrap();
            assert!(corpus.all().contains(&picked));
        }
    }

    #[test]
    fn test_pick_random_from_empty_source_is_none() {
        assert!(EmptySource.pick_random().is_none());
    }
}
