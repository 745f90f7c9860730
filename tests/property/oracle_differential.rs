//! Differential tests: the engine against a naive oracle that restates
//! each mode's matching rule directly over the tokenized corpus, with no
//! key table in between.

use proptest::prelude::*;
use suncus::{default_sanitize, default_tokenize, IndexMode, SearchConfig, SearchIndex};

// ============================================================================
// ORACLE
// ============================================================================

/// Does `token` match any indexed token of `text` under `mode`?
fn token_matches(mode: IndexMode, text: &str, token: &str) -> bool {
    default_tokenize(&default_sanitize(text))
        .iter()
        .any(|indexed| match mode {
            IndexMode::Substrings => indexed.contains(token),
            IndexMode::Prefixes => indexed.starts_with(token),
            IndexMode::ExactWords => indexed == token,
        })
}

/// The whole query contract, naively: ids whose text matches every query
/// token, ascending. Empty queries match everything.
fn oracle_search(mode: IndexMode, corpus: &[String], query: &str) -> Vec<usize> {
    let tokens = default_tokenize(&default_sanitize(query));
    (0..corpus.len())
        .filter(|&id| {
            tokens
                .iter()
                .all(|token| token_matches(mode, &corpus[id], token))
        })
        .collect()
}

fn build(mode: IndexMode, corpus: &[String]) -> SearchIndex<usize> {
    let mut index = SearchIndex::with_config(SearchConfig::new().index_mode(mode));
    for (id, text) in corpus.iter().enumerate() {
        index.index_document(id, text);
    }
    index
}

// ============================================================================
// STRATEGIES
// ============================================================================

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    let word = prop::string::string_regex("[a-c]{1,5}").unwrap();
    let text = prop::collection::vec(word, 1..5).prop_map(|words| words.join(" "));
    prop::collection::vec(text, 1..6)
}

fn mode_strategy() -> impl Strategy<Value = IndexMode> {
    prop::sample::select(vec![
        IndexMode::Substrings,
        IndexMode::Prefixes,
        IndexMode::ExactWords,
    ])
}

// ============================================================================
// DIFFERENTIAL PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Over a tiny alphabet (lots of incidental shared substrings), the
    /// engine and the oracle agree on every query.
    #[test]
    fn prop_engine_agrees_with_oracle(
        mode in mode_strategy(),
        corpus in corpus_strategy(),
        query in prop::string::string_regex("[a-c]{0,4}( [a-c]{1,4})?").unwrap(),
    ) {
        let index = build(mode, &corpus);
        prop_assert_eq!(index.search(&query), oracle_search(mode, &corpus, &query));
    }

    /// Every fragment of an indexed token finds its document in substring
    /// mode; every prefix finds it in prefix mode; the whole token finds
    /// it in exact-word mode.
    #[test]
    fn prop_fragments_of_indexed_tokens_match(corpus in corpus_strategy()) {
        let substrings = build(IndexMode::Substrings, &corpus);
        let prefixes = build(IndexMode::Prefixes, &corpus);
        let exact = build(IndexMode::ExactWords, &corpus);

        for (id, text) in corpus.iter().enumerate() {
            for token in default_tokenize(&default_sanitize(text)) {
                for start in 0..token.len() {
                    for end in start + 1..=token.len() {
                        let fragment = &token[start..end];
                        prop_assert!(
                            substrings.search(fragment).contains(&id),
                            "substring {:?} of {:?} missed doc {}", fragment, token, id
                        );
                    }
                }
                for end in 1..=token.len() {
                    prop_assert!(prefixes.search(&token[..end]).contains(&id));
                }
                prop_assert!(exact.search(&token).contains(&id));
            }
        }
    }
}

// ============================================================================
// FIXED-CORPUS DIFFERENTIAL
// ============================================================================

/// The six-document fixture, flattened the way the oracle wants it.
fn fixture_texts() -> Vec<String> {
    crate::common::DOCUMENTS
        .iter()
        .map(|doc| format!("{} {}", doc.name, doc.description))
        .collect()
}

#[test]
fn fixture_agrees_with_oracle_across_modes() {
    let texts = fixture_texts();
    let queries = [
        "", "One", "the", "the second", "three document", "four", "sec", "second", "fir", "irst",
        "楌", "堦ヴ礯", "documento 6o",
    ];

    for mode in [
        IndexMode::Substrings,
        IndexMode::Prefixes,
        IndexMode::ExactWords,
    ] {
        let index = build(mode, &texts);
        for query in queries {
            assert_eq!(
                index.search(query),
                oracle_search(mode, &texts, query),
                "{:?} under {}",
                query,
                mode
            );
        }
    }
}
