//! Property-based tests for trie minimization.
//!
//! Properties:
//! 1. The minimal trie accepts exactly the words of the input trie
//! 2. Its size equals the number of distinct right languages of the input
//! 3. Minimizing twice changes nothing
//! 4. Finality is preserved along the node mapping
//! 5. Every storage layout yields the same automaton

use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};
use trie_minimize::prelude::*;

/// Small alphabet so that suffixes actually collide.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,6}").unwrap()
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..30)
}

fn build(words: &[String]) -> Trie {
    Trie::from_words(words, TrieConfig::default()).unwrap()
}

/// All suffixes accepted from `node`, computed by brute force.
fn right_language(trie: &Trie, node: usize) -> BTreeSet<String> {
    let mut language = BTreeSet::new();
    let mut stack = vec![(node, String::new())];
    while let Some((node, suffix)) = stack.pop() {
        if trie.is_final(node) {
            language.insert(suffix.clone());
        }
        for (symbol, child) in trie.edges(node) {
            let mut next = suffix.clone();
            next.push(trie.alphabet().symbol(symbol).unwrap());
            stack.push((child, next));
        }
    }
    language
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_same_language(words in dictionary_strategy(), probes in prop::collection::vec(word_strategy(), 0..20)) {
        let trie = build(&words);
        let minimal = minimize(&trie, &MinimizeOptions::default()).unwrap().trie;

        prop_assert_eq!(minimal.words(), trie.words());
        for probe in words.iter().chain(probes.iter()) {
            prop_assert_eq!(minimal.contains(probe), trie.contains(probe), "probe {:?}", probe);
        }
    }

    #[test]
    fn prop_size_is_number_of_right_languages(words in dictionary_strategy()) {
        let trie = build(&words);
        let minimal = minimize(&trie, &MinimizeOptions::default()).unwrap().trie;

        let languages: HashSet<BTreeSet<String>> =
            (0..trie.len()).map(|node| right_language(&trie, node)).collect();
        prop_assert_eq!(minimal.len(), languages.len());
        prop_assert!(minimal.len() <= trie.len());
    }

    #[test]
    fn prop_idempotent(words in dictionary_strategy()) {
        let trie = build(&words);
        let once = minimize(&trie, &MinimizeOptions::default()).unwrap().trie;
        let twice = minimize(&once, &MinimizeOptions::default()).unwrap().trie;

        prop_assert_eq!(twice.len(), once.len());
        prop_assert_eq!(twice.words(), once.words());
    }

    #[test]
    fn prop_deterministic(words in dictionary_strategy()) {
        let trie = build(&words);
        let first = minimize(&trie, &MinimizeOptions::default()).unwrap().trie;
        let second = minimize(&trie, &MinimizeOptions::default()).unwrap().trie;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_groups_preserve_finality_and_edges(words in dictionary_strategy()) {
        let trie = build(&words);
        let result = minimize(&trie, &MinimizeOptions::default().return_groups(true)).unwrap();
        let groups = result.node_classes.as_ref().unwrap();

        prop_assert_eq!(groups.len(), trie.len());
        prop_assert_eq!(groups[trie.root()], result.trie.root());
        for node in 0..trie.len() {
            let state = groups[node];
            prop_assert!(state < result.trie.len());
            prop_assert_eq!(trie.is_final(node), result.trie.is_final(state));
            for (symbol, child) in trie.edges(node) {
                prop_assert_eq!(result.trie.transition(state, symbol), Some(groups[child]));
            }
        }
    }

    #[test]
    fn prop_storage_modes_agree(words in dictionary_strategy()) {
        let trie = build(&words);
        let reference = minimize(&trie, &MinimizeOptions::default()).unwrap().trie;

        for mode in StorageMode::all() {
            let minimal = minimize(&trie, &MinimizeOptions::default().with_storage(mode)).unwrap().trie;
            prop_assert_eq!(minimal.root(), reference.root());
            prop_assert_eq!(minimal.finals(), reference.finals());
            for state in 0..minimal.len() {
                prop_assert_eq!(minimal.edges(state), reference.edges(state));
            }
        }
    }
}
