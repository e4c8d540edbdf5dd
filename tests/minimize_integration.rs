//! Integration tests for trie minimization

use trie_minimize::minimize::{minimize, MinimizeError, MinimizeOptions};
use trie_minimize::prelude::*;
use trie_minimize::trie::NodeList;

/// Adjacency-list automaton for inputs a `Trie` cannot represent.
struct Adjacency {
    alphabet: Alphabet,
    root: usize,
    finals: Vec<bool>,
    edges: Vec<Vec<(usize, usize)>>,
    misaligned: Option<usize>,
}

impl Adjacency {
    fn new(finals: Vec<bool>, edges: Vec<Vec<(usize, usize)>>) -> Self {
        Adjacency {
            alphabet: Alphabet::new("ab".chars()),
            root: 0,
            finals,
            edges,
            misaligned: None,
        }
    }
}

impl Automaton for Adjacency {
    type Payload = ();

    fn len(&self) -> usize {
        self.edges.len()
    }

    fn root(&self) -> usize {
        self.root
    }

    fn is_final(&self, node: usize) -> bool {
        self.finals[node]
    }

    fn letters(&self, node: usize) -> NodeList {
        let mut letters: NodeList = self.edges[node].iter().map(|&(s, _)| s).collect();
        if self.misaligned == Some(node) {
            letters.push(0);
        }
        letters
    }

    fn children(&self, node: usize) -> NodeList {
        self.edges[node].iter().map(|&(_, c)| c).collect()
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

fn trie(words: &[&str]) -> Trie {
    Trie::from_words(words, TrieConfig::default()).unwrap()
}

#[test]
fn test_crossed_two_letter_words() {
    let t = trie(&["ab", "ba"]);
    assert_eq!(t.len(), 5);

    let m = minimize(&t, &MinimizeOptions::default()).unwrap();
    assert!(m.trie.len() < 5);
    assert_eq!(m.trie.words(), vec!["ab", "ba"]);
}

#[test]
fn test_single_letter_words_collapse_to_two_states() {
    let t = trie(&["a", "b"]);
    assert_eq!(t.len(), 3);

    let m = minimize(&t, &MinimizeOptions::default()).unwrap();
    assert_eq!(m.trie.len(), 2);
    assert_eq!(m.stats().merged_nodes, 1);
}

#[test]
fn test_single_final_root() {
    let g = Adjacency::new(vec![true], vec![vec![]]);
    let m = minimize(&g, &MinimizeOptions::default().return_groups(true)).unwrap();
    assert_eq!(m.trie.len(), 1);
    assert!(m.trie.is_final(m.trie.root()));
    assert_eq!(m.node_classes, Some(vec![0]));
    assert_eq!(m.trie.words(), vec![""]);
}

#[test]
fn test_all_distinct_signatures_give_bijection() {
    // root -a-> "a"(final) -b-> "ab" -a-> "aba"(final): no two alike
    let t = trie(&["a", "aba"]);
    let m = minimize(&t, &MinimizeOptions::default().return_groups(true)).unwrap();
    assert_eq!(m.trie.len(), t.len());

    let mut groups = m.node_classes.unwrap();
    groups.sort_unstable();
    assert_eq!(groups, (0..t.len()).collect::<Vec<_>>());
}

#[test]
fn test_suffix_sharing_dictionary() {
    let words = ["testing", "running", "walking", "talking"];
    let t = trie(&words);
    let m = minimize(&t, &MinimizeOptions::default()).unwrap();

    assert!(m.trie.len() < t.len());
    for word in words {
        assert!(m.trie.contains(word));
    }
    assert!(!m.trie.contains("tunning"));
    assert!(!m.trie.contains("walk"));
    assert_eq!(m.trie.words(), t.words());
}

#[test]
fn test_groups_map_to_accepting_states() {
    let t = trie(&["car", "cart", "bar", "bart"]);
    let m = minimize(&t, &MinimizeOptions::default().return_groups(true)).unwrap();
    let groups = m.node_classes.as_ref().unwrap();
    assert_eq!(groups.len(), t.len());
    for node in 0..t.len() {
        assert_eq!(t.is_final(node), m.trie.is_final(groups[node]));
    }
    assert_eq!(groups[t.root()], m.trie.root());
    assert_eq!(
        groups[t.descend("car").unwrap()],
        groups[t.descend("bar").unwrap()]
    );
}

#[test]
fn test_dag_input_is_accepted() {
    // 0 -a-> 1, 0 -b-> 1, 1 -a-> 2 (final)
    let g = Adjacency::new(
        vec![false, false, true],
        vec![vec![(0, 1), (1, 1)], vec![(0, 2)], vec![]],
    );
    let m = minimize(&g, &MinimizeOptions::default()).unwrap();
    assert_eq!(m.trie.len(), 3);
    assert!(m.trie.contains("aa"));
    assert!(m.trie.contains("ba"));
    assert!(!m.trie.contains("a"));
}

#[test]
fn test_edge_listing_order_does_not_split_classes() {
    // Nodes 1 and 2 have the same edges, listed in opposite order.
    let g = Adjacency::new(
        vec![false, false, false, true, true],
        vec![
            vec![(0, 1), (1, 2)],
            vec![(0, 3), (1, 4)],
            vec![(1, 4), (0, 3)],
            vec![],
            vec![],
        ],
    );
    let once = minimize(&g, &MinimizeOptions::default().return_groups(true)).unwrap();
    assert_eq!(once.trie.len(), 3);
    let groups = once.node_classes.as_ref().unwrap();
    assert_eq!(groups[1], groups[2]);
    assert_eq!(once.trie.words(), vec!["aa", "ab", "ba", "bb"]);

    let twice = minimize(&once.trie, &MinimizeOptions::default()).unwrap();
    assert_eq!(twice.trie.len(), once.trie.len());
}

#[test]
fn test_repeated_edge_symbol_rejected() {
    let g = Adjacency::new(
        vec![false, true, true],
        vec![vec![(0, 1), (0, 2)], vec![], vec![]],
    );
    assert_eq!(
        minimize(&g, &MinimizeOptions::default()).unwrap_err(),
        MinimizeError::DuplicateSymbol { node: 0, symbol: 0 }
    );
}

#[test]
fn test_empty_automaton_rejected() {
    let g = Adjacency::new(vec![], vec![]);
    assert_eq!(
        minimize(&g, &MinimizeOptions::default()).unwrap_err(),
        MinimizeError::EmptyAutomaton
    );
}

#[test]
fn test_misaligned_accessors_rejected() {
    let mut g = Adjacency::new(vec![false, true], vec![vec![(0, 1)], vec![]]);
    g.misaligned = Some(0);
    assert_eq!(
        minimize(&g, &MinimizeOptions::default()).unwrap_err(),
        MinimizeError::MisalignedTransitions {
            node: 0,
            letters: 2,
            children: 1
        }
    );
}

#[test]
fn test_unreachable_node_rejected() {
    let g = Adjacency::new(vec![false, true, true], vec![vec![(0, 1)], vec![], vec![]]);
    assert_eq!(
        minimize(&g, &MinimizeOptions::default()).unwrap_err(),
        MinimizeError::UnreachableNode { node: 2 }
    );
}

#[test]
fn test_cycle_rejected() {
    let g = Adjacency::new(vec![false, true], vec![vec![(0, 1)], vec![(1, 0)]]);
    assert_eq!(
        minimize(&g, &MinimizeOptions::default()).unwrap_err(),
        MinimizeError::CycleDetected { node: 0 }
    );
}

#[test]
fn test_symbol_outside_alphabet_rejected() {
    let g = Adjacency::new(vec![false, true], vec![vec![(5, 1)], vec![]]);
    assert_eq!(
        minimize(&g, &MinimizeOptions::default()).unwrap_err(),
        MinimizeError::SymbolOutOfRange {
            node: 0,
            symbol: 5,
            alphabet_len: 2
        }
    );
}

#[test]
fn test_non_zero_root() {
    // Root is node 2: 2 -a-> 0 (final), 2 -b-> 1 (final)
    let mut g = Adjacency::new(
        vec![true, true, false],
        vec![vec![], vec![], vec![(0, 0), (1, 1)]],
    );
    g.root = 2;
    let m = minimize(&g, &MinimizeOptions::default().return_groups(true)).unwrap();
    assert_eq!(m.trie.len(), 2);
    assert_eq!(m.trie.root(), 0);

    let groups = m.node_classes.unwrap();
    assert_eq!(groups[0], groups[1]);
    assert_eq!(groups[2], m.trie.root());
}

#[test]
fn test_payloads_follow_representatives() {
    let mut t: Trie<String> = Trie::new(Alphabet::from_words(["abc"]));
    t.insert_with("ab", "ab".to_string()).unwrap();
    t.insert_with("cb", "cb".to_string()).unwrap();
    t.insert_with("a", "a".to_string()).unwrap();

    let m = minimize(&t, &MinimizeOptions::default().make_cashed(true)).unwrap();
    let leaf = m.trie.descend("ab").unwrap();
    assert_eq!(m.trie.descend("cb"), Some(leaf));
    // The end of "ab" is scheduled before the end of "cb".
    assert_eq!(m.trie.payload(leaf).map(String::as_str), Some("ab"));
    assert_eq!(
        m.trie
            .payload(m.trie.descend("a").unwrap())
            .map(String::as_str),
        Some("a")
    );
    let populated = m.trie.data().iter().filter(|d| d.is_some()).count();
    assert_eq!(populated, 2);
}

#[test]
fn test_payloads_dropped_without_carry_over() {
    let mut t: Trie<u32> = Trie::new(Alphabet::from_words(["ab"]));
    t.insert_with("a", 1).unwrap();
    t.insert_with("b", 2).unwrap();

    let m = minimize(&t, &MinimizeOptions::default()).unwrap();
    assert_eq!(m.trie.data().len(), m.trie.len());
    assert!(m.trie.data().iter().all(Option::is_none));
}

#[test]
fn test_trie_minimized_keeps_config_and_payloads() {
    let config = TrieConfig::default().storage_mode(StorageMode::Map);
    let mut t: Trie<u32> = Trie::with_config(Alphabet::from_words(["xy"]), config);
    t.insert_with("xy", 7).unwrap();
    t.insert_with("yy", 8).unwrap();

    let m = t.minimized().unwrap();
    assert_eq!(m.graph().mode(), StorageMode::Map);
    assert_eq!(m.len(), 3);
    assert_eq!(m.payload(m.descend("yy").unwrap()), Some(&7));
}

#[test]
fn test_every_storage_mode_same_shape() {
    let t = trie(&["alpha", "alps", "beta", "bet", "gamma"]);
    let reference = minimize(&t, &MinimizeOptions::default()).unwrap().trie;
    for mode in StorageMode::all() {
        let m = minimize(&t, &MinimizeOptions::default().with_storage(mode))
            .unwrap()
            .trie;
        assert_eq!(m.graph().mode(), mode);
        assert_eq!(m.root(), reference.root());
        assert_eq!(m.finals(), reference.finals());
        for state in 0..m.len() {
            assert_eq!(m.edges(state), reference.edges(state));
        }
    }
}

#[test]
fn test_input_storage_mode_does_not_matter() {
    let words = ["stop", "step", "strap"];
    let reference = minimize(&trie(&words), &MinimizeOptions::default())
        .unwrap()
        .trie;
    for mode in StorageMode::all() {
        let t: Trie =
            Trie::from_words(words, TrieConfig::default().storage_mode(mode)).unwrap();
        let m = minimize(&t, &MinimizeOptions::default()).unwrap().trie;
        assert_eq!(m, reference);
    }
}

#[test]
fn test_precomputed_symbols_on_output() {
    let t = trie(&["ab", "ac", "b"]);
    let m = minimize(&t, &MinimizeOptions::default().precompute_symbols(Some(2)))
        .unwrap()
        .trie;
    assert!(m.future_symbols(m.root()).is_some());
    assert_eq!(m.config().precompute_symbols, Some(2));
}
