//! Behavioural and property-based tests for the PATRICIA trie.


use test_case::test_case;

use crate::data_structures::bit_string::BitString;
use crate::data_structures::patricia_trie::{PatriciaTrie, PatriciaTrieConfig, PatriciaTrieError};

const KEYS: [&str; 8] = ["0010", "0011", "0100", "0110", "0111", "1001", "1011", "1101"];

fn bits(s: &str) -> BitString {
    s.parse().unwrap()
}

/// The eight 4-bit keys above, each carrying its integer value.
fn sample_trie() -> PatriciaTrie<u32> {
    let mut trie = PatriciaTrie::new();
    for key in KEYS {
        let value = u32::from_str_radix(key, 2).unwrap();
        assert!(trie.add(bits(key), Some(value)).unwrap());
    }
    trie
}

fn rendered(keys: Vec<&BitString>) -> Vec<String> {
    keys.into_iter().map(ToString::to_string).collect()
}

#[test]
fn test_empty_trie() {
    let trie: PatriciaTrie<u32> = PatriciaTrie::new();
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
    assert!(trie.n_closest_keys(&bits("0101"), 3, None).is_empty());
    assert!(trie.match_prefix_keys(&BitString::new(), None).is_empty());
    assert!(trie.keys().is_empty());
    assert!(!trie.contains(&bits("0")));
}

#[test]
fn test_sizes() {
    let trie = sample_trie();
    assert_eq!(trie.len(), 8);
    assert_eq!(trie.subtrie_size(&BitString::new()), Some(8));
    assert_eq!(trie.subtrie_size(&bits("0")), Some(5));
    assert_eq!(trie.subtrie_size(&bits("1")), Some(3));
    assert_eq!(trie.subtrie_size(&bits("001")), Some(2));
    assert_eq!(trie.subtrie_size(&bits("0110")), Some(1));
    assert_eq!(trie.subtrie_size(&bits("11")), None);
}

#[test_case("0", Some(1))]
#[test_case("1", Some(1))]
#[test_case("01", Some(2))]
#[test_case("0010", Some(3))]
#[test_case("0100", Some(3))]
#[test_case("0110", Some(4))]
#[test_case("1101", Some(2))]
#[test_case("11", None)]
#[test_case("00", None)]
fn test_depths(key: &str, depth: Option<usize>) {
    assert_eq!(sample_trie().depth(&bits(key)), depth);
}

#[test]
fn test_lookup() {
    let trie = sample_trie();
    assert!(trie.contains(&bits("1011")));
    assert_eq!(trie.find(&bits("1011")), Some(&11));

    // Split points are found but carry no metadata
    assert!(trie.contains(&bits("011")));
    assert_eq!(trie.find(&bits("011")), None);

    assert!(!trie.contains(&bits("1111")));
    assert!(!trie.contains(&bits("10110")));
    assert_eq!(trie.find(&bits("0101")), None);
}

#[test]
fn test_duplicate_add_is_a_no_op() {
    let mut trie = sample_trie();
    assert!(!trie.add(bits("0110"), Some(99)).unwrap());
    assert_eq!(trie.find(&bits("0110")), Some(&6));

    // A split point counts as present
    assert!(!trie.add(bits("01"), Some(1)).unwrap());
    assert_eq!(trie.len(), 8);
}

#[test]
fn test_prefix_conflicts_are_rejected() {
    let mut trie = sample_trie();

    assert_eq!(
        trie.add(bits("00"), Some(0)),
        Err(PatriciaTrieError::PrefixOfStoredKey {
            key: "00".to_string(),
            stored: "001".to_string(),
        })
    );
    assert_eq!(
        trie.add(bits("01101"), Some(0)),
        Err(PatriciaTrieError::ExtendsStoredKey {
            key: "01101".to_string(),
            stored: "0110".to_string(),
        })
    );
    assert_eq!(trie.add(BitString::new(), None), Err(PatriciaTrieError::EmptyKey));

    assert_eq!(trie.len(), 8);
    assert_eq!(trie.keys().len(), 8);
}

#[test]
fn test_configured_widths() {
    let mut trie: PatriciaTrie<()> =
        PatriciaTrie::with_config(PatriciaTrieConfig::new().with_key_bits(4));
    assert!(trie.add(bits("1010"), None).unwrap());
    assert_eq!(
        trie.add(bits("101"), None),
        Err(PatriciaTrieError::KeyWidthMismatch {
            key: "101".to_string(),
            expected: 4,
            actual: 3,
        })
    );

    let mut trie: PatriciaTrie<()> =
        PatriciaTrie::with_config(PatriciaTrieConfig::new().with_max_key_bits(3));
    assert_eq!(
        trie.add(bits("1010"), None),
        Err(PatriciaTrieError::KeyTooLong {
            len: 4,
            max_bits: 3
        })
    );
    assert!(trie.is_empty());
}

#[test]
fn test_n_closest_keys_order() {
    let trie = sample_trie();
    let target = bits("0010");

    assert_eq!(
        rendered(trie.n_closest_keys(&target, 3, None)),
        ["0010", "0011", "0110"]
    );
    assert_eq!(
        rendered(trie.n_closest_keys(&target, 25, None)),
        ["0010", "0011", "0110", "0111", "0100", "1011", "1001", "1101"]
    );
    assert!(trie.n_closest_keys(&target, 0, None).is_empty());
}

#[test]
fn test_n_closest_with_absent_and_short_targets() {
    let trie = sample_trie();

    // Target need not be stored
    assert_eq!(trie.n_closest(&bits("1111"), 2, None), vec![&13, &11]);

    // Once the target runs out the 0 side comes first
    assert_eq!(
        rendered(trie.n_closest_keys(&bits("1"), 3, None)),
        ["1001", "1011", "1101"]
    );
}

#[test]
fn test_n_closest_predicate_does_not_count_rejected_leaves() {
    let trie = sample_trie();
    let odd = |value: &u32| value % 2 == 1;

    assert_eq!(trie.n_closest(&bits("0010"), 3, Some(&odd)), vec![&3, &7, &11]);
}

#[test]
fn test_leaves_without_metadata() {
    let mut trie: PatriciaTrie<&str> = PatriciaTrie::new();
    trie.add(bits("00"), Some("a")).unwrap();
    trie.add(bits("01"), None).unwrap();
    trie.add(bits("10"), Some("c")).unwrap();

    assert_eq!(trie.n_closest(&bits("01"), 2, None), vec![&"a", &"c"]);
    assert_eq!(rendered(trie.n_closest_keys(&bits("01"), 2, None)), ["01", "00"]);
    assert_eq!(trie.match_prefix(&bits("0"), None), vec![&"a"]);
    assert_eq!(rendered(trie.match_prefix_keys(&bits("0"), None)), ["00", "01"]);
}

#[test_case("00", &["0010", "0011"])]
#[test_case("0000", &[])]
#[test_case("1", &["1001", "1011", "1101"])]
#[test_case("01", &["0100", "0110", "0111"])]
#[test_case("010", &["0100"])]
#[test_case("0111", &["0111"])]
#[test_case("01110", &[])]
#[test_case("", &KEYS)]
fn test_match_prefix_keys(prefix: &str, expected: &[&str]) {
    let trie = sample_trie();
    assert_eq!(rendered(trie.match_prefix_keys(&bits(prefix), None)), expected);
}

#[test]
fn test_match_prefix_predicate_keeps_order() {
    let trie = sample_trie();
    let above_six = |value: &u32| *value > 6;

    assert_eq!(trie.match_prefix(&bits("0"), None), vec![&2, &3, &4, &6, &7]);
    assert_eq!(trie.match_prefix(&bits("0"), Some(&above_six)), vec![&7]);
    assert_eq!(
        rendered(trie.match_prefix_keys(&bits("1"), Some(&above_six))),
        ["1001", "1011", "1101"]
    );
}

#[test]
fn test_clear() {
    let mut trie = sample_trie();
    trie.clear();
    assert!(trie.is_empty());
    assert!(!trie.contains(&bits("0010")));
    assert!(trie.add(bits("0010"), Some(2)).unwrap());
    assert_eq!(trie.depth(&bits("0010")), Some(1));
}

#[test]
fn test_single_key_sits_below_root() {
    let mut trie = PatriciaTrie::new();
    trie.add(bits("101"), Some('x')).unwrap();
    assert_eq!(trie.depth(&bits("101")), Some(1));
    assert_eq!(trie.n_closest(&bits("0"), 5, None), vec![&'x']);
    assert_eq!(trie.root.to_string(), "( \\ 101)");
}

/// The key `0...01` with `zeros` leading zeros.
fn zeros_then_one(zeros: usize) -> BitString {
    let mut key = BitString::from_int(0, zeros);
    key.push(true);
    key
}

#[test_case(false ; "shortest first")]
#[test_case(true ; "longest first")]
fn test_deep_split_chain(longest_first: bool) {
    const CHAIN: usize = 4000;

    let mut order: Vec<usize> = (0..CHAIN).collect();
    if longest_first {
        order.reverse();
    }

    let mut trie = PatriciaTrie::new();
    for zeros in order {
        assert!(trie.add(zeros_then_one(zeros), Some(zeros)).unwrap());
    }

    // Split `0^k` sits at depth `k`; the two longest keys share the last one
    assert_eq!(trie.len(), CHAIN);
    assert_eq!(trie.depth(&zeros_then_one(0)), Some(1));
    assert_eq!(trie.depth(&zeros_then_one(1)), Some(2));
    assert_eq!(trie.depth(&zeros_then_one(CHAIN - 1)), Some(CHAIN - 1));
    assert_eq!(trie.depth(&zeros_then_one(CHAIN - 2)), Some(CHAIN - 1));
    assert_eq!(trie.subtrie_size(&BitString::from_int(0, 1)), Some(CHAIN - 1));
    assert_eq!(trie.find(&zeros_then_one(CHAIN - 1)), Some(&(CHAIN - 1)));

    let target = zeros_then_one(CHAIN - 1);
    assert_eq!(
        trie.n_closest(&target, 3, None),
        vec![&(CHAIN - 1), &(CHAIN - 2), &(CHAIN - 3)]
    );
    assert_eq!(trie.keys().len(), CHAIN);
    assert_eq!(
        trie.match_prefix(&BitString::from_int(0, CHAIN - 2), None),
        vec![&(CHAIN - 1), &(CHAIN - 2)]
    );

    // Rejections deep in the chain leave it intact
    assert!(!trie.add(BitString::from_int(0, CHAIN - 2), None).unwrap());
    let mut extended = zeros_then_one(CHAIN - 1);
    extended.push(false);
    assert!(matches!(
        trie.add(extended, None),
        Err(PatriciaTrieError::ExtendsStoredKey { .. })
    ));
    assert_eq!(trie.len(), CHAIN);

    drop(trie);
}
