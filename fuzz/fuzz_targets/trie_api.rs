#![no_main]

use libfuzzer_sys::arbitrary::{self, Arbitrary};
use patricia_dict::{
    tests_common::brute_force_closest, visitor::WellFormedChecker, ComparisonInfo, Key,
    PatriciaTrie,
};
use std::collections::BTreeMap;

#[derive(Arbitrary, Debug)]
enum Action {
    Clear,
    CheckLen,
    CheckWellFormed,
    Get(Box<[u8]>),
    Insert(Box<[u8]>),
    TryInsert(Box<[u8]>),
    Search(Box<[u8]>),
    FindClosest(Box<[u8]>),
}

libfuzzer_sys::fuzz_target!(|actions: Vec<Action>| {
    let mut trie = PatriciaTrie::<u32>::new();
    let mut oracle = BTreeMap::<Box<[u8]>, u32>::new();
    let mut next_value = 0;

    for action in actions {
        match action {
            Action::Clear => {
                trie.clear();
                oracle.clear();
            },
            Action::CheckLen => {
                assert_eq!(trie.len(), oracle.len());
                assert_eq!(trie.is_empty(), oracle.is_empty());
            },
            Action::CheckWellFormed => {
                let _ = WellFormedChecker::check_trie(&trie).unwrap();
            },
            Action::Get(key) => {
                let key = Key::new(&key);
                assert_eq!(trie.get(&key), oracle.get(key.as_bytes()));
            },
            Action::Insert(key) => {
                let key = Key::new(&key);
                let value = next_value;
                next_value += 1;

                assert_eq!(
                    trie.insert(&key, value),
                    oracle.insert(Box::from(key.as_bytes()), value)
                );
            },
            Action::TryInsert(key) => {
                let key = Key::new(&key);
                let value = next_value;
                next_value += 1;

                let result = trie.try_insert(&key, value);
                if oracle.contains_key(key.as_bytes()) {
                    assert_eq!(&*result.unwrap_err().byte_repr, key.as_bytes());
                } else {
                    assert!(result.is_ok());
                    oracle.insert(Box::from(key.as_bytes()), value);
                }
            },
            Action::Search(key) => {
                let key = Key::new(&key);
                let mut info = ComparisonInfo::new();
                let found = trie.search_entry(&key, &mut info);

                match (found, oracle.get(key.as_bytes())) {
                    (None, _) => assert!(oracle.is_empty()),
                    (Some((found_key, record)), Some(expected)) => {
                        assert_eq!(found_key, key.as_bytes());
                        assert_eq!(record, expected);
                        assert_eq!(info.string_comparisons, 0);
                    },
                    (Some((found_key, record)), None) => {
                        assert_eq!(oracle.get(found_key), Some(record));
                    },
                }
                assert!(info.node_accesses > 0 || oracle.is_empty());
            },
            Action::FindClosest(key) => {
                let key = Key::new(&key);
                let mut info = ComparisonInfo::new();
                let closest = trie.find_closest(&key, &mut info);

                let keys: Vec<_> = oracle.keys().collect();
                let expected = brute_force_closest(&keys, key.as_bytes());

                assert_eq!(closest.map(|closest| (closest.key, closest.distance)), expected);
                if let Some(closest) = closest {
                    assert_eq!(oracle.get(closest.key), Some(closest.record));
                }
                assert_eq!(info.string_comparisons, oracle.len() as u64);
            },
        }
    }
});
