use super::*;
use crate::{
    tests_common::{brute_force_closest, generate_random_keys, SUBURBS},
    visitor::{TreeStatsCollector, WellFormedChecker},
};
use rand::{rngs::StdRng, SeedableRng};
use std::{cell::Cell, rc::Rc};

fn suburb_trie() -> PatriciaTrie<usize> {
    SUBURBS.iter().copied().zip(0..).collect()
}

#[test]
fn empty_trie() {
    let trie = PatriciaTrie::<u32>::new();
    let mut info = ComparisonInfo::new();

    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
    assert!(trie.root().is_none());
    assert_eq!(trie.get("Kew"), None);
    assert_eq!(trie.search("Kew", &mut info), None);
    assert!(trie.find_closest("Kew", &mut info).is_none());
    assert!(info.is_zero());
}

#[test]
fn insert_and_get() {
    let trie = suburb_trie();

    assert_eq!(trie.len(), SUBURBS.len());
    for (value, name) in SUBURBS.iter().enumerate() {
        assert_eq!(trie.get(name), Some(&value), "{name}");
    }
    assert_eq!(WellFormedChecker::check_trie(&trie).map(|_| ()), Ok(()));
}

#[test]
fn insert_overwrites_duplicate() {
    let mut trie = PatriciaTrie::new();

    assert_eq!(trie.insert("Richmond", 1), None);
    assert_eq!(trie.insert("Richmond", 2), Some(1));
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.get("Richmond"), Some(&2));
}

#[test]
fn try_insert_rejects_duplicate() {
    let mut trie = PatriciaTrie::new();

    trie.try_insert("Prahran", 1).unwrap();
    trie.try_insert("Prahran East", 2).unwrap();
    let err = trie.try_insert("Prahran", 3).unwrap_err();

    assert_eq!(&*err.byte_repr, b"Prahran");
    assert_eq!(
        err.to_string(),
        "Attempted to insert a key [\"Prahran\"] which is already present in the trie."
    );
    assert_eq!(trie.len(), 2);
    assert_eq!(trie.get("Prahran"), Some(&1));
}

#[test]
fn keys_stop_at_nul() {
    let mut trie = PatriciaTrie::new();
    trie.insert(b"Elwood\0Extra".as_slice(), 1);

    assert_eq!(trie.get("Elwood"), Some(&1));
    assert_eq!(trie.insert("Elwood", 2), Some(1));
    assert_eq!(trie.len(), 1);
}

#[test]
fn search_exact_match_counters() {
    let trie: PatriciaTrie<_> = [("A", 1), ("AB", 2), ("B", 3)].into_iter().collect();
    let mut info = ComparisonInfo::new();

    let (key, record) = trie.search_entry("AB", &mut info).unwrap();
    assert_eq!(key, b"AB");
    assert_eq!(*record, 2);
    // split node -> "A" -> "AB". A two node path would need "AB" directly
    // below the root, but "A" and "B" split the root at bit 6 and "AB" then
    // hangs below "A", so the exact path is three nodes long.
    assert_eq!(
        info,
        ComparisonInfo {
            bit_comparisons: 2,
            node_accesses: 3,
            string_comparisons: 0,
        }
    );
}

#[test]
fn search_single_key_counters() {
    let trie: PatriciaTrie<_> = [("Kew", 1)].into_iter().collect();
    let mut info = ComparisonInfo::new();

    assert_eq!(trie.search("Kew", &mut info), Some(&1));
    assert_eq!(info.to_string(), "b0 n1 s0");
}

#[test]
fn search_stored_prefix_matches_longer_query() {
    let trie: PatriciaTrie<_> = [("AB", 1)].into_iter().collect();
    let mut info = ComparisonInfo::new();

    let (key, _) = trie.search_entry("ABC", &mut info).unwrap();
    assert_eq!(key, b"AB");
    assert_eq!(info.to_string(), "b1 n1 s0");
}

#[test]
fn search_divergence_at_root_scans_whole_trie() {
    // 'C' = 0b0100_0011, 'H' = 0b0100_1000, 'R' = 0b0101_0010
    // "Rat" leaves the 4 bit root prefix at bit 3
    let trie: PatriciaTrie<_> = [("Hat", 2), ("Cat", 1)].into_iter().collect();
    let mut info = ComparisonInfo::new();

    let (key, record) = trie.search_entry("Rat", &mut info).unwrap();
    // both are one edit away, the smaller key wins
    assert_eq!(key, b"Cat");
    assert_eq!(*record, 1);
    assert_eq!(info.to_string(), "b0 n1 s2");
}

#[test]
fn search_divergence_below_root_scans_subtree() {
    // "Best" follows "East" down branch 0, then leaves it at bit 5
    let trie: PatriciaTrie<_> = [("East", 1), ("West", 2)].into_iter().collect();
    let mut info = ComparisonInfo::new();

    assert_eq!(trie.search("Best", &mut info), Some(&1));
    assert_eq!(info.to_string(), "b1 n2 s1");

    let mut info = ComparisonInfo::new();
    assert_eq!(trie.search("best", &mut info), Some(&2));
}

#[test]
fn closest_tie_break_prefers_smaller_key() {
    for entries in [[("East", 1), ("West", 2)], [("West", 2), ("East", 1)]] {
        let trie: PatriciaTrie<_> = entries.into_iter().collect();
        let mut info = ComparisonInfo::new();

        let closest = trie.find_closest("Best", &mut info).unwrap();
        assert_eq!(closest.key, b"East");
        assert_eq!(*closest.record, 1);
        assert_eq!(closest.distance, 1);
        assert_eq!(info.string_comparisons, 2);
        assert_eq!(info.node_accesses, 0);
    }
}

#[test]
fn closest_of_stored_key_is_itself() {
    let trie = suburb_trie();
    let mut info = ComparisonInfo::new();

    let closest = trie.find_closest("Kew", &mut info).unwrap();
    assert_eq!(closest.key, b"Kew");
    assert_eq!(closest.distance, 0);
    assert_eq!(info.string_comparisons, SUBURBS.len() as u64);
}

#[test]
fn search_follows_descent_before_scanning() {
    let trie = suburb_trie();

    // A closest-match scan only covers the subtree where the query left the
    // path, so a longer stored key below a matching prefix is preferred over
    // the prefix itself.
    for (query, expected) in [
        ("Carlton", "Carlton"),
        ("Fitzroy Nth", "Fitzroy North"),
        ("Brunswick Eas", "Brunswick East"),
        ("Hawthorne", "Hawthorn East"),
        ("Toorak Village", "Toorak"),
    ] {
        let mut info = ComparisonInfo::new();
        let (key, _) = trie.search_entry(query, &mut info).unwrap();
        assert_eq!(key, expected.as_bytes(), "{query} --> {info}");
        assert!(info.node_accesses >= 1);
    }
}

#[test]
fn search_exact_hits_never_scan() {
    let trie = suburb_trie();

    for name in SUBURBS {
        let mut info = ComparisonInfo::new();
        let (key, _) = trie.search_entry(name, &mut info).unwrap();
        assert_eq!(key, name.as_bytes());
        assert_eq!(info.string_comparisons, 0, "{name}");
        assert_eq!(info.bit_comparisons + 1, info.node_accesses, "{name}");
    }
}

#[test]
fn random_keys_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(0xC105E57);

    for _ in 0..20 {
        let keys = generate_random_keys(&mut rng, 64, 8, b"abcde");
        let queries = generate_random_keys(&mut rng, 64, 9, b"abcdef");

        let trie: PatriciaTrie<_> = keys
            .iter()
            .map(|key| (key.as_slice(), key.clone()))
            .collect();
        let mut unique = keys.clone();
        unique.sort();
        unique.dedup();

        assert_eq!(trie.len(), unique.len());
        WellFormedChecker::check_trie(&trie).unwrap();

        for key in &unique {
            assert_eq!(trie.get(key), Some(key));
        }

        for query in &queries {
            let mut info = ComparisonInfo::new();
            let closest = trie.find_closest(query, &mut info).unwrap();
            let (expected_key, expected_distance) =
                brute_force_closest(&unique, query).unwrap();

            assert_eq!(closest.key, expected_key, "{query:?}");
            assert_eq!(closest.distance, expected_distance);
            assert_eq!(info.string_comparisons, unique.len() as u64);

            let mut info = ComparisonInfo::new();
            let (key, record) = trie.search_entry(query, &mut info).unwrap();
            assert_eq!(key, record.as_slice());
            if unique.contains(query) {
                assert_eq!(key, query.as_slice());
            }
        }
    }
}

#[test]
fn clear_and_drop_release_records() {
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let drops = Rc::new(Cell::new(0));

    let mut trie = PatriciaTrie::new();
    for name in SUBURBS {
        trie.insert(name, DropCounter(Rc::clone(&drops)));
    }
    // replaced record is handed back and dropped here
    drop(trie.insert("Kew", DropCounter(Rc::clone(&drops))));
    assert_eq!(drops.get(), 1);

    trie.clear();
    assert_eq!(drops.get(), 1 + SUBURBS.len());
    assert!(trie.is_empty());
    assert!(trie.root().is_none());

    // clearing twice is a no-op
    trie.clear();
    assert_eq!(drops.get(), 1 + SUBURBS.len());

    trie.extend([("Kew", DropCounter(Rc::clone(&drops)))]);
    drop(trie);
    assert_eq!(drops.get(), 2 + SUBURBS.len());
}

#[test]
fn stats_match_len() {
    let trie = suburb_trie();
    let stats = TreeStatsCollector::collect(trie.root().unwrap());

    assert_eq!(stats.record_count(), trie.len() as u64);
    assert_eq!(
        stats.node_count() as usize,
        WellFormedChecker::check_trie(&trie).unwrap()
    );
}

#[test]
fn debug_output() {
    let trie: PatriciaTrie<_> = [("Kew", 1)].into_iter().collect();
    let rendered = format!("{trie:?}");

    assert!(rendered.starts_with("PatriciaTrie { num_entries: 1"), "{rendered}");
    assert!(rendered.contains("prefix: \"Kew\""), "{rendered}");
}
