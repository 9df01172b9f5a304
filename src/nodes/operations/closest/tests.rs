use crate::{
    find_closest,
    tests_common::{brute_force_closest, generate_random_keys, setup_tree_from_entries, SUBURBS},
    Closest, ComparisonInfo, Key,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn closest_absent_node_has_no_candidate() {
    let mut info = ComparisonInfo::new();
    assert!(find_closest::<u32>(None, &Key::new("Kew"), &mut info).is_none());
    assert!(info.is_zero());
}

#[test]
fn closest_single_leaf() {
    let root = setup_tree_from_entries([("Kew", 1)]).unwrap();
    let mut info = ComparisonInfo::new();

    let closest = find_closest(Some(&root), &Key::new("Kensington"), &mut info).unwrap();
    assert_eq!(closest.key, b"Kew");
    assert_eq!(*closest.record, 1);
    assert_eq!(closest.distance, 8);
    assert_eq!(info.to_string(), "b0 n0 s1");
}

#[test]
fn closest_counts_only_record_nodes() {
    // split -> "A" -> "AB", and "B"
    let root = setup_tree_from_entries([("A", 1), ("AB", 2), ("B", 3)]).unwrap();
    let mut info = ComparisonInfo::new();

    let closest = find_closest(Some(&root), &Key::new("ABC"), &mut info).unwrap();
    assert_eq!(closest.key, b"AB");
    assert_eq!(closest.distance, 1);
    assert_eq!(info.string_comparisons, 3);
}

#[test]
fn closest_ordering() {
    let east = Closest {
        key: b"East",
        record: &1,
        distance: 1,
    };
    let west = Closest {
        key: b"West",
        record: &2,
        distance: 1,
    };
    let far = Closest {
        key: b"Abbotsford",
        record: &3,
        distance: 7,
    };

    assert!(east.is_closer_than(&west));
    assert!(!west.is_closer_than(&east));
    assert!(!east.is_closer_than(&east));
    assert!(west.is_closer_than(&far));

    assert_eq!(east.closer(west), east);
    assert_eq!(west.closer(east), east);
    assert_eq!(far.closer(west), west);
}

#[test]
fn closest_independent_of_insert_order() {
    let mut names = SUBURBS.to_vec();
    let forward = setup_tree_from_entries(names.iter().copied().zip(0..)).unwrap();
    names.reverse();
    let backward = setup_tree_from_entries(names.iter().copied().zip(0..)).unwrap();

    for query in ["Kew Est", "Brunswik", "South", "St Kild", "Melborne", "Yarra", "x"] {
        let key = Key::new(query);
        let a = find_closest(Some(&forward), &key, &mut ComparisonInfo::new()).unwrap();
        let b = find_closest(Some(&backward), &key, &mut ComparisonInfo::new()).unwrap();

        assert_eq!(a.key, b.key, "{query}");
        assert_eq!(a.distance, b.distance, "{query}");
        assert_eq!(
            brute_force_closest(SUBURBS, query.as_bytes()),
            Some((a.key, a.distance))
        );
    }
}

#[test]
fn closest_matches_brute_force_on_random_keys() {
    let mut rng = StdRng::seed_from_u64(0xD15_7A2CE);

    for _ in 0..20 {
        let keys = generate_random_keys(&mut rng, 48, 6, b"xyz");
        let queries = generate_random_keys(&mut rng, 32, 8, b"wxyz");
        let root = setup_tree_from_entries(keys.iter().map(|key| (key.as_slice(), ()))).unwrap();

        for query in &queries {
            let closest =
                find_closest(Some(&root), &Key::new(query), &mut ComparisonInfo::new()).unwrap();
            assert_eq!(
                brute_force_closest(&keys, query),
                Some((closest.key, closest.distance)),
                "{query:?}"
            );
        }
    }
}
