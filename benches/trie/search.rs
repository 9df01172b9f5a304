use super::random_words;
use criterion::{criterion_group, Criterion, Throughput};
use patricia_dict::{tests_common, ComparisonInfo, PatriciaTrie};
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

fn bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(69420);
    let words = random_words(10_000);
    let trie: PatriciaTrie<_> = words.iter().zip(0usize..).collect();

    let searches: Vec<_> = words.choose_multiple(&mut rng, 1_000).cloned().collect();

    let mut group = c.benchmark_group("search");
    group.throughput(Throughput::Elements(searches.len() as u64));
    group.bench_function("words/get", |b| {
        b.iter(|| {
            for search in &searches {
                std::hint::black_box(trie.get(search));
            }
        });
    });
    group.bench_function("words/exact", |b| {
        b.iter(|| {
            let mut info = ComparisonInfo::new();
            for search in &searches {
                std::hint::black_box(trie.search(search, &mut info));
            }
            info
        });
    });

    let skewed: PatriciaTrie<_> = tests_common::generate_keys_skewed(u8::MAX as usize)
        .zip(0usize..)
        .collect();
    let deepest = tests_common::generate_keys_skewed(u8::MAX as usize)
        .last()
        .unwrap_or_default();
    group.throughput(Throughput::Elements(1));
    group.bench_function("skewed/deepest", |b| {
        b.iter(|| {
            let mut info = ComparisonInfo::new();
            std::hint::black_box(skewed.search(&deepest, &mut info));
            info
        });
    });
}

criterion_group!(bench_search_group, bench);
