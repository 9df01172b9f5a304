use super::random_words;
use criterion::{criterion_group, BatchSize, Criterion, Throughput};
use patricia_dict::{tests_common, PatriciaTrie};

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    let skewed: Vec<Vec<u8>> = tests_common::generate_keys_skewed(u8::MAX as usize)
        .map(Vec::from)
        .collect();
    let nested: Vec<Vec<u8>> = tests_common::generate_keys_nested(u8::MAX as usize)
        .map(Vec::from)
        .collect();
    let words = random_words(10_000);

    for (name, keys) in [("skewed", &skewed), ("nested", &nested), ("words", &words)] {
        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_function(name, |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut trie = PatriciaTrie::new();
                    for (value, key) in keys.into_iter().enumerate() {
                        trie.insert(key, value);
                    }
                    trie
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("suburbs/try_insert", |b| {
        b.iter(|| {
            let mut trie = PatriciaTrie::new();
            for (value, name) in tests_common::SUBURBS.iter().enumerate() {
                let _ = std::hint::black_box(trie.try_insert(name, value));
            }
            trie
        })
    });
}

criterion_group!(bench_insert_group, bench);
