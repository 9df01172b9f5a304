use super::random_words;
use criterion::{criterion_group, Criterion};
use patricia_dict::{tests_common::SUBURBS, ComparisonInfo, PatriciaTrie};

fn bench(c: &mut Criterion) {
    let suburbs: PatriciaTrie<_> = SUBURBS.iter().zip(0usize..).collect();
    let words: PatriciaTrie<_> = random_words(2_000).into_iter().zip(0usize..).collect();

    let misspellings = ["Brunswik", "Fitzroy Nth", "St Kild", "Hawthorne", "Melborne"];

    let mut group = c.benchmark_group("closest");
    for query in misspellings {
        group.bench_function(format!("suburbs/search/{query}"), |b| {
            b.iter(|| {
                let mut info = ComparisonInfo::new();
                std::hint::black_box(suburbs.search(query, &mut info));
                info
            });
        });
        group.bench_function(format!("suburbs/find_closest/{query}"), |b| {
            b.iter(|| {
                let mut info = ComparisonInfo::new();
                std::hint::black_box(suburbs.find_closest(query, &mut info));
                info
            });
        });
    }

    for query in ["zzzz", "qwertyuiop"] {
        group.bench_function(format!("words/find_closest/{query}"), |b| {
            b.iter(|| {
                let mut info = ComparisonInfo::new();
                std::hint::black_box(words.find_closest(query, &mut info));
                info
            });
        });
    }
}

criterion_group!(bench_closest_group, bench);
