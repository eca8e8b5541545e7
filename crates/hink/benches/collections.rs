use criterion::{Criterion, criterion_group, criterion_main};
use hink::{Dictionary, Guid, Pair};
use std::hint::black_box;

fn bench_dictionary_get(c: &mut Criterion) {
    let pairs: Vec<Pair<String, u64>> = (0..64).map(|i| Pair::new(format!("key{i}"), i)).collect();
    let dict = Dictionary::try_from(pairs).unwrap();

    c.bench_function("dictionary get (64 pairs, last key)", |b| {
        b.iter(|| black_box(dict.get(black_box("key63"))));
    });
}

fn bench_guid_render(c: &mut Criterion) {
    hink::rand::seed_from([1; 32]);
    let guid = Guid::new();

    c.bench_function("guid render (struct format)", |b| {
        b.iter(|| black_box(guid.to_string_with(Some(4)).unwrap()));
    });

    c.bench_function("guid generate", |b| {
        b.iter(|| black_box(Guid::new()));
    });
}

criterion_group!(benches, bench_dictionary_get, bench_guid_render);
criterion_main!(benches);
