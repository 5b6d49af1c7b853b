use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hebphonics_rs::{parse, parse_words};

const GENESIS: &str =
    "בְּרֵאשִׁית בָּרָא אֱלֹהִים אֵת הַשָּׁמַיִם וְאֵת הָאָרֶץ";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse word", |b| {
        b.iter(|| parse(black_box("בְּרֵאשִׁית")))
    });
    c.bench_function("parse verse", |b| {
        b.iter(|| parse_words(black_box(GENESIS)))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
