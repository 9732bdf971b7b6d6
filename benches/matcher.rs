use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use retrace::{MatchConfig, MatchVerdict, Pattern};

fn random_lowercase(len: usize) -> String {
    let mut rng = StdRng::from_seed([0xEE; 32]);
    (0..len)
        .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
        .collect()
}

pub fn literal_and_class_matching(instance: &mut Criterion) {
    let pattern = Pattern::compile("[a-z]*x[a-z]*").expect("pattern should compile");
    let config = MatchConfig::default();

    let mut group = instance.benchmark_group("class scan");
    for text_len in [16usize, 64, 256, 1024] {
        group.throughput(Throughput::Bytes(text_len as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(text_len),
            &text_len,
            |bencher, len| {
                let mut text = random_lowercase(*len);
                text.push('x');
                bencher.iter(|| {
                    let verdict = pattern.is_match_with(black_box(&text), black_box(&config));
                    assert_eq!(verdict, MatchVerdict::Matched);
                });
            },
        );
    }
    group.finish();
}

pub fn backtracking_budget(instance: &mut Criterion) {
    let pattern = Pattern::compile("(a|aa)+c").expect("pattern should compile");
    let config = MatchConfig::builder()
        .step_limit(10_000)
        .build()
        .expect("config should build");

    let mut group = instance.benchmark_group("adversarial timeout");
    for text_len in [32usize, 48, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(text_len),
            &text_len,
            |bencher, len| {
                let text = "a".repeat(*len);
                bencher.iter(|| {
                    let verdict = pattern.is_match_with(black_box(&text), black_box(&config));
                    assert_eq!(verdict, MatchVerdict::Timeout);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, literal_and_class_matching, backtracking_budget);
criterion_main!(benches);
