use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use typofix::{Context, Corrector};

const TYPOS: &[(&str, Context)] = &[
    ("likh", Context::Function),
    ("pus", Context::Method),
    ("agr", Context::General),
    ("math_sine", Context::Function),
    ("tiem_now", Context::Function),
    ("kyes", Context::Method),
];

/// Generate a script of N lines mixing correct calls and typos
fn generate_script(lines: usize) -> String {
    let templates = [
        "agar (x) { likh(x); }",
        "arr.pus(x + 1);",
        "naam = input_lo(\"naam: \");",
        "obj.kyes().map(f);",
        "vapas tiem_now();",
        "likho(\"likh(ignored)\");",
    ];

    let mut script = String::new();
    for i in 0..lines {
        script.push_str(templates[i % templates.len()]);
        script.push('\n');
    }
    script
}

/// Ranking with an empty cache on every iteration
fn bench_rank_cold(c: &mut Criterion) {
    let corrector = Corrector::new();

    c.bench_function("rank_cold", |b| {
        b.iter(|| {
            corrector.clear_cache();
            for (word, context) in TYPOS {
                black_box(corrector.suggest_with_confidence(black_box(word), *context, 3));
            }
        })
    });
}

/// Ranking served from a warm cache
fn bench_rank_warm(c: &mut Criterion) {
    let corrector = Corrector::new();
    for (word, context) in TYPOS {
        corrector.suggest_with_confidence(word, *context, 3);
    }

    c.bench_function("rank_warm", |b| {
        b.iter(|| {
            for (word, context) in TYPOS {
                black_box(corrector.suggest_with_confidence(black_box(word), *context, 3));
            }
        })
    });
}

/// Whole-text auto-fix over scripts of increasing length
fn bench_auto_fix(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_fix");
    let corrector = Corrector::new();

    for lines in [1, 10, 100, 1000].iter() {
        let script = generate_script(*lines);
        group.bench_with_input(BenchmarkId::new("lines", lines), &script, |b, script| {
            b.iter(|| black_box(corrector.auto_fix_code(black_box(script))))
        });
    }

    group.finish();
}

/// Parallel batch correction of independent inputs
fn bench_auto_fix_batch(c: &mut Criterion) {
    let corrector = Corrector::new();
    let inputs: Vec<String> = (0..256).map(|i| generate_script(1 + i % 8)).collect();

    c.bench_function("auto_fix_batch_256", |b| {
        b.iter(|| black_box(corrector.auto_fix_batch(black_box(&inputs))))
    });
}

criterion_group!(
    benches,
    bench_rank_cold,
    bench_rank_warm,
    bench_auto_fix,
    bench_auto_fix_batch
);
criterion_main!(benches);
