// benches/parse_eval_bench.rs
//
// Micro-benchmark for the two hot paths:
//   • Language::try_parse across the input shapes the resolution chain sees
//   • PluralFormsExpr compilation + evaluation
//
// Run with `cargo bench --bench peb`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use polang::{Language, PluralFormsExpr};

// ---------------------------------------------------------------------------
// Corpus – one sample per resolution-chain step
// ---------------------------------------------------------------------------
const CODES: &[&str] = &[
    "cs",             // strict, bare
    "pt_BR",          // strict, with country
    "sr@latin",       // strict, with variant
    "zh-Hans",        // alias
    "DE-de",          // permissive repair
    "čeština",        // native name
    "Portuguese (Brazil)", // English name
    "ca-ES-x-valencia",    // BCP-47
    "garbage input",  // full-chain miss
];

const EXPRS: &[&str] = &[
    "nplurals=1; plural=0;",
    "nplurals=2; plural=(n != 1);",
    "nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<12 || n%100>14) ? 1 : 2);",
    "nplurals=6; plural=(n==0 ? 0 : n==1 ? 1 : n==2 ? 2 : n%100>=3 && n%100<=10 ? 3 : n%100>=11 && n%100<=99 ? 4 : 5);",
];

fn bench_try_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("try_parse");
    for code in CODES {
        group.bench_function(*code, |b| {
            b.iter(|| Language::try_parse(black_box(code)));
        });
    }
    group.finish();
}

fn bench_plural_compile(c: &mut Criterion) {
    c.bench_function("plural_compile", |b| {
        b.iter(|| {
            for expr in EXPRS {
                let expr = PluralFormsExpr::new(black_box(*expr));
                black_box(expr.nplurals());
            }
        });
    });
}

fn bench_plural_evaluate(c: &mut Criterion) {
    let russian = Language::parse_strict("ru").default_plural_forms_expr();
    c.bench_function("plural_evaluate", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for n in 0..1000u64 {
                acc += russian.evaluate(black_box(n));
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_try_parse, bench_plural_compile, bench_plural_evaluate);
criterion_main!(benches);
