use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use enumtools::prelude::*;
use std::hint::black_box;

#[enumeration(flags)]
#[repr(u32)]
enum Capability {
    None = 0,
    Read = 1 << 0,
    Write = 1 << 1,
    Execute = 1 << 2,
    Share = 1 << 3,
    Archive = 1 << 4,
    Audit = 1 << 5,
    Export = 1 << 6,
    Admin = 1 << 7,
}

fn bench_flag_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("flag_queries");

    let cases = [
        ("empty", Flags::<Capability>::empty()),
        ("single", Capability::Write.into()),
        ("half", Capability::Read | Capability::Execute | Capability::Archive | Capability::Export),
        ("all", Flags::<Capability>::all()),
    ];

    for (label, flags) in cases {
        group.bench_with_input(BenchmarkId::new("flag_names", label), &flags, |b, f| {
            b.iter(|| black_box(f).flag_names());
        });

        group.bench_with_input(BenchmarkId::new("first_set_flag", label), &flags, |b, f| {
            b.iter(|| black_box(f).first_set_flag());
        });

        group.bench_with_input(BenchmarkId::new("to_formatted_string", label), &flags, |b, f| {
            b.iter(|| black_box(f).to_formatted_string());
        });
    }

    group.finish();
}

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookups");

    group.bench_function("from_name", |b| {
        b.iter(|| enumtools::from_name::<Capability>(black_box("Admin")).unwrap());
    });

    group.bench_function("from_int", |b| {
        b.iter(|| enumtools::from_int::<Capability>(black_box(1_i64 << 6)).unwrap());
    });

    group.bench_function("to_enum_fallback", |b| {
        b.iter(|| black_box("unknown").to_enum(Capability::None));
    });

    group.finish();
}

criterion_group!(benches, bench_flag_queries, bench_lookups);
criterion_main!(benches);
