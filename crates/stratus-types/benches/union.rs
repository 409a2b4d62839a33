use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stratus_types::{TypeContext, TypeId};

fn literal_members(ctx: &mut TypeContext, count: usize) -> Vec<TypeId> {
    (0..count).rev().map(|i| ctx.string_literal(format!("value{i}"))).collect()
}

fn bench_literal_unions(c: &mut Criterion) {
    let mut group = c.benchmark_group("literal_union");

    for count in [4usize, 32, 256] {
        let mut ctx = TypeContext::new();
        let members = literal_members(&mut ctx, count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &members, |b, members| {
            b.iter(|| ctx.union_type(black_box(members.iter().copied())));
        });
    }

    group.finish();
}

fn bench_nested_unions(c: &mut Criterion) {
    let mut ctx = TypeContext::new();
    let members = literal_members(&mut ctx, 64);
    let halves: Vec<TypeId> = members
        .chunks(8)
        .map(|chunk| ctx.union_type(chunk.iter().copied()))
        .collect();

    c.bench_function("nested_union_flatten", |b| {
        b.iter(|| ctx.union_type(black_box(halves.iter().copied())));
    });
}

criterion_group!(benches, bench_literal_unions, bench_nested_unions);
criterion_main!(benches);
