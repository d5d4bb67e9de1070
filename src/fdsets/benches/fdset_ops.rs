use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fdsets::{kernel_select, DescriptorSet, SelectTimeout, FD_SETSIZE};

/// set / is_set / clear across the whole capacity.
fn benchmark_set_ops(c: &mut Criterion) {
    c.bench_function("fdset_set_isset_clear", |b| {
        let mut set = DescriptorSet::new();
        b.iter(|| {
            for fd in 0..FD_SETSIZE {
                set.set(black_box(fd)).unwrap();
            }
            let n = (0..FD_SETSIZE).filter(|fd| set.is_set(*fd)).count();
            for fd in 0..FD_SETSIZE {
                set.clear(black_box(fd)).unwrap();
            }
            n
        })
    });
}

/// Polling select over an increasing number of scanned descriptors.
fn benchmark_immediate_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_immediate");
    for nfds in [1, 64, 256, FD_SETSIZE] {
        group.bench_with_input(BenchmarkId::from_parameter(nfds), &nfds, |b, &nfds| {
            b.iter(|| {
                let mut w = DescriptorSet::new();
                w.set(1).unwrap();
                kernel_select(nfds, None, Some(&mut w), None, SelectTimeout::Immediate)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_set_ops, benchmark_immediate_select);
criterion_main!(benches);
