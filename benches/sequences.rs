use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mysterious_collections::{DynamicArray, LinkedList};

/// A scrambled but repeatable run of numbers, so every sort sees the same
/// input.
fn scrambled(n: usize) -> Vec<u32> {
    let mut x: u32 = 0x2545_f491;
    (0..n)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let n = 1024;
    let input: DynamicArray<u32> = scrambled(n).into_iter().collect();

    let mut group = c.benchmark_group("DynamicArray sort (1024)");
    group.bench_function("merge_sort", |b| {
        b.iter(|| {
            let mut array = input.clone();
            array.merge_sort();
            array
        })
    });

    group.bench_function("quick_sort", |b| {
        b.iter(|| {
            let mut array = input.clone();
            array.quick_sort();
            array
        })
    });

    group.bench_function("std::vec::Vec::sort", |b| {
        b.iter(|| {
            let mut v: Vec<u32> = input.iter().copied().collect();
            v.sort();
            v
        })
    });
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let n = 256;

    let mut group = c.benchmark_group("Sequence insert at middle (256)");
    group.bench_function("DynamicArray", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            for i in 0..n {
                array.insert(black_box(i), i / 2).unwrap();
            }
            array
        })
    });

    group.bench_function("LinkedList", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..n {
                list.insert(black_box(i), i / 2).unwrap();
            }
            list
        })
    });
    group.finish();

    let mut group = c.benchmark_group("Sequence push front (256)");
    group.bench_function("DynamicArray", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            for i in 0..n {
                array.insert(black_box(i), 0).unwrap();
            }
            array
        })
    });

    group.bench_function("LinkedList", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..n {
                list.push_front(black_box(i));
            }
            list
        })
    });
    group.finish();
}

criterion_group!(benches, bench_sort, bench_insert);
criterion_main!(benches);
