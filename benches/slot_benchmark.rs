use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genslot::order::{DynComparator, SmallerCmpFn, SmallerDefault, StrictOrder};
use genslot::slot::{self, Slot};
use genslot::types::compare;
use genslot::ParamSlot;

fn bench_small_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Small Value Roundtrip");
    let size = 1000;

    group.bench_function("Box<u32>", |b| {
        b.iter(|| {
            for i in 0..size {
                let boxed = Box::new(black_box(i as u32));
                black_box(*boxed);
            }
        })
    });

    group.bench_function("Slot<u32>", |b| {
        b.iter(|| {
            for i in 0..size {
                let mut s = slot::copy(&black_box(i as u32));
                unsafe {
                    black_box(*slot::const_access::<u32>(&s));
                    slot::clear::<u32>(&mut s);
                }
            }
        })
    });

    group.finish();
}

fn bench_big_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Big Value Roundtrip");
    let size = 1000;
    let value = [7u64; 4];

    group.bench_function("Box<[u64; 4]>", |b| {
        b.iter(|| {
            for _ in 0..size {
                let boxed = Box::new(black_box(value));
                black_box(boxed[0]);
            }
        })
    });

    group.bench_function("Slot<[u64; 4]>", |b| {
        b.iter(|| {
            for _ in 0..size {
                let mut s = slot::copy(&black_box(value));
                unsafe {
                    black_box(slot::const_access::<[u64; 4]>(&s)[0]);
                    slot::clear::<[u64; 4]>(&mut s);
                }
            }
        })
    });

    group.bench_function("ParamSlot<[u64; 4]>", |b| {
        b.iter(|| {
            for _ in 0..size {
                let p = ParamSlot::from_value(black_box(value));
                black_box(p[0]);
            }
        })
    });

    group.finish();
}

fn bench_slot_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("Slot Array Fill");
    let size = 1000;

    group.bench_function("Vec<Box<i64>>", |b| {
        b.iter(|| {
            let v: Vec<Box<i64>> = (0..size).map(|i| Box::new(black_box(i))).collect();
            black_box(v.len());
        })
    });

    group.bench_function("Vec<Slot> i64", |b| {
        b.iter(|| {
            let mut v: Vec<Slot> = (0..size).map(|i: i64| slot::copy(&black_box(i))).collect();
            black_box(v.len());
            for s in &mut v {
                unsafe { slot::clear::<i64>(s) };
            }
        })
    });

    group.finish();
}

fn by_magnitude(a: &i64, b: &i64) -> i32 {
    compare(&a.unsigned_abs(), &b.unsigned_abs())
}

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("Predicate Sort");
    let data: Vec<i64> = (0..1000).map(|i| (i * 7919) % 1009 - 504).collect();

    group.bench_function("slice::sort_unstable", |b| {
        b.iter(|| {
            let mut v = data.clone();
            v.sort_unstable();
            black_box(v);
        })
    });

    group.bench_function("SmallerDefault", |b| {
        b.iter(|| {
            let mut v = data.clone();
            SmallerDefault::<i64>::new().sort(&mut v);
            black_box(v);
        })
    });

    group.bench_function("SmallerCmpFn", |b| {
        b.iter(|| {
            let mut v = data.clone();
            SmallerCmpFn::<i64>::new(by_magnitude).sort(&mut v);
            black_box(v);
        })
    });

    group.bench_function("DynComparator::owned", |b| {
        let cmp = DynComparator::<i64>::owned(by_magnitude);
        b.iter(|| {
            let mut v = data.clone();
            v.sort_by(|x, y| genslot::types::ordering_of(cmp.try_compare(x, y).unwrap_or(0)));
            black_box(v);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_small_roundtrip,
    bench_big_roundtrip,
    bench_slot_array,
    bench_predicates
);
criterion_main!(benches);
