use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minque::PriorityQueue;
use naive::NaiveQueue;

fn insert_extract(c: &mut Criterion) {
    let queue = NaiveQueue::<u64>::new(50_000).unwrap();

    c.bench_function("naive insert_extract", |b| {
        b.iter(|| {
            queue.insert(black_box(7), black_box(100)).unwrap();
            let extracted = queue.drain(5);
            assert_eq!(extracted, vec![7]);
        })
    });
}

fn insert_top_priority_on_large_queue(c: &mut Criterion) {
    let queue = NaiveQueue::<u64>::new(u16::MAX as usize + 1).unwrap();
    // -- Prepare large queue
    for priority in 1..=u16::MAX {
        queue.insert(u64::from(priority), black_box(priority)).unwrap();
    }

    c.bench_function("naive insert_top_priority_on_large_queue", |b| {
        b.iter(|| {
            queue.insert(black_box(0), 0).unwrap();

            let extracted = queue.extract().unwrap();
            assert_eq!(extracted, 0); //<-- the item just added wins
        });
    });
}

criterion_group!(benches, insert_extract, insert_top_priority_on_large_queue);
criterion_main!(benches);
