use std::hint::black_box;
use std::sync::Arc;
use std::thread;

use criterion::{Criterion, criterion_group, criterion_main};
use minque::{BoundedMinHeap, PriorityQueue};

fn insert_extract(c: &mut Criterion) {
    let queue = BoundedMinHeap::<u64>::new(50_000).unwrap();

    c.bench_function("minque_locks insert_extract", |b| {
        b.iter(|| {
            queue.insert(black_box(7), black_box(100)).unwrap();
            let extracted = queue.drain(5);
            assert_eq!(extracted, vec![7]);
        })
    });
}

fn insert_top_priority_on_large_queue(c: &mut Criterion) {
    let queue = BoundedMinHeap::<u64>::new(u16::MAX as usize + 1).unwrap();
    // -- Prepare large queue, lowest priority last
    for priority in (1..=u16::MAX).rev() {
        queue.insert(u64::from(priority), black_box(priority)).unwrap();
    }

    c.bench_function("minque_locks insert_top_priority_on_large_queue", |b| {
        b.iter(|| {
            queue.insert(black_box(0), 0).unwrap();

            let extracted = queue.extract().unwrap();
            assert_eq!(extracted, 0); //<-- the item just added wins
        });
    });
}

fn contended_insert_extract(c: &mut Criterion) {
    let queue = Arc::new(BoundedMinHeap::<u64>::new(4 * 1_000).unwrap());

    c.bench_function("minque_locks contended_insert_extract 4 threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4_u64)
                .map(|t| {
                    let queue = Arc::clone(&queue);
                    thread::spawn(move || {
                        for i in 0..1_000_u64 {
                            queue.insert(t * 1_000 + i, (i % 512) as u16).unwrap();
                        }
                        for _ in 0..1_000 {
                            // Other threads may have drained our share already
                            let _ = black_box(queue.extract());
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
            queue.drain(usize::MAX);
        })
    });
}

criterion_group!(
    benches,
    insert_extract,
    insert_top_priority_on_large_queue,
    contended_insert_extract
);
criterion_main!(benches);
