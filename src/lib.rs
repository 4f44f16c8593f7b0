mod error;
mod heap;
mod limits;

pub use error::{HeapError, Result};
pub use heap::{MaxHeap, MinHeap};
pub use limits::{HeapLimits, DEFAULT_CAPACITY, MAX_CAPACITY};

#[cfg(test)]
fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[cfg(test)]
fn bench_heap_construction() {
    use rand::prelude::*;

    let mut rng = SmallRng::seed_from_u64(0x4ea9);

    const N: usize = 1 << 16;
    let limits = HeapLimits::new(DEFAULT_CAPACITY, 1 << 20).unwrap();

    let values: Vec<u32> = (0..N).map(|_| rng.gen_range(0..1000_000)).collect();

    let mut sequential = MaxHeap::with_limits(0, limits).unwrap();
    bench("MaxHeap::push", 2, || {
        for &x in values.iter() {
            sequential.push(x).unwrap();
        }
    });
    let mut bulk = MaxHeap::new();
    bench("MaxHeap::from_vec", 2, || {
        bulk = MaxHeap::from_vec_with_limits(values.clone(), limits).unwrap();
    });
    println!(
        "swaps: push {}, from_vec {}",
        sequential.swaps(),
        bulk.swaps()
    );
    assert!(bulk.swaps() <= sequential.swaps());
    println!();

    let mut from_sequential = Vec::with_capacity(N);
    bench("MaxHeap::pop (push-built)", 1, || {
        while let Some(x) = sequential.pop() {
            from_sequential.push(x);
        }
    });
    let mut from_bulk = Vec::with_capacity(N);
    bench("MaxHeap::pop (heapified)", 1, || {
        while let Some(x) = bulk.pop() {
            from_bulk.push(x);
        }
    });

    assert_eq!(from_sequential, from_bulk);
    assert!(from_bulk.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
pub fn main() {
    bench_heap_construction();
}
