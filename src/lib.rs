mod heap;
mod order;

pub use heap::{EmptyHeapError, Heap, MaxHeap, MinHeap};
pub use order::{Natural, OrderFn, Reversed, TotalOrder};

use rand::prelude::*;

fn bench<F: FnOnce()>(name: &str, f: F) {
    use std::time::Instant;
    let start = Instant::now();
    f();
    println!("BENCH `{}`:\t{:?}", name, start.elapsed());
}

#[allow(dead_code)]
fn validate_heap_schedq() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 1 << 16;

    let mut values: Vec<u32> = (0..N as u32).collect();
    values.shuffle(&mut rng);

    let mut heap = MaxHeap::with_capacity(N);
    let mut std_heap = std::collections::BinaryHeap::with_capacity(N);

    println!("[Validate custom Heap]");
    for &x in values.iter() {
        heap.push(x);
        std_heap.push(x);

        assert_eq!(heap.peek().ok(), std_heap.peek());
        assert_eq!(heap.len(), std_heap.len());
    }

    while let Some(expected) = std_heap.pop() {
        assert_eq!(heap.pop(), Ok(expected));
    }
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), Err(EmptyHeapError));

    println!("Heap VALIDATED");
    println!();
}

#[allow(dead_code)]
fn bench_heap_schedq() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 1 << 20;

    let values: Vec<u64> = (0..N).map(|_| rng.gen()).collect();

    let mut std_heap = std::collections::BinaryHeap::with_capacity(N);
    bench("std::collections::BinaryHeap::push", || {
        for &x in values.iter() {
            std_heap.push(x);
        }
    });
    bench("std::collections::BinaryHeap::pop", || {
        while std_heap.pop().is_some() {}
    });
    println!();

    let mut heap = MaxHeap::with_capacity(N);
    bench("Heap::push", || {
        for &x in values.iter() {
            heap.push(x);
        }
    });
    bench("Heap::pop", || {
        while heap.pop().is_ok() {}
    });
}

#[test]
pub fn main() {
    validate_heap_schedq();
    // bench_heap_schedq();
}
