// src/shuffle.rs
//
// Fisher–Yates, bottom-up: walk from the last index down to 1, swapping
// each position with a uniformly drawn position at or before it. Unbiased
// for an unbiased Rng; in-place, so no element is fabricated or dropped.

use rand::Rng;

pub fn shuffle<T>(items: &mut [T], rng: &mut impl Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Owned convenience for call sites that just want a fresh ordering.
pub fn shuffled<T>(mut items: Vec<T>) -> Vec<T> {
    shuffle(&mut items, &mut rand::thread_rng());
    items
}
