//! Choice producers: uniform random draws and no-repeat grab bags.

use rand::Rng;
use rand::rngs::StdRng;

use crate::choice::Choice;

/// Draw one choice uniformly at random, with replacement across calls.
pub fn random_choice<C: Choice>(rng: &mut StdRng) -> C {
    let all = C::all();
    all[rng.random_range(0..all.len())]
}

/// A pool that hands out its items in random order without repeats.
///
/// Once every item has been drawn the pool refills itself and drawing
/// continues. Items added after construction join the current pass.
#[derive(Debug, Clone)]
pub struct GrabBag<T> {
    items: Vec<T>,
    remaining: Vec<usize>,
}

impl<T: Clone> GrabBag<T> {
    /// Create a bag holding `items`.
    pub fn new(items: Vec<T>) -> Self {
        let remaining = (0..items.len()).collect();
        Self { items, remaining }
    }

    /// Add an item to the pool, available in the current pass.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
        self.remaining.push(self.items.len() - 1);
    }

    /// Draw a random item not yet seen this pass, or `None` if the bag
    /// holds nothing at all.
    pub fn draw(&mut self, rng: &mut StdRng) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        if self.remaining.is_empty() {
            self.refill();
        }
        let slot = rng.random_range(0..self.remaining.len());
        let index = self.remaining.swap_remove(slot);
        Some(self.items[index].clone())
    }

    /// Make every item available again, starting a fresh pass.
    pub fn refill(&mut self) {
        self.remaining = (0..self.items.len()).collect();
    }

    /// Number of items in the pool.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
