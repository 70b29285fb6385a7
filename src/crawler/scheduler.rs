//! Crawl frontier
//!
//! A FIFO queue of discovered URLs plus the visited set, giving the crawl its
//! breadth-first order and visit-at-most-once guarantee. One `Frontier` is
//! constructed per crawl invocation and dropped with it, so concurrent or
//! back-to-back crawls can never leak state into each other.

use std::collections::{HashSet, VecDeque};

#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<String>,
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier containing only the seed URL
    pub fn seeded(seed: String) -> Self {
        let mut frontier = Self::default();
        frontier.queue.push_back(seed);
        frontier
    }

    /// Pops the head of the queue (breadth-first order)
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Marks a URL visited; returns false if it was already visited
    ///
    /// Called before fetching so the URL cannot be re-queued while in flight.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Appends a discovered URL to the tail unless it was already visited
    ///
    /// Duplicates may sit in the queue at the same time; the visited check at
    /// pop time makes that harmless.
    pub fn enqueue(&mut self, url: &str) {
        if !self.visited.contains(url) {
            self.queue.push_back(url.to_string());
        }
    }

    /// Number of URLs waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
