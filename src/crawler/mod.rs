//! Crawler module: fetch, extract, schedule, aggregate
//!
//! Only the composed crawl operation is public; fetching, extraction, and
//! aggregation are internal stages whose contracts are exercised by the crawl
//! entry points and their tests.

mod aggregator;
mod coordinator;
mod extractor;
mod fetcher;
mod scheduler;

pub use coordinator::{crawl_site, Coordinator};
