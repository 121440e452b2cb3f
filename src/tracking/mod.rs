//! Per-pointer tracking

pub mod cache;

pub use cache::{CacheSnapshot, PointerCache, PointerTrack};
