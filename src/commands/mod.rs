//! Command handlers
//!
//! File-based entry points used by the `gesture-replay` binary.

pub mod replay;
