//! Task queue system for main thread execution
//!
//! Allows background threads to queue work to execute on the main game thread.
//! The host drains the queue once per frame.

pub mod queue;

pub use queue::*;
