//! Control-context tasks
//!
//! All three run on one interrupt executor at a single priority, so they
//! preempt the foreground drive loop but never each other.

pub mod conversion;
pub mod edge;
pub mod tick;

pub use conversion::conversion_task;
pub use edge::edge_task;
pub use tick::tick_task;
