//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used traits.
//!
//! # Example
//!
//! ```
//! use collect_kit::prelude::*;
//! ```

pub use crate::collector::{Collector, CollectorBase, IntoCollector, IntoCollectorBase};
pub use crate::iter::IteratorExt;
pub use crate::map::UniqueInsert;
