//! Sorting producers
//!
//! Comparison sorts (bubble, insertion, selection, quick, merge, heap) work on
//! any integers. Counting and bucket sort index their tables by value and
//! reject negative input with [`ProducerError::NegativeValue`].
//!
//! [`ProducerError::NegativeValue`]: super::ProducerError::NegativeValue

pub mod bubble;
pub mod bucket;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

/// Status sentinel carried by the last step of every sort
pub const SORTED: &str = "Sorted";
