//! Step producers for the algorithm catalog
//!
//! Every algorithm runs to completion on a private copy of its input and
//! returns the full list of [`Step`]s describing what it did:
//! - [`sorting`]: bubble, insertion, selection, quick, merge, heap, counting, bucket
//! - [`searching`]: linear and binary search
//!
//! # Producer contract
//!
//! A producer never mutates the caller's slice, never reads the clock and never
//! performs I/O. Equal inputs give equal step lists, and the last step always
//! carries a `status` sentinel (`Sorted`, `Found` or `Not Found`).
//!
//! Each step's `line` is a 1-based line of [`Algorithm::listing`], the
//! reference code shown next to the animation.

pub mod searching;
pub mod sorting;

use crate::snapshot::Step;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Default target for the search algorithms
pub const DEFAULT_TARGET: i64 = 45;

/// Errors raised while producing a step list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProducerError {
    /// Counting and bucket sort index tables by value
    #[error("{algorithm} requires non-negative values, found {value} at index {index}")]
    NegativeValue {
        algorithm: &'static str,
        index: usize,
        value: i64,
    },

    /// Counting sort's `max + 1` table cannot be allocated
    #[error("{algorithm} cannot allocate a table for maximum value {max}")]
    TableTooLarge { algorithm: &'static str, max: i64 },

    /// A producer returned no steps at all
    #[error("{algorithm} produced an empty trace")]
    EmptyTrace { algorithm: String },

    /// Failure reported by a custom producer
    #[error("producer failed: {message}")]
    Failed { message: String },
}

/// Computes the complete step list for one run
pub trait StepProducer {
    /// Human-readable name used in logs and errors
    fn name(&self) -> &str {
        "custom producer"
    }

    fn produce(&self, input: &[i64]) -> Result<Vec<Step>, ProducerError>;
}

impl<F> StepProducer for F
where
    F: Fn(&[i64]) -> Result<Vec<Step>, ProducerError>,
{
    fn produce(&self, input: &[i64]) -> Result<Vec<Step>, ProducerError> {
        self(input)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sorting,
    Searching,
}

/// The fixed algorithm catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BubbleSort,
    InsertionSort,
    SelectionSort,
    QuickSort,
    MergeSort,
    HeapSort,
    CountingSort,
    BucketSort,
    LinearSearch { target: i64 },
    BinarySearch { target: i64 },
}

impl Algorithm {
    /// Catalog order, searches bound to [`DEFAULT_TARGET`]
    pub const ALL: [Algorithm; 10] = [
        Algorithm::BubbleSort,
        Algorithm::InsertionSort,
        Algorithm::SelectionSort,
        Algorithm::QuickSort,
        Algorithm::MergeSort,
        Algorithm::HeapSort,
        Algorithm::CountingSort,
        Algorithm::BucketSort,
        Algorithm::LinearSearch {
            target: DEFAULT_TARGET,
        },
        Algorithm::BinarySearch {
            target: DEFAULT_TARGET,
        },
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::HeapSort => "Heap Sort",
            Algorithm::CountingSort => "Counting Sort",
            Algorithm::BucketSort => "Bucket Sort",
            Algorithm::LinearSearch { .. } => "Linear Search",
            Algorithm::BinarySearch { .. } => "Binary Search",
        }
    }

    /// Kebab-case identifier, e.g. `bubble-sort`
    pub fn slug(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble-sort",
            Algorithm::InsertionSort => "insertion-sort",
            Algorithm::SelectionSort => "selection-sort",
            Algorithm::QuickSort => "quick-sort",
            Algorithm::MergeSort => "merge-sort",
            Algorithm::HeapSort => "heap-sort",
            Algorithm::CountingSort => "counting-sort",
            Algorithm::BucketSort => "bucket-sort",
            Algorithm::LinearSearch { .. } => "linear-search",
            Algorithm::BinarySearch { .. } => "binary-search",
        }
    }

    /// Look up a catalog entry by slug. Searches get [`DEFAULT_TARGET`].
    pub fn from_slug(slug: &str) -> Option<Algorithm> {
        static INDEX: OnceLock<FxHashMap<&'static str, Algorithm>> = OnceLock::new();
        INDEX
            .get_or_init(|| Self::ALL.iter().map(|a| (a.slug(), *a)).collect())
            .get(slug)
            .copied()
    }

    pub fn category(&self) -> Category {
        match self {
            Algorithm::LinearSearch { .. } | Algorithm::BinarySearch { .. } => Category::Searching,
            _ => Category::Sorting,
        }
    }

    /// Search target, if this is a search
    pub fn target(&self) -> Option<i64> {
        match self {
            Algorithm::LinearSearch { target } | Algorithm::BinarySearch { target } => {
                Some(*target)
            }
            _ => None,
        }
    }

    /// Rebind the search target; sorts are returned unchanged
    pub fn with_target(self, new_target: i64) -> Algorithm {
        match self {
            Algorithm::LinearSearch { .. } => Algorithm::LinearSearch { target: new_target },
            Algorithm::BinarySearch { .. } => Algorithm::BinarySearch { target: new_target },
            other => other,
        }
    }

    /// Reference source whose 1-based lines the steps point at
    pub fn listing(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => sorting::bubble::LISTING,
            Algorithm::InsertionSort => sorting::insertion::LISTING,
            Algorithm::SelectionSort => sorting::selection::LISTING,
            Algorithm::QuickSort => sorting::quick::LISTING,
            Algorithm::MergeSort => sorting::merge::LISTING,
            Algorithm::HeapSort => sorting::heap::LISTING,
            Algorithm::CountingSort => sorting::counting::LISTING,
            Algorithm::BucketSort => sorting::bucket::LISTING,
            Algorithm::LinearSearch { .. } => searching::linear::LISTING,
            Algorithm::BinarySearch { .. } => searching::binary::LISTING,
        }
    }

    /// Title of the auxiliary view, for algorithms that have one
    pub fn aux_label(&self) -> Option<&'static str> {
        match self {
            Algorithm::MergeSort => Some("Merge Buffer"),
            Algorithm::CountingSort => Some("Count Array"),
            Algorithm::BucketSort => Some("Buckets"),
            _ => None,
        }
    }

    /// Position in [`Algorithm::ALL`]
    pub fn catalog_index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|a| a.slug() == self.slug())
            .unwrap_or(0)
    }

    /// Next catalog entry, keeping the current search target
    pub fn next(self) -> Algorithm {
        let next = Self::ALL[(self.catalog_index() + 1) % Self::ALL.len()];
        self.carry_target(next)
    }

    /// Previous catalog entry, keeping the current search target
    pub fn prev(self) -> Algorithm {
        let len = Self::ALL.len();
        let prev = Self::ALL[(self.catalog_index() + len - 1) % len];
        self.carry_target(prev)
    }

    fn carry_target(self, other: Algorithm) -> Algorithm {
        match self.target() {
            Some(target) => other.with_target(target),
            None => other,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Some(target) => write!(f, "{} (target {})", self.name(), target),
            None => f.write_str(self.name()),
        }
    }
}

impl StepProducer for Algorithm {
    fn name(&self) -> &str {
        Algorithm::name(self)
    }

    fn produce(&self, input: &[i64]) -> Result<Vec<Step>, ProducerError> {
        match *self {
            Algorithm::BubbleSort => Ok(sorting::bubble::produce(input)),
            Algorithm::InsertionSort => Ok(sorting::insertion::produce(input)),
            Algorithm::SelectionSort => Ok(sorting::selection::produce(input)),
            Algorithm::QuickSort => Ok(sorting::quick::produce(input)),
            Algorithm::MergeSort => Ok(sorting::merge::produce(input)),
            Algorithm::HeapSort => Ok(sorting::heap::produce(input)),
            Algorithm::CountingSort => sorting::counting::produce(input),
            Algorithm::BucketSort => sorting::bucket::produce(input),
            Algorithm::LinearSearch { target } => Ok(searching::linear::produce(input, target)),
            Algorithm::BinarySearch { target } => Ok(searching::binary::produce(input, target)),
        }
    }
}

/// First negative value in `input`, as a [`ProducerError::NegativeValue`]
pub(crate) fn reject_negative(algorithm: &'static str, input: &[i64]) -> Result<(), ProducerError> {
    match input.iter().position(|&v| v < 0) {
        Some(index) => Err(ProducerError::NegativeValue {
            algorithm,
            index,
            value: input[index],
        }),
        None => Ok(()),
    }
}
