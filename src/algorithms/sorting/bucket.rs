//! Bucket sort with one bucket per element
//!
//! Value `v` goes to bucket `floor(v / (max + 1) * n)`, where `max` is at
//! least 1. The auxiliary view is the concatenation of all buckets in index
//! order. Negative values would map below bucket 0 and are rejected.

use super::SORTED;
use crate::algorithms::{reject_negative, ProducerError};
use crate::snapshot::{Markers, Step, StepRecorder, Vars};

pub const LISTING: &str = "function bucketSort(arr) {
  let n = arr.length;
  if (n <= 0) return;

  let buckets = new Array(n).fill(0).map(() => []);

  for (let i = 0; i < n; i++) {
    let idx = Math.floor(n * arr[i]); // Assuming 0-1 range, but we adapt
    buckets[idx].push(arr[i]);
  }

  for (let i = 0; i < n; i++) {
    buckets[i].sort((a, b) => a - b);
  }

  let index = 0;
  for (let i = 0; i < n; i++) {
    for (let j = 0; j < buckets[i].length; j++) {
      arr[index++] = buckets[i][j];
    }
  }
}";

/// Bucket for `value` among `n` buckets
pub fn bucket_index(value: i64, max_val: i64, n: usize) -> usize {
    let idx = (value as f64 / (max_val as f64 + 1.0) * n as f64).floor() as usize;
    // value <= max_val keeps idx < n; the clamp only guards float rounding
    idx.min(n.saturating_sub(1))
}

pub fn produce(input: &[i64]) -> Result<Vec<Step>, ProducerError> {
    reject_negative("Bucket Sort", input)?;

    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = StepRecorder::new();

    let max_val = arr.iter().copied().max().unwrap_or(1).max(1);
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); n];

    rec.record_with_aux(
        &arr,
        5,
        Vars::new()
            .with("n", n)
            .with("maxVal", max_val)
            .with("action", "Initialize Buckets"),
        Markers::new(),
        &[],
    );

    // Scatter
    for i in 0..n {
        let val = arr[i];
        let bucket_idx = bucket_index(val, max_val, n);

        rec.record_with_aux(
            &arr,
            8,
            Vars::new()
                .with("i", i)
                .with("val", val)
                .with("bucketIdx", bucket_idx)
                .with("action", "Calculate Bucket Index"),
            Markers::new().with(i, "Process"),
            &flatten(&buckets),
        );

        buckets[bucket_idx].push(val);

        rec.record_with_aux(
            &arr,
            9,
            Vars::new()
                .with("i", i)
                .with("val", val)
                .with("bucketIdx", bucket_idx)
                .with("action", "Push to Bucket"),
            Markers::new().with(i, "Pushed"),
            &flatten(&buckets),
        );
    }

    // Sort each non-empty bucket
    for i in 0..n {
        if buckets[i].is_empty() {
            continue;
        }

        rec.record_with_aux(
            &arr,
            13,
            Vars::new()
                .with("i", i)
                .with("bucket", format_bucket(&buckets[i]))
                .with("action", "Sort Bucket"),
            Markers::new(),
            &flatten(&buckets),
        );

        buckets[i].sort();

        rec.record_with_aux(
            &arr,
            13,
            Vars::new()
                .with("i", i)
                .with("bucket", format_bucket(&buckets[i]))
                .with("action", "Bucket Sorted"),
            Markers::new(),
            &flatten(&buckets),
        );
    }

    // Gather
    let mut index = 0usize;
    for i in 0..n {
        for j in 0..buckets[i].len() {
            let val = buckets[i][j];
            rec.record_with_aux(
                &arr,
                18,
                Vars::new()
                    .with("i", i)
                    .with("j", j)
                    .with("val", val)
                    .with("index", index)
                    .with("action", "Gather from Bucket"),
                Markers::new().with(index, "Target"),
                &flatten(&buckets),
            );

            arr[index] = val;
            index += 1;

            rec.record_with_aux(
                &arr,
                19,
                Vars::new()
                    .with("i", i)
                    .with("j", j)
                    .with("val", val)
                    .with("index", index)
                    .with("action", "Placed in Array"),
                Markers::new().with(index - 1, "Placed"),
                &flatten(&buckets),
            );
        }
    }

    rec.record_with_aux(&arr, 1, Vars::new().with("status", SORTED), Markers::new(), &[]);
    Ok(rec.finish())
}

/// All buckets' current contents, concatenated in bucket order
fn flatten(buckets: &[Vec<i64>]) -> Vec<i64> {
    buckets.iter().flatten().copied().collect()
}

/// Compact `[a,b,c]` rendering for the trace panel
fn format_bucket(bucket: &[i64]) -> String {
    let items: Vec<String> = bucket.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(","))
}
