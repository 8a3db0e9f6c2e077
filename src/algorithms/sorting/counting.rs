//! Counting sort
//!
//! The frequency table (later the prefix sums) is the auxiliary view for the
//! whole run. The table has `max + 1` slots and is not capped, so a single huge
//! value allocates a huge table. Negative values are rejected.
//!
//! During the output phase the step array shows the output being filled in,
//! starting from all zeros.

use super::SORTED;
use crate::algorithms::{reject_negative, ProducerError};
use crate::snapshot::{Markers, Step, StepRecorder, Vars};

pub const LISTING: &str = "function countingSort(arr) {
  let max = Math.max(...arr);
  let count = new Array(max + 1).fill(0);

  for (let i = 0; i < arr.length; i++)
    count[arr[i]]++;

  for (let i = 1; i <= max; i++)
    count[i] += count[i - 1];

  let output = new Array(arr.length);
  for (let i = arr.length - 1; i >= 0; i--) {
    output[count[arr[i]] - 1] = arr[i];
    count[arr[i]]--;
  }
  return output;
}";

pub fn produce(input: &[i64]) -> Result<Vec<Step>, ProducerError> {
    reject_negative("Counting Sort", input)?;

    let arr = input.to_vec();
    let n = arr.len();
    let mut rec = StepRecorder::new();

    // An empty input counts as max 0: a single-slot table
    let max = arr.iter().copied().max().unwrap_or(0);
    let too_large = ProducerError::TableTooLarge {
        algorithm: "Counting Sort",
        max,
    };
    let slots = usize::try_from(max)
        .ok()
        .and_then(|m| m.checked_add(1))
        .ok_or_else(|| too_large.clone())?;
    let mut count: Vec<i64> = Vec::new();
    count.try_reserve_exact(slots).map_err(|_| too_large)?;
    count.resize(slots, 0);

    rec.record_with_aux(
        &arr,
        3,
        Vars::new()
            .with("max", max)
            .with("action", "Initialize Count Array"),
        Markers::new(),
        &count,
    );

    for (i, &val) in arr.iter().enumerate() {
        rec.record_with_aux(
            &arr,
            5,
            Vars::new()
                .with("i", i)
                .with("val", val)
                .with("action", "Count Frequency"),
            Markers::new().with(i, "Count"),
            &count,
        );

        count[val as usize] += 1;

        rec.record_with_aux(
            &arr,
            6,
            Vars::new()
                .with("i", i)
                .with("val", val)
                .with("count", count[val as usize])
                .with("action", "Increment Count"),
            Markers::new().with(i, "Counted"),
            &count,
        );
    }

    for i in 1..count.len() {
        rec.record_with_aux(
            &arr,
            8,
            Vars::new()
                .with("i", i)
                .with("count[i]", count[i])
                .with("count[i-1]", count[i - 1])
                .with("action", "Cumulative Sum"),
            Markers::new(),
            &count,
        );

        count[i] += count[i - 1];

        rec.record_with_aux(
            &arr,
            9,
            Vars::new()
                .with("i", i)
                .with("new_count[i]", count[i])
                .with("action", "Updated Sum"),
            Markers::new(),
            &count,
        );
    }

    let mut output = vec![0i64; n];

    // Back to front keeps equal values in input order
    for i in (0..n).rev() {
        let val = arr[i];
        rec.record_with_aux(
            &arr,
            12,
            Vars::new()
                .with("i", i)
                .with("val", val)
                .with("action", "Place in Output"),
            Markers::new().with(i, "Process"),
            &count,
        );

        let slot = val as usize;
        let index = (count[slot] - 1) as usize;
        output[index] = val;
        count[slot] -= 1;

        rec.record_with_aux(
            &output,
            13,
            Vars::new()
                .with("i", i)
                .with("val", val)
                .with("index", index)
                .with("action", "Placed"),
            Markers::new().with(index, "Placed"),
            &count,
        );
    }

    rec.record_with_aux(
        &output,
        16,
        Vars::new().with("status", SORTED),
        Markers::new(),
        &[],
    );
    Ok(rec.finish())
}
