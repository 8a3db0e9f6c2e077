//! Selection sort

use super::SORTED;
use crate::snapshot::{Markers, Step, StepRecorder, Vars};

pub const LISTING: &str = "for (let i = 0; i < n - 1; i++) {
  let minIdx = i;
  for (let j = i + 1; j < n; j++) {
    if (arr[j] < arr[minIdx]) {
      minIdx = j;
    }
  }
  if (minIdx !== i) {
    swap(arr[i], arr[minIdx]);
  }
}";

pub fn produce(input: &[i64]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = StepRecorder::new();

    rec.record(
        &arr,
        1,
        Vars::new().with("i", 0).with("n", n),
        Markers::new(),
    );

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;

        rec.record(
            &arr,
            2,
            Vars::new().with("i", i).with("minIdx", min_idx).with("n", n),
            Markers::new().with(i, "i").with(min_idx, "Min"),
        );

        for j in i + 1..n {
            rec.record(
                &arr,
                3,
                Vars::new()
                    .with("i", i)
                    .with("minIdx", min_idx)
                    .with("j", j)
                    .with("arr[j]", arr[j])
                    .with("arr[minIdx]", arr[min_idx]),
                Markers::new()
                    .with(i, "i")
                    .with(min_idx, "Min")
                    .with(j, "?"),
            );

            if arr[j] < arr[min_idx] {
                min_idx = j;
                rec.record(
                    &arr,
                    5,
                    Vars::new()
                        .with("i", i)
                        .with("minIdx", min_idx)
                        .with("j", j)
                        .with("action", "New Min"),
                    Markers::new().with(i, "i").with(min_idx, "Min"),
                );
            }
        }

        if min_idx != i {
            rec.record(
                &arr,
                9,
                Vars::new()
                    .with("i", i)
                    .with("minIdx", min_idx)
                    .with("action", "Swap"),
                Markers::new().with(i, "Swap").with(min_idx, "Swap"),
            );

            arr.swap(i, min_idx);

            rec.record(
                &arr,
                10,
                Vars::new()
                    .with("i", i)
                    .with("minIdx", min_idx)
                    .with("action", "Swapped"),
                Markers::new().with(i, "Sorted").with(min_idx, "Swapped"),
            );
        } else {
            rec.record(
                &arr,
                8,
                Vars::new()
                    .with("i", i)
                    .with("minIdx", min_idx)
                    .with("action", "No Swap Needed"),
                Markers::new().with(i, "Sorted"),
            );
        }
    }

    rec.record(&arr, 1, Vars::new().with("status", SORTED), Markers::new());
    rec.finish()
}
