//! Insertion sort

use super::SORTED;
use crate::snapshot::{Markers, Step, StepRecorder, Vars};

pub const LISTING: &str = "for (let i = 1; i < n; i++) {
  let key = arr[i];
  let j = i - 1;
  while (j >= 0 && arr[j] > key) {
    arr[j + 1] = arr[j];
    j = j - 1;
  }
  arr[j + 1] = key;
}";

pub fn produce(input: &[i64]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = StepRecorder::new();

    rec.record(
        &arr,
        1,
        Vars::new().with("i", 1).with("n", n),
        Markers::new(),
    );

    for i in 1..n {
        let key = arr[i];
        // j walks left past index 0, so it has to be signed
        let mut j = i as isize - 1;

        rec.record(
            &arr,
            2,
            Vars::new().with("i", i).with("key", key).with("j", j),
            Markers::new().with(i, "Key"),
        );

        while j >= 0 && arr[j as usize] > key {
            let ju = j as usize;
            rec.record(
                &arr,
                4,
                Vars::new()
                    .with("i", i)
                    .with("key", key)
                    .with("j", j)
                    .with("arr[j]", arr[ju])
                    .with("condition", "TRUE"),
                Markers::new().with(i, "Key").with(j, ">"),
            );

            arr[ju + 1] = arr[ju];

            rec.record(
                &arr,
                5,
                Vars::new()
                    .with("i", i)
                    .with("key", key)
                    .with("j", j)
                    .with("action", "Shift"),
                Markers::new().with(ju + 1, "Shift").with(j, ">"),
            );

            j -= 1;
        }

        rec.record(
            &arr,
            4,
            Vars::new()
                .with("i", i)
                .with("key", key)
                .with("j", j)
                .with("condition", "FALSE"),
            Markers::new().with(i, "Key"),
        );

        let slot = (j + 1) as usize;
        arr[slot] = key;

        rec.record(
            &arr,
            8,
            Vars::new()
                .with("i", i)
                .with("key", key)
                .with("j", j)
                .with("action", "Insert Key"),
            Markers::new().with(slot, "Inserted"),
        );
    }

    rec.record(&arr, 1, Vars::new().with("status", SORTED), Markers::new());
    rec.finish()
}
