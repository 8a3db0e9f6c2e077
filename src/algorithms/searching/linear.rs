//! Linear search

use super::{FOUND, NOT_FOUND};
use crate::snapshot::{Markers, Step, StepRecorder, Vars};

pub const LISTING: &str = "for (let i = 0; i < n; i++) {
  if (arr[i] === target) {
    return i; // Found
  }
}
return -1; // Not Found";

pub fn produce(input: &[i64], target: i64) -> Vec<Step> {
    let arr = input.to_vec();
    let n = arr.len();
    let mut rec = StepRecorder::new();

    rec.record(
        &arr,
        1,
        Vars::new().with("i", 0).with("n", n).with("target", target),
        Markers::new(),
    );

    for (i, &val) in arr.iter().enumerate() {
        rec.record(
            &arr,
            2,
            Vars::new()
                .with("i", i)
                .with("arr[i]", val)
                .with("target", target),
            Markers::new().with(i, "?"),
        );

        if val == target {
            rec.record(
                &arr,
                3,
                Vars::new()
                    .with("i", i)
                    .with("arr[i]", val)
                    .with("target", target)
                    .with("result", "FOUND"),
                Markers::new().with(i, "Found"),
            );
            rec.record(
                &arr,
                3,
                Vars::new().with("status", FOUND).with("index", i),
                Markers::new().with(i, "Found"),
            );
            return rec.finish();
        }

        rec.record(
            &arr,
            2,
            Vars::new()
                .with("i", i)
                .with("arr[i]", val)
                .with("target", target)
                .with("result", "Not Match"),
            Markers::new().with(i, "X"),
        );
    }

    rec.record(
        &arr,
        6,
        Vars::new()
            .with("result", "NOT FOUND")
            .with("status", NOT_FOUND),
        Markers::new(),
    );
    rec.finish()
}
