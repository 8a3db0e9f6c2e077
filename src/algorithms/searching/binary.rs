//! Binary search over an ascending copy of the input
//!
//! The input is sorted first, so every recorded array is the sorted view.

use super::{FOUND, NOT_FOUND};
use crate::snapshot::{Markers, Step, StepRecorder, Vars};

pub const LISTING: &str = "let left = 0, right = n - 1;
while (left <= right) {
  let mid = Math.floor((left + right) / 2);
  if (arr[mid] === target) return mid;
  if (arr[mid] < target) left = mid + 1;
  else right = mid - 1;
}
return -1;";

pub fn produce(input: &[i64], target: i64) -> Vec<Step> {
    let mut arr = input.to_vec();
    arr.sort();
    let mut rec = StepRecorder::new();

    // right drops to -1 when the target is below every element
    let mut left: isize = 0;
    let mut right: isize = arr.len() as isize - 1;

    rec.record(
        &arr,
        1,
        Vars::new()
            .with("left", left)
            .with("right", right)
            .with("mid", "?")
            .with("target", target),
        Markers::new().with(left, "L").with(right, "R"),
    );

    while left <= right {
        let mid = (left + right) / 2;
        let probe = arr[mid as usize];

        rec.record(
            &arr,
            3,
            Vars::new()
                .with("left", left)
                .with("right", right)
                .with("mid", mid)
                .with("arr[mid]", probe)
                .with("target", target),
            Markers::new()
                .with(left, "L")
                .with(right, "R")
                .with(mid, "Mid"),
        );

        if probe == target {
            rec.record(
                &arr,
                4,
                Vars::new()
                    .with("left", left)
                    .with("right", right)
                    .with("mid", mid)
                    .with("arr[mid]", probe)
                    .with("result", "FOUND"),
                Markers::new().with(mid, "Found"),
            );
            rec.record(
                &arr,
                4,
                Vars::new().with("status", FOUND).with("index", mid),
                Markers::new().with(mid, "Found"),
            );
            return rec.finish();
        }

        if probe < target {
            rec.record(
                &arr,
                5,
                Vars::new()
                    .with("left", left)
                    .with("right", right)
                    .with("mid", mid)
                    .with("arr[mid]", probe)
                    .with("action", "left = mid + 1"),
                Markers::new()
                    .with(left, "L")
                    .with(right, "R")
                    .with(mid, "Mid"),
            );
            left = mid + 1;
        } else {
            rec.record(
                &arr,
                6,
                Vars::new()
                    .with("left", left)
                    .with("right", right)
                    .with("mid", mid)
                    .with("arr[mid]", probe)
                    .with("action", "right = mid - 1"),
                Markers::new()
                    .with(left, "L")
                    .with(right, "R")
                    .with(mid, "Mid"),
            );
            right = mid - 1;
        }
    }

    rec.record(
        &arr,
        8,
        Vars::new()
            .with("result", "NOT FOUND")
            .with("status", NOT_FOUND),
        Markers::new(),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_finds_target_within_log_probes() {
        let input = [-5, -2, 0, 1, 2, 4, 5, 6, 7, 10];
        let steps = produce(&input, 4);

        let last = steps.last().unwrap();
        assert_eq!(last.status(), Some(FOUND));
        assert_eq!(last.vars.get("index").and_then(|v| v.as_int()), Some(5));

        let probes = steps.iter().filter(|s| s.line == 3).count();
        assert!(probes <= 4, "took {} probes", probes);
    }

    #[test]
    fn test_binary_sorts_its_copy() {
        let input = vec![9, 3, 7, 1];
        let steps = produce(&input, 7);
        assert_eq!(steps[0].array, vec![1, 3, 7, 9]);
        assert_eq!(input, vec![9, 3, 7, 1]);
        assert_eq!(
            steps.last().unwrap().vars.get("index").and_then(|v| v.as_int()),
            Some(2)
        );
    }

    #[test]
    fn test_binary_not_found_below_and_above_range() {
        for target in [-100, 100, 3] {
            let steps = produce(&[1, 2, 4, 5], target);
            assert_eq!(steps.last().unwrap().status(), Some(NOT_FOUND));
        }
    }

    #[test]
    fn test_binary_empty_input() {
        let steps = produce(&[], 1);
        assert_eq!(steps.len(), 2);
        // right == -1 annotates nothing
        assert_eq!(steps[0].markers.len(), 1);
        assert_eq!(steps[1].status(), Some(NOT_FOUND));
    }
}
