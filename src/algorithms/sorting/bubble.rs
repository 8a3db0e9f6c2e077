//! Bubble sort with the early-exit optimization

use super::SORTED;
use crate::snapshot::{Markers, Step, StepRecorder, Vars};

pub const LISTING: &str = "for (let i = 0; i < n - 1; i++) {
  let swapped = false;
  for (let j = 0; j < n - i - 1; j++) {
    if (arr[j] > arr[j + 1]) {
      swap(arr[j], arr[j + 1]);
      swapped = true;
    }
  }
  if (!swapped) break;
}";

/// Action recorded when a full pass made no swaps
pub const BREAK_ACTION: &str = "BREAK (Sorted)";

pub fn produce(input: &[i64]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = StepRecorder::new();

    rec.record(
        &arr,
        1,
        Vars::new()
            .with("i", 0)
            .with("j", 0)
            .with("n", n)
            .with("swapped", false),
        Markers::new(),
    );

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        rec.record(
            &arr,
            2,
            Vars::new()
                .with("i", i)
                .with("j", 0)
                .with("n", n)
                .with("swapped", false),
            Markers::new(),
        );

        for j in 0..n - i - 1 {
            rec.record(
                &arr,
                3,
                Vars::new()
                    .with("i", i)
                    .with("j", j)
                    .with("arr[j]", arr[j])
                    .with("arr[j+1]", arr[j + 1])
                    .with("swapped", swapped),
                Markers::new().with(j, "↑").with(j + 1, "↑"),
            );

            if arr[j] > arr[j + 1] {
                rec.record(
                    &arr,
                    4,
                    Vars::new()
                        .with("i", i)
                        .with("j", j)
                        .with("arr[j]", arr[j])
                        .with("arr[j+1]", arr[j + 1])
                        .with("condition", "TRUE"),
                    Markers::new().with(j, "Swap").with(j + 1, "Swap"),
                );

                arr.swap(j, j + 1);
                swapped = true;

                rec.record(
                    &arr,
                    6,
                    Vars::new()
                        .with("i", i)
                        .with("j", j)
                        .with("arr[j]", arr[j])
                        .with("arr[j+1]", arr[j + 1])
                        .with("action", "SWAPPED")
                        .with("swapped", true),
                    Markers::new().with(j, "↓").with(j + 1, "↓"),
                );
            } else {
                rec.record(
                    &arr,
                    4,
                    Vars::new()
                        .with("i", i)
                        .with("j", j)
                        .with("arr[j]", arr[j])
                        .with("arr[j+1]", arr[j + 1])
                        .with("condition", "FALSE"),
                    Markers::new().with(j, "Ok").with(j + 1, "Ok"),
                );
            }
        }

        if !swapped {
            rec.record(
                &arr,
                9,
                Vars::new()
                    .with("i", i)
                    .with("swapped", false)
                    .with("action", BREAK_ACTION),
                Markers::new(),
            );
            break;
        }
    }

    rec.record(&arr, 1, Vars::new().with("status", SORTED), Markers::new());
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_textbook_example() {
        let steps = produce(&[5, 3, 8, 4, 6]);
        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![3, 4, 5, 6, 8]);
        assert_eq!(last.status(), Some(SORTED));

        let brk = &steps[steps.len() - 2];
        assert_eq!(brk.line, 9);
        assert_eq!(
            brk.vars.get("action").and_then(|v| v.as_text()),
            Some(BREAK_ACTION)
        );

        // The (5,3) inversion is swapped on the very first comparison
        let first_swap = steps
            .iter()
            .find(|s| s.markers.get(0) == Some("Swap"))
            .unwrap();
        assert_eq!(first_swap.array, vec![5, 3, 8, 4, 6]);
        assert_eq!(first_swap.markers.get(1), Some("Swap"));
    }

    #[test]
    fn test_bubble_break_only_after_swapless_pass() {
        let steps = produce(&[5, 3, 8, 4, 6]);
        let break_idx = steps
            .iter()
            .position(|s| s.line == 9)
            .unwrap();

        // Walk back to the start of the breaking pass: no swap in between
        let pass_start = steps[..break_idx]
            .iter()
            .rposition(|s| s.line == 2)
            .unwrap();
        assert!(steps[pass_start..break_idx]
            .iter()
            .all(|s| s.vars.get("action").is_none()));
    }

    #[test]
    fn test_bubble_sorted_input_breaks_after_one_pass() {
        let steps = produce(&[1, 2, 3, 4]);
        // initial, pass start, 3 compare+outcome pairs, break, final
        assert_eq!(steps.len(), 1 + 1 + 3 * 2 + 1 + 1);
        assert_eq!(steps[steps.len() - 2].line, 9);
    }

    #[test]
    fn test_bubble_trivial_inputs() {
        for input in [vec![], vec![42]] {
            let steps = produce(&input);
            assert_eq!(steps.len(), 2);
            assert_eq!(steps[1].array, input);
            assert_eq!(steps[1].status(), Some(SORTED));
        }
    }
}
