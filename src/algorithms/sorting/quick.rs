//! Quick sort, Lomuto partition with the last element as pivot

use super::SORTED;
use crate::snapshot::{Markers, Step, StepRecorder, Vars};

pub const LISTING: &str = "function quickSort(arr, low, high) {
  if (low < high) {
    let pi = partition(arr, low, high);
    quickSort(arr, low, pi - 1);
    quickSort(arr, pi + 1, high);
  }
}

function partition(arr, low, high) {
  let pivot = arr[high];
  let i = low - 1;
  for (let j = low; j < high; j++) {
    if (arr[j] < pivot) {
      i++;
      swap(arr[i], arr[j]);
    }
  }
  swap(arr[i + 1], arr[high]);
  return i + 1;
}";

pub fn produce(input: &[i64]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new();

    let high = arr.len() as isize - 1;
    quick_sort(&mut arr, &mut rec, 0, high);

    rec.record(&arr, 1, Vars::new().with("status", SORTED), Markers::new());
    rec.finish()
}

// Bounds are signed: the recursion calls quick_sort(low, pi - 1) with pi == 0.
fn quick_sort(arr: &mut [i64], rec: &mut StepRecorder, low: isize, high: isize) {
    if low >= high {
        return;
    }

    rec.record(
        arr,
        2,
        Vars::new().with("low", low).with("high", high),
        Markers::new().with(low, "L").with(high, "H"),
    );

    let pi = partition(arr, rec, low as usize, high as usize);

    rec.record(
        arr,
        3,
        Vars::new().with("low", low).with("high", high).with("pi", pi),
        Markers::new().with(pi, "Pivot"),
    );

    quick_sort(arr, rec, low, pi as isize - 1);
    quick_sort(arr, rec, pi as isize + 1, high);
}

fn partition(arr: &mut [i64], rec: &mut StepRecorder, low: usize, high: usize) -> usize {
    let pivot = arr[high];
    let mut i = low as isize - 1;

    rec.record(
        arr,
        9,
        Vars::new()
            .with("low", low)
            .with("high", high)
            .with("pivot", pivot)
            .with("i", i)
            .with("j", low),
        Markers::new()
            .with(high, "Pivot")
            .with(low, "Low")
            .with(high, "High"),
    );

    for j in low..high {
        rec.record(
            arr,
            11,
            Vars::new()
                .with("low", low)
                .with("high", high)
                .with("pivot", pivot)
                .with("i", i)
                .with("j", j)
                .with("arr[j]", arr[j]),
            Markers::new()
                .with(high, "Pivot")
                .with(j, "?")
                .with(i, "i"),
        );

        if arr[j] < pivot {
            i += 1;
            rec.record(
                arr,
                13,
                Vars::new()
                    .with("low", low)
                    .with("high", high)
                    .with("pivot", pivot)
                    .with("i", i)
                    .with("j", j)
                    .with("action", "Swap"),
                Markers::new()
                    .with(high, "Pivot")
                    .with(j, "Swap")
                    .with(i, "Swap"),
            );

            arr.swap(i as usize, j);

            rec.record(
                arr,
                14,
                Vars::new()
                    .with("low", low)
                    .with("high", high)
                    .with("pivot", pivot)
                    .with("i", i)
                    .with("j", j)
                    .with("action", "Swapped"),
                Markers::new()
                    .with(high, "Pivot")
                    .with(j, "Swapped")
                    .with(i, "Swapped"),
            );
        }
    }

    let slot = (i + 1) as usize;
    rec.record(
        arr,
        17,
        Vars::new()
            .with("low", low)
            .with("high", high)
            .with("pivot", pivot)
            .with("i", i)
            .with("action", "Place Pivot"),
        Markers::new().with(high, "Pivot").with(slot, "Target"),
    );

    arr.swap(slot, high);

    rec.record(
        arr,
        18,
        Vars::new()
            .with("low", low)
            .with("high", high)
            .with("pivot", pivot)
            .with("pi", slot)
            .with("action", "Pivot Placed"),
        Markers::new().with(slot, "Sorted Pivot"),
    );

    slot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_sorts_with_duplicates() {
        let steps = produce(&[3, 6, 3, 1, 8, 1, 0]);
        assert_eq!(steps.last().unwrap().array, vec![0, 1, 1, 3, 3, 6, 8]);
    }

    #[test]
    fn test_quick_pivot_is_last_element() {
        let steps = produce(&[10, 80, 30, 90, 40, 50, 70]);
        let first_partition = steps.iter().find(|s| s.line == 9).unwrap();
        assert_eq!(first_partition.vars.get("pivot").and_then(|v| v.as_int()), Some(70));
        assert_eq!(first_partition.markers.get(6), Some("High"));
        assert_eq!(first_partition.markers.get(0), Some("Low"));
        // i = low - 1 has no element to annotate
        let first_compare = steps.iter().find(|s| s.line == 11).unwrap();
        assert_eq!(first_compare.markers.len(), 2);
    }

    #[test]
    fn test_quick_places_pivot_before_recursing() {
        let steps = produce(&[10, 80, 30, 90, 40, 50, 70]);
        let placed = steps.iter().position(|s| s.line == 18).unwrap();
        assert_eq!(steps[placed].array, vec![10, 30, 40, 50, 70, 90, 80]);
        assert_eq!(steps[placed].markers.get(4), Some("Sorted Pivot"));
        assert_eq!(steps[placed + 1].line, 3);
        assert_eq!(steps[placed + 1].vars.get("pi").and_then(|v| v.as_int()), Some(4));
    }

    #[test]
    fn test_quick_strict_less_than_keeps_equal_right() {
        // Equal elements never trigger a swap step during partition
        let steps = produce(&[2, 2, 2]);
        assert!(steps.iter().all(|s| s.line != 13));
        assert_eq!(steps.last().unwrap().array, vec![2, 2, 2]);
    }
}
