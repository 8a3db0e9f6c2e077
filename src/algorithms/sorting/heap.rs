//! Heap sort: build a max-heap, then repeatedly move the root to the end

use super::SORTED;
use crate::snapshot::{Markers, Step, StepRecorder, Vars};

pub const LISTING: &str = "function heapSort(arr) {
  let n = arr.length;
  for (let i = Math.floor(n / 2) - 1; i >= 0; i--)
    heapify(arr, n, i);
  for (let i = n - 1; i > 0; i--) {
    swap(arr[0], arr[i]);
    heapify(arr, i, 0);
  }
}

function heapify(arr, n, i) {
  let largest = i;
  let l = 2 * i + 1;
  let r = 2 * i + 2;
  if (l < n && arr[l] > arr[largest]) largest = l;
  if (r < n && arr[r] > arr[largest]) largest = r;
  if (largest != i) {
    swap(arr[i], arr[largest]);
    heapify(arr, n, largest);
  }
}";

pub fn produce(input: &[i64]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = StepRecorder::new();

    // Build phase
    for i in (0..n / 2).rev() {
        rec.record(
            &arr,
            3,
            Vars::new().with("i", i).with("n", n).with("action", "Build Heap"),
            Markers::new().with(i, "Heapify"),
        );
        heapify(&mut arr, &mut rec, n, i);
    }

    // Extraction phase
    for i in (1..n).rev() {
        rec.record(
            &arr,
            6,
            Vars::new().with("i", i).with("n", n).with("action", "Extract Max"),
            Markers::new().with(0usize, "Max").with(i, "Swap"),
        );

        arr.swap(0, i);

        rec.record(
            &arr,
            7,
            Vars::new()
                .with("i", i)
                .with("n", n)
                .with("action", "Max Moved to End"),
            Markers::new().with(0usize, "Swapped").with(i, "Sorted"),
        );

        heapify(&mut arr, &mut rec, i, 0);
    }

    rec.record(&arr, 1, Vars::new().with("status", SORTED), Markers::new());
    rec.finish()
}

/// Sift `arr[i]` down within the heap prefix `arr[..n]`
fn heapify(arr: &mut [i64], rec: &mut StepRecorder, n: usize, i: usize) {
    let mut largest = i;
    let l = 2 * i + 1;
    let r = 2 * i + 2;

    // Children outside the heap prefix are not highlighted
    let mut markers = Markers::new().with(i, "Node");
    if l < n {
        markers.set(l, "L");
    }
    if r < n {
        markers.set(r, "R");
    }
    rec.record(
        arr,
        12,
        Vars::new()
            .with("n", n)
            .with("i", i)
            .with("largest", largest)
            .with("l", l)
            .with("r", r),
        markers,
    );

    if l < n && arr[l] > arr[largest] {
        largest = l;
        rec.record(
            arr,
            15,
            Vars::new()
                .with("n", n)
                .with("i", i)
                .with("largest", largest)
                .with("l", l)
                .with("r", r)
                .with("action", "Left > Root"),
            Markers::new().with(i, "Node").with(l, "Largest"),
        );
    }

    if r < n && arr[r] > arr[largest] {
        largest = r;
        rec.record(
            arr,
            16,
            Vars::new()
                .with("n", n)
                .with("i", i)
                .with("largest", largest)
                .with("l", l)
                .with("r", r)
                .with("action", "Right > Largest"),
            Markers::new().with(i, "Node").with(r, "Largest"),
        );
    }

    if largest != i {
        rec.record(
            arr,
            17,
            Vars::new()
                .with("n", n)
                .with("i", i)
                .with("largest", largest)
                .with("action", "Swap Needed"),
            Markers::new().with(i, "Swap").with(largest, "Swap"),
        );

        arr.swap(i, largest);

        rec.record(
            arr,
            18,
            Vars::new()
                .with("n", n)
                .with("i", i)
                .with("largest", largest)
                .with("action", "Swapped"),
            Markers::new().with(i, "Swapped").with(largest, "Swapped"),
        );

        heapify(arr, rec, n, largest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(step: &Step) -> Option<String> {
        step.vars.get("action").map(|v| v.to_string())
    }

    #[test]
    fn test_heap_sorts() {
        let steps = produce(&[12, 11, 13, 5, 6, 7]);
        assert_eq!(steps.last().unwrap().array, vec![5, 6, 7, 11, 12, 13]);
    }

    #[test]
    fn test_heap_build_phase_precedes_extraction() {
        let steps = produce(&[4, 10, 3, 5, 1]);
        let last_build = steps
            .iter()
            .rposition(|s| action(s).as_deref() == Some("Build Heap"))
            .unwrap();
        let first_extract = steps
            .iter()
            .position(|s| action(s).as_deref() == Some("Extract Max"))
            .unwrap();
        assert!(last_build < first_extract);

        // The array is a max-heap when extraction begins
        let heap = &steps[first_extract].array;
        for i in 0..heap.len() {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < heap.len() {
                    assert!(heap[i] >= heap[child], "heap violated at {}", i);
                }
            }
        }
    }

    #[test]
    fn test_heap_compares_children_before_swap() {
        let steps = produce(&[1, 2, 3]);
        let swap_needed = steps
            .iter()
            .position(|s| action(s).as_deref() == Some("Swap Needed"))
            .unwrap();
        let lines: Vec<usize> = steps[..swap_needed].iter().map(|s| s.line).collect();
        // build step, heapify entry, left beats root, right beats left
        assert_eq!(lines, vec![3, 12, 15, 16]);
        assert_eq!(
            steps[swap_needed].vars.get("largest").and_then(|v| v.as_int()),
            Some(2)
        );
    }
}
