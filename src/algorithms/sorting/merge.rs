//! Top-down merge sort with an explicit merge buffer
//!
//! The buffer is exposed as the auxiliary view while a merge runs and is
//! cleared (empty view) on divide steps and once a merge completes.

use super::SORTED;
use crate::snapshot::{Markers, Step, StepRecorder, Vars};

pub const LISTING: &str = "function mergeSort(arr, left, right) {
  if (left >= right) return;
  let mid = Math.floor((left + right) / 2);
  mergeSort(arr, left, mid);
  mergeSort(arr, mid + 1, right);
  merge(arr, left, mid, right);
}

function merge(arr, left, mid, right) {
  let temp = [];
  let i = left, j = mid + 1;
  while (i <= mid && j <= right) {
    if (arr[i] <= arr[j]) temp.push(arr[i++]);
    else temp.push(arr[j++]);
  }
  while (i <= mid) temp.push(arr[i++]);
  while (j <= right) temp.push(arr[j++]);
  for (let k = 0; k < temp.length; k++) {
    arr[left + k] = temp[k];
  }
}";

pub fn produce(input: &[i64]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new();

    if !arr.is_empty() {
        let right = arr.len() - 1;
        merge_sort(&mut arr, &mut rec, 0, right);
    }

    rec.record_with_aux(&arr, 1, Vars::new().with("status", SORTED), Markers::new(), &[]);
    rec.finish()
}

fn merge_sort(arr: &mut [i64], rec: &mut StepRecorder, left: usize, right: usize) {
    if left >= right {
        return;
    }

    let mid = (left + right) / 2;

    rec.record_with_aux(
        arr,
        3,
        Vars::new()
            .with("left", left)
            .with("right", right)
            .with("mid", mid)
            .with("action", "Divide"),
        Markers::new()
            .with(left, "L")
            .with(right, "R")
            .with(mid, "Mid"),
        &[],
    );

    merge_sort(arr, rec, left, mid);
    merge_sort(arr, rec, mid + 1, right);
    merge(arr, rec, left, mid, right);
}

fn merge(arr: &mut [i64], rec: &mut StepRecorder, left: usize, mid: usize, right: usize) {
    let mut temp: Vec<i64> = Vec::with_capacity(right - left + 1);
    let mut i = left;
    let mut j = mid + 1;

    let bounds = |i: usize, j: usize| {
        Vars::new()
            .with("left", left)
            .with("mid", mid)
            .with("right", right)
            .with("i", i)
            .with("j", j)
    };

    rec.record_with_aux(
        arr,
        10,
        bounds(i, j).with("action", "Merge Start"),
        Markers::new()
            .with(left, "L")
            .with(mid, "M")
            .with(right, "R"),
        &temp,
    );

    while i <= mid && j <= right {
        rec.record_with_aux(
            arr,
            13,
            bounds(i, j).with("arr[i]", arr[i]).with("arr[j]", arr[j]),
            Markers::new().with(i, "i").with(j, "j"),
            &temp,
        );

        let line = if arr[i] <= arr[j] {
            temp.push(arr[i]);
            i += 1;
            13
        } else {
            temp.push(arr[j]);
            j += 1;
            14
        };

        rec.record_with_aux(
            arr,
            line,
            bounds(i, j).with("action", "Push to Temp"),
            Markers::new().with(i, "i").with(j, "j"),
            &temp,
        );
    }

    while i <= mid {
        temp.push(arr[i]);
        i += 1;
        rec.record_with_aux(
            arr,
            16,
            bounds(i, j).with("action", "Push Remaining Left"),
            Markers::new().with(i - 1, "Push"),
            &temp,
        );
    }

    while j <= right {
        temp.push(arr[j]);
        j += 1;
        rec.record_with_aux(
            arr,
            17,
            bounds(i, j).with("action", "Push Remaining Right"),
            Markers::new().with(j - 1, "Push"),
            &temp,
        );
    }

    for (k, &val) in temp.iter().enumerate() {
        arr[left + k] = val;
        rec.record_with_aux(
            arr,
            19,
            Vars::new()
                .with("left", left)
                .with("mid", mid)
                .with("right", right)
                .with("k", k)
                .with("val", val)
                .with("action", "Copy Back"),
            Markers::new().with(left + k, "Update"),
            &temp,
        );
    }

    rec.record_with_aux(
        arr,
        21,
        Vars::new()
            .with("left", left)
            .with("mid", mid)
            .with("right", right)
            .with("action", "Merge Complete"),
        Markers::new(),
        &[],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sorts() {
        let steps = produce(&[38, 27, 43, 3, 9, 82, 10]);
        assert_eq!(steps.last().unwrap().array, vec![3, 9, 10, 27, 38, 43, 82]);
    }

    #[test]
    fn test_merge_buffer_grows_then_clears() {
        let steps = produce(&[2, 1]);
        let actions: Vec<String> = steps
            .iter()
            .filter_map(|s| s.vars.get("action").map(|v| v.to_string()))
            .collect();
        assert_eq!(
            actions,
            vec![
                "Divide",
                "Merge Start",
                "Push to Temp",
                "Push Remaining Left",
                "Copy Back",
                "Copy Back",
                "Merge Complete"
            ]
        );

        let complete = steps.iter().find(|s| s.line == 21).unwrap();
        assert_eq!(complete.aux, Some(vec![]));
        assert_eq!(complete.array, vec![1, 2]);

        let last_push = steps.iter().find(|s| s.line == 16).unwrap();
        assert_eq!(last_push.aux, Some(vec![1, 2]));
    }

    #[test]
    fn test_merge_every_step_has_aux_view() {
        let steps = produce(&[5, 4, 3, 2, 1]);
        assert!(steps.iter().all(|s| s.aux.is_some()));
        assert!(steps
            .iter()
            .filter(|s| s.line == 3)
            .all(|s| s.aux_view().is_empty()));
    }
}
