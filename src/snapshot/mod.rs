// Step snapshots recorded while an algorithm runs

use std::fmt;

/// A displayable trace value.
///
/// Display-only: nothing downstream interprets these beyond rendering them, and
/// variable names are not standardized across algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceValue {
    Int(i64),
    Text(String),
}

impl TraceValue {
    /// Get the integer value, returns None for text
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TraceValue::Int(n) => Some(*n),
            TraceValue::Text(_) => None,
        }
    }

    /// Get the text value, returns None for integers
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TraceValue::Int(_) => None,
            TraceValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for TraceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceValue::Int(n) => write!(f, "{}", n),
            TraceValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TraceValue {
    fn from(n: i64) -> Self {
        TraceValue::Int(n)
    }
}

impl From<i32> for TraceValue {
    fn from(n: i32) -> Self {
        TraceValue::Int(n as i64)
    }
}

impl From<isize> for TraceValue {
    fn from(n: isize) -> Self {
        TraceValue::Int(n as i64)
    }
}

impl From<usize> for TraceValue {
    fn from(n: usize) -> Self {
        TraceValue::Int(n as i64)
    }
}

impl From<bool> for TraceValue {
    fn from(b: bool) -> Self {
        TraceValue::Text(b.to_string())
    }
}

impl From<&str> for TraceValue {
    fn from(s: &str) -> Self {
        TraceValue::Text(s.to_string())
    }
}

impl From<String> for TraceValue {
    fn from(s: String) -> Self {
        TraceValue::Text(s)
    }
}

/// Named variables in display order.
///
/// The first write of a name fixes its position; later writes replace the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vars {
    entries: Vec<(String, TraceValue)>,
}

impl Vars {
    pub const fn new() -> Self {
        Vars {
            entries: Vec::new(),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, value: impl Into<TraceValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<TraceValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TraceValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TraceValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Anything usable as a marker position. Negative positions map to `None`.
pub trait MarkerIndex {
    fn to_index(self) -> Option<usize>;
}

impl MarkerIndex for usize {
    fn to_index(self) -> Option<usize> {
        Some(self)
    }
}

impl MarkerIndex for isize {
    fn to_index(self) -> Option<usize> {
        usize::try_from(self).ok()
    }
}

impl MarkerIndex for i64 {
    fn to_index(self) -> Option<usize> {
        usize::try_from(self).ok()
    }
}

impl MarkerIndex for i32 {
    fn to_index(self) -> Option<usize> {
        usize::try_from(self).ok()
    }
}

/// Sparse per-index annotations ("Pivot", "Swap", ...)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markers {
    entries: Vec<(usize, String)>,
}

impl Markers {
    pub const fn new() -> Self {
        Markers {
            entries: Vec::new(),
        }
    }

    /// Builder-style insert. Negative indices annotate nothing and are dropped.
    pub fn with(mut self, index: impl MarkerIndex, label: &str) -> Self {
        self.set(index, label);
        self
    }

    pub fn set(&mut self, index: impl MarkerIndex, label: &str) {
        let Some(index) = index.to_index() else {
            return;
        };
        match self.entries.iter_mut().find(|(i, _)| *i == index) {
            Some(entry) => entry.1 = label.to_string(),
            None => self.entries.push((index, label.to_string())),
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, label)| label.as_str())
    }

    /// Indices carrying `label`, in insertion order
    pub fn indices_of<'a>(&'a self, label: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.entries
            .iter()
            .filter(move |(_, l)| l == label)
            .map(|(i, _)| *i)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().map(|(i, l)| (*i, l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One recorded observation point of an algorithm run.
///
/// Every field is an owned copy taken at capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub array: Vec<i64>,
    /// 1-based line in the algorithm's reference listing
    pub line: usize,
    pub vars: Vars,
    pub markers: Markers,
    /// Secondary structure (merge buffer, counting table, buckets)
    pub aux: Option<Vec<i64>>,
}

impl Step {
    /// The `status` sentinel carried by terminal steps
    pub fn status(&self) -> Option<&str> {
        self.vars.get("status").and_then(TraceValue::as_text)
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_some()
    }

    /// Auxiliary view, empty when the step has none
    pub fn aux_view(&self) -> &[i64] {
        self.aux.as_deref().unwrap_or(&[])
    }
}

/// Append-and-snapshot accumulator shared by all step producers
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        StepRecorder { steps: Vec::new() }
    }

    /// Record a step without an auxiliary view
    pub fn record(&mut self, array: &[i64], line: usize, vars: Vars, markers: Markers) {
        self.steps.push(Step {
            array: array.to_vec(),
            line,
            vars,
            markers,
            aux: None,
        });
    }

    /// Record a step carrying a copy of `aux`
    pub fn record_with_aux(
        &mut self,
        array: &[i64],
        line: usize,
        vars: Vars,
        markers: Markers,
        aux: &[i64],
    ) {
        self.steps.push(Step {
            array: array.to_vec(),
            line,
            vars,
            markers,
            aux: Some(aux.to_vec()),
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn finish(self) -> Vec<Step> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_step_survives_source_mutation() {
        let mut arr = vec![3, 1, 2];
        let mut aux = vec![0, 0];
        let mut recorder = StepRecorder::new();
        recorder.record_with_aux(&arr, 1, Vars::new(), Markers::new(), &aux);

        arr[0] = 99;
        aux[1] = 7;
        arr.push(5);

        let steps = recorder.finish();
        assert_eq!(steps[0].array, vec![3, 1, 2]);
        assert_eq!(steps[0].aux, Some(vec![0, 0]));
    }

    #[test]
    fn test_vars_keep_first_insertion_position() {
        let vars = Vars::new()
            .with("i", 0i64)
            .with("j", 1i64)
            .with("i", 5i64)
            .with("swapped", false);

        let names: Vec<&str> = vars.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["i", "j", "swapped"]);
        assert_eq!(vars.get("i"), Some(&TraceValue::Int(5)));
        assert_eq!(vars.get("swapped").and_then(|v| v.as_text()), Some("false"));
        assert!(vars.get("missing").is_none());
    }

    #[test]
    fn test_markers_overwrite_and_drop_negative() {
        let markers = Markers::new()
            .with(4i64, "Pivot")
            .with(0i64, "Low")
            .with(4i64, "High")
            .with(-1i64, "i");

        assert_eq!(markers.len(), 2);
        assert_eq!(markers.get(4), Some("High"));
        assert_eq!(markers.get(0), Some("Low"));
    }

    #[test]
    fn test_status_sentinel() {
        let mut recorder = StepRecorder::new();
        recorder.record(&[1], 1, Vars::new().with("i", 0i64), Markers::new());
        recorder.record(&[1], 1, Vars::new().with("status", "Sorted"), Markers::new());
        let steps = recorder.finish();

        assert!(!steps[0].is_terminal());
        assert_eq!(steps[1].status(), Some("Sorted"));
        assert!(steps[1].aux_view().is_empty());
    }
}
