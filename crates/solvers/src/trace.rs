//! Structured solver traces.
//!
//! Solvers return a [`Trace`] alongside their numeric result instead of
//! accumulating logs in mutable fields. Each solver defines its own
//! [`Record`] type; a trace can be rendered into display lines with
//! [`Trace::log`] and flattened into plottable points with [`Trace::points`].
//!
//! Traces are diagnostic only. Nothing a solver computes depends on them.

/// A single step recorded by a solver.
pub trait Record {
    /// Point type plotted for this record.
    type Point;

    /// Number of log fields joined into one display line.
    const BATCH: usize;

    /// Returns the human-readable log fields for this step.
    fn fields(&self) -> Vec<String>;

    /// Returns the points this step contributes to a plot.
    fn points(&self) -> Vec<Self::Point>;
}

/// The ordered records produced by one solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<R> {
    records: Vec<R>,
}

impl<R> Default for Trace<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R> Trace<R> {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    /// Returns the records in the order they were produced.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Trace<R> {
    /// Renders the trace as display lines.
    ///
    /// Log fields from all records are concatenated and grouped into lines of
    /// [`Record::BATCH`] fields each. The final line may be shorter.
    #[must_use]
    pub fn log(&self) -> Vec<String> {
        let fields: Vec<String> = self.records.iter().flat_map(R::fields).collect();
        fields
            .chunks(R::BATCH.max(1))
            .map(|chunk| chunk.join(" "))
            .collect()
    }

    /// Returns every recorded point, in order.
    #[must_use]
    pub fn points(&self) -> Vec<R::Point> {
        self.records.iter().flat_map(R::points).collect()
    }
}

impl<R> IntoIterator for Trace<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Formats a slice of values as `[a, b, c]` with `precision` decimals.
pub(crate) fn format_vector(values: &[f64], precision: usize) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.precision$}")).collect();
    format!("[{}]", parts.join(", "))
}
