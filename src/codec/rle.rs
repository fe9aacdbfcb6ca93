use crate::error::{Error, Result};
use std::fmt;

/// A maximal span of identical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run<T> {
    pub value: T,
    pub count: usize,
}

impl<T> Run<T> {
    pub fn new(value: T, count: usize) -> Self {
        Self { value, count }
    }
}

impl<T> From<(T, usize)> for Run<T> {
    fn from((value, count): (T, usize)) -> Self {
        Self { value, count }
    }
}

impl<T> From<Run<T>> for (T, usize) {
    fn from(run: Run<T>) -> Self {
        (run.value, run.count)
    }
}

impl<T: fmt::Display> fmt::Display for Run<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.value, self.count)
    }
}

/// Run-length encode `data`.
///
/// The output is canonical: counts are at least 1 and no two adjacent runs
/// share a value. Their counts sum to `data.len()`.
pub fn encode<T: PartialEq + Clone>(data: &[T]) -> Vec<Run<T>> {
    let _span = tracing::debug_span!("rle_encode", len = data.len()).entered();

    let mut runs = Vec::new();
    let mut iter = data.iter();
    let Some(first) = iter.next() else {
        return runs;
    };

    let mut current = first;
    let mut count = 1usize;
    for item in iter {
        if item == current {
            count += 1;
        } else {
            runs.push(Run::new(current.clone(), count));
            current = item;
            count = 1;
        }
    }
    runs.push(Run::new(current.clone(), count));

    tracing::debug!("Encoded {} values into {} runs", data.len(), runs.len());
    runs
}

/// Expand `runs` back into the flat sequence.
///
/// Fails on the first run with a zero count, on a run that pushes the total
/// length past `usize::MAX`, or when the output cannot be allocated. Nothing
/// is returned in those cases.
pub fn decode<T: Clone>(runs: &[Run<T>]) -> Result<Vec<T>> {
    let _span = tracing::debug_span!("rle_decode", runs = runs.len()).entered();

    let mut total = 0usize;
    for (index, run) in runs.iter().enumerate() {
        total = match total.checked_add(run.count) {
            Some(total) if run.count > 0 => total,
            _ => {
                return Err(Error::InvalidRun {
                    index,
                    count: run.count,
                })
            }
        };
    }

    let mut data = Vec::new();
    data.try_reserve_exact(total)?;
    for run in runs {
        data.extend(std::iter::repeat(run.value.clone()).take(run.count));
    }
    Ok(data)
}

/// Total number of values `runs` expands to, or `None` if it overflows `usize`.
pub fn decoded_len<T>(runs: &[Run<T>]) -> Option<usize> {
    runs.iter().try_fold(0usize, |total, run| total.checked_add(run.count))
}
