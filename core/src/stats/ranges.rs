use crate::model::report::Range;

/// Lazy iterator over the maximal runs of an input sequence.
///
/// A run is only known to be finished once an item with a different
/// classification arrives, so the run in progress is held in `pending` and
/// flushed when the input is exhausted. The last run is never dropped.
pub struct Ranges<I: Iterator, F, K> {
    iter: I,
    classify: F,
    pending: Option<Range<K, I::Item>>,
}

impl<I, F, K> Iterator for Ranges<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = Range<K, I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            let value = (self.classify)(&item);
            match self.pending.as_mut() {
                Some(run) if run.value == value => run.items.push(item),
                _ => {
                    if let Some(done) = self.pending.replace(Range::new(value, vec![item])) {
                        return Some(done);
                    }
                }
            }
        }
        self.pending.take()
    }
}

/// Splits `items` into maximal runs of equal classification.
///
/// Concatenating the items of every yielded run gives back the input, in order.
pub fn ranges<I, F, K>(items: I, classify: F) -> Ranges<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    Ranges {
        iter: items.into_iter(),
        classify,
        pending: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths(input: &[bool]) -> Vec<(bool, usize)> {
        ranges(input.iter().copied(), |b| *b)
            .map(|r| (r.value, r.len()))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(lengths(&[]).is_empty());
    }

    #[test]
    fn test_single_item() {
        assert_eq!(lengths(&[true]), vec![(true, 1)]);
    }

    #[test]
    fn test_all_same() {
        assert_eq!(lengths(&[false; 10]), vec![(false, 10)]);
    }

    #[test]
    fn test_trailing_run_is_emitted() {
        let input = [true, true, false, false, false, true];
        assert_eq!(lengths(&input), vec![(true, 2), (false, 3), (true, 1)]);
    }

    #[test]
    fn test_runs_partition_input() {
        let input: Vec<u32> = vec![1, 1, 2, 3, 3, 3, 1, 1, 2];
        let runs: Vec<_> = ranges(input.clone(), |n| *n).collect();

        let rebuilt: Vec<u32> = runs.iter().flat_map(|r| r.items.iter().copied()).collect();
        assert_eq!(rebuilt, input);

        for pair in runs.windows(2) {
            assert_ne!(pair[0].value, pair[1].value);
        }
    }

    #[test]
    fn test_is_lazy() {
        let mut seen = 0;
        let mut iter = ranges((0..).map(|n| n / 3), |n| {
            seen += 1;
            *n
        });
        let first = iter.next().map(|r| r.items);
        assert_eq!(first, Some(vec![0, 0, 0]));
        drop(iter);
        // Three items of the first run plus the one that closed it
        assert_eq!(seen, 4);
    }
}
