use crate::model::report::{NamedCount, Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Max,
    Min,
}

/// Picks the entry with the greatest (or least) count.
///
/// Ties keep the earliest entry. An empty input yields the `NO_DATA`
/// sentinel for the direction.
pub fn extremum<I>(pairs: I, direction: Direction) -> NamedCount
where
    I: IntoIterator<Item = NamedCount>,
{
    let initial = match direction {
        Direction::Max => NamedCount::no_max(),
        Direction::Min => NamedCount::no_min(),
    };

    pairs.into_iter().fold(initial, |best, candidate| {
        let wins = match direction {
            Direction::Max => candidate.count > best.count,
            Direction::Min => candidate.count < best.count,
        };
        if wins {
            candidate
        } else {
            best
        }
    })
}

/// Longest run classified as `value`; the first one wins a tie.
///
/// Returns an empty run of `value` when there is none.
pub fn longest<'a, K, T, I>(runs: I, value: K) -> Range<K, T>
where
    I: IntoIterator<Item = &'a Range<K, T>>,
    K: PartialEq + Clone + 'a,
    T: Clone + 'a,
{
    let best = runs
        .into_iter()
        .filter(|run| run.value == value)
        .fold(None::<&Range<K, T>>, |best, run| match best {
            Some(b) if b.len() >= run.len() => Some(b),
            _ => Some(run),
        });

    best.cloned().unwrap_or_else(|| Range::empty(value))
}
