use std::ops::Range;

/// Number of hardware execution units available to the parallel multiplication path.
#[cfg(feature = "parallel")]
pub fn available_workers() -> usize {
    rayon::current_num_threads().max(1)
}

/// Number of hardware execution units available to the parallel multiplication path.
#[cfg(not(feature = "parallel"))]
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Splits `0..len` into `num_chunks` contiguous ranges of `len / num_chunks` elements,
/// with the last range absorbing the remainder.
///
/// When `num_chunks > len` every range but the last is empty.
pub fn chunk_ranges(len: usize, num_chunks: usize) -> Vec<Range<usize>> {
    let num_chunks = num_chunks.max(1);
    let per_chunk = len / num_chunks;
    let mut start = 0;
    (0..num_chunks)
        .map(|i| {
            let end = if i == num_chunks - 1 {
                len
            } else {
                start + per_chunk
            };
            let range = start..end;
            start = end;
            range
        })
        .collect()
}

/// Runs `work` once per range, concurrently, and blocks until every call has returned.
#[cfg(feature = "parallel")]
pub fn run_scoped<F>(ranges: Vec<Range<usize>>, work: F)
where
    F: Fn(Range<usize>) + Sync,
{
    rayon::scope(|s| {
        for range in ranges {
            let work = &work;
            s.spawn(move |_| work(range));
        }
    });
}

/// Runs `work` once per range, concurrently, and blocks until every call has returned.
#[cfg(not(feature = "parallel"))]
pub fn run_scoped<F>(ranges: Vec<Range<usize>>, work: F)
where
    F: Fn(Range<usize>) + Sync,
{
    std::thread::scope(|s| {
        for range in ranges {
            let work = &work;
            s.spawn(move || work(range));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn chunk_ranges_last_absorbs_remainder() {
        let ranges = chunk_ranges(10, 3);
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn chunk_ranges_more_chunks_than_elements() {
        let ranges = chunk_ranges(3, 5);
        assert_eq!(ranges.len(), 5);
        assert!(ranges[..4].iter().all(|r| r.is_empty()));
        assert_eq!(ranges[4], 0..3);
    }

    #[test]
    fn chunk_ranges_cover_everything_once() {
        for len in 0..40 {
            for chunks in 0..12 {
                let ranges = chunk_ranges(len, chunks);
                assert_eq!(ranges.len(), chunks.max(1));
                let covered: Vec<usize> = ranges.into_iter().flatten().collect();
                assert_eq!(covered, (0..len).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn run_scoped_waits_for_every_range() {
        let visited = AtomicUsize::new(0);
        let calls = AtomicUsize::new(0);
        run_scoped(chunk_ranges(1000, 6), |range| {
            calls.fetch_add(1, Ordering::SeqCst);
            visited.fetch_add(range.len(), Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 6);
        assert_eq!(visited.load(Ordering::SeqCst), 1000);
    }

    #[test]
    fn at_least_one_worker() {
        assert!(available_workers() >= 1);
    }
}
