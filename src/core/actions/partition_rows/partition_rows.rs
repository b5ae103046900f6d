use std::num::NonZeroU32;

use crate::core::actions::partition_rows::work_allocation::WorkAllocation;

/// The rows owned by one render thread, produced lazily in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAssignment {
    next: u32,
    end: u32,
    step: u32,
}

impl Iterator for RowAssignment {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let row = self.next;
        self.next = self.next.saturating_add(self.step);
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next >= self.end {
            0
        } else {
            ((self.end - self.next - 1) / self.step + 1) as usize
        };

        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowAssignment {}

/// Rows that `thread_id` renders out of an image `height` rows tall.
///
/// Static allocation hands out `height / thread_count` rows per thread, so the
/// trailing `height % thread_count` rows belong to nobody and stay unrendered.
#[must_use]
pub fn rows_for(
    thread_id: u32,
    thread_count: NonZeroU32,
    height: u32,
    allocation: WorkAllocation,
) -> RowAssignment {
    debug_assert!(thread_id < thread_count.get());

    match allocation {
        WorkAllocation::Static => {
            let rows_per_thread = height / thread_count;

            RowAssignment {
                next: thread_id.saturating_mul(rows_per_thread),
                end: thread_id.saturating_add(1).saturating_mul(rows_per_thread),
                step: 1,
            }
        }
        WorkAllocation::Dynamic => RowAssignment {
            next: thread_id,
            end: height,
            step: thread_count.get(),
        },
    }
}

/// How many rows end up assigned to some thread.
#[must_use]
pub fn covered_rows(thread_count: NonZeroU32, height: u32, allocation: WorkAllocation) -> u32 {
    match allocation {
        WorkAllocation::Static => (height / thread_count) * thread_count.get(),
        WorkAllocation::Dynamic => height,
    }
}

/// Deals `rows` out to `thread_count` owners following [`rows_for`].
///
/// Each row is moved to at most one owner, so the returned bands never alias.
/// Entry `t` of the result holds thread `t`'s rows paired with their index.
pub fn assign_rows<'img, T>(
    rows: impl IntoIterator<Item = &'img mut [T]>,
    thread_count: NonZeroU32,
    allocation: WorkAllocation,
) -> Vec<Vec<(u32, &'img mut [T])>> {
    let mut unclaimed: Vec<Option<&'img mut [T]>> = rows.into_iter().map(Some).collect();
    let height = unclaimed.len() as u32;

    (0..thread_count.get())
        .map(|thread_id| {
            rows_for(thread_id, thread_count, height, allocation)
                .filter_map(|y| unclaimed[y as usize].take().map(|row| (y, row)))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threads(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn all_rows(thread_count: u32, height: u32, allocation: WorkAllocation) -> Vec<u32> {
        let mut rows: Vec<u32> = (0..thread_count)
            .flat_map(|t| rows_for(t, threads(thread_count), height, allocation))
            .collect();
        rows.sort_unstable();
        rows
    }

    #[test]
    fn test_static_rows_are_contiguous_blocks() {
        let rows: Vec<u32> = rows_for(1, threads(4), 100, WorkAllocation::Static).collect();

        assert_eq!(rows, (25..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_dynamic_rows_are_strided() {
        let rows: Vec<u32> = rows_for(1, threads(4), 10, WorkAllocation::Dynamic).collect();

        assert_eq!(rows, vec![1, 5, 9]);
    }

    #[test]
    fn test_dynamic_covers_every_row_exactly_once() {
        for thread_count in 1..=9 {
            for height in [1, 2, 7, 10, 64, 101] {
                assert_eq!(
                    all_rows(thread_count, height, WorkAllocation::Dynamic),
                    (0..height).collect::<Vec<u32>>(),
                    "thread_count={thread_count} height={height}"
                );
            }
        }
    }

    #[test]
    fn test_static_covers_rows_at_most_once_and_never_past_the_remainder() {
        for thread_count in 1..=9 {
            for height in [1, 2, 7, 10, 64, 101] {
                let rows = all_rows(thread_count, height, WorkAllocation::Static);
                let limit = thread_count * (height / thread_count);

                assert_eq!(rows, (0..limit).collect::<Vec<u32>>());
                assert_eq!(
                    rows.len() as u32,
                    covered_rows(threads(thread_count), height, WorkAllocation::Static)
                );
            }
        }
    }

    #[test]
    fn test_static_drops_trailing_rows() {
        let rows = all_rows(4, 10, WorkAllocation::Static);

        assert_eq!(rows, (0..8).collect::<Vec<u32>>());
        assert_eq!(covered_rows(threads(4), 10, WorkAllocation::Static), 8);
    }

    #[test]
    fn test_more_threads_than_rows() {
        assert_eq!(rows_for(2, threads(5), 3, WorkAllocation::Static).count(), 0);
        assert_eq!(all_rows(5, 3, WorkAllocation::Dynamic), vec![0, 1, 2]);
        assert_eq!(rows_for(4, threads(5), 3, WorkAllocation::Dynamic).count(), 0);
    }

    #[test]
    fn test_single_thread_owns_everything() {
        for &allocation in WorkAllocation::ALL {
            let rows: Vec<u32> = rows_for(0, threads(1), 6, allocation).collect();

            assert_eq!(rows, vec![0, 1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_size_hint_is_exact() {
        for &allocation in WorkAllocation::ALL {
            for thread_id in 0..3 {
                let assignment = rows_for(thread_id, threads(3), 11, allocation);
                let len = assignment.len();

                assert_eq!(assignment.count(), len);
            }
        }
    }

    #[test]
    fn test_assign_rows_moves_each_row_to_its_owner() {
        let mut data: Vec<u32> = (0..5).collect();

        let bands = assign_rows(data.chunks_exact_mut(1), threads(2), WorkAllocation::Dynamic);

        let owned: Vec<Vec<u32>> = bands
            .iter()
            .map(|band| band.iter().map(|(y, row)| *y + row[0] * 100).collect())
            .collect();
        assert_eq!(owned, vec![vec![0, 202, 404], vec![101, 303]]);
    }

    #[test]
    fn test_assign_rows_leaves_static_remainder_unowned() {
        let mut data = vec![0u8; 10];

        let bands = assign_rows(data.chunks_exact_mut(1), threads(4), WorkAllocation::Static);
        for band in bands {
            for (_, row) in band {
                row[0] = 1;
            }
        }

        assert_eq!(data, vec![1, 1, 1, 1, 1, 1, 1, 1, 0, 0]);
    }
}
