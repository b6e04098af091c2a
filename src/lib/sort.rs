//! In-place quicksort of FASTQ records, keyed on the sequence line.

use crate::record::FastqRecord;

/// Sorts records in place by ascending sequence line.
///
/// Comparison is bytewise lexicographic over the whole sequence line. Records
/// with identical sequences keep no particular relative order (the sort is not
/// stable), though the outcome is deterministic for a given input. To sort
/// only part of a dataset, pass the sub-slice:
/// `sort_records(&mut records[start..=stop])`.
pub fn sort_records(records: &mut [FastqRecord]) {
    sort_impl(records);
}

/// Quicksort with a Lomuto partition and last-element pivot, driven by an
/// explicit stack of pending inclusive `(lo, hi)` ranges instead of recursion.
///
/// Maximally skewed partitions are realistic for sequencing data (already
/// sorted files, long runs of identical sequences), and recursing on them
/// would reach O(n) call depth. The explicit stack makes the call depth
/// constant, and pushing the larger side of each split first means the
/// smaller side is always split next: the ranges left waiting on the stack
/// come from splits that at least halve in size each time, so the stack never
/// holds more than log2(n) pending ranges.
///
/// Returns the high-water mark of the pending stack, asserted on by the depth
/// regression tests.
fn sort_impl(records: &mut [FastqRecord]) -> usize {
    if records.len() < 2 {
        return 0;
    }

    let mut pending: Vec<(usize, usize)> = vec![(0, records.len() - 1)];
    let mut max_pending = 1;

    while let Some((lo, hi)) = pending.pop() {
        let pivot_at = partition(records, lo, hi);

        // Sub-ranges on either side of the settled pivot; a side with fewer
        // than two records is already sorted and never pushed.
        let below = pivot_at - lo;
        let above = hi - pivot_at;
        if below > above {
            if below > 1 {
                pending.push((lo, pivot_at - 1));
            }
            if above > 1 {
                pending.push((pivot_at + 1, hi));
            }
        } else {
            if above > 1 {
                pending.push((pivot_at + 1, hi));
            }
            if below > 1 {
                pending.push((lo, pivot_at - 1));
            }
        }
        max_pending = max_pending.max(pending.len());
    }

    max_pending
}

/// One Lomuto partition pass over the inclusive range `[lo, hi]`, using the
/// record at `hi` as the pivot.
///
/// On return the pivot record sits at the returned index, every record to its
/// left has a key less than or equal to the pivot key, and every record to its
/// right has a greater key.
fn partition(records: &mut [FastqRecord], lo: usize, hi: usize) -> usize {
    let mut boundary = lo;
    for probe in lo..hi {
        if records[probe].key() <= records[hi].key() {
            records.swap(boundary, probe);
            boundary += 1;
        }
    }
    records.swap(boundary, hi);
    boundary
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use crate::utils::test_commons::{keys_of, records_with_keys};

    use super::{sort_impl, sort_records};

    /// Each waiting range is carved from a split at most half the size of the
    /// one before it, so the stack stays within log2 of the record count
    /// (log2(1000) < 10).
    const MAX_PENDING_RANGES: usize = 11;

    #[rstest]
    #[case(vec!["GGG", "AAA", "CCC", "AAA"], vec!["AAA", "AAA", "CCC", "GGG"])]
    #[case(vec!["AAA", "CCC", "GGG"], vec!["AAA", "CCC", "GGG"])]
    #[case(vec!["GGG", "CCC", "AAA"], vec!["AAA", "CCC", "GGG"])]
    #[case(vec!["TTT", "TTT", "TTT"], vec!["TTT", "TTT", "TTT"])]
    #[case(vec!["C", "AA", "A", "CA"], vec!["A", "AA", "C", "CA"])]
    #[case(vec![], vec![])]
    fn test_sorts_by_sequence(#[case] input: Vec<&str>, #[case] expected: Vec<&str>) {
        let mut records = records_with_keys(&input);
        sort_records(&mut records);
        assert_eq!(keys_of(&records), expected);
    }

    #[test]
    fn test_full_records_travel_with_their_keys() {
        let input = records_with_keys(&["GGG", "AAA", "CCC", "AAA"]);
        let mut records = input.clone();
        sort_records(&mut records);

        assert_eq!(keys_of(&records), vec!["AAA", "AAA", "CCC", "GGG"]);

        // No record was created, lost, or duplicated.
        let mut seen = records.clone();
        let mut expected = input.clone();
        seen.sort_by(|a, b| a.header.cmp(&b.header));
        expected.sort_by(|a, b| a.header.cmp(&b.header));
        assert_eq!(seen, expected);

        // The record that carried "GGG" arrived intact.
        let ggg = records.iter().find(|r| r.key() == "GGG").unwrap();
        assert_eq!(ggg, &input[0]);
    }

    #[test]
    fn test_single_record_is_unchanged() {
        let input = records_with_keys(&["GATTACA"]);
        let mut records = input.clone();
        sort_records(&mut records);
        assert_eq!(records, input);
    }

    #[test]
    fn test_empty_dataset_is_a_no_op() {
        let mut records = records_with_keys(&[]);
        sort_records(&mut records);
        assert!(records.is_empty());
    }

    #[test]
    fn test_sorting_a_sub_slice_leaves_the_rest_untouched() {
        let input = records_with_keys(&["DDD", "CCC", "BBB", "AAA", "EEE"]);
        let mut records = input.clone();

        sort_records(&mut records[1..=3]);

        assert_eq!(keys_of(&records), vec!["DDD", "AAA", "BBB", "CCC", "EEE"]);
        assert_eq!(records[0], input[0]);
        assert_eq!(records[4], input[4]);
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let mut records = records_with_keys(&["G", "T", "A", "C", "A", "N"]);
        sort_records(&mut records);
        let once = records.clone();
        sort_records(&mut records);
        assert_eq!(records, once);
    }

    #[test]
    fn test_reverse_sorted_thousand_records_sort_without_deep_stack() {
        let keys: Vec<String> = (0..1000).rev().map(|i| format!("{:04}", i)).collect();
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let mut records = records_with_keys(&key_refs);

        let depth = sort_impl(&mut records);

        let expected: Vec<String> = (0..1000).map(|i| format!("{:04}", i)).collect();
        assert_eq!(keys_of(&records), expected);
        assert!(depth <= MAX_PENDING_RANGES, "pending ranges reached {}", depth);
    }

    #[test]
    fn test_scrambled_thousand_records_sort_without_deep_stack() {
        // 421 is coprime with 1000, so this visits each key exactly once.
        let keys: Vec<String> = (0..1000).map(|i| format!("{:04}", (i * 421) % 1000)).collect();
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let mut records = records_with_keys(&key_refs);

        let depth = sort_impl(&mut records);

        let expected: Vec<String> = (0..1000).map(|i| format!("{:04}", i)).collect();
        assert_eq!(keys_of(&records), expected);
        assert!(depth <= MAX_PENDING_RANGES, "pending ranges reached {}", depth);
    }
}
