//! Barcode extraction for demultiplexing reads after adapter trimming
//! (spec §4.8).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::string_table::StringId;
use crate::tree::SuffixTree;

/// Minimum recorded suffix length (4 bases plus the terminator) considered a
/// barcode candidate.
const MIN_BARCODE_RECORD_LENGTH: usize = 5;

/// Partition of the input strings by their inferred barcode.
///
/// Assumes adapter trimming has already happened: every remaining string tail
/// is expected to be (at most) a short sample identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeReport {
    pub barcode_set: HashSet<String>,
    pub samples_per_barcode: HashMap<String, Vec<StringId>>,
    pub count_per_barcode: HashMap<String, usize>,
    pub lengths_per_barcode: HashMap<String, usize>,
}

/// One string's best-seen barcode candidate: the suffix shared by the most
/// other strings, with a longer suffix breaking ties.
struct BestSuffix {
    share_count: usize,
    length: usize,
    text: String,
}

/// For each string, keeps only the single best-seen candidate suffix (the one
/// shared by the most other strings, ties broken by length), then infers a
/// single barcode length as the mode of those per-string lengths and groups
/// strings by the trailing `barcode_length` characters of their own best
/// suffix.
///
/// A leaf's `leaf_strings` is walked once per string rather than once per
/// leaf: a string has one suffix recorded per qualifying leaf it passes
/// through (position 0's whole-read suffix, position 1's, and so on), and
/// feeding every one of those into the length histogram double- and
/// triple-counts the same string. The reference this is grounded on reduces
/// to one candidate per string first (`number_of_sequences[id]` /
/// `len_suffixes[id]` in `SuffixTree.find_barcodes`) before computing the
/// modal length; its tie-break comparison was a dead self-comparison
/// (`len_suffixes[id] > len_suffixes[id]`, always false) that this reduction
/// replaces with a real "is this better than what we already recorded for
/// this string" comparison.
pub fn find_barcodes(tree: &SuffixTree) -> Result<BarcodeReport> {
    let mut best: HashMap<StringId, BestSuffix> = HashMap::new();

    for &leaf in tree.leaves() {
        let node = tree.node(leaf);
        if node.path_label_length < MIN_BARCODE_RECORD_LENGTH {
            continue;
        }
        let leaf_strings = node.leaf_strings.as_ref().expect("leaves index only holds leaves");
        let length = node.path_label_length - 1;
        let share_count = leaf_strings.len();

        for &(string_id, suffix_start) in leaf_strings {
            let owner = tree.strings().get(string_id)?;
            let text = owner[suffix_start..suffix_start + length].to_string();
            let better = match best.get(&string_id) {
                None => true,
                Some(current) => {
                    share_count > current.share_count
                        || (share_count == current.share_count && length > current.length)
                }
            };
            if better {
                best.insert(string_id, BestSuffix { share_count, length, text });
            }
        }
    }

    let Some(barcode_length) = mode_length(&best) else {
        return Ok(BarcodeReport::default());
    };

    let mut report = BarcodeReport::default();
    for (string_id, candidate) in best {
        let tail_start = candidate.text.len().saturating_sub(barcode_length);
        let barcode = candidate.text[tail_start..].to_string();

        report.barcode_set.insert(barcode.clone());
        report.samples_per_barcode.entry(barcode.clone()).or_default().push(string_id);
        *report.count_per_barcode.entry(barcode.clone()).or_insert(0) += 1;
        report.lengths_per_barcode.insert(barcode, barcode_length);
    }

    Ok(report)
}

/// Ties favor the shortest length, consistent with the minimum-barcode-
/// length-4 floor this module otherwise enforces.
fn mode_length(best: &HashMap<StringId, BestSuffix>) -> Option<usize> {
    let mut frequency: HashMap<usize, usize> = HashMap::new();
    for candidate in best.values() {
        *frequency.entry(candidate.length).or_insert(0) += 1;
    }
    frequency
        .into_iter()
        .max_by(|(len_a, count_a), (len_b, count_b)| count_a.cmp(count_b).then(len_b.cmp(len_a)))
        .map(|(length, _)| length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_two_barcodes() {
        let tree = SuffixTree::from_strings(
            ["AAAAACGT", "GGGGGACGT", "CCCCCTTGC", "TTTTTTTGC", "ZZZZZZTTGC"],
            false,
        )
        .unwrap();
        let report = find_barcodes(&tree).unwrap();
        assert_eq!(report.barcode_set, HashSet::from(["ACGT".to_string(), "TTGC".to_string()]));
        assert_eq!(report.count_per_barcode[&"ACGT".to_string()], 2);
        assert_eq!(report.count_per_barcode[&"TTGC".to_string()], 3);
    }

    #[test]
    fn each_string_votes_exactly_once() {
        // Every string passes through several qualifying leaves (its own
        // suffixes of length 4, 5, 6...); the reduction must still count
        // each string exactly once towards the total.
        let tree = SuffixTree::from_strings(
            ["AAAAACGT", "GGGGGACGT", "CCCCCTTGC", "TTTTTTTGC", "ZZZZZZTTGC"],
            false,
        )
        .unwrap();
        let report = find_barcodes(&tree).unwrap();
        let total: usize = report.count_per_barcode.values().sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn a_suffix_shared_by_more_strings_wins_over_a_longer_unshared_one() {
        // "AAAA" (length 4) is shared by all five strings; each string's own
        // distinguishing 6-character tail is shared by only two or three.
        // The most-shared suffix wins regardless of length, per the
        // reference's selection rule.
        let tree =
            SuffixTree::from_strings(["XXAAAA", "XXAAAA", "XXAAAA", "YYAAAA", "YYAAAA"], false)
                .unwrap();
        let report = find_barcodes(&tree).unwrap();
        assert_eq!(report.barcode_set, HashSet::from(["AAAA".to_string()]));
        assert_eq!(report.count_per_barcode[&"AAAA".to_string()], 5);
    }

    #[test]
    fn short_tails_are_not_counted_as_barcodes() {
        let tree = SuffixTree::from_strings(["ab", "cd"], false).unwrap();
        let report = find_barcodes(&tree).unwrap();
        assert!(report.barcode_set.is_empty());
    }

    #[test]
    fn empty_tree_yields_default_report() {
        let tree = SuffixTree::new(false);
        assert_eq!(find_barcodes(&tree).unwrap(), BarcodeReport::default());
    }
}
