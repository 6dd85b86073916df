//! Counting duplicate whole-string insertions (spec §4.7).

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tree::SuffixTree;

/// How many times `sequence` was inserted into the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceCount {
    pub count: usize,
    pub sequence: String,
}

/// For every leaf whose root-to-leaf path spells out an entire input string,
/// reports how many times that string was inserted.
///
/// A single leaf can mix whole-string occurrences with occurrences that are
/// merely a trailing suffix of some *other*, longer string: if `"abc"` and
/// `"xabc"` are both inserted, `"xabc"`'s suffix starting at position 1 is
/// exactly `"abc$"` and lands at the same leaf as `"abc"`'s own whole-string
/// suffix. Each `(string_id, suffix_start)` entry at a leaf must therefore be
/// checked individually against its own string's terminated length, not just
/// once per leaf.
pub fn count_unique_sequences(tree: &SuffixTree) -> Result<Vec<SequenceCount>> {
    let mut counts = Vec::new();

    for &leaf in tree.leaves() {
        let node = tree.node(leaf);
        let leaf_strings = node.leaf_strings.as_ref().expect("leaves index only holds leaves");

        let mut whole_string_count = 0;
        let mut representative: Option<String> = None;
        for &(string_id, suffix_start) in leaf_strings {
            if suffix_start != 0 {
                continue;
            }
            let terminated_len = tree.strings().terminated_len(string_id)?;
            if node.path_label_length != terminated_len {
                continue;
            }
            if representative.is_none() {
                let owner = tree.strings().get(string_id)?;
                representative = Some(owner[..owner.len() - 1].to_string());
            }
            whole_string_count += 1;
        }

        if let Some(sequence) = representative {
            counts.push(SequenceCount { count: whole_string_count, sequence });
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(counts)
}
