//! Mismatch-tolerant suffix-prefix matching (spec §4.5).

use std::collections::HashMap;

use crate::error::{MiningError, Result};
use crate::node::NodeId;
use crate::string_table::{StringId, TERMINATOR};
use crate::tree::SuffixTree;

/// Like [`crate::queries::exact::find_suffix_matches_for_prefix`], but a
/// match of length `L` is accepted once it has at most
/// `floor(|prefix| * max_mismatch_rate)` mismatches *and* the local rate
/// `mismatches / L` does not exceed `max_mismatch_rate`.
///
/// Explores every root-to-leaf path with a worklist rather than following a
/// single guided descent, since a mismatching character can send the walk
/// down any of a node's children.
pub fn find_suffix_matches_for_prefix_with_mismatches(
    tree: &SuffixTree,
    prefix_string_id: StringId,
    max_mismatch_rate: f64,
) -> Result<HashMap<StringId, usize>> {
    if !(0.0..=1.0).contains(&max_mismatch_rate) {
        return Err(MiningError::invalid_mismatch_rate(max_mismatch_rate));
    }
    let table_len = tree.strings().len();
    if prefix_string_id >= table_len {
        return Err(MiningError::invalid_string_id(prefix_string_id, table_len));
    }
    let prefix = tree.strings().get(prefix_string_id)?;
    let prefix_bytes = prefix.as_bytes();
    let max_mismatches = (prefix_bytes.len() as f64 * max_mismatch_rate).floor() as usize;

    let mut best: HashMap<StringId, usize> = HashMap::new();
    let mut worklist: Vec<(usize, usize, NodeId)> = vec![(0, 0, tree.root())];

    while let Some((prefix_position, mismatches, node)) = worklist.pop() {
        for &child in &tree.node(node).children.clone() {
            walk_edge(
                tree,
                child,
                prefix_bytes,
                prefix_position,
                mismatches,
                max_mismatches,
                max_mismatch_rate,
                &mut best,
                &mut worklist,
            );
        }
    }

    best.remove(&prefix_string_id);
    Ok(best)
}

#[allow(clippy::too_many_arguments)]
fn walk_edge(
    tree: &SuffixTree,
    child: NodeId,
    prefix_bytes: &[u8],
    mut prefix_position: usize,
    mut mismatches: usize,
    max_mismatches: usize,
    max_mismatch_rate: f64,
    best: &mut HashMap<StringId, usize>,
    worklist: &mut Vec<(usize, usize, NodeId)>,
) {
    let label = tree.node(child).edge_label.expect("non-root child has an edge label");
    for offset in 0..label.len() {
        let edge_byte = tree.edge_byte_at(label, offset);

        if edge_byte == TERMINATOR as u8 {
            let length = tree.node(child).path_label_length - 1;
            let accepted = length == 0 || (mismatches as f64 / length as f64) <= max_mismatch_rate;
            if accepted {
                if let Some(leaf_strings) = &tree.node(child).leaf_strings {
                    for &(string_id, _) in leaf_strings {
                        best.entry(string_id)
                            .and_modify(|existing| *existing = (*existing).max(length))
                            .or_insert(length);
                    }
                }
            }
            return;
        }

        let matches_prefix = prefix_bytes.get(prefix_position) == Some(&edge_byte);
        if !matches_prefix {
            mismatches += 1;
            if mismatches > max_mismatches {
                return;
            }
        }
        prefix_position += 1;
    }

    worklist.push((prefix_position, mismatches, child));
}
