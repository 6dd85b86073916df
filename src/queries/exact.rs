//! Exact suffix-of-X / prefix-of-Y matching (spec §4.4).

use std::collections::HashMap;

use crate::error::{MiningError, Result};
use crate::string_table::{StringId, TERMINATOR};
use crate::tree::SuffixTree;

/// For every string `k != prefix_string_id`, the length of the longest
/// proper suffix of `strings[k]` that is a prefix of `strings[prefix_string_id]`.
///
/// `prefix_string_id` is assumed to have been inserted into `tree`; at each
/// node the walk descends into the single child whose edge begins with the
/// next prefix character (invariant 1 guarantees there is at most one).
pub fn find_suffix_matches_for_prefix(
    tree: &SuffixTree,
    prefix_string_id: StringId,
) -> Result<HashMap<StringId, usize>> {
    let table_len = tree.strings().len();
    if prefix_string_id >= table_len {
        return Err(MiningError::invalid_string_id(prefix_string_id, table_len));
    }
    let prefix = tree.strings().get(prefix_string_id)?;
    let prefix_bytes = prefix.as_bytes();

    let mut best: HashMap<StringId, usize> = HashMap::new();
    let mut current = tree.root();
    let mut pos = 0usize;

    loop {
        record_terminal_candidates(tree, current, &mut best);

        if pos >= prefix_bytes.len() {
            break;
        }
        match tree.child_with_first_byte(current, prefix_bytes[pos]) {
            None => break,
            Some((_, child)) => {
                let label = tree.node(child).edge_label.expect("non-root child has an edge label");
                pos += label.len();
                current = child;
            }
        }
    }

    best.remove(&prefix_string_id);
    Ok(best)
}

/// Credits `node.path_label_length` to every string id whose terminator
/// edge hangs directly under `node`.
fn record_terminal_candidates(tree: &SuffixTree, node: crate::node::NodeId, best: &mut HashMap<StringId, usize>) {
    let candidate_length = tree.node(node).path_label_length;
    for &child in &tree.node(node).children {
        let label = tree.node(child).edge_label.expect("non-root child has an edge label");
        if label.len() != 1 || tree.edge_byte_at(label, 0) != TERMINATOR as u8 {
            continue;
        }
        let Some(leaf_strings) = &tree.node(child).leaf_strings else {
            continue;
        };
        for &(string_id, _) in leaf_strings {
            best.entry(string_id)
                .and_modify(|existing| *existing = (*existing).max(candidate_length))
                .or_insert(candidate_length);
        }
    }
}
