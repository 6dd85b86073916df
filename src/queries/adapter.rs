//! Most-common-suffix ranking, for discovering an unknown adapter sequence
//! shared across many reads (spec §4.6).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::node::NodeId;
use crate::string_table::StringId;
use crate::tree::SuffixTree;

/// One ranked candidate: `length` characters (terminator excluded) shared by
/// `count` distinct input strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRank {
    pub count: usize,
    pub length: usize,
    pub suffix: String,
}

/// Ranks every non-trivial leaf by how many input strings pass through its
/// root-to-leaf path, sorted by `count` descending then `length` descending.
///
/// Built on the arena directly with an explicit stack rather than recursion,
/// since a pathological input (many near-identical long strings) can drive
/// the tree deeper than a comfortable native call stack.
///
/// When the tree was constructed with `track_terminal_edges: false`, internal
/// nodes carry no terminal-edge bookkeeping and every leaf's count degrades
/// to just its own `leaf_strings` cardinality.
pub fn find_most_common_suffixes(tree: &SuffixTree) -> Result<Vec<SuffixRank>> {
    let mut ranks = Vec::new();
    let mut stack: Vec<(NodeId, HashSet<StringId>)> = vec![(tree.root(), HashSet::new())];

    while let Some((node_id, inherited)) = stack.pop() {
        let node = tree.node(node_id);

        if node.is_leaf() {
            if is_trivial_root_terminator(tree, node_id) {
                continue;
            }
            let leaf_strings = node.leaf_strings.as_ref().expect("leaf has leaf_strings");
            let mut ids = inherited;
            ids.extend(leaf_strings.iter().map(|&(id, _)| id));
            let length = node.path_label_length - 1;
            let (string_id, suffix_start) = leaf_strings[0];
            let owner = tree.strings().get(string_id)?;
            let suffix = owner[suffix_start..suffix_start + length].to_string();
            ranks.push(SuffixRank { count: ids.len(), length, suffix });
            continue;
        }

        let mut extended = inherited;
        if let Some(terminal_ids) = &node.terminal_edge_ids {
            extended.extend(terminal_ids.iter().copied());
        }
        for &child in &node.children {
            stack.push((child, extended.clone()));
        }
    }

    ranks.sort_by(|a, b| b.count.cmp(&a.count).then(b.length.cmp(&a.length)));
    Ok(ranks)
}

/// Returns the suffix of the highest-ranked candidate, or `None` if no suffix
/// is shared by more than one string (a lone, unshared leaf is not an
/// adapter).
pub fn most_likely_adapter(tree: &SuffixTree) -> Result<Option<String>> {
    Ok(find_most_common_suffixes(tree)?.into_iter().next().filter(|rank| rank.count > 1).map(|rank| rank.suffix))
}

fn is_trivial_root_terminator(tree: &SuffixTree, leaf: NodeId) -> bool {
    let node = tree.node(leaf);
    node.path_label_length == 1 && node.parent == Some(tree.root())
}
