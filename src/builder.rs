//! Naive O(n^2) suffix insertion.
//!
//! Inserts one suffix at a time by walking from the root and splitting an
//! edge at the first mismatch. A linear-time builder (Ukkonen's algorithm)
//! is documented as future work in DESIGN.md rather than implemented here —
//! see the spec's Non-goals.

use crate::node::{EdgeLabel, Node};
use crate::string_table::{StringId, TERMINATOR};
use crate::tree::SuffixTree;

impl SuffixTree {
    /// Inserts every suffix of the string just appended under `string_id`.
    pub(crate) fn insert_suffixes(&mut self, string_id: StringId) {
        let total_len = self.strings.get_unchecked(string_id).len();
        for i in 0..total_len {
            self.insert_suffix(string_id, i, total_len);
        }
    }

    fn insert_suffix(&mut self, string_id: StringId, i: usize, total_len: usize) {
        let mut current = self.root();
        let mut suffix_pos = 0usize;

        loop {
            let remaining = total_len - (i + suffix_pos);
            if remaining == 0 {
                // The whole suffix was already consumed by a previous
                // descent: this is a duplicate of a suffix already in the
                // tree (e.g. inserting the same string twice).
                debug_assert!(self.nodes[current].is_leaf());
                self.add_leaf_suffix(current, string_id, i);
                return;
            }

            let next_byte = self.string_byte_at(string_id, i + suffix_pos);
            let Some((child_index, child_id)) = self.child_with_first_byte(current, next_byte) else {
                self.attach_leaf(current, string_id, i, i + suffix_pos, total_len);
                return;
            };

            let label = self.nodes[child_id].edge_label.expect("child has an edge label");
            let edge_len = label.len();
            let max_cmp = edge_len.min(remaining);

            let mut p = 1;
            let mut mismatch = false;
            while p < max_cmp {
                let edge_byte = self.edge_byte_at(label, p);
                let suffix_byte = self.string_byte_at(string_id, i + suffix_pos + p);
                if edge_byte != suffix_byte {
                    mismatch = true;
                    break;
                }
                p += 1;
            }

            if mismatch {
                let internal = self.split_edge(current, child_index, p);
                self.attach_leaf(internal, string_id, i, i + suffix_pos + p, total_len);
                return;
            }

            if p == edge_len {
                suffix_pos += edge_len;
                current = child_id;
                continue;
            }

            unreachable!(
                "suffix exhausted mid-edge without a mismatch: edges only extend past a \
                 shared terminator for duplicate strings, which end exactly at edge boundaries"
            );
        }
    }

    /// Attaches a new leaf under `parent` with edge label
    /// `[edge_start, total_len)` owned by `string_id`, and marks a terminal
    /// edge on `parent` when that label is the bare terminator.
    fn attach_leaf(&mut self, parent: crate::node::NodeId, string_id: StringId, suffix_start: usize, edge_start: usize, total_len: usize) {
        let label = EdgeLabel { owner: string_id, start: edge_start, end: total_len };
        let leaf = self.push_node(Node::leaf(label, string_id, suffix_start));
        self.add_child(parent, leaf);
        self.leaves.push(leaf);

        if self.track_terminal_edges && label.len() == 1 && self.edge_byte_at(label, 0) == TERMINATOR as u8 {
            self.nodes[parent]
                .terminal_edge_ids
                .get_or_insert_with(Default::default)
                .insert(string_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::SuffixTree;

    #[test]
    fn inserts_all_suffixes_of_a_single_string() {
        let mut tree = SuffixTree::new(false);
        let id = tree.add_string("banana").unwrap();
        // "banana$" has 7 suffixes, each terminated exactly once.
        let total_leaf_strings: usize = tree
            .leaves()
            .iter()
            .map(|&leaf| tree.node(leaf).leaf_strings.as_ref().unwrap().len())
            .sum();
        assert_eq!(total_leaf_strings, 7);
        assert_eq!(tree.strings().get(id).unwrap(), "banana$");
    }

    #[test]
    fn duplicate_strings_share_a_leaf() {
        let mut tree = SuffixTree::new(false);
        tree.add_string("abc").unwrap();
        tree.add_string("abc").unwrap();

        let whole_string_leaves: Vec<_> = tree
            .leaves()
            .iter()
            .filter(|&&leaf| tree.node(leaf).path_label_length == 4)
            .collect();
        assert_eq!(whole_string_leaves.len(), 1);
        assert_eq!(
            tree.node(*whole_string_leaves[0]).leaf_strings.as_ref().unwrap().len(),
            2
        );
    }

    #[test]
    fn generalized_tree_over_multiple_strings() {
        let tree = SuffixTree::from_strings(["gctgca", "tgc", "gct"], false).unwrap();
        assert_eq!(tree.strings().len(), 3);
        // Every suffix of every string should end at some leaf.
        let total_leaf_strings: usize = tree
            .leaves()
            .iter()
            .map(|&leaf| tree.node(leaf).leaf_strings.as_ref().unwrap().len())
            .sum();
        assert_eq!(total_leaf_strings, 7 + 4 + 4);
    }
}
