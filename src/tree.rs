//! The generalized suffix tree container.
//!
//! [`SuffixTree`] owns the node arena and the string table, and exposes the
//! mutation primitives ([`SuffixTree::split_edge`], [`SuffixTree::add_child`],
//! [`SuffixTree::add_leaf_suffix`]) that the naive builder in `builder.rs`
//! composes into suffix insertion.

use crate::error::Result;
use crate::node::{EdgeLabel, Node, NodeId};
use crate::string_table::{StringId, StringTable};

/// The root is always the first node allocated.
pub(crate) const ROOT: NodeId = 0;

/// A generalized suffix tree over an incrementally-built collection of strings.
#[derive(Debug)]
pub struct SuffixTree {
    pub(crate) strings: StringTable,
    pub(crate) nodes: Vec<Node>,
    pub(crate) leaves: Vec<NodeId>,
    pub(crate) track_terminal_edges: bool,
}

impl SuffixTree {
    /// Creates an empty tree.
    ///
    /// When `track_terminal_edges` is set, every internal node accumulates
    /// the set of string ids whose terminator edge hangs directly below it,
    /// which [`crate::queries::adapter::find_most_common_suffixes`] and
    /// [`crate::queries::exact::find_suffix_matches_for_prefix`] require.
    pub fn new(track_terminal_edges: bool) -> Self {
        Self {
            strings: StringTable::new(),
            nodes: vec![Node::root()],
            leaves: Vec::new(),
            track_terminal_edges,
        }
    }

    /// Creates a tree and inserts `initial_strings` in order.
    pub fn from_strings<I, S>(initial_strings: I, track_terminal_edges: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new(track_terminal_edges);
        for s in initial_strings {
            tree.add_string(s.as_ref())?;
        }
        Ok(tree)
    }

    /// Appends one string to the table and inserts all of its suffixes.
    pub fn add_string(&mut self, s: &str) -> Result<StringId> {
        let string_id = self.strings.append(s)?;
        self.insert_suffixes(string_id);
        #[cfg(debug_assertions)]
        self.debug_check_invariants();
        Ok(string_id)
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn track_terminal_edges(&self) -> bool {
        self.track_terminal_edges
    }

    pub(crate) fn push_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Byte at `label.start + offset` in the owning string.
    pub(crate) fn edge_byte_at(&self, label: EdgeLabel, offset: usize) -> u8 {
        self.strings.get_unchecked(label.owner).as_bytes()[label.start + offset]
    }

    /// Byte at `pos` in `string_id`'s terminated representation.
    pub(crate) fn string_byte_at(&self, string_id: StringId, pos: usize) -> u8 {
        self.strings.get_unchecked(string_id).as_bytes()[pos]
    }

    /// Finds the child of `parent` whose edge begins with `byte`, if any.
    ///
    /// Invariant 1 (unique edge-first-character) guarantees at most one
    /// match, so the first hit found is returned.
    pub(crate) fn child_with_first_byte(&self, parent: NodeId, byte: u8) -> Option<(usize, NodeId)> {
        self.nodes[parent]
            .children
            .iter()
            .enumerate()
            .find(|(_, &child)| {
                let label = self.nodes[child].edge_label.expect("non-root child has an edge label");
                self.edge_byte_at(label, 0) == byte
            })
            .map(|(idx, &child)| (idx, child))
    }

    /// Appends `child` to `parent`'s children, sets its parent pointer and
    /// recomputes its cached path-label length.
    pub(crate) fn add_child(&mut self, parent: NodeId, child: NodeId) {
        let label = self.nodes[child].edge_label.expect("non-root child has an edge label");
        let parent_path_len = self.nodes[parent].path_label_length;
        self.nodes[child].parent = Some(parent);
        self.nodes[child].path_label_length = parent_path_len + label.len();
        self.nodes[parent].children.push(child);
    }

    /// Splits the edge leading to `parent`'s child at `child_index`, at
    /// `split_offset` characters into that edge, inserting a new internal
    /// node between them. Returns the new internal node's id.
    pub(crate) fn split_edge(&mut self, parent: NodeId, child_index: usize, split_offset: usize) -> NodeId {
        let child_id = self.nodes[parent].children[child_index];
        let child_label = self.nodes[child_id].edge_label.expect("split target has an edge label");
        debug_assert!(split_offset > 0 && split_offset < child_label.len());

        let split_label = EdgeLabel {
            owner: child_label.owner,
            start: child_label.start,
            end: child_label.start + split_offset,
        };
        let internal = self.push_node(Node::internal(split_label, self.track_terminal_edges));
        let parent_path_len = self.nodes[parent].path_label_length;
        self.nodes[internal].parent = Some(parent);
        self.nodes[internal].path_label_length = parent_path_len + split_label.len();
        self.nodes[parent].children[child_index] = internal;

        let remaining_label = EdgeLabel {
            owner: child_label.owner,
            start: split_label.end,
            end: child_label.end,
        };
        self.nodes[child_id].edge_label = Some(remaining_label);
        self.add_child(internal, child_id);

        if self.track_terminal_edges && remaining_label.len() == 1 {
            let terminator = self.edge_byte_at(remaining_label, 0);
            if terminator == crate::string_table::TERMINATOR as u8 {
                if let Some(leaf_strings) = self.nodes[child_id].leaf_strings.clone() {
                    let ids = self.nodes[internal].terminal_edge_ids.get_or_insert_with(Default::default);
                    ids.extend(leaf_strings.into_iter().map(|(id, _)| id));
                }
            }
        }

        internal
    }

    /// Extends a leaf's `leaf_strings` with another suffix ending at it.
    pub(crate) fn add_leaf_suffix(&mut self, leaf: NodeId, string_id: StringId, position: usize) {
        self.nodes[leaf]
            .leaf_strings
            .as_mut()
            .expect("add_leaf_suffix called on a non-leaf node")
            .push((string_id, position));
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        for (id, node) in self.nodes.iter().enumerate() {
            let mut seen = std::collections::HashSet::new();
            for &child in &node.children {
                let label = self.nodes[child].edge_label.expect("child has edge label");
                let first = self.edge_byte_at(label, 0);
                debug_assert!(seen.insert(first), "duplicate edge-first-byte under node {id}");
            }
            if let Some(label) = node.edge_label {
                let expected = self.nodes[node.parent.unwrap()].path_label_length + label.len();
                debug_assert_eq!(
                    node.path_label_length, expected,
                    "path-length consistency violated at node {id}"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_has_only_root() {
        let tree = SuffixTree::new(false);
        assert_eq!(tree.nodes.len(), 1);
        assert!(tree.node(tree.root()).is_root());
        assert!(tree.leaves().is_empty());
    }

    #[test]
    fn add_string_assigns_ids_in_order() {
        let mut tree = SuffixTree::new(false);
        assert_eq!(tree.add_string("gctgca").unwrap(), 0);
        assert_eq!(tree.add_string("tgc").unwrap(), 1);
        assert_eq!(tree.strings().len(), 2);
    }

    #[test]
    fn rejects_terminator_in_input() {
        let mut tree = SuffixTree::new(false);
        assert!(tree.add_string("gc$tgca").is_err());
    }
}
