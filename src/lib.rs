/*!
A generalized suffix tree engine and the string-mining queries built on top
of it: exact and mismatch-tolerant suffix-prefix matching, common-suffix
ranking, duplicate counting, and barcode extraction.

Originally shaped around short-read sequencing data (adapter trimming,
sample demultiplexing), but the tree and queries operate on arbitrary byte
strings.

# Available Queries

## Suffix tree construction
- [`SuffixTree`]: an arena-allocated generalized suffix tree built with the
  classic naive, per-suffix insertion algorithm.
  - Time: O(n^2) over the total input length
  - Space: O(n) nodes, O(1) per edge label (a view into the shared string table)

## Exact suffix-prefix matcher
- [`find_suffix_matches_for_prefix`]: longest suffix-of-one-string that is a
  prefix of another, via a single guided descent.

## Mismatch-tolerant matcher
- [`find_suffix_matches_for_prefix_with_mismatches`]: as above, tolerating a
  bounded fraction of mismatching characters via worklist DFS.

## Most-common-suffix ranker
- [`find_most_common_suffixes`]: ranks leaves by how many input strings share
  their root-to-leaf path, surfacing likely adapter sequences.

## Unique-whole-string counter
- [`count_unique_sequences`]: counts duplicate insertions of the same string.

## Barcode extractor
- [`find_barcodes`]: partitions strings by a shared-length trailing barcode.

# Usage Example

```rust
use strmine::SuffixTree;
use strmine::queries::find_suffix_matches_for_prefix;

let mut tree = SuffixTree::new(false);
let adapter = tree.add_string("gctgca").unwrap();
tree.add_string("tgc").unwrap();
tree.add_string("gct").unwrap();

let matches = find_suffix_matches_for_prefix(&tree, adapter).unwrap();
assert_eq!(matches.len(), 2);
```

# Features
- Arena-based nodes addressed by handle, so there are no parent-pointer cycles.
- Edge labels are views into an append-only string table, never copied substrings.
- Opt-in terminal-edge bookkeeping (`track_terminal_edges`), needed only by the ranker.
*/

mod builder;
pub mod error;
pub mod node;
pub mod queries;
pub mod string_table;
pub mod tree;

pub use error::{MiningError, Result};
pub use tree::SuffixTree;

/// Re-export of [`queries::find_suffix_matches_for_prefix`].
pub use self::queries::find_suffix_matches_for_prefix;

/// Re-export of [`queries::find_suffix_matches_for_prefix_with_mismatches`].
pub use self::queries::find_suffix_matches_for_prefix_with_mismatches;

/// Re-export of [`queries::find_most_common_suffixes`].
pub use self::queries::find_most_common_suffixes;

/// Re-export of [`queries::count_unique_sequences`].
pub use self::queries::count_unique_sequences;

/// Re-export of [`queries::find_barcodes`].
pub use self::queries::find_barcodes;
