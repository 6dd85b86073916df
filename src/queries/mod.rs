/*!
Read-only traversals over a [`crate::tree::SuffixTree`].

# Available Queries

## Exact suffix-prefix matcher
Finds, for every other inserted string, the longest proper suffix of that
string which is a prefix of a chosen string.
- Method: single downward path walk guided by the prefix's own characters.
- Suitable for: detecting a known adapter sequence truncated at the end of a read.

## Mismatch-tolerant matcher
As above, but tolerates a bounded fraction of mismatching characters.
- Method: depth-first exploration with a worklist, pruning branches that
  exceed the mismatch budget.
- Suitable for: adapter detection in the presence of sequencing error.

## Most-common-suffix ranker
Ranks every leaf by how many input strings share its root-to-leaf path.
- Method: depth-first traversal accumulating terminal-edge ids per branch.
- Suitable for: discovering an unknown adapter sequence shared across reads.

## Unique-whole-string counter
Counts, for every distinct input string, how many times it was inserted.
- Method: a single pass over leaves whose path spells out an entire string.
- Suitable for: deduplication and corpus summary statistics.

## Barcode extractor
Partitions input strings by a shared-length tail sequence.
- Method: leaf-length histogram followed by grouping on the modal length.
- Suitable for: demultiplexing reads by sample barcode after adapter trimming.
*/

pub mod adapter;
pub mod barcode;
pub mod exact;
pub mod mismatch;
pub mod unique;

/// Re-export of [`exact::find_suffix_matches_for_prefix`].
pub use self::exact::find_suffix_matches_for_prefix;

/// Re-export of [`mismatch::find_suffix_matches_for_prefix_with_mismatches`].
pub use self::mismatch::find_suffix_matches_for_prefix_with_mismatches;

/// Re-export of [`adapter::find_most_common_suffixes`].
pub use self::adapter::find_most_common_suffixes;

/// Re-export of [`adapter::SuffixRank`].
pub use self::adapter::SuffixRank;

/// Re-export of [`unique::count_unique_sequences`].
pub use self::unique::count_unique_sequences;

/// Re-export of [`unique::SequenceCount`].
pub use self::unique::SequenceCount;

/// Re-export of [`barcode::find_barcodes`].
pub use self::barcode::find_barcodes;

/// Re-export of [`barcode::BarcodeReport`].
pub use self::barcode::BarcodeReport;
