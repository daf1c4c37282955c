use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// A node in the Huffman tree.
///
/// Each non-root node is owned exclusively by its parent; the tree is
/// strictly binary and acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf carries a symbol and its frequency weight.
    Leaf { symbol: char, weight: usize },
    /// An internal node carries the combined weight of its children.
    Internal {
        weight: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the weight of the node.
    pub fn weight(&self) -> usize {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// A Huffman prefix-code tree.
///
/// The root is absent when the tree was built from an empty frequency
/// table. The tree is replaced wholesale on each rebuild; nodes are
/// never shared or mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<Box<HuffmanNode>>,
}

impl HuffmanTree {
    /// An empty tree, the result of building from an empty table.
    pub fn empty() -> Self {
        HuffmanTree { root: None }
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&HuffmanNode> {
        self.root.as_deref()
    }

    /// Returns true if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total weight of the tree: the sum of all leaf frequencies, or
    /// zero for an empty tree.
    pub fn total_weight(&self) -> usize {
        self.root().map_or(0, HuffmanNode::weight)
    }
}

/// Heap entry ordered so the lowest-weight node pops first. Equal
/// weights pop in insertion order, keyed by `seq`, so construction is
/// deterministic even though the tie-break rule itself is an
/// implementation detail callers must not rely on.
#[derive(Debug, PartialEq, Eq)]
struct HeapEntry {
    node: Box<HuffmanNode>,
    seq: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse both keys: BinaryHeap is a max-heap.
        other
            .node
            .weight()
            .cmp(&self.node.weight())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a Huffman tree from a frequency table.
///
/// Classic construction: seed a min-priority queue with one leaf per
/// symbol, then repeatedly merge the two lowest-weight nodes into an
/// internal node (first extracted on the left) until one root remains.
/// Runs in O(n log n) for n distinct symbols.
///
/// Symbols are seeded in sorted order so the resulting tree is the same
/// across runs regardless of map iteration order.
///
/// # Errors
///
/// Returns [`Error::MalformedFrequency`] if any count is zero. Counts
/// are unsigned, so negative counts are unrepresentable; a zero count
/// indicates a caller bug and construction aborts rather than building
/// a corrupt tree.
///
/// # Examples
///
/// ```
/// use huffcode::frequency::count;
/// use huffcode::tree::build;
///
/// let tree = build(&count("aabbbcc")).unwrap();
/// assert_eq!(tree.total_weight(), 7);
/// ```
pub fn build(freq: &FrequencyTable) -> Result<HuffmanTree> {
    if freq.is_empty() {
        return Ok(HuffmanTree::empty());
    }

    // Sorted seeding keeps construction deterministic across runs.
    let mut symbols: Vec<char> = freq.keys().copied().collect();
    symbols.sort_unstable();

    let mut heap = BinaryHeap::with_capacity(symbols.len());
    let mut seq = 0;
    for symbol in symbols {
        let weight = freq[&symbol];
        if weight == 0 {
            return Err(Error::MalformedFrequency(symbol));
        }
        heap.push(HeapEntry {
            node: Box::new(HuffmanNode::Leaf { symbol, weight }),
            seq,
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let left = heap.pop().expect("heap has at least two entries").node;
        let right = heap.pop().expect("heap has at least two entries").node;
        let merged = Box::new(HuffmanNode::Internal {
            weight: left.weight() + right.weight(),
            left,
            right,
        });
        heap.push(HeapEntry { node: merged, seq });
        seq += 1;
    }

    let root = heap.pop().expect("non-empty table yields a root").node;
    debug!(
        "built huffman tree: {} distinct symbols, total weight {}",
        freq.len(),
        root.weight()
    );
    Ok(HuffmanTree { root: Some(root) })
}
