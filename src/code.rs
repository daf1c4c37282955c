use std::collections::HashMap;

use log::debug;

use crate::tree::{HuffmanNode, HuffmanTree};

/// Maps each symbol to its binary code: a non-empty string of '0' and
/// '1' characters. Codes are prefix-free by construction, since each is
/// a root-to-leaf path in the tree.
pub type CodeTable = HashMap<char, String>;

/// Generate the code table for a Huffman tree.
///
/// Walks the tree depth-first, accumulating '0' for a left descent and
/// '1' for a right descent; reaching a leaf records the accumulated
/// path as that symbol's code. An empty tree yields an empty table.
///
/// When the tree is a single leaf the accumulated path is empty, so the
/// lone symbol is assigned the code "0" explicitly: an empty code would
/// be indistinguishable from "no more bits".
///
/// # Examples
///
/// ```
/// use huffcode::code::generate;
/// use huffcode::frequency::count;
/// use huffcode::tree::build;
///
/// let tree = build(&count("aaaa")).unwrap();
/// let codes = generate(&tree);
/// assert_eq!(codes.get(&'a').map(String::as_str), Some("0"));
/// ```
pub fn generate(tree: &HuffmanTree) -> CodeTable {
    let mut codes = CodeTable::new();
    if let Some(root) = tree.root() {
        walk(root, String::new(), &mut codes);
        debug!("generated {} huffman codes", codes.len());
    }
    codes
}

fn walk(node: &HuffmanNode, path: String, codes: &mut CodeTable) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            let code = if path.is_empty() {
                "0".to_string()
            } else {
                path
            };
            codes.insert(*symbol, code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push('0');
            walk(left, left_path, codes);
            let mut right_path = path;
            right_path.push('1');
            walk(right, right_path, codes);
        }
    }
}
