//! Encode text to a bit string and decode it back.
//!
//! Encoding consumes a [`CodeTable`]; decoding walks the [`HuffmanTree`]
//! directly. Both come in two flavors: the hardened functions
//! ([`encode`], [`decode`]) report unknown symbols, truncated input, and
//! malformed bits as errors, while the `_lossy` variants silently drop
//! unencodable symbols and trailing partial codes instead.

use log::debug;

use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::tree::{HuffmanNode, HuffmanTree};

/// Encode `text` by concatenating each symbol's code in input order.
///
/// The output carries no padding and no length header; it is exactly
/// the concatenation of the per-symbol codes. Empty text yields an
/// empty bit string.
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] if a symbol in `text` has no entry
/// in `codes`. In normal pipeline use this cannot happen, since the
/// table is always regenerated from the same text before encoding; use
/// [`encode_lossy`] to skip unknown symbols instead.
///
/// # Examples
///
/// ```
/// use huffcode::code::generate;
/// use huffcode::codec::encode;
/// use huffcode::frequency::count;
/// use huffcode::tree::build;
///
/// let tree = build(&count("aaaa")).unwrap();
/// let bits = encode("aaaa", &generate(&tree)).unwrap();
/// assert_eq!(bits, "0000");
/// ```
pub fn encode(text: &str, codes: &CodeTable) -> Result<String> {
    let mut bits = String::new();
    for ch in text.chars() {
        match codes.get(&ch) {
            Some(code) => bits.push_str(code),
            None => return Err(Error::UnknownSymbol(ch)),
        }
    }
    debug!(
        "encoded {} symbols into {} bits",
        text.chars().count(),
        bits.len()
    );
    Ok(bits)
}

/// Encode `text`, silently skipping symbols absent from `codes`.
///
/// A symbol with no code contributes no bits to the output, so
/// encoding against a stale table is lossy rather than an error.
pub fn encode_lossy(text: &str, codes: &CodeTable) -> String {
    text.chars()
        .filter_map(|ch| codes.get(&ch).map(String::as_str))
        .collect()
}

/// Decode a bit string by walking the tree.
///
/// A cursor starts at the root; each '0' descends left and each '1'
/// descends right. Reaching a leaf emits its symbol and resets the
/// cursor to the root. An empty tree or empty bit string yields empty
/// output.
///
/// A single-leaf tree is an explicit special case: the lone symbol's
/// code "0" means "emit this symbol", not "descend left", so every bit
/// position emits one copy of the root symbol.
///
/// # Errors
///
/// Returns [`Error::TruncatedInput`] if the bits end mid-tree (a
/// trailing partial code), and [`Error::InvalidBit`] for any character
/// other than '0' or '1'. Use [`decode_lossy`] to drop a truncated
/// tail silently instead.
pub fn decode(bits: &str, tree: &HuffmanTree) -> Result<String> {
    let root = match tree.root() {
        Some(root) => root,
        None => return Ok(String::new()),
    };

    if let HuffmanNode::Leaf { symbol, .. } = root {
        return decode_single_leaf(bits, *symbol);
    }

    let mut text = String::new();
    let mut cursor = root;
    let mut consumed = 0;
    for bit in bits.chars() {
        if let HuffmanNode::Internal { left, right, .. } = cursor {
            cursor = match bit {
                '0' => left,
                '1' => right,
                other => return Err(Error::InvalidBit(other)),
            };
        }
        consumed += 1;
        if let HuffmanNode::Leaf { symbol, .. } = cursor {
            text.push(*symbol);
            cursor = root;
        }
    }

    if !std::ptr::eq(cursor, root) {
        return Err(Error::TruncatedInput { consumed });
    }
    debug!("decoded {} bits into {} symbols", consumed, text.chars().count());
    Ok(text)
}

fn decode_single_leaf(bits: &str, symbol: char) -> Result<String> {
    let mut text = String::new();
    for bit in bits.chars() {
        if bit != '0' && bit != '1' {
            return Err(Error::InvalidBit(bit));
        }
        text.push(symbol);
    }
    Ok(text)
}

/// Decode a bit string, dropping any trailing partial code.
///
/// A truncated tail produces no output symbol and no error, and any
/// character other than '0' descends right.
pub fn decode_lossy(bits: &str, tree: &HuffmanTree) -> String {
    let root = match tree.root() {
        Some(root) => root,
        None => return String::new(),
    };

    if let HuffmanNode::Leaf { symbol, .. } = root {
        return bits.chars().map(|_| *symbol).collect();
    }

    let mut text = String::new();
    let mut cursor = root;
    for bit in bits.chars() {
        if let HuffmanNode::Internal { left, right, .. } = cursor {
            cursor = if bit == '0' { left } else { right };
        }
        if let HuffmanNode::Leaf { symbol, .. } = cursor {
            text.push(*symbol);
            cursor = root;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::generate;
    use crate::frequency::count;
    use crate::tree::build;

    fn pipeline(input: &str) -> (HuffmanTree, CodeTable) {
        let tree = build(&count(input)).unwrap();
        let codes = generate(&tree);
        (tree, codes)
    }

    #[test]
    fn round_trip_restores_input() {
        let input = "huffman coding in rust is fun!";
        let (tree, codes) = pipeline(input);
        let bits = encode(input, &codes).unwrap();
        assert_eq!(decode(&bits, &tree).unwrap(), input);
    }

    #[test]
    fn round_trip_handles_unicode_text() {
        let input = "héllo wörld — 编码测试";
        let (tree, codes) = pipeline(input);
        let bits = encode(input, &codes).unwrap();
        assert_eq!(decode(&bits, &tree).unwrap(), input);
    }

    #[test]
    fn single_symbol_round_trip() {
        let (tree, codes) = pipeline("aaaa");
        let bits = encode("aaaa", &codes).unwrap();
        assert_eq!(bits, "0000");
        assert_eq!(decode(&bits, &tree).unwrap(), "aaaa");
    }

    #[test]
    fn empty_text_and_bits_are_valid() {
        let (tree, codes) = pipeline("");
        assert_eq!(encode("", &codes).unwrap(), "");
        assert_eq!(decode("", &tree).unwrap(), "");
    }

    #[test]
    fn encoded_length_matches_code_lengths() {
        let input = "aabbbcc";
        let (_, codes) = pipeline(input);
        let bits = encode(input, &codes).unwrap();
        let expected = 2 * codes[&'a'].len() + 3 * codes[&'b'].len() + 2 * codes[&'c'].len();
        assert_eq!(bits.len(), expected);
        // Huffman-optimal for {a:2, b:3, c:2}: b costs one bit, a and c two.
        assert_eq!(bits.len(), 11);
    }

    #[test]
    fn encoded_length_is_stable_across_builds() {
        let input = "determinism modulo tie-break";
        let first = {
            let (_, codes) = pipeline(input);
            encode(input, &codes).unwrap().len()
        };
        for _ in 0..10 {
            let (_, codes) = pipeline(input);
            assert_eq!(encode(input, &codes).unwrap().len(), first);
        }
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let (_, codes) = pipeline("aabb");
        assert_eq!(encode("abc", &codes), Err(Error::UnknownSymbol('c')));
    }

    #[test]
    fn lossy_encode_skips_unknown_symbols() {
        let (tree, codes) = pipeline("aabb");
        let bits = encode_lossy("abcab", &codes);
        assert_eq!(decode(&bits, &tree).unwrap(), "abab");
    }

    #[test]
    fn truncated_bits_are_reported() {
        let input = "aabbbcc";
        let (tree, codes) = pipeline(input);
        let mut bits = encode(input, &codes).unwrap();
        bits.pop();
        let err = decode(&bits, &tree).unwrap_err();
        assert!(matches!(err, Error::TruncatedInput { .. }));
    }

    #[test]
    fn lossy_decode_drops_truncated_tail() {
        let input = "aabbbcc";
        let (tree, codes) = pipeline(input);
        let full = encode(input, &codes).unwrap();
        let mut bits = full.clone();
        bits.pop();
        let decoded = decode_lossy(&bits, &tree);
        assert!(input.starts_with(&decoded));
        assert_eq!(decoded.chars().count(), input.chars().count() - 1);
        assert_eq!(decode_lossy(&full, &tree), input);
    }

    #[test]
    fn non_binary_character_is_reported() {
        let (tree, _) = pipeline("aabbbcc");
        assert_eq!(decode("01x", &tree), Err(Error::InvalidBit('x')));
        let (leaf_tree, _) = pipeline("aaa");
        assert_eq!(decode("0x", &leaf_tree), Err(Error::InvalidBit('x')));
    }

    #[test]
    fn round_trip_survives_random_text() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let len = rng.gen_range(1..200);
            let input: String = (0..len)
                .map(|_| (b'a' + rng.gen_range(0..6)) as char)
                .collect();
            let (tree, codes) = pipeline(&input);
            let bits = encode(&input, &codes).unwrap();
            assert_eq!(decode(&bits, &tree).unwrap(), input);
        }
    }

    #[test]
    fn decode_with_empty_tree_is_empty() {
        assert_eq!(decode("0101", &HuffmanTree::empty()).unwrap(), "");
        assert_eq!(decode_lossy("0101", &HuffmanTree::empty()), "");
    }
}
