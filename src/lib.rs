//! Character-frequency statistics, Huffman prefix codes, and a text
//! bit-string codec.
//!
//! The crate is a strictly pipelined set of stages: count symbol
//! frequencies, build a Huffman tree from them, derive a prefix-free
//! code table, encode text into a '0'/'1' bit string, decode it back,
//! and verify the round trip. Each stage's output is the next stage's
//! input, and empty input is a valid terminal state everywhere.
//!
//! # Examples
//!
//! ```
//! use huffcode::{build_code_table, count, decode, encode, verify, Verification};
//!
//! let text = "aabbbcc";
//! let freq = count(text);
//! let (tree, codes) = build_code_table(&freq).unwrap();
//! let bits = encode(text, &codes).unwrap();
//! let decoded = decode(&bits, &tree).unwrap();
//! assert_eq!(verify(text, &decoded), Verification::Match);
//! ```

pub mod code;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod tree;
pub mod verify;

pub use code::{generate, CodeTable};
pub use codec::{decode, decode_lossy, encode, encode_lossy};
pub use error::{Error, Result};
pub use frequency::{count, FrequencyTable};
pub use pipeline::{build_code_table, Pipeline};
pub use tree::{build, HuffmanNode, HuffmanTree};
pub use verify::{verify, Verification};
