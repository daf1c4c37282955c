use thiserror::Error;

/// Errors produced by the Huffman codec pipeline.
///
/// Empty input is never an error: every stage treats it as a valid
/// terminal state and propagates empty results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A symbol in the text to encode has no entry in the active code table.
    #[error("symbol {0:?} has no entry in the code table")]
    UnknownSymbol(char),

    /// The bit string ended mid-tree, leaving a partial code with no symbol.
    #[error("bit string ended mid-path after {consumed} bits")]
    TruncatedInput {
        /// Number of bits consumed before the walk was cut off.
        consumed: usize,
    },

    /// A character other than '0' or '1' appeared in the encoded input.
    #[error("invalid bit character {0:?} in encoded input")]
    InvalidBit(char),

    /// A frequency table entry with a zero count reached the tree builder.
    /// Counts must be positive; this is a caller contract violation.
    #[error("frequency table has zero count for symbol {0:?}")]
    MalformedFrequency(char),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
