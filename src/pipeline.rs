//! The stateful pipeline a presentation layer drives.
//!
//! [`Pipeline`] holds the transient session state of one coding run:
//! input text, frequency table, tree, code table, and codec outputs.
//! Its methods mirror the five operations a front-end exposes — count
//! frequencies, generate codes, run the codec, verify, reset — and each
//! stage requires its predecessor's output, no-opping on empty state
//! rather than erroring.

use log::debug;

use crate::code::{generate, CodeTable};
use crate::codec::{decode, encode};
use crate::error::Result;
use crate::frequency::{count, FrequencyTable};
use crate::tree::{build, HuffmanTree};
use crate::verify::{verify, Verification};

/// Build the Huffman tree and its code table from a frequency table in
/// one step.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedFrequency`] if any count is zero.
///
/// # Examples
///
/// ```
/// use huffcode::frequency::count;
/// use huffcode::pipeline::build_code_table;
///
/// let (tree, codes) = build_code_table(&count("aabbbcc")).unwrap();
/// assert_eq!(tree.total_weight(), 7);
/// assert_eq!(codes.len(), 3);
/// ```
pub fn build_code_table(freq: &FrequencyTable) -> Result<(HuffmanTree, CodeTable)> {
    let tree = build(freq)?;
    let codes = generate(&tree);
    Ok((tree, codes))
}

/// Session state for one frequency-to-verification run.
///
/// All data is process-local and transient: nothing is persisted, and
/// `&mut self` sequencing makes overlapping stage execution impossible
/// by construction. Rebuilding replaces the previous tree wholesale.
#[derive(Debug, Default)]
pub struct Pipeline {
    text: String,
    freq: FrequencyTable,
    tree: HuffmanTree,
    codes: CodeTable,
    encoded: String,
    decoded: String,
}

impl Pipeline {
    /// A fresh pipeline with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count symbol frequencies in `text` and store both.
    ///
    /// Replaces any previous statistics and clears every downstream
    /// stage, which is stale once the frequencies change.
    pub fn stat(&mut self, text: &str) -> &FrequencyTable {
        self.text = text.to_string();
        self.freq = count(text);
        self.tree = HuffmanTree::empty();
        self.codes.clear();
        self.encoded.clear();
        self.decoded.clear();
        debug!("stat: {} distinct symbols", self.freq.len());
        &self.freq
    }

    /// Rebuild the tree and regenerate the code table from the stored
    /// frequencies.
    ///
    /// No-ops (leaving tree and codes empty) when no frequencies have
    /// been counted yet. The previous tree is discarded wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedFrequency`] if a zero count is
    /// present, which [`Pipeline::stat`] never produces.
    pub fn generate(&mut self) -> Result<&CodeTable> {
        if self.freq.is_empty() {
            return Ok(&self.codes);
        }
        let (tree, codes) = build_code_table(&self.freq)?;
        self.tree = tree;
        self.codes = codes;
        self.encoded.clear();
        self.decoded.clear();
        Ok(&self.codes)
    }

    /// Encode the stored text and immediately decode the result,
    /// storing both.
    ///
    /// No-ops when the code table or the text is empty. Returns the
    /// encoded bit string and the decoded text.
    ///
    /// # Errors
    ///
    /// Propagates codec errors, none of which occur in the normal flow
    /// where codes were just generated from the same text.
    pub fn run_codec(&mut self) -> Result<(&str, &str)> {
        if self.codes.is_empty() || self.text.is_empty() {
            return Ok((&self.encoded, &self.decoded));
        }
        self.encoded = encode(&self.text, &self.codes)?;
        self.decoded = decode(&self.encoded, &self.tree)?;
        debug!(
            "codec: {} symbols -> {} bits",
            self.text.chars().count(),
            self.encoded.len()
        );
        Ok((&self.encoded, &self.decoded))
    }

    /// Compare the stored original text against the stored decoded
    /// text.
    pub fn verify(&self) -> Verification {
        verify(&self.text, &self.decoded)
    }

    /// Clear all session state, dropping the tree.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The stored frequency table.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.freq
    }

    /// The current tree; empty until [`Pipeline::generate`] runs.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The current code table; empty until [`Pipeline::generate`] runs.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// The stored encoded bit string from the last codec run.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// The stored decoded text from the last codec run.
    pub fn decoded(&self) -> &str {
        &self.decoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_run_round_trips() {
        let input = "the rain in spain stays mainly in the plain";
        let mut pipeline = Pipeline::new();
        pipeline.stat(input);
        pipeline.generate().unwrap();
        let (encoded, decoded) = pipeline.run_codec().unwrap();
        assert!(!encoded.is_empty());
        assert_eq!(decoded, input);
        assert_eq!(pipeline.verify(), Verification::Match);
    }

    #[test]
    fn stages_no_op_without_predecessors() {
        let mut pipeline = Pipeline::new();
        assert!(pipeline.generate().unwrap().is_empty());
        let (encoded, decoded) = pipeline.run_codec().unwrap();
        assert_eq!((encoded, decoded), ("", ""));
        assert_eq!(pipeline.verify(), Verification::Inconclusive);
    }

    #[test]
    fn empty_text_is_a_valid_terminal_state() {
        let mut pipeline = Pipeline::new();
        assert!(pipeline.stat("").is_empty());
        assert!(pipeline.generate().unwrap().is_empty());
        assert!(pipeline.tree().is_empty());
        assert_eq!(pipeline.run_codec().unwrap(), ("", ""));
        assert_eq!(pipeline.verify(), Verification::Inconclusive);
    }

    #[test]
    fn stat_clears_downstream_stages() {
        let mut pipeline = Pipeline::new();
        pipeline.stat("aabbbcc");
        pipeline.generate().unwrap();
        pipeline.run_codec().unwrap();
        pipeline.stat("zzzz");
        assert!(pipeline.codes().is_empty());
        assert!(pipeline.tree().is_empty());
        assert_eq!(pipeline.encoded(), "");
        assert_eq!(pipeline.decoded(), "");
    }

    #[test]
    fn reset_clears_everything() {
        let mut pipeline = Pipeline::new();
        pipeline.stat("hello");
        pipeline.generate().unwrap();
        pipeline.run_codec().unwrap();
        pipeline.reset();
        assert!(pipeline.frequencies().is_empty());
        assert!(pipeline.tree().is_empty());
        assert!(pipeline.codes().is_empty());
        assert_eq!(pipeline.encoded(), "");
        assert_eq!(pipeline.decoded(), "");
    }

    #[test]
    fn single_symbol_session() {
        let mut pipeline = Pipeline::new();
        pipeline.stat("aaaa");
        pipeline.generate().unwrap();
        let (encoded, decoded) = pipeline.run_codec().unwrap();
        assert_eq!(encoded, "0000");
        assert_eq!(decoded, "aaaa");
        assert_eq!(pipeline.verify(), Verification::Match);
    }
}
