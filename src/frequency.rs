use std::collections::HashMap;

/// Maps each symbol (one Unicode code point) to its occurrence count.
///
/// Counts are always positive: a symbol appears as a key only if it
/// occurs in the input, and the sum of all counts equals the input
/// length in code points.
pub type FrequencyTable = HashMap<char, usize>;

/// Count symbol occurrences in `text`.
///
/// Scans the input once and increments a per-symbol counter. Each
/// Unicode code point is one symbol; no normalization is applied.
///
/// An empty input yields an empty table, which is a valid terminal
/// state for the pipeline, not an error.
///
/// # Examples
///
/// ```
/// use huffcode::frequency::count;
///
/// let freq = count("aabccc");
/// assert_eq!(freq.get(&'a'), Some(&2));
/// assert_eq!(freq.get(&'b'), Some(&1));
/// assert_eq!(freq.get(&'c'), Some(&3));
/// ```
pub fn count(text: &str) -> FrequencyTable {
    let mut freq = FrequencyTable::new();
    for ch in text.chars() {
        *freq.entry(ch).or_insert(0) += 1;
    }
    freq
}
