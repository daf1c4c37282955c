//! huffcode CLI
//! Usage:
//!   huffcode <text>
//!   huffcode            (reads text from standard input)
//!
//! Runs the full pipeline over the input text and prints the frequency
//! table, the code table, the encoded bit string, the decoded text, and
//! the verification verdict. The exit code is non-zero only for I/O or
//! codec failures; a verification mismatch is an ordinary outcome.

use std::io::Read;
use std::{env, io, process};

use huffcode::Pipeline;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage:");
        eprintln!("  huffcode <text>");
        eprintln!("  huffcode            (reads text from standard input)");
        process::exit(1);
    }

    let text = match args.get(1) {
        Some(arg) => arg.clone(),
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Failed to read standard input: {}", e);
                process::exit(1);
            }
            buf
        }
    };

    let mut pipeline = Pipeline::new();
    pipeline.stat(&text);
    let total: usize = pipeline.frequencies().values().sum();

    println!("Frequency table:");
    let mut symbols: Vec<char> = pipeline.frequencies().keys().copied().collect();
    symbols.sort_unstable();
    for ch in &symbols {
        let count = pipeline.frequencies()[ch];
        println!(
            "  {:<8} {:>8} {:>8.4}",
            display_symbol(*ch),
            count,
            count as f64 / total as f64
        );
    }

    if let Err(e) = pipeline.generate() {
        eprintln!("Failed to build code table: {}", e);
        process::exit(1);
    }

    println!("Code table:");
    for ch in &symbols {
        println!("  {:<8} {}", display_symbol(*ch), pipeline.codes()[ch]);
    }

    if let Err(e) = pipeline.run_codec() {
        eprintln!("Codec failure: {}", e);
        process::exit(1);
    }

    println!("Encoded: {}", pipeline.encoded());
    println!("Decoded: {}", pipeline.decoded());
    println!("Verification: {}", pipeline.verify());
}

/// Render a symbol for table display, escaping whitespace the way the
/// tables would otherwise collapse.
fn display_symbol(ch: char) -> String {
    match ch {
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        ' ' => "(space)".to_string(),
        other => other.to_string(),
    }
}
