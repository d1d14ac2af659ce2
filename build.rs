//! Build script to embed the bundled corpora
//!
//! Reads the phrase lists under `data/` and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Domain corpus
    generate_phrase_list(
        "data/airlines_corpus.txt",
        &Path::new(&out_dir).join("airlines.rs"),
        "AIRLINES",
        "Bundled airline and aviation phrases",
    );

    // General fallback corpus
    generate_phrase_list(
        "data/general_corpus.txt",
        &Path::new(&out_dir).join("general.rs"),
        "GENERAL",
        "Bundled general English vocabulary",
    );

    println!("cargo:rerun-if-changed=data/airlines_corpus.txt");
    println!("cargo:rerun-if-changed=data/general_corpus.txt");
}

fn generate_phrase_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Same line rules as the runtime loader: trimmed, blank lines dropped
    let phrases: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = phrases.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated phrase list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} phrases)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for phrase in phrases {
        writeln!(output, "    {phrase:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of phrases in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
