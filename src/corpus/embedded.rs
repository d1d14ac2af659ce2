//! Embedded corpora
//!
//! Phrase lists compiled into the binary at build time.

// Include generated phrase lists from build script
include!(concat!(env!("OUT_DIR"), "/airlines.rs"));
include!(concat!(env!("OUT_DIR"), "/general.rs"));
