//! Embedded word list
//!
//! The default corpus, compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
