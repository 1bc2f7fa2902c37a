//! Embedded equation corpus
//!
//! The default corpus compiled into the binary at build time.

// Include the generated list from the build script
include!(concat!(env!("OUT_DIR"), "/equations.rs"));
