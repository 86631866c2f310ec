//! Embedded target pool
//!
//! Compiled into the binary from `data/targets.txt` by the build script.

include!(concat!(env!("OUT_DIR"), "/targets.rs"));
