//! Build metadata embedded by `build.rs` (commit hash and build date).

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
