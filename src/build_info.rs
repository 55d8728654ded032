//! Commit and date of the build, embedded by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
