//! vfbake CLI library.

pub mod cli;
