//! Command implementations for the `wordmask` CLI.

pub mod mask;
