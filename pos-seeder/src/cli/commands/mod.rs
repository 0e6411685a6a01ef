//! Subcommand arguments and handlers

pub mod parse;
pub mod seed;
