//! Slicing-floorplan processing: parse a cut tree from a token stream,
//! resolve region dimensions bottom-up, place modules top-down.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
