//! Command line front end for the `paramdoc` annotation parser.
//!
//! The binary reads parameter sample annotations from its arguments or from
//! stdin and prints each parsed descriptor as a JSON line.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
