//! # Species by protein-family count matrices
//!
//! Reads annotation files made of `>species` blocks, where every record line carries a
//! protein identifier and a list of Pfam family/clan tokens, and turns them into a dense
//! species x family count matrix plus a ledger of tokens that were not valid identifiers.
//!
//! ```text
//! >SP1.chr1
//! g1 p1 PF00069,PF00002
//! g2 p1 PF00069
//! ```
//!
pub mod aggregate;
pub mod blocks;
pub mod config;
pub mod consts;
pub mod counts;
pub mod errors;
pub mod ledger;
pub mod matrix;
pub mod modes;
pub mod options;
pub mod pipeline;

// re-exports
pub use aggregate::*;
pub use blocks::*;
pub use config::*;
pub use counts::*;
pub use errors::*;
pub use ledger::*;
pub use matrix::*;
pub use modes::*;
pub use options::*;
pub use pipeline::*;
