// Residue: semantic cluster density analysis with confound control.
//
// This is the library root. Modules follow the order data flows through
// the pipeline: corpus → lexicon annotation → analysis → stats → output.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod lexicon;
pub mod output;
pub mod pipeline;
pub mod stats;
