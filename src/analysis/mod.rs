// Analysis stages that run on an annotated corpus: hit classification,
// aggregation, and the final interpretation.

pub mod aggregate;
pub mod classifier;
pub mod verdict;
